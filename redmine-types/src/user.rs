use crate::{Entity, EntityKind, IssueCustomField};
use chrono::{DateTime, Utc};

/// A tracker account. `password` is only ever written, never read back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub id: u32,
    pub login: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub mail: Option<String>,
    pub password: Option<String>,
    pub status: Option<u32>,
    pub created_on: Option<DateTime<Utc>>,
    pub last_login_on: Option<DateTime<Utc>>,
    pub custom_fields: Vec<IssueCustomField>,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;
}
