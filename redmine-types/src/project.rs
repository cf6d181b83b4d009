use crate::{Entity, EntityKind, IdentifiableName, IssueCustomField, Tracker};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Project {
    pub id: u32,
    pub name: Option<String>,
    pub identifier: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub parent: Option<IdentifiableName>,
    pub status: Option<u32>,
    pub is_public: bool,
    pub created_on: Option<DateTime<Utc>>,
    pub updated_on: Option<DateTime<Utc>>,
    pub trackers: Vec<Tracker>,
    pub custom_fields: Vec<IssueCustomField>,
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;
}
