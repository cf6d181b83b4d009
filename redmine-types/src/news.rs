use crate::{Entity, EntityKind, IdentifiableName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct News {
    pub id: u32,
    pub project: Option<IdentifiableName>,
    pub author: Option<IdentifiableName>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
}

impl Entity for News {
    const KIND: EntityKind = EntityKind::News;
}
