//! Small reference records: an id plus a display name, and the enumerations
//! the service exposes in that shape.

use crate::{Entity, EntityKind};

/// A reference to another record by id, with its display name.
///
/// The service embeds these wherever one entity points at another
/// (`"project": {"id": 1, "name": "Redmine"}`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifiableName {
    pub id: u32,
    pub name: Option<String>,
}

impl IdentifiableName {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// A reference carrying only the id, as used when writing.
    pub const fn with_id(id: u32) -> Self {
        Self { id, name: None }
    }
}

impl Entity for IdentifiableName {
    const KIND: EntityKind = EntityKind::IdentifiableName;
}

/// Workflow status of an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueStatus {
    pub id: u32,
    pub name: Option<String>,
    pub is_default: bool,
    pub is_closed: bool,
}

impl Entity for IssueStatus {
    const KIND: EntityKind = EntityKind::IssueStatus;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracker {
    pub id: u32,
    pub name: Option<String>,
}

impl Entity for Tracker {
    const KIND: EntityKind = EntityKind::Tracker;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Role {
    pub id: u32,
    pub name: Option<String>,
}

impl Entity for Role {
    const KIND: EntityKind = EntityKind::Role;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuePriority {
    pub id: u32,
    pub name: Option<String>,
    pub is_default: bool,
}

impl Entity for IssuePriority {
    const KIND: EntityKind = EntityKind::IssuePriority;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntryActivity {
    pub id: u32,
    pub name: Option<String>,
    pub is_default: bool,
}

impl Entity for TimeEntryActivity {
    const KIND: EntityKind = EntityKind::TimeEntryActivity;
}

/// A user watching an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watcher {
    pub id: u32,
    pub name: Option<String>,
}

impl Entity for Watcher {
    const KIND: EntityKind = EntityKind::Watcher;
}
