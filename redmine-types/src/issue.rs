//! Issues and the file uploads attached to them.

use crate::{Entity, EntityKind, IdentifiableName, IssueCustomField, Watcher};
use chrono::{DateTime, NaiveDate, Utc};

/// An issue as read from and written to the tracker.
///
/// Reads populate the embedded references (`project`, `status`, ...); writes
/// only send their ids. `uploads` and `watcher_user_ids` are write-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Issue {
    pub id: u32,
    pub project: Option<IdentifiableName>,
    pub tracker: Option<IdentifiableName>,
    pub status: Option<IdentifiableName>,
    pub priority: Option<IdentifiableName>,
    pub author: Option<IdentifiableName>,
    pub assigned_to: Option<IdentifiableName>,
    pub category: Option<IdentifiableName>,
    pub fixed_version: Option<IdentifiableName>,
    pub parent_issue_id: Option<u32>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub done_ratio: Option<u32>,
    pub is_private: bool,
    pub estimated_hours: Option<f64>,
    pub created_on: Option<DateTime<Utc>>,
    pub updated_on: Option<DateTime<Utc>>,
    pub closed_on: Option<DateTime<Utc>>,
    pub custom_fields: Vec<IssueCustomField>,
    pub watchers: Vec<Watcher>,
    pub uploads: Vec<Upload>,
    pub watcher_user_ids: Vec<u32>,
}

impl Entity for Issue {
    const KIND: EntityKind = EntityKind::Issue;
}

/// A file previously uploaded to the tracker, referenced by its token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Upload {
    pub token: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub description: Option<String>,
}

impl Entity for Upload {
    const KIND: EntityKind = EntityKind::Upload;
}
