//! Entity type identifiers.
//!
//! Every record that crosses the wire has exactly one [`EntityKind`]. The
//! serialization engine keys its converter registry on it.

use std::fmt;
use std::str::FromStr;

/// Stable identifier of an entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    IdentifiableName,
    IssueStatus,
    Tracker,
    Role,
    IssuePriority,
    TimeEntryActivity,
    Watcher,
    Upload,
    CustomFieldValue,
    IssueCustomField,
    Error,
    Issue,
    Project,
    User,
    News,
}

impl EntityKind {
    /// Every kind, in declaration order.
    pub const ALL: [EntityKind; 15] = [
        Self::IdentifiableName,
        Self::IssueStatus,
        Self::Tracker,
        Self::Role,
        Self::IssuePriority,
        Self::TimeEntryActivity,
        Self::Watcher,
        Self::Upload,
        Self::CustomFieldValue,
        Self::IssueCustomField,
        Self::Error,
        Self::Issue,
        Self::Project,
        Self::User,
        Self::News,
    ];

    /// The entity's type name, e.g. `IssueCustomField`.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::IdentifiableName => "IdentifiableName",
            Self::IssueStatus => "IssueStatus",
            Self::Tracker => "Tracker",
            Self::Role => "Role",
            Self::IssuePriority => "IssuePriority",
            Self::TimeEntryActivity => "TimeEntryActivity",
            Self::Watcher => "Watcher",
            Self::Upload => "Upload",
            Self::CustomFieldValue => "CustomFieldValue",
            Self::IssueCustomField => "IssueCustomField",
            Self::Error => "Error",
            Self::Issue => "Issue",
            Self::Project => "Project",
            Self::User => "User",
            Self::News => "News",
        }
    }

    /// Element name used when a single entity of this kind is written.
    #[must_use]
    pub const fn element_name(self) -> &'static str {
        match self {
            Self::IdentifiableName => "identifiable_name",
            Self::IssueStatus => "issue_status",
            Self::Tracker => "tracker",
            Self::Role => "role",
            Self::IssuePriority => "issue_priority",
            Self::TimeEntryActivity => "time_entry_activity",
            Self::Watcher => "watcher",
            Self::Upload => "upload",
            Self::CustomFieldValue => "value",
            Self::IssueCustomField => "custom_field",
            Self::Error => "error",
            Self::Issue => "issue",
            Self::Project => "project",
            Self::User => "user",
            Self::News => "news",
        }
    }

    /// Key under which the service returns a list of this kind.
    #[must_use]
    pub const fn collection_name(self) -> &'static str {
        match self {
            Self::IdentifiableName => "identifiable_names",
            Self::IssueStatus => "issue_statuses",
            Self::Tracker => "trackers",
            Self::Role => "roles",
            Self::IssuePriority => "issue_priorities",
            Self::TimeEntryActivity => "time_entry_activities",
            Self::Watcher => "watchers",
            Self::Upload => "uploads",
            Self::CustomFieldValue => "values",
            Self::IssueCustomField => "custom_fields",
            Self::Error => "errors",
            Self::Issue => "issues",
            Self::Project => "projects",
            Self::User => "users",
            Self::News => "news",
        }
    }

    /// Root key looked up when a caller does not name one: the lowercased
    /// type name.
    #[must_use]
    pub fn default_root(self) -> String {
        self.type_name().to_ascii_lowercase()
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Returned when a string names no known entity kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity kind: {0}")]
pub struct UnknownKindError(pub String);

impl FromStr for EntityKind {
    type Err = UnknownKindError;

    /// Accepts the type name or the element name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.type_name().eq_ignore_ascii_case(s) || kind.element_name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| UnknownKindError(s.to_string()))
    }
}
