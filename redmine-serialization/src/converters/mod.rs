//! Converter units for every built-in entity kind.
//!
//! The custom field codec lives in [`crate::custom_field`]; everything else
//! is a mechanical field mapping built from the readers in `fields`.

mod error;
pub(crate) mod fields;
mod issue;
mod named;
mod news;
mod project;
mod user;

pub use error::ErrorConverter;
pub use issue::{IssueConverter, UploadConverter};
pub use named::{
    IdentifiableNameConverter, IssuePriorityConverter, IssueStatusConverter, RoleConverter,
    TimeEntryActivityConverter, TrackerConverter, WatcherConverter,
};
pub use news::NewsConverter;
pub use project::ProjectConverter;
pub use user::UserConverter;
