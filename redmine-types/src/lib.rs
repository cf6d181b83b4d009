//! Entity records exchanged with the Redmine REST API.
//!
//! This crate holds plain data only:
//! - [`EntityKind`]: the stable identifier of each record type
//! - [`Entity`]: marker trait tying a record type to its kind
//! - the records themselves ([`Issue`], [`Project`], [`IssueCustomField`], ...)
//!
//! Converting records to and from wire payloads is the job of
//! `redmine-serialization`; nothing here knows about JSON or XML.

mod custom_field;
mod entity;
mod error;
mod issue;
mod kind;
mod named;
mod news;
mod project;
mod user;

pub use custom_field::{CustomFieldValue, IssueCustomField};
pub use entity::Entity;
pub use error::ErrorMessage;
pub use issue::{Issue, Upload};
pub use kind::{EntityKind, UnknownKindError};
pub use named::{
    IdentifiableName, IssuePriority, IssueStatus, Role, TimeEntryActivity, Tracker, Watcher,
};
pub use news::News;
pub use project::Project;
pub use user::User;
