//! Issue and upload converters.
//!
//! Reads follow the service's response shape (embedded `{id, name}`
//! references, timestamps, nested custom fields and watchers). Writes follow
//! its request shape: references collapse to `*_id` keys and only the
//! writable fields are sent.

use super::fields;
use super::named::WatcherConverter;
use crate::converter::EntityConverter;
use crate::custom_field::IssueCustomFieldConverter;
use crate::error::ConvertResult;
use crate::node::{Mapping, Node};
use redmine_types::{IdentifiableName, Issue, Upload};

pub struct IssueConverter;

impl EntityConverter for IssueConverter {
    type Entity = Issue;

    fn decode(&self, node: &Node) -> ConvertResult<Issue> {
        let map = fields::expect_mapping(node)?;
        Ok(Issue {
            id: fields::u32_field(map, "id")?.unwrap_or_default(),
            project: fields::named(map, "project")?,
            tracker: fields::named(map, "tracker")?,
            status: fields::named(map, "status")?,
            priority: fields::named(map, "priority")?,
            author: fields::named(map, "author")?,
            assigned_to: fields::named(map, "assigned_to")?,
            category: fields::named(map, "category")?,
            fixed_version: fields::named(map, "fixed_version")?,
            parent_issue_id: fields::named(map, "parent")?.map(|parent| parent.id),
            subject: fields::string(map, "subject")?,
            description: fields::string(map, "description")?,
            start_date: fields::date(map, "start_date")?,
            due_date: fields::date(map, "due_date")?,
            done_ratio: fields::u32_field(map, "done_ratio")?,
            is_private: fields::bool_field(map, "is_private")?.unwrap_or(false),
            estimated_hours: fields::f64_field(map, "estimated_hours")?,
            created_on: fields::datetime(map, "created_on")?,
            updated_on: fields::datetime(map, "updated_on")?,
            closed_on: fields::datetime(map, "closed_on")?,
            custom_fields: fields::list(map, "custom_fields", |item| {
                IssueCustomFieldConverter.decode(item)
            })?,
            watchers: fields::list(map, "watchers", |item| WatcherConverter.decode(item))?,
            uploads: Vec::new(),
            watcher_user_ids: Vec::new(),
        })
    }

    fn encode(&self, issue: &Issue) -> ConvertResult<Node> {
        let reference_id = |reference: &Option<IdentifiableName>| reference.as_ref().map(|r| r.id);

        let mut map = Mapping::new();
        map.insert_some("project_id", reference_id(&issue.project));
        map.insert_some("tracker_id", reference_id(&issue.tracker));
        map.insert_some("status_id", reference_id(&issue.status));
        map.insert_some("priority_id", reference_id(&issue.priority));
        map.insert_some("assigned_to_id", reference_id(&issue.assigned_to));
        map.insert_some("category_id", reference_id(&issue.category));
        map.insert_some("fixed_version_id", reference_id(&issue.fixed_version));
        map.insert_some("parent_issue_id", issue.parent_issue_id);
        map.insert_some("subject", issue.subject.as_deref());
        map.insert_some("description", issue.description.as_deref());
        map.insert_some("start_date", issue.start_date.map(fields::date_text));
        map.insert_some("due_date", issue.due_date.map(fields::date_text));
        map.insert_some("done_ratio", issue.done_ratio);
        map.insert_some("estimated_hours", issue.estimated_hours);
        map.insert("is_private", issue.is_private);

        if !issue.custom_fields.is_empty() {
            let custom_fields = fields::encode_list(&issue.custom_fields, "custom_fields", |field| {
                IssueCustomFieldConverter.encode(field)
            })?;
            map.insert("custom_fields", custom_fields);
        }
        if !issue.uploads.is_empty() {
            let uploads =
                fields::encode_list(&issue.uploads, "uploads", |upload| UploadConverter.encode(upload))?;
            map.insert("uploads", uploads);
        }
        if !issue.watcher_user_ids.is_empty() {
            let ids = issue.watcher_user_ids.iter().copied().map(Node::from).collect::<Vec<_>>();
            map.insert("watcher_user_ids", ids);
        }
        Ok(map.into())
    }
}

pub struct UploadConverter;

impl EntityConverter for UploadConverter {
    type Entity = Upload;

    fn decode(&self, node: &Node) -> ConvertResult<Upload> {
        let map = fields::expect_mapping(node)?;
        Ok(Upload {
            token: fields::required_string(map, "token")?,
            filename: fields::string(map, "filename")?,
            content_type: fields::string(map, "content_type")?,
            description: fields::string(map, "description")?,
        })
    }

    fn encode(&self, upload: &Upload) -> ConvertResult<Node> {
        let mut map = Mapping::new().with("token", upload.token.as_str());
        map.insert_some("filename", upload.filename.as_deref());
        map.insert_some("content_type", upload.content_type.as_deref());
        map.insert_some("description", upload.description.as_deref());
        Ok(map.into())
    }
}
