use super::fields;
use super::named::TrackerConverter;
use crate::converter::EntityConverter;
use crate::custom_field::IssueCustomFieldConverter;
use crate::error::ConvertResult;
use crate::node::{Mapping, Node};
use redmine_types::Project;

pub struct ProjectConverter;

impl EntityConverter for ProjectConverter {
    type Entity = Project;

    fn decode(&self, node: &Node) -> ConvertResult<Project> {
        let map = fields::expect_mapping(node)?;
        Ok(Project {
            id: fields::u32_field(map, "id")?.unwrap_or_default(),
            name: fields::string(map, "name")?,
            identifier: fields::string(map, "identifier")?,
            description: fields::string(map, "description")?,
            homepage: fields::string(map, "homepage")?,
            parent: fields::named(map, "parent")?,
            status: fields::u32_field(map, "status")?,
            is_public: fields::bool_field(map, "is_public")?.unwrap_or(false),
            created_on: fields::datetime(map, "created_on")?,
            updated_on: fields::datetime(map, "updated_on")?,
            trackers: fields::list(map, "trackers", |item| TrackerConverter.decode(item))?,
            custom_fields: fields::list(map, "custom_fields", |item| {
                IssueCustomFieldConverter.decode(item)
            })?,
        })
    }

    fn encode(&self, project: &Project) -> ConvertResult<Node> {
        let mut map = Mapping::new();
        map.insert_some("name", project.name.as_deref());
        map.insert_some("identifier", project.identifier.as_deref());
        map.insert_some("description", project.description.as_deref());
        map.insert_some("homepage", project.homepage.as_deref());
        map.insert_some("parent_id", project.parent.as_ref().map(|parent| parent.id));
        map.insert("is_public", project.is_public);

        if !project.trackers.is_empty() {
            let ids = project.trackers.iter().map(|t| Node::from(t.id)).collect::<Vec<_>>();
            map.insert("tracker_ids", ids);
        }
        if !project.custom_fields.is_empty() {
            let custom_fields =
                fields::encode_list(&project.custom_fields, "custom_fields", |field| {
                    IssueCustomFieldConverter.encode(field)
                })?;
            map.insert("custom_fields", custom_fields);
        }
        Ok(map.into())
    }
}
