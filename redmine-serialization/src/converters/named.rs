//! Converters for `{id, name}` shaped records.

use super::fields;
use crate::converter::EntityConverter;
use crate::error::ConvertResult;
use crate::node::{Mapping, Node};
use redmine_types::{
    IdentifiableName, IssuePriority, IssueStatus, Role, TimeEntryActivity, Tracker, Watcher,
};

/// Reads the `id` and `name` every record in this module starts with.
fn id_and_name(node: &Node) -> ConvertResult<(&Mapping, u32, Option<String>)> {
    let map = fields::expect_mapping(node)?;
    Ok((
        map,
        fields::required_u32(map, "id")?,
        fields::string(map, "name")?,
    ))
}

fn id_and_name_node(id: u32, name: Option<&str>) -> Mapping {
    let mut map = Mapping::new().with("id", id);
    map.insert_some("name", name);
    map
}

pub(crate) fn decode_identifiable_name(node: &Node) -> ConvertResult<IdentifiableName> {
    let (_, id, name) = id_and_name(node)?;
    Ok(IdentifiableName { id, name })
}

/// Embedded references are written the way the service writes them:
/// `<project id="1" name="Redmine"/>`.
pub struct IdentifiableNameConverter;

impl EntityConverter for IdentifiableNameConverter {
    type Entity = IdentifiableName;

    fn decode(&self, node: &Node) -> ConvertResult<IdentifiableName> {
        decode_identifiable_name(node)
    }

    fn encode(&self, entity: &IdentifiableName) -> ConvertResult<Node> {
        let mut map = Mapping::new().with_attribute("id", entity.id);
        if let Some(name) = &entity.name {
            map.insert_attribute("name", name.as_str());
        }
        Ok(map.into())
    }
}

pub struct IssueStatusConverter;

impl EntityConverter for IssueStatusConverter {
    type Entity = IssueStatus;

    fn decode(&self, node: &Node) -> ConvertResult<IssueStatus> {
        let (map, id, name) = id_and_name(node)?;
        Ok(IssueStatus {
            id,
            name,
            is_default: fields::bool_field(map, "is_default")?.unwrap_or(false),
            is_closed: fields::bool_field(map, "is_closed")?.unwrap_or(false),
        })
    }

    fn encode(&self, entity: &IssueStatus) -> ConvertResult<Node> {
        Ok(id_and_name_node(entity.id, entity.name.as_deref())
            .with("is_default", entity.is_default)
            .with("is_closed", entity.is_closed)
            .into())
    }
}

pub struct TrackerConverter;

impl EntityConverter for TrackerConverter {
    type Entity = Tracker;

    fn decode(&self, node: &Node) -> ConvertResult<Tracker> {
        let (_, id, name) = id_and_name(node)?;
        Ok(Tracker { id, name })
    }

    fn encode(&self, entity: &Tracker) -> ConvertResult<Node> {
        Ok(id_and_name_node(entity.id, entity.name.as_deref()).into())
    }
}

pub struct RoleConverter;

impl EntityConverter for RoleConverter {
    type Entity = Role;

    fn decode(&self, node: &Node) -> ConvertResult<Role> {
        let (_, id, name) = id_and_name(node)?;
        Ok(Role { id, name })
    }

    fn encode(&self, entity: &Role) -> ConvertResult<Node> {
        Ok(id_and_name_node(entity.id, entity.name.as_deref()).into())
    }
}

pub struct IssuePriorityConverter;

impl EntityConverter for IssuePriorityConverter {
    type Entity = IssuePriority;

    fn decode(&self, node: &Node) -> ConvertResult<IssuePriority> {
        let (map, id, name) = id_and_name(node)?;
        Ok(IssuePriority {
            id,
            name,
            is_default: fields::bool_field(map, "is_default")?.unwrap_or(false),
        })
    }

    fn encode(&self, entity: &IssuePriority) -> ConvertResult<Node> {
        Ok(id_and_name_node(entity.id, entity.name.as_deref())
            .with("is_default", entity.is_default)
            .into())
    }
}

pub struct TimeEntryActivityConverter;

impl EntityConverter for TimeEntryActivityConverter {
    type Entity = TimeEntryActivity;

    fn decode(&self, node: &Node) -> ConvertResult<TimeEntryActivity> {
        let (map, id, name) = id_and_name(node)?;
        Ok(TimeEntryActivity {
            id,
            name,
            is_default: fields::bool_field(map, "is_default")?.unwrap_or(false),
        })
    }

    fn encode(&self, entity: &TimeEntryActivity) -> ConvertResult<Node> {
        Ok(id_and_name_node(entity.id, entity.name.as_deref())
            .with("is_default", entity.is_default)
            .into())
    }
}

pub struct WatcherConverter;

impl EntityConverter for WatcherConverter {
    type Entity = Watcher;

    fn decode(&self, node: &Node) -> ConvertResult<Watcher> {
        let (_, id, name) = id_and_name(node)?;
        Ok(Watcher { id, name })
    }

    fn encode(&self, entity: &Watcher) -> ConvertResult<Node> {
        Ok(id_and_name_node(entity.id, entity.name.as_deref()).into())
    }
}
