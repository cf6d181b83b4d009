use super::fields;
use crate::converter::EntityConverter;
use crate::error::ConvertResult;
use crate::node::{Mapping, Node};
use redmine_types::News;

pub struct NewsConverter;

impl EntityConverter for NewsConverter {
    type Entity = News;

    fn decode(&self, node: &Node) -> ConvertResult<News> {
        let map = fields::expect_mapping(node)?;
        Ok(News {
            id: fields::u32_field(map, "id")?.unwrap_or_default(),
            project: fields::named(map, "project")?,
            author: fields::named(map, "author")?,
            title: fields::string(map, "title")?,
            summary: fields::string(map, "summary")?,
            description: fields::string(map, "description")?,
            created_on: fields::datetime(map, "created_on")?,
        })
    }

    fn encode(&self, news: &News) -> ConvertResult<Node> {
        let mut map = Mapping::new();
        map.insert_some("title", news.title.as_deref());
        map.insert_some("summary", news.summary.as_deref());
        map.insert_some("description", news.description.as_deref());
        Ok(map.into())
    }
}
