use super::fields;
use crate::converter::EntityConverter;
use crate::custom_field::IssueCustomFieldConverter;
use crate::error::ConvertResult;
use crate::node::{Mapping, Node};
use redmine_types::User;

pub struct UserConverter;

impl EntityConverter for UserConverter {
    type Entity = User;

    fn decode(&self, node: &Node) -> ConvertResult<User> {
        let map = fields::expect_mapping(node)?;
        Ok(User {
            id: fields::u32_field(map, "id")?.unwrap_or_default(),
            login: fields::string(map, "login")?,
            firstname: fields::string(map, "firstname")?,
            lastname: fields::string(map, "lastname")?,
            mail: fields::string(map, "mail")?,
            password: None,
            status: fields::u32_field(map, "status")?,
            created_on: fields::datetime(map, "created_on")?,
            last_login_on: fields::datetime(map, "last_login_on")?,
            custom_fields: fields::list(map, "custom_fields", |item| {
                IssueCustomFieldConverter.decode(item)
            })?,
        })
    }

    fn encode(&self, user: &User) -> ConvertResult<Node> {
        let mut map = Mapping::new();
        map.insert_some("login", user.login.as_deref());
        map.insert_some("firstname", user.firstname.as_deref());
        map.insert_some("lastname", user.lastname.as_deref());
        map.insert_some("mail", user.mail.as_deref());
        map.insert_some("password", user.password.as_deref());

        if !user.custom_fields.is_empty() {
            let custom_fields = fields::encode_list(&user.custom_fields, "custom_fields", |field| {
                IssueCustomFieldConverter.encode(field)
            })?;
            map.insert("custom_fields", custom_fields);
        }
        Ok(map.into())
    }
}
