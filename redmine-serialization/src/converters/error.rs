use crate::converter::EntityConverter;
use crate::error::ConvertResult;
use crate::error_aggregate;
use crate::node::Node;
use redmine_types::ErrorMessage;

/// Reads a single `error` entry, or a list of them joined into one message.
pub struct ErrorConverter;

impl EntityConverter for ErrorConverter {
    type Entity = ErrorMessage;

    fn decode(&self, node: &Node) -> ConvertResult<ErrorMessage> {
        error_aggregate::aggregate(node)
    }

    fn encode(&self, error: &ErrorMessage) -> ConvertResult<Node> {
        Ok(Node::string(error.info.as_str()))
    }
}
