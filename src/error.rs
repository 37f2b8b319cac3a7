use crate::node::NodeId;
use thiserror::Error;

/// Errors raised at the data provider boundary while loading or validating a forest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForestError {
    #[error("Failed to parse logic forest JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to serialize logic forest JSON: {0}")]
    JsonSerializeError(String),

    #[error("Could not access forest file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Node id '{0}' appears more than once in the forest")]
    DuplicateId(NodeId),

    #[error("{}", empty_id_message(.parent))]
    EmptyId { parent: Option<NodeId> },
}

fn empty_id_message(parent: &Option<NodeId>) -> String {
    match parent {
        Some(parent) => format!("A child of node '{}' has an empty id", parent),
        None => "A root node has an empty id".to_string(),
    }
}

/// Errors that can occur when filling a create/edit form from free-text input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown value '{value}' for field '{field}'")]
    UnknownChoice { field: &'static str, value: String },
}
