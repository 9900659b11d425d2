use crate::graph::NodeKind;
use thiserror::Error;

/// Errors that can occur while turning a graph into code fragments.
///
/// The default compiler degrades most of these into visibly wrong output and
/// only logs them; a strict compiler returns them instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Node '{node_id}' has kind '{kind}', which has no registered code template")]
    UnhandledKind { node_id: String, kind: NodeKind },

    #[error(
        "Template for '{expected}' was given node '{node_id}' whose payload is of kind '{found}'"
    )]
    PayloadMismatch {
        node_id: String,
        expected: NodeKind,
        found: NodeKind,
    },
}

/// Errors that can occur when converting an editor export (or any custom format)
/// into an xforce `GraphDefinition`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphConversionError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParseError(String),

    #[error("Node '{node_id}' has an unregistered node type: '{type_name}'")]
    UnknownNodeKind { node_id: String, type_name: String },

    #[error("Node '{node_id}' carries an invalid data payload: {message}")]
    InvalidPayload { node_id: String, message: String },
}
