use super::kind::NodeKind;
use super::payload::NodePayload;
use crate::error::GraphConversionError;
use crate::graph::IntoGraph;
use crate::ui::UiGraph;

/// The complete, canonical definition of an agent pipeline, ready for compilation.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphDefinition {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// A single node on the canvas: an agent, a group chat or a block of functions.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub payload: NodePayload,
}

/// A directed "feeds into" connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, payload: NodePayload) -> Self {
        Self {
            id: id.into(),
            payload,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.payload.kind()
    }
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl GraphDefinition {
    /// Parses an editor export (ReactFlow-shaped JSON) straight into a definition.
    pub fn from_json(json: &str) -> Result<Self, GraphConversionError> {
        let ui: UiGraph = serde_json::from_str(json)
            .map_err(|e| GraphConversionError::JsonParseError(e.to_string()))?;
        ui.into_graph()
    }

    pub fn find_node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Nodes of one kind, in list order.
    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(move |n| n.kind() == kind)
    }
}
