use crate::error::GraphConversionError;
use crate::graph::{GraphDefinition, GraphEdge, GraphNode, IntoGraph, NodePayload};
use crate::registry;
use serde::{Deserialize, Serialize};

/// Canvas coordinates of a node. Irrelevant to compilation, kept for round trips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UiPosition {
    pub x: f64,
    pub y: f64,
}

/// UI node with id, kind tag and free-form data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<UiPosition>,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// UI edge connecting nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
}

/// Complete editor export
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiGraph {
    #[serde(default)]
    pub nodes: Vec<UiNode>,
    #[serde(default)]
    pub edges: Vec<UiEdge>,
}

impl IntoGraph for UiGraph {
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|ui_node| -> Result<GraphNode, GraphConversionError> {
                let spec = registry::lookup_tag(&ui_node.node_type).ok_or_else(|| {
                    GraphConversionError::UnknownNodeKind {
                        node_id: ui_node.id.clone(),
                        type_name: ui_node.node_type.clone(),
                    }
                })?;
                let payload = NodePayload::from_value(spec.kind, ui_node.data).map_err(|e| {
                    GraphConversionError::InvalidPayload {
                        node_id: ui_node.id.clone(),
                        message: e.to_string(),
                    }
                })?;
                Ok(GraphNode::new(ui_node.id, payload))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let edges = self
            .edges
            .into_iter()
            .map(|ui_edge| GraphEdge::new(ui_edge.source, ui_edge.target))
            .collect();

        Ok(GraphDefinition { nodes, edges })
    }
}

impl From<&GraphDefinition> for UiGraph {
    fn from(graph: &GraphDefinition) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .map(|node| UiNode {
                id: node.id.clone(),
                node_type: node.kind().tag().to_string(),
                position: None,
                data: node.payload.to_value(),
            })
            .collect();
        let edges = graph
            .edges
            .iter()
            .map(|edge| UiEdge {
                id: Some(format!("{}->{}", edge.source, edge.target)),
                source: edge.source.clone(),
                target: edge.target.clone(),
            })
            .collect();
        UiGraph { nodes, edges }
    }
}
