//! Connection checks the editor applies while drawing edges, replayed over a
//! saved graph. Compilation never depends on them.

use crate::graph::{GraphDefinition, GraphEdge, NodeKind};
use crate::naming;
use crate::registry;
use std::fmt;

/// A problem with one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionIssue {
    /// An endpoint names a node that is not in the graph.
    MissingNode { edge: GraphEdge, node_id: String },
    /// An endpoint id is not `<KIND>__<suffix>`, so the compiler ignores the edge.
    UnresolvableId { edge: GraphEdge, node_id: String },
    /// The endpoint id encodes a different kind than the node actually has.
    KindMismatch {
        edge: GraphEdge,
        node_id: String,
        id_kind: NodeKind,
        node_kind: NodeKind,
    },
    /// The registry does not allow this source kind to feed this target kind.
    Forbidden {
        edge: GraphEdge,
        source: NodeKind,
        target: NodeKind,
    },
}

impl fmt::Display for ConnectionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionIssue::MissingNode { edge, node_id } => write!(
                f,
                "Edge '{}' -> '{}' refers to missing node '{}'",
                edge.source, edge.target, node_id
            ),
            ConnectionIssue::UnresolvableId { edge, node_id } => write!(
                f,
                "Edge '{}' -> '{}': id '{}' does not encode a node kind and will be ignored",
                edge.source, edge.target, node_id
            ),
            ConnectionIssue::KindMismatch {
                edge,
                node_id,
                id_kind,
                node_kind,
            } => write!(
                f,
                "Edge '{}' -> '{}': id '{}' says {} but the node is a {}",
                edge.source, edge.target, node_id, id_kind, node_kind
            ),
            ConnectionIssue::Forbidden {
                edge,
                source,
                target,
            } => write!(
                f,
                "Edge '{}' -> '{}': {} cannot feed into {}",
                edge.source, edge.target, source, target
            ),
        }
    }
}

/// Checks every edge and reports what is wrong, in edge order. At most one issue
/// is reported per edge.
pub fn check_connections(graph: &GraphDefinition) -> Vec<ConnectionIssue> {
    graph
        .edges
        .iter()
        .filter_map(|edge| check_edge(graph, edge))
        .collect()
}

fn check_edge(graph: &GraphDefinition, edge: &GraphEdge) -> Option<ConnectionIssue> {
    let mut kinds = [NodeKind::UserProxy; 2];
    for (slot, node_id) in [&edge.source, &edge.target].into_iter().enumerate() {
        let Some(node) = graph.find_node(node_id) else {
            return Some(ConnectionIssue::MissingNode {
                edge: edge.clone(),
                node_id: node_id.clone(),
            });
        };
        let Some(id_kind) = naming::resolve_kind(node_id) else {
            return Some(ConnectionIssue::UnresolvableId {
                edge: edge.clone(),
                node_id: node_id.clone(),
            });
        };
        if id_kind != node.kind() {
            return Some(ConnectionIssue::KindMismatch {
                edge: edge.clone(),
                node_id: node_id.clone(),
                id_kind,
                node_kind: node.kind(),
            });
        }
        kinds[slot] = id_kind;
    }

    let [source, target] = kinds;
    if registry::allows(source, target) {
        None
    } else {
        Some(ConnectionIssue::Forbidden {
            edge: edge.clone(),
            source,
            target,
        })
    }
}
