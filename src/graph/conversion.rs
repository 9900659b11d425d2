use super::definition::GraphDefinition;
use crate::error::GraphConversionError;

/// A trait for custom data models that can be converted into an xforce `GraphDefinition`.
///
/// The bundled editor export format (`ui::UiGraph`) implements it; implement it on
/// your own structs to feed the compiler from any other canvas or file format.
///
/// # Example
///
/// ```rust,no_run
/// use xforce::prelude::*;
/// use xforce::graph::{GraphNode, GraphEdge, NodePayload, UserProxyData};
///
/// struct MyAgent { name: String }
/// struct MyPipeline { agents: Vec<MyAgent> }
///
/// impl IntoGraph for MyPipeline {
///     fn into_graph(self) -> std::result::Result<GraphDefinition, GraphConversionError> {
///         let nodes = self
///             .agents
///             .into_iter()
///             .enumerate()
///             .map(|(i, agent)| {
///                 GraphNode::new(
///                     format!("USER_PROXY__{}", i),
///                     NodePayload::UserProxy(UserProxyData {
///                         var_name: agent.name,
///                         system_message: String::new(),
///                     }),
///                 )
///             })
///             .collect();
///         Ok(GraphDefinition { nodes, edges: Vec::<GraphEdge>::new() })
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into an xforce graph.
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError>;
}
