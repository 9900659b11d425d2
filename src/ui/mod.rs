//! The graph editor's save format (ReactFlow nodes and edges).

mod types;

pub use types::*;
