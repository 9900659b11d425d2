//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the xforce crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use xforce::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let flow_json = std::fs::read_to_string("path/to/flow.json")?;
//! let graph = GraphDefinition::from_json(&flow_json)?;
//!
//! for issue in check_connections(&graph) {
//!     eprintln!("warning: {}", issue);
//! }
//!
//! let source = Compiler::builder(graph).build().compile_to_source()?;
//! println!("{}", source);
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::compiler::{CompiledGraph, Compiler, CompilerBuilder, Fragment};
pub use crate::templates::FragmentTemplate;

// Graph model
pub use crate::graph::{GraphDefinition, GraphEdge, GraphNode, IntoGraph, NodeKind, NodePayload};
pub use crate::ui::UiGraph;

// Checks
pub use crate::validate::{ConnectionIssue, check_connections};

// Error types
pub use crate::error::{CompileError, GraphConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
