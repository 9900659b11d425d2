//! # xforce - Agent Pipeline Code Generator
//!
//! **xforce** turns the node graph drawn in a visual multi-agent editor into a
//! runnable [autogen](https://github.com/microsoft/autogen) Python program.
//!
//! ## Core Workflow
//!
//! 1.  **Load the Graph**: Parse the editor export with `GraphDefinition::from_json`, or
//!     implement `IntoGraph` for your own format.
//! 2.  **Check (optional)**: `check_connections` replays the editor's connection rules
//!     and reports edges the compiler will ignore or that make no sense.
//! 3.  **Compile**: `Compiler::builder(graph).build().compile()` renders each node to a
//!     fragment of Python, resolving which functions each assistant registers and which
//!     agents each group chat contains.
//! 4.  **Assemble**: `CompiledGraph::to_source` wraps the fragments in the import preamble.
//!
//! Node ids follow the editor's `<KIND>__<suffix>` convention (e.g. `GROUP_CHAT__4f1a`);
//! edges are matched to producers through the kind encoded in those ids.
//!
//! ## Quick Start
//!
//! ```rust
//! use xforce::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let flow = r#"{
//!     "nodes": [
//!         { "id": "CUSTOM_FUNCTION__f1", "type": "CUSTOM_FUNCTION",
//!           "data": { "func": "def search(query):\n    return query" } },
//!         { "id": "GPT_ASSISTANT_AGENT__a1", "type": "GPT_ASSISTANT_AGENT",
//!           "data": { "varName": "researcher", "OAIId": "asst_abc" } },
//!         { "id": "USER_PROXY__u1", "type": "USER_PROXY",
//!           "data": { "varName": "admin", "systemMessage": "A human admin." } },
//!         { "id": "GROUP_CHAT__g1", "type": "GROUP_CHAT",
//!           "data": { "varName": "chat", "maxRounds": 12 } }
//!     ],
//!     "edges": [
//!         { "source": "CUSTOM_FUNCTION__f1", "target": "GPT_ASSISTANT_AGENT__a1" },
//!         { "source": "GPT_ASSISTANT_AGENT__a1", "target": "GROUP_CHAT__g1" },
//!         { "source": "USER_PROXY__u1", "target": "GROUP_CHAT__g1" }
//!     ]
//! }"#;
//!
//! let graph = GraphDefinition::from_json(flow)?;
//! let source = Compiler::builder(graph).build().compile_to_source()?;
//!
//! assert!(source.contains("researcher.register_function(function_map={\"search\": search})"));
//! assert!(source.contains("chat = autogen.GroupChat(agents=[researcher, admin]"));
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod compiler;
pub mod error;
pub mod graph;
pub mod naming;
pub mod prelude;
pub mod registry;
pub mod templates;
pub mod ui;
pub mod validate;

#[cfg(feature = "python-bindings")]
mod python;
