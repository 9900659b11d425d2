use crate::assembler;
use crate::error::CompileError;
use crate::graph::{GraphDefinition, GraphNode, NodeKind, NodePayload};
use crate::templates::{FragmentTemplate, TemplateCatalog};
use tracing::{debug, warn};

mod resolver;
pub mod symbols;

use resolver::ReferenceResolver;
pub use symbols::{Artifact, SymbolTable, extract_function_names};

/// Order in which node groups are emitted: function definers, then assistants that
/// consume them, then user proxies, then the group chats that aggregate agents.
///
/// This is a fixed two-level dependency order, not a topological sort. Graphs that
/// chain deeper than function -> agent -> group chat are under-resolved.
pub const PROCESSING_ORDER: [NodeKind; 4] = [
    NodeKind::CustomFunction,
    NodeKind::GptAssistantAgent,
    NodeKind::UserProxy,
    NodeKind::GroupChat,
];

/// One node's rendered code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub node_id: String,
    pub kind: NodeKind,
    pub code: String,
}

/// The result of a compilation pass.
#[derive(Debug, Clone)]
pub struct CompiledGraph {
    pub fragments: Vec<Fragment>,
    pub symbols: SymbolTable,
}

impl CompiledGraph {
    /// The complete Python program: preamble, divider and every fragment.
    pub fn to_source(&self) -> String {
        assembler::assemble(&self.fragments)
    }
}

pub struct Compiler {
    graph: GraphDefinition,
    catalog: TemplateCatalog,
    strict: bool,
}

pub struct CompilerBuilder {
    graph: GraphDefinition,
    catalog: TemplateCatalog,
    strict: bool,
}

impl CompilerBuilder {
    pub fn new(graph: GraphDefinition) -> Self {
        Self {
            graph,
            catalog: TemplateCatalog::default(),
            strict: false,
        }
    }

    /// Registers a template for its kind, replacing the built-in one.
    pub fn with_template(mut self, template: Box<dyn FragmentTemplate>) -> Self {
        self.catalog.insert(template);
        self
    }

    /// Drops the template for `kind`; nodes of that kind then render nothing.
    pub fn without_template(mut self, kind: NodeKind) -> Self {
        self.catalog.remove(kind);
        self
    }

    /// When set, template failures abort compilation instead of leaving an empty fragment.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            graph: self.graph,
            catalog: self.catalog,
            strict: self.strict,
        }
    }
}

impl Compiler {
    pub fn builder(graph: GraphDefinition) -> CompilerBuilder {
        CompilerBuilder::new(graph)
    }

    pub fn graph(&self) -> &GraphDefinition {
        &self.graph
    }

    /// Walks the graph and renders every node, in [`PROCESSING_ORDER`] and then list order.
    pub fn compile(&self) -> Result<CompiledGraph, CompileError> {
        let resolver = ReferenceResolver::new(&self.graph);
        let mut symbols = SymbolTable::new();
        let mut fragments = Vec::with_capacity(self.graph.nodes.len());

        for kind in PROCESSING_ORDER {
            for node in self.graph.nodes_of_kind(kind) {
                let refs = resolver.resolve(node, &symbols);
                Self::record_artifact(node, &mut symbols);
                let code = self.render(node, &refs)?;
                debug!(node_id = %node.id, kind = %kind, refs = refs.len(), "Rendered fragment");
                fragments.push(Fragment {
                    node_id: node.id.clone(),
                    kind,
                    code,
                });
            }
        }

        Ok(CompiledGraph { fragments, symbols })
    }

    /// Convenience for `compile()?.to_source()`.
    pub fn compile_to_source(&self) -> Result<String, CompileError> {
        Ok(self.compile()?.to_source())
    }

    fn record_artifact(node: &GraphNode, symbols: &mut SymbolTable) {
        let artifact = match &node.payload {
            NodePayload::CustomFunction(data) => {
                Artifact::Functions(extract_function_names(&data.func))
            }
            other => match other.var_name() {
                Some(name) => Artifact::Variable(name.to_string()),
                None => return,
            },
        };
        if symbols.insert(&node.id, artifact).is_some() {
            warn!(node_id = %node.id, "Duplicate node id; the earlier node's symbol is replaced");
        }
    }

    fn render(&self, node: &GraphNode, refs: &[String]) -> Result<String, CompileError> {
        match self.catalog.render(node, refs) {
            Ok(code) => Ok(code),
            Err(e) if !self.strict => {
                warn!(node_id = %node.id, "{}; leaving an empty fragment", e);
                Ok(String::new())
            }
            Err(e) => Err(e),
        }
    }
}
