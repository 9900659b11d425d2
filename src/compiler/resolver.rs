use super::symbols::{Artifact, SymbolTable};
use crate::graph::{GraphDefinition, GraphNode};
use crate::naming;
use crate::registry;
use ahash::AHashMap;
use tracing::warn;

/// Links consumers to the producers feeding them.
///
/// Edges are indexed by target once; each target keeps its incoming sources in
/// edge-list order so references come out unsorted and with duplicates intact.
pub(super) struct ReferenceResolver<'a> {
    incoming: AHashMap<&'a str, Vec<&'a str>>,
}

impl<'a> ReferenceResolver<'a> {
    pub(super) fn new(graph: &'a GraphDefinition) -> Self {
        let mut incoming: AHashMap<&'a str, Vec<&'a str>> = AHashMap::new();
        for edge in &graph.edges {
            incoming
                .entry(edge.target.as_str())
                .or_default()
                .push(edge.source.as_str());
        }
        Self { incoming }
    }

    /// Collects the producer references for `node`.
    ///
    /// An edge counts only when its composite ids resolve: the target to the node's
    /// own kind and the source to a kind the registry lets feed it. Sources with no
    /// symbol yet are emitted as their raw id so the gap stays visible.
    pub(super) fn resolve(&self, node: &GraphNode, symbols: &SymbolTable) -> Vec<String> {
        let kind = node.kind();
        let rule = registry::lookup(kind).connectivity;

        if naming::resolve_kind(&node.id) != Some(kind) {
            return Vec::new();
        }

        let mut refs = Vec::new();
        let Some(sources) = self.incoming.get(node.id.as_str()) else {
            return refs;
        };
        for source in sources {
            let accepted = naming::resolve_kind(source).is_some_and(|k| rule.accepts_input(k));
            if !accepted {
                continue;
            }
            match symbols.get(source) {
                Some(Artifact::Variable(name)) => refs.push(name.clone()),
                Some(Artifact::Functions(names)) => refs.extend(names.iter().cloned()),
                None => {
                    warn!(
                        node_id = %node.id,
                        source = %source,
                        "Connected node has not produced anything; emitting its id instead"
                    );
                    refs.push(source.to_string());
                }
            }
        }
        refs
    }
}
