use ahash::AHashMap;
use regex::Regex;
use std::sync::LazyLock;

/// Best-effort scan for Python function definitions: `def <name>(`.
/// Names follow Python 3 identifier rules, so non-ASCII names are accepted.
/// Decorators, nesting and string contents are not understood.
static FUNCTION_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"def\s+([\p{XID_Start}_]\p{XID_Continue}*)\s*\(")
        .expect("function definition pattern is valid")
});

/// What a node contributes to the nodes that consume it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// The Python variable an agent-like node binds.
    Variable(String),
    /// Names of the functions a function block defines, in source order.
    Functions(Vec<String>),
}

/// Per-compilation mapping from node id to the artifact it produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: AHashMap<String, Artifact>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an artifact, returning the one it replaced when the id was already taken.
    pub fn insert(&mut self, node_id: &str, artifact: Artifact) -> Option<Artifact> {
        self.entries.insert(node_id.to_string(), artifact)
    }

    pub fn get(&self, node_id: &str) -> Option<&Artifact> {
        self.entries.get(node_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Names of all functions defined in `source`, first appearance wins.
pub fn extract_function_names(source: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in FUNCTION_DEF.captures_iter(source) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
