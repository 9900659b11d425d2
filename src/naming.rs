//! Composite node identifiers.
//!
//! The editor names nodes `<KIND_TAG>__<suffix>` (e.g. `GROUP_CHAT__x7f2`), so the
//! kind of an edge endpoint can be recovered from the id alone.

use crate::graph::NodeKind;
use regex::Regex;
use std::sync::LazyLock;

static NODE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)__[^_]+$").expect("node name pattern is valid"));

/// Returns `<base>` for an id shaped `<base>__<suffix>` where the suffix is non-empty
/// and has no underscore. Anything else yields `None`.
pub fn extract_node_name(raw: &str) -> Option<&str> {
    NODE_NAME
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The node kind encoded in a composite id, if the id is well formed and its
/// base is a registered kind tag.
pub fn resolve_kind(raw: &str) -> Option<NodeKind> {
    extract_node_name(raw).and_then(NodeKind::from_tag)
}

/// Builds a composite id for a node of `kind`. Underscores in `suffix` would make
/// the id unresolvable, so they are replaced with dashes.
pub fn compose_node_id(kind: NodeKind, suffix: &str) -> String {
    format!("{}__{}", kind.tag(), suffix.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_base_from_composite_ids() {
        assert_eq!(extract_node_name("GROUP_CHAT__x7f2"), Some("GROUP_CHAT"));
        assert_eq!(extract_node_name("a__b__c"), Some("a__b"));
        assert_eq!(extract_node_name("a___b"), Some("a_"));
        assert_eq!(extract_node_name("__b"), Some(""));
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(extract_node_name("GROUP_CHAT"), None);
        assert_eq!(extract_node_name("GROUP_CHAT__"), None);
        assert_eq!(extract_node_name("GROUP_CHAT__a_b"), None);
        assert_eq!(extract_node_name(""), None);
    }

    #[test]
    fn resolves_registered_kinds_only() {
        assert_eq!(
            resolve_kind("CUSTOM_FUNCTION__1"),
            Some(NodeKind::CustomFunction)
        );
        assert_eq!(resolve_kind("SUPERVISOR__1"), None);
    }

    #[test]
    fn composed_ids_resolve_back() {
        let id = compose_node_id(NodeKind::UserProxy, "a_b");
        assert_eq!(id, "USER_PROXY__a-b");
        assert_eq!(resolve_kind(&id), Some(NodeKind::UserProxy));
    }
}
