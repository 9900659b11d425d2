//! Unit tests for core xforce functionality.
mod common;
use xforce::naming::{extract_node_name, resolve_kind};
use xforce::prelude::*;
use xforce::registry;

#[test]
fn test_node_name_extraction() {
    for (raw, base) in [
        ("USER_PROXY__abc", "USER_PROXY"),
        ("GPT_ASSISTANT_AGENT__1699999999", "GPT_ASSISTANT_AGENT"),
        ("My Label__x", "My Label"),
    ] {
        assert_eq!(extract_node_name(raw), Some(base));
    }
    for raw in ["USER_PROXY", "USER_PROXY_abc", "USER_PROXY__a_b", "USER_PROXY__"] {
        assert_eq!(extract_node_name(raw), None, "{} should not resolve", raw);
    }
}

#[test]
fn test_kind_resolution_needs_registered_tag() {
    assert_eq!(resolve_kind("GROUP_CHAT__1"), Some(NodeKind::GroupChat));
    assert_eq!(resolve_kind("My Label__x"), None);
}

#[test]
fn test_registry_covers_every_kind() {
    for kind in NodeKind::ALL {
        let spec = registry::lookup(kind);
        assert_eq!(spec.default_payload().kind(), kind);
        assert_eq!(registry::lookup_tag(kind.tag()).map(|s| s.kind), Some(kind));
    }
}

#[test]
fn test_error_display() {
    let err = CompileError::UnhandledKind {
        node_id: "GROUP_CHAT__1".to_string(),
        kind: NodeKind::GroupChat,
    };
    assert!(err.to_string().contains("GROUP_CHAT__1"));
    assert!(err.to_string().contains("GROUP_CHAT"));

    let conv_err = GraphConversionError::UnknownNodeKind {
        node_id: "n1".to_string(),
        type_name: "SUPERVISOR".to_string(),
    };
    assert!(conv_err.to_string().contains("SUPERVISOR"));
    assert!(conv_err.to_string().contains("n1"));
}
