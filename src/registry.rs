//! Static catalog of node kinds: which kinds may connect to which, and what a
//! freshly placed node of each kind contains.

use crate::graph::{
    AssistantData, FunctionData, GroupChatData, NodeKind, NodePayload, UserProxyData,
};

/// `max_round` used for group chats that do not set one (autogen's own default).
pub const DEFAULT_MAX_ROUNDS: u32 = 10;
/// Speaker selection used for group chats that do not set one.
pub const DEFAULT_AGENT_SELECTION: &str = "auto";

/// Permitted neighbours of a node kind. `None` means the side is unconstrained
/// (the editor shows no handle there).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityRule {
    pub input: Option<&'static [NodeKind]>,
    pub output: Option<&'static [NodeKind]>,
}

impl ConnectivityRule {
    pub fn accepts_input(&self, kind: NodeKind) -> bool {
        self.input.is_some_and(|kinds| kinds.contains(&kind))
    }

    pub fn accepts_output(&self, kind: NodeKind) -> bool {
        self.output.is_some_and(|kinds| kinds.contains(&kind))
    }
}

/// One registry entry.
#[derive(Debug, Clone, Copy)]
pub struct NodeSpec {
    pub kind: NodeKind,
    pub connectivity: ConnectivityRule,
    /// Variable name given to new nodes; function blocks bind none.
    pub default_var_name: Option<&'static str>,
}

impl NodeSpec {
    /// The payload a newly placed node of this kind starts with.
    pub fn default_payload(&self) -> NodePayload {
        match self.kind {
            NodeKind::UserProxy => NodePayload::UserProxy(UserProxyData::default()),
            NodeKind::GroupChat => NodePayload::GroupChat(GroupChatData::default()),
            NodeKind::GptAssistantAgent => {
                NodePayload::GptAssistantAgent(AssistantData::default())
            }
            NodeKind::CustomFunction => NodePayload::CustomFunction(FunctionData::default()),
        }
    }
}

static NODE_SPECS: [NodeSpec; 4] = [
    NodeSpec {
        kind: NodeKind::GroupChat,
        connectivity: ConnectivityRule {
            input: Some(&[NodeKind::UserProxy, NodeKind::GptAssistantAgent]),
            output: None,
        },
        default_var_name: Some("group_chat"),
    },
    NodeSpec {
        kind: NodeKind::UserProxy,
        connectivity: ConnectivityRule {
            input: None,
            output: Some(&[NodeKind::GroupChat]),
        },
        default_var_name: Some("user_proxy"),
    },
    NodeSpec {
        kind: NodeKind::GptAssistantAgent,
        connectivity: ConnectivityRule {
            input: Some(&[NodeKind::CustomFunction]),
            output: Some(&[NodeKind::GroupChat]),
        },
        default_var_name: Some("gpt_assistant"),
    },
    NodeSpec {
        kind: NodeKind::CustomFunction,
        connectivity: ConnectivityRule {
            input: None,
            output: Some(&[NodeKind::GptAssistantAgent]),
        },
        default_var_name: None,
    },
];

/// Every registered spec, in declaration order.
pub fn specs() -> &'static [NodeSpec] {
    &NODE_SPECS
}

/// The spec for a kind. Every member of the closed set is registered.
pub fn lookup(kind: NodeKind) -> &'static NodeSpec {
    match kind {
        NodeKind::GroupChat => &NODE_SPECS[0],
        NodeKind::UserProxy => &NODE_SPECS[1],
        NodeKind::GptAssistantAgent => &NODE_SPECS[2],
        NodeKind::CustomFunction => &NODE_SPECS[3],
    }
}

/// The spec for a wire tag such as `"GROUP_CHAT"`. Unknown tags are a
/// configuration problem for the caller to report.
pub fn lookup_tag(tag: &str) -> Option<&'static NodeSpec> {
    NodeKind::from_tag(tag).map(lookup)
}

pub fn default_var_name(kind: NodeKind) -> &'static str {
    lookup(kind).default_var_name.unwrap_or_default()
}

/// Whether an edge `source -> target` is allowed by both ends' rules.
pub fn allows(source: NodeKind, target: NodeKind) -> bool {
    lookup(source).connectivity.accepts_output(target)
        && lookup(target).connectivity.accepts_input(source)
}
