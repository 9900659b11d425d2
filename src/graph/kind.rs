use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of node roles the editor can place on the canvas.
///
/// Each kind has a wire tag (`USER_PROXY`, `GROUP_CHAT`, ...) which is used both
/// as the node `type` in editor exports and as the base of composite node ids
/// such as `GROUP_CHAT__k3j9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    UserProxy,
    GroupChat,
    GptAssistantAgent,
    CustomFunction,
}

impl NodeKind {
    /// All kinds, in registry declaration order.
    pub const ALL: [NodeKind; 4] = [
        NodeKind::GroupChat,
        NodeKind::UserProxy,
        NodeKind::GptAssistantAgent,
        NodeKind::CustomFunction,
    ];

    /// The wire tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::UserProxy => "USER_PROXY",
            NodeKind::GroupChat => "GROUP_CHAT",
            NodeKind::GptAssistantAgent => "GPT_ASSISTANT_AGENT",
            NodeKind::CustomFunction => "CUSTOM_FUNCTION",
        }
    }

    /// Looks a kind up by its wire tag. Returns `None` for anything outside the closed set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
