use super::kind::NodeKind;
use crate::registry;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lenient scalar handling for editor data. Form inputs often hand over numbers as
/// strings (and the other way round); values are kept as the text that will be
/// interpolated, so a wrong type shows up in the generated code instead of failing
/// the whole load.
mod scalar {
    use super::*;

    pub(super) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => s,
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        })
    }

    /// Writes numeric text back as a JSON number, anything else as a string.
    pub(super) fn number_or_text<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value.parse::<u64>() {
            Ok(n) if n.to_string() == value => serializer.serialize_u64(n),
            _ => serializer.serialize_str(value),
        }
    }
}

/// Data carried by a `USER_PROXY` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProxyData {
    #[serde(alias = "var_name", deserialize_with = "scalar::text")]
    pub var_name: String,
    #[serde(alias = "system_message", deserialize_with = "scalar::text")]
    pub system_message: String,
}

/// Data carried by a `GROUP_CHAT` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupChatData {
    #[serde(alias = "var_name", deserialize_with = "scalar::text")]
    pub var_name: String,
    /// Interpolated as `max_round=...`; `"12"` and `12` both load as `12`.
    #[serde(
        alias = "max_rounds",
        deserialize_with = "scalar::text",
        serialize_with = "scalar::number_or_text"
    )]
    pub max_rounds: String,
    #[serde(alias = "agent_selection", deserialize_with = "scalar::text")]
    pub agent_selection: String,
}

/// Data carried by a `GPT_ASSISTANT_AGENT` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantData {
    #[serde(
        rename = "varName",
        alias = "var_name",
        deserialize_with = "scalar::text"
    )]
    pub var_name: String,
    /// The OpenAI assistant id the agent is bound to.
    #[serde(rename = "OAIId", alias = "oai_id", deserialize_with = "scalar::text")]
    pub oai_id: String,
}

/// Data carried by a `CUSTOM_FUNCTION` node: raw Python source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionData {
    #[serde(deserialize_with = "scalar::text")]
    pub func: String,
}

impl Default for UserProxyData {
    fn default() -> Self {
        Self {
            var_name: registry::default_var_name(NodeKind::UserProxy).to_string(),
            system_message: String::new(),
        }
    }
}

impl Default for GroupChatData {
    fn default() -> Self {
        Self {
            var_name: registry::default_var_name(NodeKind::GroupChat).to_string(),
            max_rounds: registry::DEFAULT_MAX_ROUNDS.to_string(),
            agent_selection: registry::DEFAULT_AGENT_SELECTION.to_string(),
        }
    }
}

impl Default for AssistantData {
    fn default() -> Self {
        Self {
            var_name: registry::default_var_name(NodeKind::GptAssistantAgent).to_string(),
            oai_id: String::new(),
        }
    }
}

/// The kind-specific payload of a node. The variant *is* the node's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodePayload {
    UserProxy(UserProxyData),
    GroupChat(GroupChatData),
    GptAssistantAgent(AssistantData),
    CustomFunction(FunctionData),
}

impl NodePayload {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodePayload::UserProxy(_) => NodeKind::UserProxy,
            NodePayload::GroupChat(_) => NodeKind::GroupChat,
            NodePayload::GptAssistantAgent(_) => NodeKind::GptAssistantAgent,
            NodePayload::CustomFunction(_) => NodeKind::CustomFunction,
        }
    }

    /// The Python variable this node binds, if it is agent-like.
    pub fn var_name(&self) -> Option<&str> {
        match self {
            NodePayload::UserProxy(d) => Some(&d.var_name),
            NodePayload::GroupChat(d) => Some(&d.var_name),
            NodePayload::GptAssistantAgent(d) => Some(&d.var_name),
            NodePayload::CustomFunction(_) => None,
        }
    }

    /// Deserializes a free-form data object into the payload for `kind`.
    /// Missing and `null` fields take the registry defaults, scalars of the wrong
    /// type are kept as text, unknown fields are ignored. Only data that is not an
    /// object at all is rejected.
    pub fn from_value(kind: NodeKind, data: serde_json::Value) -> Result<Self, serde_json::Error> {
        let data = match data {
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            serde_json::Value::Object(mut fields) => {
                fields.retain(|_, v| !v.is_null());
                serde_json::Value::Object(fields)
            }
            other => other,
        };
        Ok(match kind {
            NodeKind::UserProxy => NodePayload::UserProxy(serde_json::from_value(data)?),
            NodeKind::GroupChat => NodePayload::GroupChat(serde_json::from_value(data)?),
            NodeKind::GptAssistantAgent => {
                NodePayload::GptAssistantAgent(serde_json::from_value(data)?)
            }
            NodeKind::CustomFunction => NodePayload::CustomFunction(serde_json::from_value(data)?),
        })
    }

    /// Serializes the payload back into the editor's free-form data object.
    pub fn to_value(&self) -> serde_json::Value {
        let value = match self {
            NodePayload::UserProxy(d) => serde_json::to_value(d),
            NodePayload::GroupChat(d) => serde_json::to_value(d),
            NodePayload::GptAssistantAgent(d) => serde_json::to_value(d),
            NodePayload::CustomFunction(d) => serde_json::to_value(d),
        };
        // Plain structs of strings always serialize.
        value.unwrap_or(serde_json::Value::Null)
    }
}
