//! Common test utilities for building graph definitions.
use xforce::graph::{
    AssistantData, FunctionData, GroupChatData, UserProxyData,
};
use xforce::prelude::*;

#[allow(dead_code)]
pub fn function_node(id: &str, func: &str) -> GraphNode {
    GraphNode::new(
        id,
        NodePayload::CustomFunction(FunctionData {
            func: func.to_string(),
        }),
    )
}

#[allow(dead_code)]
pub fn assistant_node(id: &str, var_name: &str, oai_id: &str) -> GraphNode {
    GraphNode::new(
        id,
        NodePayload::GptAssistantAgent(AssistantData {
            var_name: var_name.to_string(),
            oai_id: oai_id.to_string(),
        }),
    )
}

#[allow(dead_code)]
pub fn proxy_node(id: &str, var_name: &str, system_message: &str) -> GraphNode {
    GraphNode::new(
        id,
        NodePayload::UserProxy(UserProxyData {
            var_name: var_name.to_string(),
            system_message: system_message.to_string(),
        }),
    )
}

#[allow(dead_code)]
pub fn group_chat_node(id: &str, var_name: &str, max_rounds: u32) -> GraphNode {
    GraphNode::new(
        id,
        NodePayload::GroupChat(GroupChatData {
            var_name: var_name.to_string(),
            max_rounds: max_rounds.to_string(),
            agent_selection: "auto".to_string(),
        }),
    )
}

#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> GraphEdge {
    GraphEdge::new(source, target)
}

/// One function block with two definitions feeding one assistant.
///
/// Logic: `fetch`, `parse` -> researcher
#[allow(dead_code)]
pub fn create_function_flow() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            function_node(
                "CUSTOM_FUNCTION__f1",
                "def fetch(url):\n    return url\n\ndef parse(doc):\n    return doc",
            ),
            assistant_node("GPT_ASSISTANT_AGENT__a1", "researcher", "asst_001"),
        ],
        edges: vec![edge("CUSTOM_FUNCTION__f1", "GPT_ASSISTANT_AGENT__a1")],
    }
}

/// A full pipeline, with nodes listed in an order unrelated to processing order.
///
/// Logic: functions -> coder; coder, reviewer, admin -> chat
#[allow(dead_code)]
pub fn create_pipeline_flow() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            group_chat_node("GROUP_CHAT__g1", "chat", 12),
            proxy_node("USER_PROXY__u1", "admin", "A human admin."),
            assistant_node("GPT_ASSISTANT_AGENT__a1", "coder", "asst_coder"),
            assistant_node("GPT_ASSISTANT_AGENT__a2", "reviewer", "asst_review"),
            function_node("CUSTOM_FUNCTION__f1", "def run_tests(path):\n    pass"),
        ],
        edges: vec![
            edge("CUSTOM_FUNCTION__f1", "GPT_ASSISTANT_AGENT__a1"),
            edge("GPT_ASSISTANT_AGENT__a1", "GROUP_CHAT__g1"),
            edge("USER_PROXY__u1", "GROUP_CHAT__g1"),
            edge("GPT_ASSISTANT_AGENT__a2", "GROUP_CHAT__g1"),
        ],
    }
}

/// The pipeline above as the editor saves it.
#[allow(dead_code)]
pub const PIPELINE_FLOW_JSON: &str = r#"{
  "nodes": [
    {
      "id": "GROUP_CHAT__g1",
      "type": "GROUP_CHAT",
      "position": { "x": 400, "y": 0 },
      "data": {
        "connectivity": { "input": ["USER_PROXY", "GPT_ASSISTANT_AGENT"], "output": null },
        "varName": "chat",
        "maxRounds": 12,
        "agentSelection": "auto"
      }
    },
    {
      "id": "USER_PROXY__u1",
      "type": "USER_PROXY",
      "position": { "x": 0, "y": 200 },
      "data": { "varName": "admin", "systemMessage": "A human admin." }
    },
    {
      "id": "GPT_ASSISTANT_AGENT__a1",
      "type": "GPT_ASSISTANT_AGENT",
      "data": { "varName": "coder", "OAIId": "asst_coder" }
    },
    {
      "id": "GPT_ASSISTANT_AGENT__a2",
      "type": "GPT_ASSISTANT_AGENT",
      "data": { "varName": "reviewer", "OAIId": "asst_review" }
    },
    {
      "id": "CUSTOM_FUNCTION__f1",
      "type": "CUSTOM_FUNCTION",
      "data": { "func": "def run_tests(path):\n    pass" }
    }
  ],
  "edges": [
    { "id": "e1", "source": "CUSTOM_FUNCTION__f1", "target": "GPT_ASSISTANT_AGENT__a1" },
    { "id": "e2", "source": "GPT_ASSISTANT_AGENT__a1", "target": "GROUP_CHAT__g1" },
    { "id": "e3", "source": "USER_PROXY__u1", "target": "GROUP_CHAT__g1" },
    { "id": "e4", "source": "GPT_ASSISTANT_AGENT__a2", "target": "GROUP_CHAT__g1" }
  ]
}"#;
