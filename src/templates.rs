use crate::error::CompileError;
use crate::graph::{GraphNode, NodeKind, NodePayload};
use ahash::AHashMap;
use itertools::Itertools;

/// Defines the contract for rendering one node kind into a fragment of Python source.
///
/// `refs` holds the producer references the compiler resolved for the node: function
/// names for an assistant, agent variable names for a group chat, nothing otherwise.
/// Payload values are interpolated as-is; they are expected to already be valid
/// Python fragments.
pub trait FragmentTemplate: Send + Sync {
    fn node_kind(&self) -> NodeKind;
    fn render(&self, node: &GraphNode, refs: &[String]) -> Result<String, CompileError>;
}

fn mismatch(node: &GraphNode, expected: NodeKind) -> CompileError {
    CompileError::PayloadMismatch {
        node_id: node.id.clone(),
        expected,
        found: node.kind(),
    }
}

/// `{"name": name, ...}` for a list of function names.
pub fn function_map_literal(functions: &[String]) -> String {
    format!(
        "{{{}}}",
        functions
            .iter()
            .map(|f| format!("\"{}\": {}", f, f))
            .join(", ")
    )
}

pub struct GroupChatTemplate;

impl FragmentTemplate for GroupChatTemplate {
    fn node_kind(&self) -> NodeKind {
        NodeKind::GroupChat
    }

    fn render(&self, node: &GraphNode, refs: &[String]) -> Result<String, CompileError> {
        let NodePayload::GroupChat(data) = &node.payload else {
            return Err(mismatch(node, self.node_kind()));
        };
        Ok(format!(
            "{} = autogen.GroupChat(agents=[{}], messages=[], max_round={}, agent_selection=\"{}\")",
            data.var_name,
            refs.join(", "),
            data.max_rounds,
            data.agent_selection
        ))
    }
}

pub struct UserProxyTemplate;

impl FragmentTemplate for UserProxyTemplate {
    fn node_kind(&self) -> NodeKind {
        NodeKind::UserProxy
    }

    fn render(&self, node: &GraphNode, _refs: &[String]) -> Result<String, CompileError> {
        let NodePayload::UserProxy(data) = &node.payload else {
            return Err(mismatch(node, self.node_kind()));
        };
        Ok(format!(
            "{v} = UserProxyAgent(name=\"{v}\", human_input_mode=\"ALWAYS\", max_consecutive_auto_reply=1, system_message=\"{msg}\")",
            v = data.var_name,
            msg = data.system_message
        ))
    }
}

pub struct AssistantTemplate;

impl FragmentTemplate for AssistantTemplate {
    fn node_kind(&self) -> NodeKind {
        NodeKind::GptAssistantAgent
    }

    fn render(&self, node: &GraphNode, refs: &[String]) -> Result<String, CompileError> {
        let NodePayload::GptAssistantAgent(data) = &node.payload else {
            return Err(mismatch(node, self.node_kind()));
        };
        let mut code = format!(
            "{v} = GPTAssistantAgent(name=\"{v}\", llm_config = {{\"config_list\": config_list, \"assistant_id\":\"{id}\"}})",
            v = data.var_name,
            id = data.oai_id
        );
        if !refs.is_empty() {
            code.push('\n');
            code.push_str(&format!(
                "{}.register_function(function_map={})",
                data.var_name,
                function_map_literal(refs)
            ));
        }
        Ok(code)
    }
}

pub struct CustomFunctionTemplate;

impl FragmentTemplate for CustomFunctionTemplate {
    fn node_kind(&self) -> NodeKind {
        NodeKind::CustomFunction
    }

    fn render(&self, node: &GraphNode, _refs: &[String]) -> Result<String, CompileError> {
        let NodePayload::CustomFunction(data) = &node.payload else {
            return Err(mismatch(node, self.node_kind()));
        };
        Ok(data.func.clone())
    }
}

/// Kind-indexed set of templates used by the compiler.
pub struct TemplateCatalog {
    templates: AHashMap<NodeKind, Box<dyn FragmentTemplate>>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(Box::new(GroupChatTemplate));
        catalog.insert(Box::new(UserProxyTemplate));
        catalog.insert(Box::new(AssistantTemplate));
        catalog.insert(Box::new(CustomFunctionTemplate));
        catalog
    }
}

impl TemplateCatalog {
    pub fn empty() -> Self {
        Self {
            templates: AHashMap::new(),
        }
    }

    /// Registers a template under its own kind, replacing any previous one.
    pub fn insert(&mut self, template: Box<dyn FragmentTemplate>) {
        self.templates.insert(template.node_kind(), template);
    }

    pub fn remove(&mut self, kind: NodeKind) -> Option<Box<dyn FragmentTemplate>> {
        self.templates.remove(&kind)
    }

    pub fn contains(&self, kind: NodeKind) -> bool {
        self.templates.contains_key(&kind)
    }

    /// Renders a node with the template registered for its kind.
    pub fn render(&self, node: &GraphNode, refs: &[String]) -> Result<String, CompileError> {
        let template =
            self.templates
                .get(&node.kind())
                .ok_or_else(|| CompileError::UnhandledKind {
                    node_id: node.id.clone(),
                    kind: node.kind(),
                })?;
        template.render(node, refs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AssistantData, FunctionData, GroupChatData, UserProxyData};

    fn assistant(var_name: &str, oai_id: &str) -> GraphNode {
        GraphNode::new(
            "GPT_ASSISTANT_AGENT__1",
            NodePayload::GptAssistantAgent(AssistantData {
                var_name: var_name.to_string(),
                oai_id: oai_id.to_string(),
            }),
        )
    }

    #[test]
    fn group_chat_lists_agents() {
        let node = GraphNode::new(
            "GROUP_CHAT__1",
            NodePayload::GroupChat(GroupChatData {
                var_name: "chat".to_string(),
                max_rounds: "5".to_string(),
                agent_selection: "round_robin".to_string(),
            }),
        );
        let refs = vec!["alice".to_string(), "bob".to_string()];
        assert_eq!(
            GroupChatTemplate.render(&node, &refs).unwrap(),
            "chat = autogen.GroupChat(agents=[alice, bob], messages=[], max_round=5, agent_selection=\"round_robin\")"
        );
    }

    #[test]
    fn user_proxy_interpolates_message_verbatim() {
        let node = GraphNode::new(
            "USER_PROXY__1",
            NodePayload::UserProxy(UserProxyData {
                var_name: "admin".to_string(),
                system_message: "A human admin.".to_string(),
            }),
        );
        assert_eq!(
            UserProxyTemplate.render(&node, &[]).unwrap(),
            "admin = UserProxyAgent(name=\"admin\", human_input_mode=\"ALWAYS\", max_consecutive_auto_reply=1, system_message=\"A human admin.\")"
        );
    }

    #[test]
    fn assistant_registers_functions_only_when_connected() {
        let node = assistant("coder", "asst_1");
        let bare = AssistantTemplate.render(&node, &[]).unwrap();
        assert!(!bare.contains("register_function"));

        let refs = vec!["fetch".to_string(), "parse".to_string()];
        let with_funcs = AssistantTemplate.render(&node, &refs).unwrap();
        let lines: Vec<_> = with_funcs.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "coder.register_function(function_map={\"fetch\": fetch, \"parse\": parse})"
        );
    }

    #[test]
    fn template_rejects_foreign_payload() {
        let node = GraphNode::new(
            "CUSTOM_FUNCTION__1",
            NodePayload::CustomFunction(FunctionData::default()),
        );
        let err = GroupChatTemplate.render(&node, &[]).unwrap_err();
        assert!(matches!(err, CompileError::PayloadMismatch { .. }));
    }

    #[test]
    fn catalog_reports_missing_template() {
        let mut catalog = TemplateCatalog::default();
        assert!(catalog.remove(NodeKind::UserProxy).is_some());
        let node = GraphNode::new(
            "USER_PROXY__1",
            NodePayload::UserProxy(UserProxyData::default()),
        );
        assert_eq!(
            catalog.render(&node, &[]),
            Err(CompileError::UnhandledKind {
                node_id: "USER_PROXY__1".to_string(),
                kind: NodeKind::UserProxy,
            })
        );
    }
}
