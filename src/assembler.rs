use crate::compiler::Fragment;
use itertools::Itertools;

/// Imports and setup every generated program starts with.
pub const PREAMBLE: &str = r#"import os
import autogen
from autogen.agentchat.contrib.gpt_assistant_agent import GPTAssistantAgent
from autogen import UserProxyAgent
from autogen import config_list_from_json

from dotenv import load_dotenv

load_dotenv()
config_list = config_list_from_json("OAI_CONFIG_LIST")
"#;

/// Separates the fixed preamble from the generated body.
pub const DIVIDER: &str = "# ----------------- #";

/// Joins fragments with newlines and wraps them in the preamble envelope.
pub fn assemble(fragments: &[Fragment]) -> String {
    let body = fragments.iter().map(|f| f.code.as_str()).join("\n");
    format!("{}\n{}\n\n{}\n", PREAMBLE, DIVIDER, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;

    #[test]
    fn empty_body_keeps_the_envelope() {
        let out = assemble(&[]);
        assert!(out.starts_with("import os\nimport autogen\n"));
        assert!(out.ends_with("config_list_from_json(\"OAI_CONFIG_LIST\")\n\n# ----------------- #\n\n\n"));
    }

    #[test]
    fn fragments_are_joined_in_order() {
        let fragments = vec![
            Fragment {
                node_id: "a".into(),
                kind: NodeKind::UserProxy,
                code: "first".into(),
            },
            Fragment {
                node_id: "b".into(),
                kind: NodeKind::UserProxy,
                code: "second".into(),
            },
        ];
        assert!(assemble(&fragments).ends_with("# ----------------- #\n\nfirst\nsecond\n"));
    }
}
