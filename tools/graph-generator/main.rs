use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xforce::graph::{
    AssistantData, FunctionData, GraphDefinition, GraphEdge, GraphNode, GroupChatData, NodeKind,
    NodePayload, UserProxyData,
};
use xforce::naming::compose_node_id;
use xforce::ui::{UiGraph, UiPosition};

/// A CLI tool to generate random, well-formed agent-pipeline graphs in the editor's format
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// The number of assistant agents to generate
    #[arg(long, default_value_t = 3)]
    assistants: usize,

    /// The number of user proxies to generate
    #[arg(long, default_value_t = 1)]
    proxies: usize,

    /// The maximum number of functions defined per function block
    #[arg(long, default_value_t = 3)]
    max_functions: usize,
}

const VERBS: [&str; 8] = [
    "search", "fetch", "summarize", "translate", "rank", "store", "plot", "notify",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let mut rng = rand::rng();

    let graph = generate_graph(&mut rng, &cli);
    info!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "Generated graph"
    );

    let mut ui = UiGraph::from(&graph);
    for (i, node) in ui.nodes.iter_mut().enumerate() {
        node.position = Some(UiPosition {
            x: (i % 4) as f64 * 260.0,
            y: (i / 4) as f64 * 180.0,
        });
    }

    let json_output = serde_json::to_string_pretty(&ui)?;
    fs::write(&cli.output, json_output)?;
    info!("Successfully saved generated flow to '{}'", cli.output);

    Ok(())
}

fn suffix(rng: &mut ThreadRng) -> String {
    format!("{:06x}", rng.random_range(0..0xFF_FFFF))
}

/// Builds functions -> assistants -> group chat <- proxies, with some assistants
/// left without functions.
fn generate_graph(rng: &mut ThreadRng, cli: &Cli) -> GraphDefinition {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    let chat_id = compose_node_id(NodeKind::GroupChat, &suffix(rng));

    for a in 0..cli.assistants {
        let assistant_id = compose_node_id(NodeKind::GptAssistantAgent, &suffix(rng));
        nodes.push(GraphNode::new(
            assistant_id.clone(),
            NodePayload::GptAssistantAgent(AssistantData {
                var_name: format!("assistant_{}", a),
                oai_id: format!("asst_{}", suffix(rng)),
            }),
        ));

        if cli.max_functions > 0 && rng.random_bool(0.7) {
            let function_id = compose_node_id(NodeKind::CustomFunction, &suffix(rng));
            let count = rng.random_range(1..=cli.max_functions);
            let func = (0..count)
                .map(|f| {
                    let verb = VERBS[rng.random_range(0..VERBS.len())];
                    format!("def {}_{}_{}(arg):\n    return arg\n", verb, a, f)
                })
                .collect::<Vec<_>>()
                .join("\n");
            nodes.push(GraphNode::new(
                function_id.clone(),
                NodePayload::CustomFunction(FunctionData { func }),
            ));
            edges.push(GraphEdge::new(function_id, assistant_id.clone()));
        }

        edges.push(GraphEdge::new(assistant_id, chat_id.clone()));
    }

    for p in 0..cli.proxies {
        let proxy_id = compose_node_id(NodeKind::UserProxy, &suffix(rng));
        nodes.push(GraphNode::new(
            proxy_id.clone(),
            NodePayload::UserProxy(UserProxyData {
                var_name: format!("user_proxy_{}", p),
                system_message: "A human admin.".to_string(),
            }),
        ));
        edges.push(GraphEdge::new(proxy_id, chat_id.clone()));
    }

    nodes.push(GraphNode::new(
        chat_id,
        NodePayload::GroupChat(GroupChatData {
            max_rounds: rng.random_range(5..=20u32).to_string(),
            ..GroupChatData::default()
        }),
    ));

    GraphDefinition { nodes, edges }
}
