use clap::{Parser, Subcommand};
use std::fs;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xforce::prelude::*;
use xforce::registry;

/// Turns agent-pipeline graphs exported from the editor into autogen Python code
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a flow JSON file into Python source
    Build {
        /// Path to the flow JSON file
        flow_path: String,
        /// Write the program here instead of printing it
        #[arg(short, long)]
        output: Option<String>,
        /// Fail on connection issues and on nodes that cannot be rendered
        #[arg(long)]
        strict: bool,
    },
    /// Report edges that break the editor's connection rules
    Check {
        /// Path to the flow JSON file
        flow_path: String,
    },
    /// List the registered node kinds and their connectivity
    Kinds,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("xforce=info,warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Build {
            flow_path,
            output,
            strict,
        } => run_build(&flow_path, output.as_deref(), strict),
        Command::Check { flow_path } => run_check(&flow_path),
        Command::Kinds => print_kinds(),
    }
}

fn load_graph(flow_path: &str) -> GraphDefinition {
    let json = fs::read_to_string(flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read flow file '{}': {}", flow_path, e))
    });
    GraphDefinition::from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load graph: {}", e)))
}

fn run_build(flow_path: &str, output: Option<&str>, strict: bool) {
    let start = Instant::now();
    let graph = load_graph(flow_path);
    info!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "Loaded graph from '{}'",
        flow_path
    );

    let issues = check_connections(&graph);
    for issue in &issues {
        tracing::warn!("{}", issue);
    }
    if strict && !issues.is_empty() {
        exit_with_error(&format!(
            "{} connection issue(s) found in strict mode",
            issues.len()
        ));
    }

    let compiler = Compiler::builder(graph).strict(strict).build();
    let compiled = compiler
        .compile()
        .unwrap_or_else(|e| exit_with_error(&format!("Compilation failed: {}", e)));
    let source = compiled.to_source();
    info!(
        fragments = compiled.fragments.len(),
        "Compiled in {:?}",
        start.elapsed()
    );

    match output {
        Some(path) => {
            fs::write(path, &source).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path, e))
            });
            info!("Wrote program to '{}'", path);
        }
        None => print!("{}", source),
    }
}

fn run_check(flow_path: &str) {
    let graph = load_graph(flow_path);
    let issues = check_connections(&graph);
    if issues.is_empty() {
        println!("No connection issues in {} edge(s).", graph.edges.len());
        return;
    }
    for issue in &issues {
        println!("  -> {}", issue);
    }
    exit_with_error(&format!("{} connection issue(s) found", issues.len()));
}

fn print_kinds() {
    let describe = |kinds: Option<&[NodeKind]>| match kinds {
        Some(kinds) => kinds
            .iter()
            .map(|k| k.tag())
            .collect::<Vec<_>>()
            .join(", "),
        None => "-".to_string(),
    };
    for spec in registry::specs() {
        println!("{}", spec.kind);
        println!("  inputs:   {}", describe(spec.connectivity.input));
        println!("  outputs:  {}", describe(spec.connectivity.output));
        println!("  var name: {}", spec.default_var_name.unwrap_or("-"));
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
