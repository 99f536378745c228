use boxflow::prelude::*;
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// A dependency-graph inspection tool for box-based evaluation pipelines
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the pipeline JSON file
    pipeline_path: Option<String>,
    /// Optional path to a box-type catalog JSON file (builtin types if omitted)
    catalog_path: Option<String>,

    /// Write the pipeline back out in the API document format
    #[arg(short, long)]
    export: Option<String>,

    /// Write the dependency graph in Graphviz dot format
    #[arg(short, long)]
    dot: Option<String>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else {
        run_non_interactive(cli);
    }
}

fn run_inspection(
    pipeline_path: String,
    catalog_path: Option<String>,
    export_path: Option<String>,
    dot_path: Option<String>,
) {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let catalog = match catalog_path {
        Some(path) => {
            let json = fs::read_to_string(&path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read catalog file '{}': {}", path, e))
            });
            BoxTypeCatalog::from_json(&json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to parse catalog '{}': {}", path, e))
            })
        }
        None => {
            println!("No catalog file provided. Using builtin box types.");
            BoxTypeCatalog::with_defaults()
        }
    };
    let stored = StoredPipeline::from_file(&pipeline_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load pipeline from '{}': {}",
            pipeline_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Conversion and Graph Build ---
    let build_start = Instant::now();
    let editor = stored.into_editor();
    let definition = editor.clone().into_pipeline().unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to convert pipeline data: {}", e))
    });
    let graph = PipelineGraph::from_definition(&definition);
    let build_duration = build_start.elapsed();

    println!(
        "\nGraph built: {} boxes, {} dependency edges in {:?}",
        graph.nodes.len(),
        graph.dependencies.len(),
        build_duration
    );
    for bx in &graph.nodes {
        println!("  - Box '{}' (type {})", bx.name, bx.box_type);
    }
    for dep in &graph.dependencies {
        println!("  - Edge {}", dep);
    }

    // --- 3. Diagnostics ---
    let issues = check_boxes(&catalog, &graph.nodes);
    if issues.is_empty() {
        println!("\nNo issues found.");
    } else {
        println!("\nFound {} issue(s):", issues.len());
        for issue in &issues {
            println!("  - {}", issue);
        }
    }

    // --- 4. Exports ---
    if let Some(path) = export_path {
        let stored = StoredPipeline::from_editor(&catalog, &editor);
        stored
            .save(&path)
            .unwrap_or_else(|e| exit_with_error(&format!("Export failed: {}", e)));
        println!("Exported API document to '{}'", path);
    }
    if let Some(path) = dot_path {
        fs::write(&path, graph.to_dot())
            .unwrap_or_else(|e| exit_with_error(&format!("Dot export failed: {}", e)));
        println!("Exported dot graph to '{}'", path);
    }

    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("File Loading:  {:?}", load_duration);
    println!("Graph Build:   {:?}", build_duration);
    println!("---------------------------");
    println!("Total:         {:?}", total_duration);
    println!();
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let pipeline_path = cli.pipeline_path.unwrap_or_else(|| {
        exit_with_error("Pipeline path is required in non-interactive mode.");
    });
    run_inspection(pipeline_path, cli.catalog_path, cli.export, cli.dot);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- Boxflow Interactive Mode ---");

    let pipeline_path = prompt_for_input("Enter pipeline path", Some("data/pipeline.json"));
    let catalog_path_str = prompt_for_input("Enter catalog path (optional)", None);
    let export_path_str = prompt_for_input("Enter export path (optional)", None);

    let catalog_path = if catalog_path_str.is_empty() {
        None
    } else {
        Some(catalog_path_str)
    };
    let export_path = if export_path_str.is_empty() {
        None
    } else {
        Some(export_path_str)
    };

    run_inspection(pipeline_path, catalog_path, export_path, None);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
