use boxflow::prelude::*;
use clap::Parser;
use rand::Rng;
use std::fs;

/// A CLI tool to generate randomized pipeline documents for testing
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_pipeline.json")]
    output: String,

    /// The minimum number of compile chains to generate
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of compile chains to generate
    #[arg(long, default_value_t = 6)]
    max: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    let chains = rng.random_range(cli.min..=cli.max);
    println!("Generating a pipeline with {} compile chain(s)...", chains);

    let catalog = BoxTypeCatalog::with_defaults();
    let mut editor = EditorPipeline::default();

    for i in 0..chains {
        let src = format!("src-{}", i);
        let bin = format!("bin-{}", i);

        editor.boxes.push(
            PipelineBox::new(format!("sources-{}", i), "files-in").with_output(
                "input",
                &src,
                DataType::FileArray,
            ),
        );
        editor.boxes.push(
            PipelineBox::new(format!("compile-{}", i), "gcc")
                .with_input("source-files", &src, DataType::FileArray)
                .with_output("binary-file", &bin, DataType::File),
        );
        editor.boxes.push(
            PipelineBox::new(format!("output-{}", i), "file-out").with_input(
                "output",
                &bin,
                DataType::File,
            ),
        );

        let file_count = rng.random_range(1..=4);
        let files = (0..file_count).map(|n| format!("unit{}.c", n)).collect();
        editor.set_variable(&src, VariableValue::List(files));
        editor.set_variable(&bin, VariableValue::Single("a.out".to_string()));
        println!("-> Generated chain '{}' with {} source file(s).", src, file_count);
    }

    let stored = StoredPipeline::from_editor(&catalog, &editor);
    let json_output = stored.to_json()?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved pipeline to '{}'",
        cli.output
    );

    Ok(())
}
