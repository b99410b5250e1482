use clap::Parser;
use plotbox::{PipelineBuilder, PipelineError};
use plotbox_types::Size;
use std::path::PathBuf;

/// Lays out a plotbox JSON document and prints the placed boxes.
#[derive(Parser, Debug)]
#[command(name = "plotbox", version, about)]
struct Cli {
    /// Path to the JSON document
    document: PathBuf,

    /// Viewport width, overriding the document
    #[arg(long, requires = "height", conflicts_with = "viewport")]
    width: Option<f32>,

    /// Viewport height, overriding the document
    #[arg(long, requires = "width", conflicts_with = "viewport")]
    height: Option<f32>,

    /// Viewport shorthand such as "800 600"
    #[arg(long)]
    viewport: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let cli = Cli::parse();

    let mut builder = PipelineBuilder::new().with_document_file(&cli.document)?;
    if let (Some(width), Some(height)) = (cli.width, cli.height) {
        builder = builder.with_viewport(Size::new(width, height));
    }
    if let Some(viewport) = &cli.viewport {
        builder = builder.with_viewport_str(viewport)?;
    }
    let pipeline = builder.build()?;

    match &cli.output {
        Some(path) => {
            let report = pipeline.run_to_file(path, !cli.compact)?;
            eprintln!("Wrote {} boxes to {}", report.boxes.len(), path.display());
        }
        None => println!("{}", pipeline.run()?.to_json(!cli.compact)?),
    }
    Ok(())
}
