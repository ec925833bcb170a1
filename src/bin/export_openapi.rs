use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use project_api_docs::{DescriptorBuilder, DocsConfig, Result, to_json, to_yaml};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

/// Write the Project API OpenAPI document to a file or stdout.
#[derive(Parser, Debug)]
#[command(name = "export_openapi", version, about)]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// JSON file overriding title, version, contact, license or servers
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Destination file; stdout when omitted
    output: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let builder = match &args.config {
        Some(path) => {
            tracing::info!(config = %path.display(), "loading documentation config");
            DescriptorBuilder::from_config(&DocsConfig::from_file(path)?)
        }
        None => DescriptorBuilder::new(),
    };
    let doc = builder.build()?;

    let rendered = match args.format {
        Format::Json => to_json(&doc)?,
        Format::Yaml => to_yaml(&doc)?,
    };

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, rendered)?;
            tracing::info!(output = %path.display(), "wrote OpenAPI document");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "export failed");
            ExitCode::FAILURE
        }
    }
}
