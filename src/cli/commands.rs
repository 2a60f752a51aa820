use crate::config::{resolve_config, GeneratorConfig};
use crate::generator::{check_document, generate_with_options, render_document, write_document, Document};
use crate::registry::load_registry;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Command-line interface for the API document generator
#[derive(Parser)]
#[command(name = "apispec-gen")]
#[command(about = "Generate the API description document from the collection registry", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the registry and settings come from
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs {
    /// Generator config file (default: ./apispec.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Collection registry file (YAML)
    #[arg(short, long)]
    pub registry: Option<PathBuf>,

    /// Emit the historical `secuirty` key instead of `security`
    #[arg(long, default_value_t = false)]
    pub legacy_security_key: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Rebuild the API document and write it to the output file
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (default: config/openapi.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Exit with an error when the output file is out of date
    Check {
        #[command(flatten)]
        source: SourceArgs,

        /// File to compare against (default: config/openapi.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the API document to stdout
    Print {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Effective config: file values overridden by command line flags.
fn effective_config(source: &SourceArgs, output: Option<&PathBuf>) -> anyhow::Result<GeneratorConfig> {
    let working_dir = std::env::current_dir().context("Failed to read working directory")?;
    let mut config = resolve_config(source.config.as_deref(), &working_dir)?;
    if let Some(registry) = &source.registry {
        config.registry = registry.clone();
    }
    if let Some(output) = output {
        config.output = output.clone();
    }
    if source.legacy_security_key {
        config.legacy_security_key = true;
    }
    Ok(config)
}

fn build_document(config: &GeneratorConfig) -> anyhow::Result<Document> {
    let registry = load_registry(&config.registry)?;
    let document = generate_with_options(
        &registry.collections,
        &registry.models,
        &config.document_options(),
    )
    .with_context(|| format!("Failed to generate API document from {}", config.registry.display()))?;
    Ok(document)
}

pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate { source, output } => {
            let config = effective_config(source, output.as_ref())?;
            let document = build_document(&config)?;
            write_document(&document, &config.output)?;
            println!("✅ Wrote {}", config.output.display());
            Ok(())
        }
        Commands::Check { source, output } => {
            let config = effective_config(source, output.as_ref())?;
            let document = build_document(&config)?;
            if !check_document(&document, &config.output)? {
                tracing::warn!(path = %config.output.display(), "API document is stale");
                anyhow::bail!(
                    "{} is out of date, run `apispec-gen generate`",
                    config.output.display()
                );
            }
            println!("✅ {} is up to date", config.output.display());
            Ok(())
        }
        Commands::Print { source } => {
            let config = effective_config(source, None)?;
            let document = build_document(&config)?;
            let text = render_document(&document)?;
            std::io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .context("Failed to write API document to stdout")?;
            Ok(())
        }
    }
}
