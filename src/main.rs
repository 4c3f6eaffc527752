use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use pokelist::{CliConfig, NameList, generate};

/// Pokelist CLI: build the name-to-slug list used for sprite lookups
#[derive(Parser, Debug)]
#[command(name = "pokelist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the list CSV from the name file (default)
    #[command(name = "generate")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Look up an entry by dex number, name or slug
    #[command(name = "lookup")]
    Lookup {
        /// Dex number, display name or slug
        query: String,

        /// Path to the generated list CSV
        #[arg(short, long)]
        list: Option<PathBuf>,
    },
}

#[derive(Parser, Debug, Default)]
struct GenerateArgs {
    /// Newline-delimited name file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Destination CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = CliConfig::load_or_default(cli.config.as_ref())
        .context(format!("Failed to load config: {:?}", cli.config))?;

    match cli.command {
        Some(Command::Generate { args }) => handle_generate_command(args, config),
        Some(Command::Lookup { query, list }) => handle_lookup_command(&query, list, config),
        None => handle_generate_command(GenerateArgs::default(), config),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // stdout is reserved for lookup results
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn handle_generate_command(args: GenerateArgs, config: CliConfig) -> Result<()> {
    let paths = config.paths.with_overrides(args.input, args.output);

    let summary = generate(&paths).context(format!(
        "Failed to generate {:?} from {:?}",
        paths.output, paths.input
    ))?;

    info!(
        "Done: {} rows written to {:?}",
        summary.rows, summary.output
    );
    Ok(())
}

fn handle_lookup_command(query: &str, list: Option<PathBuf>, config: CliConfig) -> Result<()> {
    let path = config.paths.with_overrides(None, list).output;
    let names = NameList::read(&path).context(format!("Failed to load list: {:?}", path))?;

    let entry = names
        .lookup(query)
        .context(format!("Lookup failed in {:?}", path))?;

    println!("{}\t{}\t{}", entry.dex, entry.name, entry.slug);
    Ok(())
}
