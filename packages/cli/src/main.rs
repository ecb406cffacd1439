mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{export, init, ExportArgs, InitArgs};
use tracing_subscriber::EnvFilter;

/// dtogen - TypeScript interfaces from DTO classes
#[derive(Parser, Debug)]
#[command(name = "dtogen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(long, global = true)]
    base_path: Option<String>,

    /// Log every discovery and inference decision
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export DTO classes to TypeScript interface definitions
    #[command(name = "export:typescript", alias = "export:ts")]
    Export(ExportArgs),

    /// Write a default config and an example class manifest
    Init(InitArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = match cli.base_path {
        Some(path) => path,
        None => std::env::current_dir()?.display().to_string(),
    };

    match cli.command {
        Command::Export(args) => export(args, &cwd),
        Command::Init(args) => init(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
