//! bundlegen: build manifest generator for prebuilt multi-variant library packages.

mod commands;
mod manifest;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bundlegen", version, about = "Expand product catalogs into release/debug build graphs")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a bundlegen.toml template
    Init {
        /// Directory to create the manifest in
        dir: PathBuf,
    },
    /// Generate the JSON build graph
    Generate {
        /// Path to bundlegen.toml (default: search upward from cwd)
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Generate and validate the build graph without writing it
    Check {
        /// Path to bundlegen.toml (default: search upward from cwd)
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Show products, their variants, and dependencies
    Tree {
        /// Path to bundlegen.toml (default: search upward from cwd)
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Write an artifact bundle info.json
    Bundle {
        /// Artifact name (e.g., executorch)
        #[arg(long)]
        name: String,
        /// Artifact version (e.g., 1.2.0)
        #[arg(long)]
        version: String,
        /// Platform identifier (e.g., linux-x86_64); repeat for each platform
        #[arg(long = "platform", required = true)]
        platforms: Vec<String>,
        /// Library path for each platform, in --platform order
        #[arg(long = "library-path", required = true)]
        library_paths: Vec<String>,
        /// Headers directory for each platform
        #[arg(long = "header-path")]
        header_paths: Vec<String>,
        /// module.modulemap path for each platform
        #[arg(long = "modulemap-path")]
        modulemap_paths: Vec<String>,
        /// Output path for info.json
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { dir } => commands::init::run(&dir),

        Commands::Generate { manifest, output } => {
            commands::generate::run(&cwd, manifest.as_deref(), output.as_deref())
        }

        Commands::Check { manifest } => commands::check::run(&cwd, manifest.as_deref()),

        Commands::Tree { manifest } => commands::tree::run(&cwd, manifest.as_deref()),

        Commands::Bundle {
            name,
            version,
            platforms,
            library_paths,
            header_paths,
            modulemap_paths,
            output,
        } => {
            let request = bundlegen_bundle::BundleRequest {
                name,
                version,
                platforms,
                library_paths,
                header_paths,
                modulemap_paths,
            };
            commands::bundle::run(&request, &output)
        }
    }
}
