use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use doc_versions::cli::{self, CommonArgs};
use doc_versions::ui;

#[derive(Parser)]
#[command(
    name = "doc-versions",
    version,
    about = "Maintenance tasks for versioned documentation releases"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, global = true, help = "Documentation root (overrides config)")]
    docs_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate the version list embedded in the version switcher script
    Index {
        #[arg(long, help = "Print the generated block instead of writing it")]
        dry_run: bool,
    },
    /// Point the "latest" (and, for stable releases, "stable") aliases at a version
    Link {
        #[arg(help = "Version directory to link, or \"master\"")]
        version: String,

        #[arg(long, help = "Preview what would happen without making changes")]
        dry_run: bool,
    },
    /// Remove trailing whitespace from project files
    Whitespace {
        #[arg(long, help = "Only report files with trailing whitespace")]
        check: bool,

        #[arg(help = "Files or directories to check instead of the configured paths")]
        paths: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let common = CommonArgs {
        config_path: args.config,
        docs_dir: args.docs_dir,
    };

    let outcome = cli::resolve_config(&common).and_then(|config| match args.command {
        Command::Index { dry_run } => cli::run_index(&config, dry_run).map(|_| ()),
        Command::Link { version, dry_run } => {
            cli::run_link(&config, &version, dry_run).map(|_| ())
        }
        Command::Whitespace { check, paths } => {
            cli::run_whitespace(&config, &PathBuf::from("."), &paths, check).map(|_| ())
        }
    });

    if let Err(e) = outcome {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
