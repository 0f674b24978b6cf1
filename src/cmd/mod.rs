mod generate;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kanban-seed")]
#[command(version)]
#[command(about = "Generate a SQL seed script for the kanban schema", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Running without a subcommand generates the script
    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.generate.verbose
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of users (one board each) [default: 10]
    #[arg(short = 'n', long)]
    pub count: Option<u64>,

    /// Output SQL file, `-` for stdout [default: data.sql]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Schema prefix for procedures and tables [default: _App]
    #[arg(long)]
    pub schema: Option<String>,

    /// Column id used by card rows: legacy, column
    #[arg(long)]
    pub card_targeting: Option<String>,

    /// Generate and print statistics without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Print statistics as JSON (with --dry-run)
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "kanban-seed", &mut io::stdout());
            Ok(())
        }
        None => generate::run(cli.generate).await,
    }
}
