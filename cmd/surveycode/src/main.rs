//! Survey code CLI - generate and check receipt survey codes.

use clap::{Parser, Subcommand};

mod commands;

use commands::{ConfigCommand, FieldsCommand, GenerateCommand, InspectCommand, VerifyCommand};

/// Survey code CLI - generate and check receipt survey codes.
///
/// This tool works with the codes printed on receipts for the customer
/// satisfaction survey:
///   - Generate a code from store, order and purchase time
///   - Inspect a code and decode its fields
///   - Verify a code's check digit
///   - Map a code and price onto the survey entry form
///
/// Store profiles are stored in ~/.receipt-survey/surveycode/ and support
/// multiple contexts, similar to kubectl's context management.
#[derive(Parser)]
#[command(name = "surveycode")]
#[command(about = "Receipt survey code tool")]
#[command(version)]
pub struct Cli {
    /// Config file (default is ~/.receipt-survey/surveycode/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Context name to use
    #[arg(short = 'c', long, global = true)]
    pub context: Option<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage store profiles
    Config(ConfigCommand),
    /// Generate a survey code for a receipt
    Generate(GenerateCommand),
    /// Decode the fields of a survey code
    Inspect(InspectCommand),
    /// Check a survey code's check digit
    Verify(VerifyCommand),
    /// Map a survey code and price onto the entry form
    Fields(FieldsCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    match &cli.command {
        Commands::Config(cmd) => cmd.run(&cli),
        Commands::Generate(cmd) => cmd.run(&cli),
        Commands::Inspect(cmd) => cmd.run(&cli),
        Commands::Verify(cmd) => cmd.run(&cli),
        Commands::Fields(cmd) => cmd.run(&cli),
    }
}
