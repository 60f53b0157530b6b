use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use cnbfx::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Read the daily fixing from a local file instead of the CNB website
    #[arg(short, long, global = true)]
    file: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for cnbfx::AppCommand {
    fn from(cmd: Commands) -> cnbfx::AppCommand {
        match cmd {
            Commands::Rates { json } => cnbfx::AppCommand::Rates { json },
            Commands::Convert { amount, currency } => {
                cnbfx::AppCommand::Convert { amount, currency }
            }
            Commands::Currencies => cnbfx::AppCommand::Currencies,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display today's exchange rates
    Rates {
        /// Print the parsed fixing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert an amount in CZK to another currency
    Convert {
        /// Amount in CZK
        #[arg(allow_hyphen_values = true)]
        amount: Option<String>,
        /// Target currency code, e.g. USD
        currency: Option<String>,
    },
    /// List the currencies available for conversion
    Currencies,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => cnbfx::cli::setup::setup(),
        Some(cmd) => {
            cnbfx::run_command(cmd.into(), cli.config_path.as_deref(), cli.file.as_deref()).await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
