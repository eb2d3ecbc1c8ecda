use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::cli::FormArgs;

/// folio - portfolio contact form
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Validate and deliver portfolio contact messages", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the form and deliver it through the configured backend
    Send {
        #[command(flatten)]
        form: FormArgs,

        /// Log the message instead of delivering it
        #[arg(long)]
        dry_run: bool,
    },
    /// Only run the form validation
    Check {
        #[command(flatten)]
        form: FormArgs,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = folio::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    folio::observability::init_observability(
        "folio",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.json,
    )?;

    let success = match cli.command {
        Commands::Send { form, dry_run } => folio::cli::send(&config, &form, dry_run).await?,
        Commands::Check { form } => folio::cli::check(&form),
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
