// madslang - terminal client for the MadSlangDict slang dictionary
// Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use madslang::cli::{run_interactive, run_lookup};
use madslang::config::{load_config, Config, ConfigError};
use madslang::logging::init_logging;

#[derive(Debug, Parser)]
#[command(name = "madslang", version, about = "Look up slang on a MadSlangDict server")]
struct Cli {
    /// Dictionary server host (overrides config and MADSLANG_HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Dictionary server port (overrides config and MADSLANG_PORT)
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Config file (default: ~/.madslang/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log file (default: ~/.madslang/madslang.log)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up one term, print the result and exit (status 1 if not found or failed)
    Lookup {
        /// The slang term to look up
        term: String,
    },
}

impl Cli {
    fn apply_to(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(host) = &self.host {
            config.client.host = host.clone();
        }
        if let Some(port) = self.port {
            config.client.port = port;
        }
        if let Some(timeout) = self.timeout {
            config.client.request_timeout_secs = Some(timeout);
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
        config.validate()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_to(&mut config)?;

    // Logging is best effort; a read-only home must not stop lookups.
    if let Err(e) = init_logging(config.log_file.as_deref()) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    match &cli.command {
        Some(Command::Lookup { term }) => {
            if !run_lookup(&config, term).await? {
                std::process::exit(1);
            }
        }
        None => run_interactive(&config).await?,
    }

    Ok(())
}
