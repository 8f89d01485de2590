//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `postboy` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the decomposition as JSON or a summary
//!
//! All request and decomposition logic is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::process;

use postboy::app::{format_summary, format_transport_error};
use postboy::config::{Opt, OutputFormat};
use postboy::initialization::init_logger_with;
use postboy::{Client, Method};

fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = opt.client_config();
    debug!("Client configuration: {config:?}");
    let client = Client::new(config).context("Failed to build HTTP client")?;

    let params = opt.params();
    let outcome = match opt.method {
        Method::Get => client.get(&opt.url, &params),
        Method::Post => client.post(&opt.url, &params),
    };

    match outcome {
        Ok(result) => {
            match opt.output {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&result)
                        .context("Failed to serialize result")?;
                    println!("{json}");
                }
                OutputFormat::Summary => print!("{}", format_summary(&result)),
            }
            Ok(())
        }
        Err(e) => {
            match opt.output {
                OutputFormat::Json => {
                    let json = serde_json::json!({ "error": e, "message": e.to_string() });
                    println!("{json:#}");
                }
                OutputFormat::Summary => eprintln!("{}", format_transport_error(&e)),
            }
            process::exit(1);
        }
    }
}
