//! auto-patch - Unattended zypper patch agent
//!
//! Loads configuration, runs one patch cycle through the ops crate, mails
//! the report and exits with zypper's exit code.

mod cli;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::CliError;
use autopatch_config::{Config, LoggingConfig};
use autopatch_errors::Error;
use autopatch_events::FailureContext;
use autopatch_notify::SmtpSender;
use autopatch_zypper::SystemCommandRunner;
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            logging::init_tracing(&LoggingConfig::default());
            report_error(&e);
            process::exit(e.exit_code());
        }
    };
    logging::init_tracing(&config.logging);

    let exit_code = match run(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            report_error(&e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

/// Load configuration with proper precedence: files, environment, flags
fn load_config(cli: &Cli) -> Result<Config, CliError> {
    let paths = if cli.config.is_empty() {
        Config::default_paths()
    } else {
        cli.config.clone()
    };

    let mut config = Config::load(&paths).map_err(CliError::Config)?;
    config.merge_env().map_err(CliError::Config)?;
    if cli.no_report {
        config.mailreport.report = false;
    }
    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

/// Main application logic
fn run(cli: &Cli, config: &Config) -> Result<i32, CliError> {
    info!("Starting auto-patch v{}", env!("CARGO_PKG_VERSION"));

    let summary = autopatch_ops::run(config, SystemCommandRunner, &SmtpSender)?;

    if cli.json {
        println!("{}", summary.to_json()?);
    }

    info!(
        run_id = %summary.run_id,
        exit_code = summary.result.exit_code,
        attempts = summary.result.attempts,
        report_sent = summary.report_sent,
        "auto-patch finished: {}",
        summary.result.terminal_outcome
    );
    Ok(summary.result.exit_code)
}

fn report_error(e: &CliError) {
    let failure = FailureContext::from_error(e.inner());
    match e {
        // Zypper and delivery failures are logged at critical by the run.
        CliError::Ops(Error::Zypper(_) | Error::Notify(_)) => error!(
            code = ?failure.code,
            exit_code = e.exit_code(),
            "auto-patch aborted: {}",
            failure.message
        ),
        _ => error!(
            critical = true,
            code = ?failure.code,
            retryable = failure.retryable,
            "Internal error: {e}"
        ),
    }
}
