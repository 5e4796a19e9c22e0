//! Command line interface definition

use clap::Parser;
use std::path::PathBuf;

/// auto-patch - Install pending zypper patches and mail a report
#[derive(Parser, Debug)]
#[command(name = "auto-patch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Install pending zypper patches unattended and mail a report")]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file, may be repeated; later files override earlier ones
    #[arg(long, value_name = "PATH")]
    pub config: Vec<PathBuf>,

    /// Do not send a mail report, whatever the configuration says
    #[arg(long)]
    pub no_report: bool,

    /// Print the run result as JSON on stdout
    #[arg(long)]
    pub json: bool,
}
