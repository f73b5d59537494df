//! CLI for nakedbody: the host side that loads captured traffic and drives the saver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nakedbody_core::config;
use std::path::PathBuf;

use commands::{run_list, run_save, run_sniff, SaveArgs};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "nakedbody")]
#[command(about = "Save the naked bodies of captured HTTP requests and responses", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Save request and/or response bodies from a HAR capture, one file per body.
    Save {
        /// Path to the HAR file.
        har: PathBuf,

        /// Existing directory to write into (default: config `output_dir`, then the current directory).
        #[arg(long, short = 'd', value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Do not save request bodies.
        #[arg(long)]
        no_requests: bool,

        /// Do not save response bodies.
        #[arg(long)]
        no_responses: bool,
    },

    /// List the exchanges of a HAR capture with body sizes and guessed extensions.
    List {
        /// Path to the HAR file.
        har: PathBuf,
    },

    /// Guess the extension of a raw HTTP message stored in a file.
    Sniff {
        /// Path to the raw message (start line, headers, blank line, body).
        path: PathBuf,

        /// Treat the message as a request (form-decode url-encoded bodies).
        #[arg(long)]
        request: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Save {
                har,
                dir,
                no_requests,
                no_responses,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let args = SaveArgs {
                    har,
                    dir,
                    no_requests,
                    no_responses,
                };
                run_save(&cfg, args)?;
            }
            CliCommand::List { har } => run_list(&har)?,
            CliCommand::Sniff { path, request } => run_sniff(&path, request)?,
        }

        Ok(())
    }
}
