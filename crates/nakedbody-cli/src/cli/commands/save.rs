//! `nakedbody save <har>` – write every selected body to its own file.

use anyhow::Result;
use nakedbody_core::config::NakedBodyConfig;
use nakedbody_core::{har, BatchSaver, SaveOptions};
use std::path::PathBuf;

/// Command-line inputs of `save`, before config defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveArgs {
    pub har: PathBuf,
    pub dir: Option<PathBuf>,
    pub no_requests: bool,
    pub no_responses: bool,
}

/// Flags win over config; the directory falls back to config, then to `cwd`.
pub(crate) fn resolve_options(cfg: &NakedBodyConfig, args: &SaveArgs, cwd: PathBuf) -> SaveOptions {
    SaveOptions {
        output_dir: args
            .dir
            .clone()
            .or_else(|| cfg.output_dir.clone())
            .unwrap_or(cwd),
        save_requests: cfg.save_requests && !args.no_requests,
        save_responses: cfg.save_responses && !args.no_responses,
    }
}

pub fn run_save(cfg: &NakedBodyConfig, args: SaveArgs) -> Result<()> {
    let options = resolve_options(cfg, &args, std::env::current_dir()?);
    if !options.save_requests && !options.save_responses {
        println!("Nothing to save: both request and response bodies are disabled.");
        return Ok(());
    }

    let exchanges = har::load_exchanges(&args.har)?;
    let saver = BatchSaver::new();
    let report = saver.save_bodies(&exchanges, &options);

    for path in &report.written {
        println!("{}", path.display());
    }
    for failure in &report.failures {
        eprintln!("  failed: {} ({})", failure, failure.io_error());
    }
    println!(
        "Saved {} bodies from {} exchanges into {} ({} failed)",
        report.written.len(),
        report.exchanges,
        options.output_dir.display(),
        report.failures.len()
    );
    Ok(())
}
