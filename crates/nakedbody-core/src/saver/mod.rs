//! Batch saving of exchange bodies.
//!
//! For each exchange and each selected direction: extract the body, sniff its
//! extension, name the file from the run prefix and sequence number, and write
//! it. A failed write is logged and recorded; the batch always runs to the end.

mod plan;
mod report;

pub use plan::{run_prefix_at, OutputFilenamePlan, RUN_PREFIX_FORMAT};
pub use report::SaveReport;

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::exchange::Exchange;
use crate::extract;
use crate::message::Direction;
use crate::sniff::guess_extension;
use crate::storage;

/// Per-invocation save settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOptions {
    /// Existing, writable directory. It is never created here.
    pub output_dir: PathBuf,
    pub save_requests: bool,
    pub save_responses: bool,
}

impl SaveOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            save_requests: true,
            save_responses: true,
        }
    }

    fn wants(&self, direction: Direction) -> bool {
        match direction {
            Direction::Request => self.save_requests,
            Direction::Response => self.save_responses,
        }
    }
}

/// Owns the run prefix and the sequence counter shared by every batch it saves.
///
/// The counter goes up by one per exchange processed, before anything is
/// extracted, so an exchange that yields no file still consumes a number and
/// the request and response of one exchange share it. Numbers never repeat
/// for the lifetime of the saver, also across concurrent `save_bodies` calls.
#[derive(Debug)]
pub struct BatchSaver {
    run_prefix: String,
    counter: AtomicU64,
}

impl Default for BatchSaver {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchSaver {
    /// Saver whose run prefix is the current local time.
    pub fn new() -> Self {
        Self::with_prefix(run_prefix_at(chrono::Local::now()))
    }

    pub fn with_prefix(run_prefix: impl Into<String>) -> Self {
        Self {
            run_prefix: run_prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

    pub fn run_prefix(&self) -> &str {
        &self.run_prefix
    }

    /// Last sequence number handed out (0 before the first exchange).
    pub fn last_sequence(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    fn next_sequence(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Saves the selected bodies of `exchanges` into `options.output_dir`.
    pub fn save_bodies(&self, exchanges: &[Exchange], options: &SaveOptions) -> SaveReport {
        let mut report = SaveReport::default();

        for exchange in exchanges {
            let sequence = self.next_sequence();
            report.exchanges += 1;

            for direction in [Direction::Request, Direction::Response] {
                if !options.wants(direction) {
                    continue;
                }
                let Some(message) = exchange.message(direction) else {
                    continue;
                };
                let Some(body) = extract::extract_for(message, direction) else {
                    tracing::debug!(sequence, %direction, "no body, skipping");
                    continue;
                };

                let plan = OutputFilenamePlan {
                    directory: &options.output_dir,
                    run_prefix: &self.run_prefix,
                    sequence,
                    direction,
                    extension: guess_extension(
                        message.header_lines(),
                        message.raw(),
                        message.body_offset(),
                    ),
                };
                let path = plan.path();

                match storage::write_body(&path, &body) {
                    Ok(()) => {
                        tracing::debug!(
                            sequence,
                            %direction,
                            bytes = body.len(),
                            "saved {}",
                            path.display()
                        );
                        report.written.push(path);
                    }
                    Err(e) => {
                        tracing::error!(
                            sequence,
                            %direction,
                            cause = %e.io_error(),
                            "{e}"
                        );
                        report.failures.push(e);
                    }
                }
            }
        }

        tracing::info!(
            exchanges = report.exchanges,
            written = report.written.len(),
            failed = report.failures.len(),
            "saved bodies to {}",
            options.output_dir.display()
        );
        report
    }
}
