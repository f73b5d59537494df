//! Outcome of one batch save.

use std::path::PathBuf;

use crate::error::SaveError;

/// Files written and files that failed during one `save_bodies` call.
#[derive(Debug, Default)]
pub struct SaveReport {
    /// Paths written, in the order they were produced.
    pub written: Vec<PathBuf>,
    pub failures: Vec<SaveError>,
    /// Exchanges processed (and sequence numbers consumed).
    pub exchanges: usize,
}

impl SaveReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
