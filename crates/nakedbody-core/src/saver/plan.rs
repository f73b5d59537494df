//! Output filename composition.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::message::Direction;
use crate::sniff::FileExtension;

/// chrono format for run prefixes, e.g. `2024-03-09_14-05-59-042`.
pub const RUN_PREFIX_FORMAT: &str = "%Y-%m-%d_%H-%M-%S-%3f";

/// Run prefix for a saver created at `at`.
pub fn run_prefix_at(at: DateTime<Local>) -> String {
    at.format(RUN_PREFIX_FORMAT).to_string()
}

/// Everything needed to name one body file.
///
/// Renders as `{directory}/{run_prefix}-{req|resp}-{sequence:06}{extension}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFilenamePlan<'a> {
    pub directory: &'a Path,
    pub run_prefix: &'a str,
    pub sequence: u64,
    pub direction: Direction,
    pub extension: FileExtension,
}

impl OutputFilenamePlan<'_> {
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}-{:06}{}",
            self.run_prefix,
            self.direction.tag(),
            self.sequence,
            self.extension
        )
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn run_prefix_format() {
        let at = Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 59)
            .unwrap()
            + chrono::Duration::milliseconds(42);
        assert_eq!(run_prefix_at(at), "2024-03-09_14-05-59-042");
    }

    #[test]
    fn file_name_is_zero_padded() {
        let ext = crate::sniff::guess_extension(&["Content-Type: application/json"], b"", 0);
        let plan = OutputFilenamePlan {
            directory: Path::new("/out"),
            run_prefix: "2024-03-09_14-05-59-042",
            sequence: 7,
            direction: Direction::Request,
            extension: ext,
        };
        assert_eq!(plan.file_name(), "2024-03-09_14-05-59-042-req-000007.json");
        assert_eq!(
            plan.path(),
            Path::new("/out/2024-03-09_14-05-59-042-req-000007.json")
        );
    }

    #[test]
    fn wide_sequence_is_not_truncated() {
        let plan = OutputFilenamePlan {
            directory: Path::new("."),
            run_prefix: "p",
            sequence: 1_234_567,
            direction: Direction::Response,
            extension: FileExtension::DEFAULT,
        };
        assert_eq!(plan.file_name(), "p-resp-1234567.dat");
    }
}
