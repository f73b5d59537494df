//! Body file output.
//!
//! Each body goes to `<name>.part` first and is renamed into place once fully
//! written, so an interrupted batch never leaves a truncated file under a
//! final name. The output directory must already exist.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::SaveError;

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `x.json` → `x.json.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Writes `data` to `final_path`, replacing any existing file.
pub fn write_body(final_path: &Path, data: &[u8]) -> Result<(), SaveError> {
    let tmp = temp_path(final_path);
    let written = File::create(&tmp).and_then(|mut f| {
        f.write_all(data)?;
        f.flush()
    });
    if let Err(source) = written {
        let _ = std::fs::remove_file(&tmp);
        return Err(SaveError::Write {
            path: final_path.to_path_buf(),
            source,
        });
    }

    std::fs::rename(&tmp, final_path).map_err(|source| {
        let _ = std::fs::remove_file(&tmp);
        SaveError::Finalize {
            temp_path: tmp.clone(),
            path: final_path.to_path_buf(),
            source,
        }
    })
}
