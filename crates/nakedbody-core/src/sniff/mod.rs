//! File type sniffing for saved bodies.
//!
//! Layered heuristic, first match wins:
//! 1. binary signature at the body offset (WebAssembly `\0asm`),
//! 2. substring match of the `Content-Type` header against a fixed table,
//! 3. the `.dat` default.

mod magic;
mod mime;

use std::fmt;

/// File extension chosen for a body. Never empty, always starts with `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileExtension(&'static str);

impl FileExtension {
    /// Fallback when neither the body nor the headers identify the type.
    pub const DEFAULT: FileExtension = FileExtension(".dat");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Guesses a file extension for the body of `message` starting at `body_offset`.
///
/// `header_lines` are the message's header lines (start line included or not,
/// it makes no difference). Never fails: unknown or missing types give `.dat`.
///
/// # Examples
///
/// - headers `["Content-Type: application/javascript; charset=utf-8"]` → `.js`
/// - body starting with `00 61 73 6D` → `.wasm`, whatever the headers say
pub fn guess_extension<S: AsRef<str>>(
    header_lines: &[S],
    message: &[u8],
    body_offset: usize,
) -> FileExtension {
    if let Some(ext) = magic::extension_from_magic(message, body_offset) {
        return ext;
    }
    mime::extension_from_headers(header_lines).unwrap_or(FileExtension::DEFAULT)
}
