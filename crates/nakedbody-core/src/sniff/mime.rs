//! Content-Type substring table.

use super::FileExtension;

/// MIME substrings and their extensions. Checked in order against the
/// lowercased Content-Type line; earlier entries win on overlap.
/// "/xml" and "json" also match vendor types such as `application/atom+xml`
/// or `application/vnd.api+json`.
pub(super) const MIME_EXTENSIONS: &[(&str, FileExtension)] = &[
    ("text/plain", FileExtension(".txt")),
    ("text/html", FileExtension(".html")),
    ("text/css", FileExtension(".css")),
    ("javascript", FileExtension(".js")),
    ("woff2", FileExtension(".woff2")),
    ("font/ttf", FileExtension(".ttf")),
    ("image/gif", FileExtension(".gif")),
    ("image/png", FileExtension(".png")),
    ("image/jpeg", FileExtension(".jpg")),
    ("image/x-icon", FileExtension(".ico")),
    ("image/svg", FileExtension(".svg")),
    ("application/zip", FileExtension(".zip")),
    ("font-woff", FileExtension(".woff")),
    ("application/pdf", FileExtension(".pdf")),
    ("image/webp", FileExtension(".webp")),
    ("application/x-pem-file", FileExtension(".pem")),
    ("video/mp4", FileExtension(".mp4")),
    ("video/mpeg", FileExtension(".mpg")),
    ("video/webm", FileExtension(".webm")),
    ("video/x-msvideo", FileExtension(".avi")),
    ("image/bmp", FileExtension(".bmp")),
    ("application/x-bzip", FileExtension(".bz")),
    ("application/x-bzip2", FileExtension(".bz2")),
    ("text/csv", FileExtension(".csv")),
    ("application/epub+zip", FileExtension(".epub")),
    ("application/gzip", FileExtension(".gz")),
    ("audio/mpeg", FileExtension(".mp3")),
    ("/xml", FileExtension(".xml")),
    ("json", FileExtension(".json")),
];

/// Extension for the first `Content-Type` line, if its value matches the table.
///
/// Only the first line starting with `content-type` (after trimming, any case)
/// is consulted.
pub(super) fn extension_from_headers<S: AsRef<str>>(header_lines: &[S]) -> Option<FileExtension> {
    let line = header_lines
        .iter()
        .map(|l| l.as_ref().trim().to_ascii_lowercase())
        .find(|l| l.starts_with("content-type"))?;
    MIME_EXTENSIONS
        .iter()
        .find(|(needle, _)| line.contains(needle))
        .map(|(_, ext)| *ext)
}
