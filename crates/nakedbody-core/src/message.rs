//! Raw HTTP message model: header/body boundary and header lines.

use std::fmt;

/// Which side of an exchange a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Request,
    Response,
}

impl Direction {
    /// Tag used in output filenames.
    pub fn tag(self) -> &'static str {
        match self {
            Direction::Request => "req",
            Direction::Response => "resp",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// One captured HTTP request or response.
///
/// `body_offset` is the index of the first body byte; it equals `raw.len()`
/// when the message has no body. `header_lines` holds the start line followed
/// by each header line, without line terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpMessage {
    raw: Vec<u8>,
    body_offset: usize,
    header_lines: Vec<String>,
}

impl HttpMessage {
    /// Build from parts already computed by the capture source.
    /// An offset past the end is clamped to the message length.
    pub fn new(raw: Vec<u8>, body_offset: usize, header_lines: Vec<String>) -> Self {
        let body_offset = body_offset.min(raw.len());
        Self {
            raw,
            body_offset,
            header_lines,
        }
    }

    /// Parse a raw message, locating the blank line that ends the header block.
    ///
    /// The header block ends at the first blank line, terminated by either
    /// `\r\n\r\n` or bare `\n\n`. Without a blank line the whole message is
    /// treated as headers and has no body.
    pub fn parse(raw: Vec<u8>) -> Self {
        let (header_end, body_offset) = match find_boundary(&raw) {
            Some(b) => b,
            None => (raw.len(), raw.len()),
        };
        let header_lines = split_header_lines(&raw[..header_end]);
        Self {
            raw,
            body_offset,
            header_lines,
        }
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn body_offset(&self) -> usize {
        self.body_offset
    }

    pub fn header_lines(&self) -> &[String] {
        &self.header_lines
    }

    /// True if there is at least one byte after the header block.
    pub fn has_body(&self) -> bool {
        self.body_offset < self.raw.len()
    }

    /// Value of the first `Content-Type` header, trimmed.
    pub fn content_type(&self) -> Option<&str> {
        self.header_lines.iter().find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.trim().eq_ignore_ascii_case("content-type") {
                Some(value.trim())
            } else {
                None
            }
        })
    }

    /// True if the declared content type is url-encoded form data.
    pub fn is_form_urlencoded(&self) -> bool {
        self.content_type()
            .and_then(|ct| ct.split(';').next())
            .map(|mime| mime.trim().eq_ignore_ascii_case(FORM_URLENCODED))
            .unwrap_or(false)
    }
}

/// Returns `(end of header text, first body byte)` for the earliest blank line,
/// whether it is terminated by CRLF or bare LF.
fn find_boundary(raw: &[u8]) -> Option<(usize, usize)> {
    let crlf = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|i| (i, i + 4));
    let lf = raw
        .windows(2)
        .position(|w| w == b"\n\n")
        .map(|i| (i, i + 2));
    match (crlf, lf) {
        (Some(c), Some(l)) => Some(if l.0 < c.0 { l } else { c }),
        (c, l) => c.or(l),
    }
}

fn split_header_lines(block: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(block)
        .split('\n')
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
