//! Rebuild raw HTTP messages from HAR entries.

use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};

use crate::exchange::Exchange;
use crate::message::HttpMessage;

use super::parse::{HarEntry, HarHeader, HarPostData, HarRequest, HarResponse};
use super::CapturedEntry;

const DEFAULT_HTTP_VERSION: &str = "HTTP/1.1";

/// Turns one HAR entry into a captured exchange. `index` is only used in error context.
pub(super) fn entry_to_captured(entry: &HarEntry, index: usize) -> Result<CapturedEntry> {
    let request = entry.request.as_ref().map(build_request);
    let response = entry
        .response
        .as_ref()
        .map(build_response)
        .transpose()
        .with_context(|| format!("HAR entry {index}: response content"))?;
    Ok(CapturedEntry {
        method: entry.request.as_ref().map(|r| r.method.clone()),
        url: entry.request.as_ref().map(|r| r.url.clone()),
        exchange: Exchange::new(request, response),
    })
}

fn build_request(req: &HarRequest) -> HttpMessage {
    let start_line = format!(
        "{} {} {}",
        req.method,
        request_target(&req.url),
        http_version(&req.http_version)
    );
    let body = req.post_data.as_ref().map(post_body).unwrap_or_default();
    assemble(start_line, &req.headers, body)
}

/// `postData.text` as-is, or the form-encoded `params` when there is no text.
fn post_body(post: &HarPostData) -> Vec<u8> {
    match post.text.as_deref() {
        Some(text) if !text.is_empty() => text.as_bytes().to_vec(),
        _ if !post.params.is_empty() => {
            let mut form = url::form_urlencoded::Serializer::new(String::new());
            for p in &post.params {
                form.append_pair(&p.name, p.value.as_deref().unwrap_or_default());
            }
            form.finish().into_bytes()
        }
        _ => Vec::new(),
    }
}

fn build_response(resp: &HarResponse) -> Result<HttpMessage> {
    let start_line = format!(
        "{} {} {}",
        http_version(&resp.http_version),
        resp.status,
        resp.status_text
    );
    let body = match &resp.content {
        Some(content) => match content.text.as_deref() {
            Some(text) if is_base64(content.encoding.as_deref()) => general_purpose::STANDARD
                .decode(text.trim())
                .context("invalid base64 response body")?,
            Some(text) => text.as_bytes().to_vec(),
            None => Vec::new(),
        },
        None => Vec::new(),
    };
    Ok(assemble(start_line.trim_end().to_string(), &resp.headers, body))
}

/// Start line, header lines, blank line, body. The body offset is the end of
/// the blank line.
fn assemble(start_line: String, headers: &[HarHeader], body: Vec<u8>) -> HttpMessage {
    let mut header_lines = vec![start_line];
    header_lines.extend(
        headers
            .iter()
            .filter(|h| !h.name.starts_with(':'))
            .map(|h| format!("{}: {}", h.name, h.value)),
    );

    let mut raw = Vec::new();
    for line in &header_lines {
        raw.extend_from_slice(line.as_bytes());
        raw.extend_from_slice(b"\r\n");
    }
    raw.extend_from_slice(b"\r\n");
    let body_offset = raw.len();
    raw.extend_from_slice(&body);

    HttpMessage::new(raw, body_offset, header_lines)
}

/// Origin-form target (`/path?query`) of an absolute URL; the input itself
/// when it does not parse.
fn request_target(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(u) => match u.query() {
            Some(q) => format!("{}?{}", u.path(), q),
            None => u.path().to_string(),
        },
        Err(_) => url.to_string(),
    }
}

fn http_version(v: &str) -> &str {
    let v = v.trim();
    if v.is_empty() || !v.to_ascii_uppercase().starts_with("HTTP/") {
        DEFAULT_HTTP_VERSION
    } else {
        v
    }
}

fn is_base64(encoding: Option<&str>) -> bool {
    encoding
        .map(|e| e.trim().eq_ignore_ascii_case("base64"))
        .unwrap_or(false)
}
