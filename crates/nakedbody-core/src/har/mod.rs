//! HAR (HTTP Archive) capture source.
//!
//! Reads a HAR export of proxy or browser history and rebuilds every entry as
//! an [`Exchange`] of raw request/response messages, ready for the saver.
//! Response bodies stored as base64 are decoded, form posts recorded only as
//! `params` are form-encoded back into a body, and HTTP/2 pseudo-headers are
//! dropped.

mod build;
mod parse;

use anyhow::{Context, Result};
use std::path::Path;

use crate::exchange::Exchange;

use parse::HarLog;

/// One HAR entry: the request's method and URL next to the rebuilt exchange.
#[derive(Debug, Clone)]
pub struct CapturedEntry {
    pub method: Option<String>,
    pub url: Option<String>,
    pub exchange: Exchange,
}

/// Loads all entries of the HAR file at `path`, in file order.
pub fn load_entries(path: &Path) -> Result<Vec<CapturedEntry>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read HAR file: {}", path.display()))?;
    let entries =
        entries_from_slice(&bytes).with_context(|| format!("load HAR file: {}", path.display()))?;
    tracing::debug!(
        entries = entries.len(),
        "loaded HAR file {}",
        path.display()
    );
    Ok(entries)
}

/// Like [`load_entries`], keeping only the exchanges.
pub fn load_exchanges(path: &Path) -> Result<Vec<Exchange>> {
    Ok(load_entries(path)?.into_iter().map(|e| e.exchange).collect())
}

/// Parses HAR JSON already in memory.
pub fn entries_from_slice(bytes: &[u8]) -> Result<Vec<CapturedEntry>> {
    let har: HarLog = serde_json::from_slice(bytes).context("parse HAR JSON")?;
    har.log
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| build::entry_to_captured(entry, i))
        .collect()
}

/// Like [`entries_from_slice`], keeping only the exchanges.
pub fn exchanges_from_slice(bytes: &[u8]) -> Result<Vec<Exchange>> {
    Ok(entries_from_slice(bytes)?.into_iter().map(|e| e.exchange).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Direction;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_har(har: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(har.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn rebuilds_request_and_response() {
        let har = r#"{
            "log": {
                "version": "1.2",
                "entries": [
                    {
                        "request": {
                            "method": "POST",
                            "url": "https://example.com/api/items?x=1",
                            "httpVersion": "HTTP/1.1",
                            "headers": [
                                { "name": "Host", "value": "example.com" },
                                { "name": "Content-Type", "value": "application/json" }
                            ],
                            "postData": { "mimeType": "application/json", "text": "{\"a\":1}" }
                        },
                        "response": {
                            "status": 201,
                            "statusText": "Created",
                            "httpVersion": "HTTP/1.1",
                            "headers": [ { "name": "Content-Type", "value": "text/plain" } ],
                            "content": { "size": 2, "mimeType": "text/plain", "text": "ok" }
                        }
                    }
                ]
            }
        }"#;
        let f = write_har(har);
        let exchanges = load_exchanges(f.path()).unwrap();
        assert_eq!(exchanges.len(), 1);

        let req = exchanges[0].message(Direction::Request).unwrap();
        assert_eq!(
            req.header_lines(),
            [
                "POST /api/items?x=1 HTTP/1.1",
                "Host: example.com",
                "Content-Type: application/json",
            ]
        );
        assert_eq!(&req.raw()[req.body_offset()..], b"{\"a\":1}");
        assert!(req
            .raw()
            .starts_with(b"POST /api/items?x=1 HTTP/1.1\r\nHost: example.com\r\n"));

        let resp = exchanges[0].message(Direction::Response).unwrap();
        assert_eq!(resp.header_lines()[0], "HTTP/1.1 201 Created");
        assert_eq!(resp.content_type(), Some("text/plain"));
        assert_eq!(&resp.raw()[resp.body_offset()..], b"ok");
    }

    #[test]
    fn base64_content_decoded() {
        // "AGFzbQEAAAA=" is the 8-byte WebAssembly header.
        let har = r#"{"log":{"entries":[{
            "request": { "method": "GET", "url": "https://cdn.example/m.wasm", "headers": [] },
            "response": {
                "status": 200, "statusText": "OK", "httpVersion": "h2",
                "headers": [ { "name": ":status", "value": "200" } ],
                "content": { "text": "AGFzbQEAAAA=", "encoding": "base64" }
            }
        }]}}"#;
        let exchanges = exchanges_from_slice(har.as_bytes()).unwrap();
        let resp = exchanges[0].response.as_ref().unwrap();
        assert_eq!(resp.header_lines(), ["HTTP/1.1 200 OK"]);
        assert_eq!(&resp.raw()[resp.body_offset()..], b"\0asm\x01\0\0\0");

        let req = exchanges[0].request.as_ref().unwrap();
        assert!(!req.has_body());
    }

    #[test]
    fn missing_response_and_empty_content() {
        let har = r#"{"log":{"entries":[
            { "request": { "method": "GET", "url": "https://a.example/", "headers": [] } },
            { "request": { "method": "GET", "url": "https://a.example/", "headers": [] },
              "response": { "status": 304, "statusText": "Not Modified", "headers": [], "content": { "size": 0 } } }
        ]}}"#;
        let exchanges = exchanges_from_slice(har.as_bytes()).unwrap();
        assert!(exchanges[0].response.is_none());
        assert!(!exchanges[1].response.as_ref().unwrap().has_body());
    }

    #[test]
    fn entries_keep_method_and_full_url() {
        let har = r#"{"log":{"entries":[
            { "request": { "method": "PUT", "url": "https://a.example/x?y=1", "headers": [] } },
            { "response": { "status": 200, "headers": [] } }
        ]}}"#;
        let entries = entries_from_slice(har.as_bytes()).unwrap();
        assert_eq!(entries[0].method.as_deref(), Some("PUT"));
        assert_eq!(entries[0].url.as_deref(), Some("https://a.example/x?y=1"));
        assert!(entries[1].method.is_none());
        assert!(entries[1].url.is_none());
        assert!(entries[1].exchange.request.is_none());
    }

    #[test]
    fn form_params_become_request_body() {
        let har = r#"{"log":{"entries":[{
            "request": {
                "method": "POST", "url": "https://a.example/login",
                "headers": [ { "name": "Content-Type", "value": "application/x-www-form-urlencoded" } ],
                "postData": {
                    "mimeType": "application/x-www-form-urlencoded",
                    "params": [ { "name": "user", "value": "bob" }, { "name": "pw", "value": "p@ss word" } ]
                }
            }
        }]}}"#;
        let exchanges = exchanges_from_slice(har.as_bytes()).unwrap();
        let req = exchanges[0].request.as_ref().unwrap();
        assert_eq!(&req.raw()[req.body_offset()..], b"user=bob&pw=p%40ss+word");
        let body = crate::extract::extract_for(req, Direction::Request).unwrap();
        assert_eq!(&*body, b"user=bob&pw=p@ss word");
    }

    #[test]
    fn empty_entries_ok() {
        let exchanges = exchanges_from_slice(br#"{"log":{"version":"1.2","entries":[]}}"#).unwrap();
        assert!(exchanges.is_empty());
    }

    #[test]
    fn bad_base64_is_error() {
        let har = r#"{"log":{"entries":[{
            "request": { "url": "https://a.example/" },
            "response": { "status": 200, "content": { "text": "***", "encoding": "base64" } }
        }]}}"#;
        let err = exchanges_from_slice(har.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("HAR entry 0"));
    }

    #[test]
    fn unreadable_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_exchanges(&dir.path().join("nope.har")).is_err());
    }
}
