//! `nakedbody list <har>` – show exchanges with body sizes and guessed extensions.

use anyhow::Result;
use nakedbody_core::extract::extract_for;
use nakedbody_core::har::CapturedEntry;
use nakedbody_core::{guess_extension, har, Direction, Exchange};
use std::path::Path;

pub fn run_list(path: &Path) -> Result<()> {
    let entries = har::load_entries(path)?;
    if entries.is_empty() {
        println!("No entries in HAR file.");
        return Ok(());
    }
    println!(
        "{:<6} {:<8} {:<60} {:<16} {}",
        "#", "METHOD", "URL", "REQUEST", "RESPONSE"
    );
    for (i, entry) in entries.iter().enumerate() {
        println!("{}", format_row(i + 1, entry));
    }
    Ok(())
}

/// Index, method, URL, then the request and response body summaries.
pub(crate) fn format_row(index: usize, entry: &CapturedEntry) -> String {
    format!(
        "{:<6} {:<8} {:<60} {:<16} {}",
        index,
        entry.method.as_deref().unwrap_or("-"),
        entry.url.as_deref().unwrap_or("-"),
        body_summary(&entry.exchange, Direction::Request),
        body_summary(&entry.exchange, Direction::Response)
    )
}

/// `"<bytes> <ext>"` for a body that would be saved, `-` otherwise.
pub(crate) fn body_summary(ex: &Exchange, direction: Direction) -> String {
    let Some(message) = ex.message(direction) else {
        return "-".to_string();
    };
    match extract_for(message, direction) {
        Some(body) => {
            let ext = guess_extension(message.header_lines(), message.raw(), message.body_offset());
            format!("{} {}", body.len(), ext)
        }
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nakedbody_core::HttpMessage;

    #[test]
    fn summary_for_present_and_missing_bodies() {
        let ex = Exchange::new(
            Some(HttpMessage::parse(b"GET / HTTP/1.1\r\nHost: a\r\n\r\n".to_vec())),
            Some(HttpMessage::parse(
                b"HTTP/1.1 200 OK\r\nContent-Type: text/css\r\n\r\nbody{}".to_vec(),
            )),
        );
        assert_eq!(body_summary(&ex, Direction::Request), "-");
        assert_eq!(body_summary(&ex, Direction::Response), "6 .css");
        assert_eq!(body_summary(&Exchange::default(), Direction::Response), "-");
    }

    #[test]
    fn row_shows_method_and_full_url_before_summaries() {
        let entries = har::entries_from_slice(
            br#"{"log":{"entries":[{
                "request": { "method": "POST", "url": "https://a.example/api?q=1", "headers": [],
                             "postData": { "text": "{}" } },
                "response": { "status": 200, "headers": [ { "name": "Content-Type", "value": "image/png" } ],
                              "content": { "text": "abc" } }
            }]}}"#,
        )
        .unwrap();
        let row = format_row(3, &entries[0]);
        let cols: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(
            cols,
            ["3", "POST", "https://a.example/api?q=1", "2", ".dat", "3", ".png"]
        );
    }

    #[test]
    fn row_without_request() {
        let entry = CapturedEntry {
            method: None,
            url: None,
            exchange: Exchange::default(),
        };
        let cols: Vec<String> = format_row(1, &entry)
            .split_whitespace()
            .map(String::from)
            .collect();
        assert_eq!(cols, ["1", "-", "-", "-", "-"]);
    }
}
