//! `nakedbody sniff <file>` – guess the extension of one raw HTTP message.

use anyhow::{Context, Result};
use nakedbody_core::extract::extract_for;
use nakedbody_core::{guess_extension, Direction, HttpMessage};
use std::path::Path;

pub fn run_sniff(path: &Path, request: bool) -> Result<()> {
    let raw = std::fs::read(path).with_context(|| format!("read message: {}", path.display()))?;
    let message = HttpMessage::parse(raw);
    let direction = if request {
        Direction::Request
    } else {
        Direction::Response
    };
    let ext = guess_extension(message.header_lines(), message.raw(), message.body_offset());
    let body_len = extract_for(&message, direction).map_or(0, |b| b.len());
    println!("{}  {} body bytes  {}", ext, body_len, path.display());
    Ok(())
}
