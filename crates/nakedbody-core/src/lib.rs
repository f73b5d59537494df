//! Save the naked bodies of captured HTTP traffic to individual files.
//!
//! A capture source (e.g. [`har`]) supplies [`Exchange`]s; [`BatchSaver`]
//! extracts each selected body, guesses a file extension for it and writes it
//! as `{run_prefix}-{req|resp}-{NNNNNN}{ext}`.

pub mod config;
pub mod logging;

pub mod error;
pub mod exchange;
pub mod extract;
pub mod har;
pub mod message;
pub mod saver;
pub mod sniff;
pub mod storage;

pub use error::SaveError;
pub use exchange::Exchange;
pub use extract::extract_body;
pub use message::{Direction, HttpMessage};
pub use saver::{BatchSaver, SaveOptions, SaveReport};
pub use sniff::{guess_extension, FileExtension};
