//! CLI command handlers, one per file.

mod list;
mod save;
mod sniff;

pub use list::run_list;
pub use save::{run_save, SaveArgs};
pub use sniff::run_sniff;
