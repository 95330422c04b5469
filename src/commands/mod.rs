//! CLI commands for relnotes
//!
//! - **sync**: merge the newest changelog entry into the release notes
//!   document and notify the configured webhook
//! - **extract**: print the newest changelog entry without touching anything

pub mod extract;
pub mod sync;

pub use extract::run_extract;
pub use sync::run_sync;
