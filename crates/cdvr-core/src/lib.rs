//! Channels DVR Lookup Core Library
//!
//! Queries a Channels DVR server's HTTP API to find which saved pass
//! (recording rule) triggered the recording of a program.
//!
//! # Overview
//!
//! The lookup is a single read-only pipeline:
//! - fetch the scheduled recordings and the library listing,
//! - filter them in memory against the title/season/episode criteria,
//! - resolve each match's rule ID to a human-readable pass name.
//!
//! # Example
//!
//! ```no_run
//! use cdvr_core::{Criteria, PassFinder, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let finder = PassFinder::new("http://127.0.0.1:8089")?;
//!
//!     let criteria = Criteria::new("Nature").season(2);
//!     for matched in finder.find(&criteria).await? {
//!         println!(
//!             "{}: {:?}",
//!             matched.recording.airing.title,
//!             matched.pass_name
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! The JSON schema of the server's endpoints is an external contract
//! owned by Channels DVR; the typed models in [`types`] only pin down
//! the fields this lookup reads.

mod client;
mod error;
mod finder;
mod matcher;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, DvrClient};

// Re-export error types
pub use error::{DvrError, Result};

// Re-export the high-level finder API
pub use finder::{PassFinder, ProgramMatch, Source};

// Re-export matching types
pub use matcher::{filter_matches, Criteria};

// Re-export data types
pub use types::{Airing, MediaFormat, MediaInfo, RawAiring, Recording, Rule};

// Re-export URL helpers for convenience
pub use url::{build_base_url, DEFAULT_HOST, DEFAULT_PORT};
