//! MyAnimeList upstream client.
//!
//! # Data Flow
//! ```text
//! username
//!     → client.rs (build endpoint URL, one HTTP GET)
//!     → parser.rs (streaming XML → typed entries)
//!     → Vec<RawAnimeEntry> (or a single failed fetch)
//! ```
//!
//! # Design Decisions
//! - The whole list is requested at once (`status=all`); that is the
//!   only officially supported way to read the data
//! - Entries are parsed into an explicit typed record at the boundary;
//!   a document missing required fields fails as a whole
//! - A fetch never yields a partial list

pub mod client;
pub mod error;
pub mod model;
pub mod parser;

pub use client::MalClient;
pub use error::MalError;
pub use model::RawAnimeEntry;
