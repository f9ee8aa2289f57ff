//! # scholarpubs
//!
//! Google Scholar publications updater. Fetches an author's publication list
//! from the scholar graph API and persists it as `data/publications.json` for
//! the site to render, falling back to an embedded dataset when the live
//! fetch is unavailable or fails.
//!
//! ## Modules
//!
//! - [`scholar`] - Scholar graph API client (author search, paper expansion)
//! - [`source`] - `PublicationSource` strategy and the fallback policy
//! - [`fallback`] - Embedded fallback dataset
//! - [`persist`] - Document assembly and JSON write
//! - [`error`] - Error types

pub mod error;
pub mod fallback;
pub mod persist;
pub mod publication;
#[cfg(feature = "live")]
pub mod scholar;
pub mod source;

pub use error::{ExpandError, FetchError, PersistError, Result};
