//! Output data model.
//!
//! One record type and one container, matching the schema of
//! `data/publications.json` consumed by the site.

use serde::{Deserialize, Serialize};

/// A single publication as written to the output document.
///
/// All text fields default to empty strings when the source omits them;
/// `citations` defaults to 0. `abstract` is only present on records from the
/// live fetch path; fallback records omit it entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    /// Free-form joined author list ("Last, F., Last, F.")
    pub authors: String,
    pub venue: String,
    /// Publication year as text (sources disagree on numeric vs string)
    pub year: String,
    #[serde(
        rename = "abstract",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub abstract_text: Option<String>,
    pub url: String,
    #[serde(default)]
    pub citations: i64,
}

/// The document written to `data/publications.json`.
///
/// `count` is always recomputed from `publications.len()` at write time, never
/// carried over from a previous run. The publications keep source order and
/// hold at most the top-N cutoff the fetcher applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationsDocument {
    /// ISO-8601 local timestamp, set when the document is assembled
    pub last_updated: String,
    pub count: usize,
    pub publications: Vec<Publication>,
}
