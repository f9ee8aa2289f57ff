//! Publications document assembly and JSON write.

use crate::error::PersistError;
use crate::publication::{Publication, PublicationsDocument};
use chrono::Local;
use std::fs;
use std::path::Path;
use tracing::info;

/// Output path, relative to the working directory.
pub const OUTPUT_PATH: &str = "data/publications.json";

/// Assemble the document: recomputed count, current local timestamp.
pub fn build_document(publications: Vec<Publication>) -> PublicationsDocument {
    PublicationsDocument {
        last_updated: Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
        count: publications.len(),
        publications,
    }
}

/// Write the publications document to `path` and return it.
///
/// Creates the containing directory if missing and overwrites any existing
/// file. Output is pretty-printed UTF-8 JSON (2-space indent); non-ASCII
/// characters are written literally. Errors propagate to the caller - there is
/// no recovery from a failed write.
pub fn write_document(
    publications: Vec<Publication>,
    path: &Path,
) -> Result<PublicationsDocument, PersistError> {
    let document = build_document(publications);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(&document)?;
    fs::write(path, json)?;

    info!(
        count = document.count,
        path = %path.display(),
        "Wrote publications document"
    );
    Ok(document)
}
