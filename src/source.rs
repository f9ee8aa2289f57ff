//! Publication sources and the fallback policy.
//!
//! [`PublicationSource`] is the seam between the updater and wherever the
//! records come from: the live scholar API ([`LiveSource`]) or the embedded
//! dataset ([`crate::fallback::FallbackSource`]). The outer policy lives in
//! [`fetch_with_fallback`]: any whole-fetch error discards whatever the live
//! path gathered and substitutes the full fallback dataset.

use crate::error::FetchError;
use crate::fallback::FallbackSource;
use crate::publication::Publication;
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Cutoff applied to the author's paper list, newest-first service order.
pub const MAX_PUBLICATIONS: usize = 10;

/// A strategy for producing the publication list.
#[async_trait]
pub trait PublicationSource: Send + Sync {
    /// Short identifier for log lines.
    fn name(&self) -> &str;

    /// Produce an ordered publication list, at most [`MAX_PUBLICATIONS`] long.
    async fn fetch(&self) -> Result<Vec<Publication>, FetchError>;
}

/// Live source: author search followed by per-paper expansion.
#[cfg(feature = "live")]
pub struct LiveSource {
    client: crate::scholar::ScholarClient,
    author_name: String,
}

#[cfg(feature = "live")]
impl LiveSource {
    pub fn new(client: crate::scholar::ScholarClient, author_name: impl Into<String>) -> Self {
        Self {
            client,
            author_name: author_name.into(),
        }
    }
}

#[cfg(feature = "live")]
#[async_trait]
impl PublicationSource for LiveSource {
    fn name(&self) -> &str {
        "scholar"
    }

    /// Resolve the author (first match wins), list papers, expand each one.
    ///
    /// A failure expanding a single paper is logged with its index and the
    /// paper is skipped; the rest of the list is unaffected. Failures before
    /// the per-paper loop propagate as [`FetchError`].
    async fn fetch(&self) -> Result<Vec<Publication>, FetchError> {
        let matches = self.client.search_author(&self.author_name).await?;
        let author = matches
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::AuthorNotFound(self.author_name.clone()))?;

        info!(author = %author.name, "Found author");

        let papers = self.client.author_papers(&author, MAX_PUBLICATIONS).await?;

        let mut publications = Vec::with_capacity(papers.len().min(MAX_PUBLICATIONS));
        for (index, stub) in papers.iter().take(MAX_PUBLICATIONS).enumerate() {
            match self.client.fill_publication(stub).await {
                Ok(publication) => {
                    debug!(index = index, title = %publication.title, "Added publication");
                    publications.push(publication);
                }
                Err(e) => {
                    warn!(index = index, error = %e, "Error processing publication, skipping");
                }
            }
        }

        Ok(publications)
    }
}

/// Fetch from `primary`, substituting the fallback dataset on any error.
///
/// Partial results from a failed primary fetch are discarded, not merged.
pub async fn fetch_with_fallback(
    primary: &dyn PublicationSource,
    fallback: &FallbackSource,
) -> Vec<Publication> {
    match primary.fetch().await {
        Ok(publications) => publications,
        Err(e) => {
            warn!(source = primary.name(), error = %e, "Fetch failed, using fallback data");
            fallback.publications()
        }
    }
}
