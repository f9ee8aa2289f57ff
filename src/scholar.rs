//! Scholar graph API client.
//!
//! Thin client for the author/publication search service: resolve an author by
//! name, list the author's papers, and expand a single paper to full detail.
//! The exact protocol (rate limits, pagination tokens) is owned by the
//! service; this client only touches the three endpoints the updater needs.

use crate::error::{ExpandError, FetchError, Result};
use crate::publication::Publication;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Scholar graph API base URL
const SCHOLAR_API_BASE: &str = "https://api.semanticscholar.org/graph/v1";

/// Fields requested when expanding a paper
const PAPER_FIELDS: &str = "title,abstract,venue,year,authors,citationCount,url";

/// Minimal identifying data for a matched author, expandable to the full
/// paper list.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorStub {
    #[serde(rename = "authorId")]
    pub author_id: String,
    #[serde(default)]
    pub name: String,
}

/// Minimal identifying data for a paper, expandable to full detail.
#[derive(Debug, Clone, Deserialize)]
pub struct PaperStub {
    #[serde(rename = "paperId")]
    pub paper_id: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct AuthorSearchResponse {
    #[serde(default)]
    data: Vec<AuthorStub>,
}

#[derive(Debug, Deserialize)]
struct AuthorPapersResponse {
    #[serde(default)]
    data: Vec<PaperStub>,
}

#[derive(Debug, Deserialize)]
struct PaperDetail {
    title: Option<String>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    venue: Option<String>,
    year: Option<i64>,
    #[serde(default)]
    authors: Vec<PaperAuthor>,
    #[serde(rename = "citationCount")]
    citation_count: Option<i64>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PaperAuthor {
    name: Option<String>,
}

/// Client for the scholar graph API.
pub struct ScholarClient {
    client: Client,
    base_url: String,
}

impl ScholarClient {
    /// Create a client against the production API.
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent("scholarpubs/0.1").build()?;
        Ok(Self {
            client,
            base_url: SCHOLAR_API_BASE.to_string(),
        })
    }

    /// Create a client against an alternate base URL (tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search for authors by name. Returns matches in service order.
    pub async fn search_author(&self, name: &str) -> Result<Vec<AuthorStub>> {
        let url = format!("{}/author/search", self.base_url);
        debug!(name = %name, "Searching for author");

        let response = self
            .client
            .get(&url)
            .query(&[("query", name), ("fields", "name")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Api {
                code: status.as_u16() as i32,
                message: format!("Author search failed: {}", status),
            });
        }

        let body: AuthorSearchResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Parse(format!("Bad author search response: {}", e)))?;

        Ok(body.data)
    }

    /// Expand an author to its paper list, in service order, capped at `limit`.
    pub async fn author_papers(&self, author: &AuthorStub, limit: usize) -> Result<Vec<PaperStub>> {
        let url = format!("{}/author/{}/papers", self.base_url, author.author_id);
        debug!(author_id = %author.author_id, limit = limit, "Listing author papers");

        let response = self
            .client
            .get(&url)
            .query(&[("fields", "title"), ("limit", &limit.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Api {
                code: status.as_u16() as i32,
                message: format!("Author paper listing failed: {}", status),
            });
        }

        let body: AuthorPapersResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Parse(format!("Bad paper list response: {}", e)))?;

        Ok(body.data)
    }

    /// Expand a paper stub to a full [`Publication`].
    ///
    /// Missing text fields become empty strings, missing citation counts
    /// become 0. The abstract is always present on records from this path,
    /// possibly empty.
    pub async fn fill_publication(
        &self,
        paper: &PaperStub,
    ) -> std::result::Result<Publication, ExpandError> {
        let url = format!("{}/paper/{}", self.base_url, paper.paper_id);
        debug!(paper_id = %paper.paper_id, "Expanding publication");

        let response = self
            .client
            .get(&url)
            .query(&[("fields", PAPER_FIELDS)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExpandError::Api {
                code: status.as_u16() as i32,
                message: format!("Paper expansion failed: {}", status),
            });
        }

        let detail: PaperDetail = response
            .json()
            .await
            .map_err(|e| ExpandError::Parse(format!("Bad paper detail response: {}", e)))?;

        Ok(publication_from_detail(detail))
    }
}

/// Map an API paper detail into the output record shape.
fn publication_from_detail(detail: PaperDetail) -> Publication {
    let authors = detail
        .authors
        .into_iter()
        .filter_map(|a| a.name)
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    Publication {
        title: detail.title.unwrap_or_default(),
        authors,
        venue: detail.venue.unwrap_or_default(),
        year: detail.year.map(|y| y.to_string()).unwrap_or_default(),
        abstract_text: Some(detail.abstract_text.unwrap_or_default()),
        url: detail.url.unwrap_or_default(),
        citations: detail.citation_count.unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publication_from_detail_defaults() {
        let detail = PaperDetail {
            title: None,
            abstract_text: None,
            venue: None,
            year: None,
            authors: vec![],
            citation_count: None,
            url: None,
        };

        let publication = publication_from_detail(detail);
        assert_eq!(publication.title, "");
        assert_eq!(publication.year, "");
        assert_eq!(publication.citations, 0);
        // Live path always carries an abstract, even an empty one
        assert_eq!(publication.abstract_text, Some(String::new()));
    }

    #[test]
    fn test_publication_from_detail_joins_authors() {
        let detail = PaperDetail {
            title: Some("Urban resilience".to_string()),
            abstract_text: Some("A knowledge system.".to_string()),
            venue: Some("Sustainable Cities and Society".to_string()),
            year: Some(2021),
            authors: vec![
                PaperAuthor {
                    name: Some("M. Sajjad".to_string()),
                },
                PaperAuthor { name: None },
                PaperAuthor {
                    name: Some("J. C. L. Chan".to_string()),
                },
            ],
            citation_count: Some(45),
            url: Some("https://example.org/paper".to_string()),
        };

        let publication = publication_from_detail(detail);
        assert_eq!(publication.authors, "M. Sajjad, J. C. L. Chan");
        assert_eq!(publication.year, "2021");
        assert_eq!(publication.citations, 45);
    }

    #[tokio::test]
    async fn test_search_author_no_match_is_empty() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/author/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"total": 0, "offset": 0, "data": []}"#)
            .create_async()
            .await;

        let client = ScholarClient::with_base_url(server.url());
        let stubs = client.search_author("Nobody").await.expect("search");
        assert!(stubs.is_empty());
    }

    #[tokio::test]
    async fn test_search_author_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/author/search")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let client = ScholarClient::with_base_url(server.url());
        let err = client.search_author("Anyone").await.expect_err("should fail");
        match err {
            FetchError::Api { code, .. } => assert_eq!(code, 500),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fill_publication_maps_fields() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/paper/p1")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "paperId": "p1",
                    "title": "Disaster resilience",
                    "abstract": "Towards a knowledge system.",
                    "venue": "Sustainable Cities and Society",
                    "year": 2021,
                    "citationCount": 45,
                    "url": "https://example.org/p1",
                    "authors": [{"authorId": "1", "name": "M. Sajjad"}]
                }"#,
            )
            .create_async()
            .await;

        let client = ScholarClient::with_base_url(server.url());
        let stub = PaperStub {
            paper_id: "p1".to_string(),
            title: String::new(),
        };

        let publication = client.fill_publication(&stub).await.expect("fill");
        assert_eq!(publication.title, "Disaster resilience");
        assert_eq!(publication.venue, "Sustainable Cities and Society");
        assert_eq!(publication.year, "2021");
        assert_eq!(publication.citations, 45);
        assert_eq!(publication.authors, "M. Sajjad");
        assert_eq!(
            publication.abstract_text.as_deref(),
            Some("Towards a knowledge system.")
        );
    }
}
