//! Embedded fallback dataset.
//!
//! Used whenever the live fetch is unavailable or fails. The records mirror
//! the author's two most-cited papers and carry no abstract.

use crate::error::FetchError;
use crate::publication::Publication;
use crate::source::PublicationSource;
use async_trait::async_trait;

/// Source backed by the embedded dataset. Never fails.
pub struct FallbackSource;

impl FallbackSource {
    /// The fixed dataset, in display order.
    pub fn publications(&self) -> Vec<Publication> {
        fallback_publications()
    }
}

#[async_trait]
impl PublicationSource for FallbackSource {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn fetch(&self) -> Result<Vec<Publication>, FetchError> {
        Ok(self.publications())
    }
}

/// The two embedded records.
pub fn fallback_publications() -> Vec<Publication> {
    vec![
        Publication {
            title: "Rethinking disaster resilience in high-density cities: \
                    Towards an urban resilience knowledge system"
                .to_string(),
            authors: "Sajjad, M., Chan, J.C.L., Chopra, S.S.".to_string(),
            venue: "Sustainable Cities and Society".to_string(),
            year: "2021".to_string(),
            abstract_text: None,
            url: "https://doi.org/10.1016/j.scs.2021.102850".to_string(),
            citations: 45,
        },
        Publication {
            title: "Assessing hazard vulnerability, habitat conservation, and \
                    restoration for the enhancement of mainland China's coastal resilience"
                .to_string(),
            authors: "Sajjad, M., Li, Y., Tang, Z., Cao, L., Liu, X.".to_string(),
            venue: "Earth's Future".to_string(),
            year: "2018".to_string(),
            abstract_text: None,
            url: "https://doi.org/10.1002/2017EF000676".to_string(),
            citations: 28,
        },
    ]
}
