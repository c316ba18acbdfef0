//! Catalog capability consumed by the recommendation and browsing code.
//!
//! The concrete implementation talks to Jikan (see [`crate::clients::jikan`]),
//! but everything above this seam only sees [`CatalogClient`], which keeps the
//! aggregation logic testable with an in-memory catalog.

use crate::models::anime::{Anime, AnimeReference};
use thiserror::Error;

/// Failure of a single catalog call.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Anime not found: {0}")]
    NotFound(i32),

    #[error("Catalog request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Catalog API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid catalog response: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Whether retrying the same call later could plausibly succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::NotFound(_) | Self::Decode(_) => false,
            Self::Network(_) => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
        }
    }
}

/// Read-only access to the anime catalog.
///
/// Every method maps to one outbound request. Implementations must not retry
/// on their own; callers decide whether a failure is fatal.
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Free-text title search, safe-for-work only.
    async fn search_by_query(&self, query: &str, limit: usize) -> Result<Vec<Anime>, CatalogError>;

    /// Full record for one anime.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the id does not exist.
    async fn get_by_id(&self, id: i32) -> Result<Anime, CatalogError>;

    /// Anime tagged with `genre_id`, ordered by score descending, safe-for-work only.
    async fn search_by_genre(&self, genre_id: i32, limit: usize)
    -> Result<Vec<Anime>, CatalogError>;

    /// Curated "similar anime" references for `id`, in catalog order.
    async fn get_curated_similar(&self, id: i32) -> Result<Vec<AnimeReference>, CatalogError>;

    /// Top-ranked anime, safe-for-work only.
    async fn get_top_ranked(&self, limit: usize) -> Result<Vec<Anime>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(!CatalogError::NotFound(1).is_transient());
        assert!(!CatalogError::Decode("eof".to_string()).is_transient());
        assert!(
            CatalogError::Api {
                status: 429,
                message: "rate limited".to_string()
            }
            .is_transient()
        );
        assert!(
            CatalogError::Api {
                status: 503,
                message: String::new()
            }
            .is_transient()
        );
        assert!(
            !CatalogError::Api {
                status: 400,
                message: String::new()
            }
            .is_transient()
        );
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::Api {
            status: 500,
            message: "upstream".to_string(),
        };
        assert_eq!(err.to_string(), "Catalog API error: 500 - upstream");
        assert_eq!(CatalogError::NotFound(42).to_string(), "Anime not found: 42");
    }
}
