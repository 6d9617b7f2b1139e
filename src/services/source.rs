use crate::models::CandidateProfile;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by an external candidate, profile or text source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

/// Live search over an external candidate directory
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn search(
        &self,
        text: &str,
        skill: Option<&str>,
        location: Option<&str>,
    ) -> Result<Vec<CandidateProfile>, SourceError>;
}

/// Profile lookup used to discover a user's declared location
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    /// `Ok(None)` when the profile exists but declares no location
    async fn lookup_location(&self, handle: &str) -> Result<Option<String>, SourceError>;
}

/// Generative text completion
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, SourceError>;
}

/// Run a collaborator call under a deadline, folding expiry into `SourceError::Timeout`
pub async fn with_deadline<T, F>(limit: Duration, call: F) -> Result<T, SourceError>
where
    F: Future<Output = Result<T, SourceError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(SourceError::Timeout(limit)),
    }
}
