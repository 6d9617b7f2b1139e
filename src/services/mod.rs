// Service exports
pub mod gemini;
pub mod github;
pub mod source;

pub use gemini::GeminiClient;
pub use github::GithubClient;
pub use source::{CandidateSource, ProfileDirectory, SourceError, TextGenerator};
