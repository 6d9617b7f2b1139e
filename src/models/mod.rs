// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, GeneratedCandidate, JobRequirements, MatchResult, NearbyResult,
    ResponseAnalysis, SearchOutcome, SearchQuery, SearchTier,
};
pub use requests::{AnalyzeRequest, MatchRequest, NearbyRequest, SearchParams};
pub use responses::{ErrorResponse, HealthResponse, SearchResponse};
