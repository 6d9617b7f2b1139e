// Core algorithm exports
pub mod fallback;
pub mod filters;
pub mod generator;
pub mod location;
pub mod scoring;
pub mod search;

pub use fallback::static_candidates;
pub use filters::{filter_by_term, matched_skills};
pub use generator::{GenerationError, SyntheticGenerator};
pub use location::LocationResolver;
pub use scoring::{compute_match_score, match_against, score_response_text};
pub use search::CandidateSearch;
