//! TRACE Match - candidate matching and search for TRACE team formation
//!
//! This library provides the skill-matching heuristics and the multi-source
//! candidate search that degrades from live search to generated candidates to
//! a built-in static set.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CandidateSearch, LocationResolver, SyntheticGenerator, compute_match_score, score_response_text};
pub use models::{CandidateProfile, MatchResult, SearchOutcome, SearchQuery, SearchTier, NearbyResult};
