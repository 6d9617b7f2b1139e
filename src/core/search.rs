use crate::core::{
    fallback::static_candidates,
    filters::filter_by_term,
    generator::SyntheticGenerator,
    location::LocationResolver,
};
use crate::models::{NearbyResult, SearchOutcome, SearchQuery, SearchTier};
use crate::services::source::{with_deadline, CandidateSource};
use std::sync::Arc;
use std::time::Duration;

/// Location handed to the generator when the query has none
pub const DEFAULT_LOCATION: &str = "remote";

/// Number of synthetic candidates requested per search
pub const DEFAULT_SYNTHETIC_COUNT: usize = 3;

/// Candidate search orchestrator - walks the fallback chain
///
/// # Tiers
/// 1. Browse: empty query, static set, no external call
/// 2. Live: external candidate search
/// 3. Synthetic: generated candidates when live search is empty or fails
/// 4. StaticFallback: static set filtered locally when generation fails
#[derive(Clone)]
pub struct CandidateSearch {
    live: Arc<dyn CandidateSource>,
    generator: SyntheticGenerator,
    resolver: LocationResolver,
    timeout: Duration,
    synthetic_count: usize,
}

impl CandidateSearch {
    pub fn new(
        live: Arc<dyn CandidateSource>,
        generator: SyntheticGenerator,
        resolver: LocationResolver,
        timeout: Duration,
    ) -> Self {
        Self {
            live,
            generator,
            resolver,
            timeout,
            synthetic_count: DEFAULT_SYNTHETIC_COUNT,
        }
    }

    pub fn with_synthetic_count(mut self, count: usize) -> Self {
        self.synthetic_count = count.max(1);
        self
    }

    /// Search for candidates, degrading through the tiers until one yields results
    ///
    /// Never fails. The returned tier tells the caller how much to trust the list;
    /// an empty `StaticFallback` list means nothing matched.
    pub async fn search(&self, query: &SearchQuery) -> SearchOutcome {
        if query.is_browse() {
            tracing::debug!("Empty query, serving static candidate set");
            return SearchOutcome::new(SearchTier::Browse, static_candidates());
        }

        let text = query.text.trim();
        let skill = query.skill_filter();
        let location = query.location_filter();

        match with_deadline(self.timeout, self.live.search(text, skill, location)).await {
            Ok(candidates) if !candidates.is_empty() => {
                tracing::info!("Live search for {:?} returned {} candidates", text, candidates.len());
                return SearchOutcome::new(SearchTier::Live, candidates);
            }
            Ok(_) => tracing::info!("Live search for {:?} returned no candidates", text),
            Err(e) => tracing::warn!("Live search for {:?} failed: {}", text, e),
        }

        let term = query.primary_term();
        let generation_location = location.unwrap_or(DEFAULT_LOCATION);

        match self
            .generator
            .try_generate(term, generation_location, self.synthetic_count)
            .await
        {
            Ok(candidates) => {
                tracing::info!("Serving {} synthetic candidates for {:?}", candidates.len(), term);
                return SearchOutcome::new(SearchTier::Synthetic, candidates);
            }
            Err(e) => tracing::warn!("Synthetic generation for {:?} failed: {}", term, e),
        }

        let candidates = filter_by_term(static_candidates(), term);
        tracing::info!(
            "Serving {} static fallback candidates for {:?}",
            candidates.len(),
            term
        );
        SearchOutcome::new(SearchTier::StaticFallback, candidates)
    }

    /// Find candidates with `skill` near the user
    ///
    /// A non-blank `manual_location` wins over the profile lookup. When neither
    /// yields a location the result is unsuccessful and no search runs.
    pub async fn find_nearby(
        &self,
        handle: &str,
        skill: &str,
        manual_location: Option<&str>,
    ) -> NearbyResult {
        let manual = manual_location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);

        let location = match manual {
            Some(location) => Some(location),
            None => self.resolver.resolve_location(handle).await,
        };

        let Some(location) = location else {
            return NearbyResult {
                success: false,
                location: None,
                tier: None,
                candidates: vec![],
                message: "Could not determine your location. Please enter it manually.".to_string(),
            };
        };

        let query = SearchQuery::text(skill).with_location(location.clone());
        let outcome = self.search(&query).await;

        NearbyResult {
            success: true,
            message: format!("Found {} candidates near {}", outcome.candidates.len(), location),
            location: Some(location),
            tier: Some(outcome.tier),
            candidates: outcome.candidates,
        }
    }
}
