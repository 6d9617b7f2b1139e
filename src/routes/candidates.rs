use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{scoring::match_against, score_response_text, CandidateSearch};
use crate::models::{
    AnalyzeRequest, ErrorResponse, HealthResponse, MatchRequest, NearbyRequest, SearchParams,
    SearchQuery, SearchResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub search: CandidateSearch,
}

/// Configure all candidate-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(match_skills))
        .route("/analyze", web::post().to(analyze_response))
        .route("/search", web::get().to(search_candidates))
        .route("/nearby", web::post().to(find_nearby));
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Skill match endpoint
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "candidateSkills": ["string"],
///   "requiredSkills": ["string"],
///   "description": "string"
/// }
/// ```
async fn match_skills(req: web::Json<MatchRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let result = match_against(&req.candidate_skills, &req.requirements());

    tracing::info!(
        "Scored {} candidate skills against {} required: {}",
        req.candidate_skills.len(),
        req.required_skills.len(),
        result.score
    );

    HttpResponse::Ok().json(result)
}

/// Interview response analysis endpoint
///
/// POST /api/v1/analyze
async fn analyze_response(req: web::Json<AnalyzeRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    HttpResponse::Ok().json(score_response_text(&req.text))
}

/// Candidate search endpoint
///
/// GET /api/v1/search?query={text}&skill={skill}&location={location}
async fn search_candidates(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> impl Responder {
    let params = params.into_inner();
    let query = SearchQuery {
        text: params.query,
        skill: params.skill,
        location: params.location,
    };

    let outcome = state.search.search(&query).await;

    tracing::info!(
        "Returning {} candidates for {:?} (tier: {:?})",
        outcome.candidates.len(),
        query.text,
        outcome.tier
    );

    HttpResponse::Ok().json(SearchResponse {
        tier: outcome.tier,
        total_results: outcome.candidates.len(),
        candidates: outcome.candidates,
    })
}

/// Nearby candidate endpoint
///
/// POST /api/v1/nearby
///
/// Request body:
/// ```json
/// {
///   "handle": "string",
///   "skill": "string",
///   "location": "string"
/// }
/// ```
async fn find_nearby(
    state: web::Data<AppState>,
    req: web::Json<NearbyRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let result = state
        .search
        .find_nearby(&req.handle, &req.skill, req.location.as_deref())
        .await;

    if !result.success {
        tracing::info!("No location available for handle {:?}", req.handle);
    }

    HttpResponse::Ok().json(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LocationResolver, SyntheticGenerator};
    use crate::models::{CandidateProfile, MatchResult, NearbyResult};
    use crate::services::{CandidateSource, ProfileDirectory, SourceError, TextGenerator};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    struct Offline;

    #[async_trait]
    impl CandidateSource for Offline {
        async fn search(
            &self,
            _text: &str,
            _skill: Option<&str>,
            _location: Option<&str>,
        ) -> Result<Vec<CandidateProfile>, SourceError> {
            Err(SourceError::Api("offline".into()))
        }
    }

    #[async_trait]
    impl ProfileDirectory for Offline {
        async fn lookup_location(&self, _handle: &str) -> Result<Option<String>, SourceError> {
            Err(SourceError::Api("offline".into()))
        }
    }

    #[async_trait]
    impl TextGenerator for Offline {
        async fn generate_text(&self, _prompt: &str) -> Result<String, SourceError> {
            Err(SourceError::Api("offline".into()))
        }
    }

    fn offline_state() -> AppState {
        let timeout = Duration::from_secs(1);
        AppState {
            search: CandidateSearch::new(
                Arc::new(Offline),
                SyntheticGenerator::new(Arc::new(Offline), timeout),
                LocationResolver::new(Arc::new(Offline), timeout),
                timeout,
            ),
        }
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(offline_state()))
                    .service(web::scope("/api/v1").configure(configure)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.status, "healthy");
    }

    #[actix_web::test]
    async fn test_match_endpoint() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/match")
            .set_json(serde_json::json!({
                "candidateSkills": ["Python", "React"],
                "requiredSkills": ["react"]
            }))
            .to_request();

        let body: MatchResult = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.matched_skills, vec!["React"]);
        assert!((15..=35).contains(&body.score));
    }

    #[actix_web::test]
    async fn test_match_accepts_snake_case_payload() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/match")
            .set_json(serde_json::json!({
                "user_skills": ["Go", "SQL"],
                "required_skills": ["sql"]
            }))
            .to_request();

        let body: MatchResult = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.matched_skills, vec!["SQL"]);
    }

    #[actix_web::test]
    async fn test_match_rejects_blank_skill() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/match")
            .set_json(serde_json::json!({
                "candidateSkills": [""],
                "requiredSkills": ["react"]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_search_offline_uses_static_fallback() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/v1/search?query=react")
            .to_request();

        let body: SearchResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.tier, crate::models::SearchTier::StaticFallback);
        assert_eq!(body.total_results, body.candidates.len());
        assert!(body.candidates.iter().all(|c| c.mentions("react")));
    }

    #[actix_web::test]
    async fn test_nearby_without_location() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/nearby")
            .set_json(serde_json::json!({ "handle": "ghost", "skill": "go" }))
            .to_request();

        let body: NearbyResult = test::call_and_read_body_json(&app, req).await;
        assert!(!body.success);
        assert!(body.candidates.is_empty());
    }
}
