use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trace_match::config::{LoggingSettings, Settings};
use trace_match::core::{CandidateSearch, LocationResolver, SyntheticGenerator};
use trace_match::models::ErrorResponse;
use trace_match::routes::{self, candidates::AppState};
use trace_match::services::{GeminiClient, GithubClient};

/// JSON error response for payload errors
#[derive(Debug)]
struct JsonError(ErrorResponse);

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.0.error, self.0.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.0)
    }
}

/// Handle JSON payload errors
fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError(ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    })
    .into()
}

/// Handle query payload errors
fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError(ErrorResponse {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    })
    .into()
}

fn init_logging(logging: &LoggingSettings) {
    // LOG_LEVEL / LOG_FORMAT take precedence over the config file
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging);

    info!("Starting TRACE match service...");

    let timeout = settings.search.timeout();

    let github = Arc::new(GithubClient::new(
        settings.github.endpoint.clone(),
        settings.github.token.clone(),
        settings.github.per_page,
        timeout,
    ));

    info!("GitHub client initialized ({})", settings.github.endpoint);

    let gemini = Arc::new(GeminiClient::new(
        settings.gemini.endpoint.clone(),
        settings.gemini.api_key.clone(),
        settings.gemini.model.clone(),
        timeout,
    ));

    if settings.gemini.api_key.is_empty() {
        tracing::warn!("No Gemini API key configured, synthetic candidates are disabled");
    } else {
        info!("Gemini client initialized (model: {})", gemini.model());
    }

    let search = CandidateSearch::new(
        github.clone(),
        SyntheticGenerator::new(gemini, timeout),
        LocationResolver::new(github, timeout),
        timeout,
    )
    .with_synthetic_count(settings.search.synthetic_count);

    info!("Candidate search initialized (timeout: {:?})", timeout);

    let app_state = AppState { search };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
