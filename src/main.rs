use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use jobmatch::config::{LoggingSettings, Settings};
use jobmatch::core::{FallbackRecommender, LlmRecommender, RecommendationEngine};
use jobmatch::routes::{self, recommendations::AppState};
use jobmatch::services::LlmClient;
use std::sync::Arc;
use tracing::{info, warn, error};
use tracing_subscriber::EnvFilter;

/// Initialize logging; RUST_LOG takes precedence over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    init_logging(
        settings
            .as_ref()
            .map(|s| &s.logging)
            .unwrap_or(&LoggingSettings::default()),
    );

    info!("Starting Jobmatch recommendation service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    info!("Configuration loaded successfully");

    if settings.llm.api_key.is_empty() {
        warn!("No API key configured for the text-generation service; every request will use local scoring");
    }

    let client = LlmClient::new(
        settings.llm.base_url.clone(),
        settings.llm.api_key.clone(),
        settings.llm.completion_options(),
        settings.llm.timeout(),
    )
    .map_err(|e| {
        error!("Failed to create text-generation client: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("Text-generation client initialized (model: {})", settings.llm.model);

    let weights = settings.fallback_weights();
    let engine = RecommendationEngine::new(
        Arc::new(LlmRecommender::new(client)),
        FallbackRecommender::new(weights),
    );

    info!("Recommendation engine initialized with fallback weights: {:?}", weights);

    // Build application state
    let app_state = AppState {
        engine: Arc::new(engine),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
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
