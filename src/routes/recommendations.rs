use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::RecommendationEngine;
use crate::models::{ErrorResponse, HealthResponse, RecommendRequest};
use crate::routes::handle_json_payload_error;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend jobs endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "profile": {
///     "location": "string",
///     "yearsOfExperience": 3,
///     "skills": ["string"],
///     "preferredJobType": "remote|onsite|hybrid|any"
///   },
///   "jobs": [
///     { "id": "string", "title": "string", "company": "string", "location": "string",
///       "description": "string", "skills": ["string"], "jobType": "remote|onsite|hybrid" }
///   ]
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendation request: {}", errors);
        let profile = &req.profile;
        let (error, message) = if profile.location.is_empty() || profile.skills.is_empty() {
            ("Profile incomplete", "Profile incomplete. Please add location and skills to your profile.")
        } else {
            ("Invalid profile", "Invalid profile. Years of experience cannot be negative.")
        };
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
            status_code: 400,
        });
    }

    if req.jobs.is_empty() {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "No jobs".to_string(),
            message: "No jobs available for matching".to_string(),
            status_code: 404,
        });
    }

    let RecommendRequest { profile, jobs } = req.into_inner();

    tracing::info!(
        "Processing job recommendations: {}, {} years, {} skills, {} jobs",
        profile.location,
        profile.years_of_experience,
        profile.skills.len(),
        jobs.len()
    );

    let recommendations = state.engine.recommend(&profile, &jobs).await;

    tracing::info!("Found {} job matches", recommendations.len());

    HttpResponse::Ok().json(recommendations)
}
