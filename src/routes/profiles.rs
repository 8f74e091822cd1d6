use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{CompatibilityRequest, CompatibilityResponse, DashboardResponse, ErrorResponse, FetchedProfile, HealthResponse};
use crate::services::{GithubClient, GithubError, ProfileCache};
use crate::core::Analyzer;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub github: Arc<GithubClient>,
    pub cache: Arc<ProfileCache>,
    pub analyzer: Analyzer,
}

/// Configure all profile-related routes
///
/// `/profiles/{handle}` owns every segment under `/profiles`, so the
/// recruiter endpoint lives beside it rather than below it.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility", web::post().to(compatibility))
        .route("/profiles/{handle}", web::get().to(get_dashboard));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let stats = state.cache.stats();
    tracing::trace!("Health check, cache entries: {}", stats.entries);

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Visitor dashboard endpoint
///
/// GET /api/v1/profiles/{handle}
async fn get_dashboard(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let handle = path.into_inner();

    tracing::info!("Building dashboard for: {}", handle);

    match state.cache.get_or_fetch(&state.github, &handle).await {
        Ok(fetched) => HttpResponse::Ok().json(build_dashboard(&state.analyzer, fetched)),
        Err(e) => lookup_error_response(&handle, e),
    }
}

/// Recruiter compatibility endpoint
///
/// POST /api/v1/compatibility
///
/// Request body:
/// ```json
/// {
///   "handle": "string",
///   "jobDescription": "string"
/// }
/// ```
async fn compatibility(
    state: web::Data<AppState>,
    req: web::Json<CompatibilityRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for compatibility request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let handle = &req.handle;

    let fetched = match state.cache.get_or_fetch(&state.github, handle).await {
        Ok(fetched) => fetched,
        Err(e) => return lookup_error_response(handle, e),
    };

    let compatibility = state
        .analyzer
        .compatibility(&req.job_description, &fetched.repositories);

    tracing::info!(
        "Compatibility for {}: {}% ({} of {} keywords)",
        handle,
        compatibility.score,
        compatibility.matched_keywords.len(),
        compatibility.keywords.len()
    );

    HttpResponse::Ok().json(CompatibilityResponse {
        dashboard: build_dashboard(&state.analyzer, fetched),
        compatibility,
    })
}

fn build_dashboard(analyzer: &Analyzer, fetched: FetchedProfile) -> DashboardResponse {
    let analysis = analyzer.analyze(&fetched);

    DashboardResponse {
        profile: fetched.profile,
        repositories: fetched.repositories,
        repositories_complete: fetched.repositories_complete,
        analysis,
    }
}

fn lookup_error_response(handle: &str, error: GithubError) -> HttpResponse {
    match error {
        GithubError::ProfileNotFound { .. } => {
            tracing::info!("Profile lookup failed for {}: {}", handle, error);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message: error.to_string(),
                status_code: 404,
            })
        }
        GithubError::InvalidHandle(_) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid handle".to_string(),
            message: error.to_string(),
            status_code: 400,
        }),
        _ => {
            tracing::error!("GitHub client failure for {}: {}", handle, error);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Lookup failed".to_string(),
                message: error.to_string(),
                status_code: 500,
            })
        }
    }
}
