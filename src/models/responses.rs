use serde::{Deserialize, Serialize};
use crate::models::domain::{AnalysisResult, MatchResult, Profile, RepositorySummary};

/// Visitor dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub profile: Profile,
    pub repositories: Vec<RepositorySummary>,
    #[serde(rename = "repositoriesComplete")]
    pub repositories_complete: bool,
    pub analysis: AnalysisResult,
}

/// Recruiter dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResponse {
    #[serde(flatten)]
    pub dashboard: DashboardResponse,
    pub compatibility: MatchResult,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
