// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, RepositorySummary, FetchedProfile, LanguageShare, AnalysisResult, MatchResult, ScoringWeights, MAX_REPOSITORIES};
pub use requests::CompatibilityRequest;
pub use responses::{DashboardResponse, CompatibilityResponse, HealthResponse, ErrorResponse};
