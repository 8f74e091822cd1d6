//! Devscope - GitHub developer profile analysis
//!
//! This library fetches a GitHub user and their most recently updated
//! repositories, then derives a bounded developer score, a top-3 language
//! distribution and a keyword compatibility score against a job description.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Analyzer, Dashboard, Role, language_distribution, match_keywords, tokenize};
pub use crate::models::{Profile, RepositorySummary, FetchedProfile, AnalysisResult, MatchResult, ScoringWeights};
pub use crate::services::{GithubClient, GithubError, ProfileCache};
