use chrono::{Datelike, Utc};

use crate::models::{AnalysisResult, FetchedProfile, MatchResult, RepositorySummary, ScoringWeights};
use crate::core::{
    keywords::match_keywords,
    languages::language_distribution,
    scoring::{account_age_years, calculate_developer_score},
};

/// Derives dashboard summaries from a fetched profile
///
/// Everything here is a pure function of its inputs; nothing is cached, so
/// callers recompute on every render or request.
#[derive(Debug, Clone)]
pub struct Analyzer {
    weights: ScoringWeights,
}

impl Analyzer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Analyze a profile as of the current UTC year
    pub fn analyze(&self, fetched: &FetchedProfile) -> AnalysisResult {
        self.analyze_at(fetched, Utc::now().year())
    }

    /// Analyze a profile as of `current_year`
    ///
    /// # Arguments
    /// * `fetched` - Profile and its most recently updated repositories
    /// * `current_year` - Calendar year used for the account age
    pub fn analyze_at(&self, fetched: &FetchedProfile, current_year: i32) -> AnalysisResult {
        let profile = &fetched.profile;
        let age = account_age_years(profile.created_year(), current_year);

        let score = calculate_developer_score(
            profile.public_repos,
            profile.followers,
            age,
            &self.weights,
        );

        AnalysisResult {
            score,
            account_age_years: age,
            top_languages: language_distribution(&fetched.repositories),
        }
    }

    /// Score repositories against a pasted job description
    pub fn compatibility(
        &self,
        job_description: &str,
        repositories: &[RepositorySummary],
    ) -> MatchResult {
        match_keywords(job_description, repositories, &self.weights)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
