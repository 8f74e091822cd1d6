use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on repositories kept per profile (one GitHub page).
pub const MAX_REPOSITORIES: usize = 12;

/// GitHub user record as returned by `/users/{handle}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub repos_url: Option<String>,
}

impl Profile {
    /// Display name, falling back to the login when unset
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.login)
    }

    pub fn created_year(&self) -> i32 {
        self.created_at.year()
    }
}

/// Repository entry from `/users/{handle}/repos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl RepositorySummary {
    /// Language tag, treating an empty string as absent
    pub fn language_tag(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }
}

/// Outcome of one successful profile lookup.
///
/// `repositories_complete` is false when the repository listing failed and
/// the list was left empty instead of aborting the whole lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchedProfile {
    pub profile: Profile,
    pub repositories: Vec<RepositorySummary>,
    #[serde(rename = "repositoriesComplete")]
    pub repositories_complete: bool,
}

/// One entry of the skill radar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub language: String,
    pub count: u32,
    pub percentage: u32,
}

/// Derived profile summary, recomputed on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u8,
    #[serde(rename = "accountAgeYears")]
    pub account_age_years: u32,
    #[serde(rename = "topLanguages")]
    pub top_languages: Vec<LanguageShare>,
}

/// Job description compatibility for the recruiter workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
    #[serde(rename = "matchedKeywords")]
    pub matched_keywords: Vec<String>,
    pub keywords: Vec<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub repo: u32,
    pub follower: u32,
    pub age: u32,
    pub max_score: u32,
    /// Distinct keyword matches needed for a full compatibility score
    pub saturation_keywords: u32,
    /// Shortest token kept when tokenizing a job description
    pub min_keyword_len: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            repo: 2,
            follower: 1,
            age: 5,
            max_score: 100,
            saturation_keywords: 4,
            min_keyword_len: 4,
        }
    }
}
