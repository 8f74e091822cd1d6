use crate::models::{MatchResult, RepositorySummary, ScoringWeights};

/// Split a job description into lower-cased keywords
///
/// Tokens are separated by runs of whitespace, commas and periods. Tokens
/// shorter than `min_len` characters are dropped, and empty tokens are never
/// produced. Duplicates are kept so the caller sees the description as
/// written.
pub fn tokenize(description: &str, min_len: usize) -> Vec<String> {
    description
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',' || c == '.')
        .filter(|token| !token.is_empty() && token.chars().count() >= min_len)
        .map(str::to_string)
        .collect()
}

/// Lower-cased searchable text for one repository
///
/// Missing description or language contribute nothing.
pub fn repository_blob(repo: &RepositorySummary) -> String {
    let parts = [
        repo.name.as_str(),
        repo.description.as_deref().unwrap_or(""),
        repo.language.as_deref().unwrap_or(""),
    ];
    parts.join(" ").to_lowercase()
}

/// Match job description keywords against repository metadata
///
/// A keyword counts when it occurs as a substring of any repository blob.
/// Partial-word hits count too ("java" matches "javascript").
pub fn match_keywords(
    description: &str,
    repositories: &[RepositorySummary],
    weights: &ScoringWeights,
) -> MatchResult {
    let keywords = dedup_in_order(tokenize(description, weights.min_keyword_len));
    let blobs: Vec<String> = repositories.iter().map(repository_blob).collect();

    let matched_keywords: Vec<String> = keywords
        .iter()
        .filter(|keyword| blobs.iter().any(|blob| blob.contains(keyword.as_str())))
        .cloned()
        .collect();

    let score = compatibility_score(matched_keywords.len(), weights);

    MatchResult {
        score,
        matched_keywords,
        keywords,
    }
}

/// Percentage of the saturation count reached, capped at 100
pub fn compatibility_score(distinct_matches: usize, weights: &ScoringWeights) -> u8 {
    let saturation = weights.saturation_keywords.max(1) as usize;
    let score = distinct_matches.saturating_mul(100) / saturation;
    score.min(100) as u8
}

fn dedup_in_order(tokens: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !unique.contains(&token) {
            unique.push(token);
        }
    }
    unique
}
