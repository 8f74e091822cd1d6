use crate::models::{LanguageShare, RepositorySummary};

/// Number of languages shown on the skill radar
pub const TOP_LANGUAGES: usize = 3;

/// Count language tags in first-seen order
///
/// Repositories without a language tag are skipped.
pub fn count_languages(repositories: &[RepositorySummary]) -> Vec<(String, u32)> {
    let mut counts: Vec<(String, u32)> = Vec::new();

    for language in repositories.iter().filter_map(|r| r.language_tag()) {
        match counts.iter_mut().find(|(name, _)| name == language) {
            Some((_, count)) => *count += 1,
            None => counts.push((language.to_string(), 1)),
        }
    }

    counts
}

/// Build the top-3 language distribution
///
/// Percentages are taken against the total number of fetched repositories,
/// so untagged repositories dilute every share.
pub fn language_distribution(repositories: &[RepositorySummary]) -> Vec<LanguageShare> {
    let total = repositories.len();
    if total == 0 {
        return Vec::new();
    }

    let mut counts = count_languages(repositories);
    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_LANGUAGES);

    counts
        .into_iter()
        .map(|(language, count)| LanguageShare {
            percentage: percentage_of(count, total),
            language,
            count,
        })
        .collect()
}

#[inline]
fn percentage_of(count: u32, total: usize) -> u32 {
    (f64::from(count) / total as f64 * 100.0).round() as u32
}
