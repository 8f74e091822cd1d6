use crate::models::ScoringWeights;

/// Account age in whole calendar years, never less than one
///
/// Only the year components are compared, so an account created in
/// December 2023 is one year old for all of 2024.
#[inline]
pub fn account_age_years(created_year: i32, current_year: i32) -> u32 {
    let diff = current_year.saturating_sub(created_year);
    u32::try_from(diff).unwrap_or(0).max(1)
}

/// Calculate the developer score (0-100)
///
/// Scoring formula:
/// score = min(
///     public_repos * 2 +
///     followers * 1 +
///     account_age_years * 5,
///     100
/// )
pub fn calculate_developer_score(
    public_repos: u32,
    followers: u32,
    account_age_years: u32,
    weights: &ScoringWeights,
) -> u8 {
    let raw = u64::from(public_repos) * u64::from(weights.repo)
        + u64::from(followers) * u64::from(weights.follower)
        + u64::from(account_age_years) * u64::from(weights.age);

    let capped = raw.min(u64::from(weights.max_score)).min(100);
    capped as u8
}
