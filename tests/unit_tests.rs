// Unit tests for Devscope scoring

use devscope::core::{
    keywords::{compatibility_score, match_keywords, tokenize},
    languages::language_distribution,
    scoring::{account_age_years, calculate_developer_score},
};
use devscope::models::{RepositorySummary, ScoringWeights};

fn repo(id: u64, name: &str, description: Option<&str>, language: Option<&str>) -> RepositorySummary {
    RepositorySummary {
        id,
        name: name.to_string(),
        description: description.map(str::to_string),
        language: language.map(str::to_string),
    }
}

#[test]
fn test_developer_score_formula_over_grid() {
    let weights = ScoringWeights::default();

    for repos in [0u32, 1, 7, 30, 60] {
        for followers in [0u32, 3, 45, 1000] {
            for created in [2008, 2015, 2023, 2024] {
                let age = account_age_years(created, 2024);
                let expected = (2 * repos as u64 + followers as u64 + 5 * age as u64).min(100);
                let score = calculate_developer_score(repos, followers, age, &weights);

                assert!(score <= 100, "Score {} out of range", score);
                assert_eq!(score as u64, expected);
            }
        }
    }
}

#[test]
fn test_scenario_clamped_score() {
    let weights = ScoringWeights::default();
    let age = account_age_years(2018, 2024);
    assert_eq!(age, 6);
    assert_eq!(calculate_developer_score(10, 50, age, &weights), 100);
}

#[test]
fn test_top_languages_bounded_by_distinct_languages() {
    let repos = vec![
        repo(1, "a", None, Some("Rust")),
        repo(2, "b", None, Some("Rust")),
        repo(3, "c", None, None),
    ];

    let top = language_distribution(&repos);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].language, "Rust");
    assert_eq!(top[0].percentage, 67);
}

#[test]
fn test_top_languages_sorted_descending() {
    let repos = vec![
        repo(1, "a", None, Some("Go")),
        repo(2, "b", None, Some("Python")),
        repo(3, "c", None, Some("Python")),
        repo(4, "d", None, Some("Shell")),
        repo(5, "e", None, Some("Python")),
        repo(6, "f", None, Some("Shell")),
    ];

    let top = language_distribution(&repos);
    let counts: Vec<u32> = top.iter().map(|s| s.count).collect();
    assert_eq!(counts, vec![3, 2, 1]);
    assert_eq!(top[2].language, "Go");
}

#[test]
fn test_tokenizer_is_case_insensitive() {
    assert_eq!(tokenize("KUBERNETES Kubernetes", 4), vec!["kubernetes", "kubernetes"]);
    assert!(tokenize("Go C++ SQL and", 4).is_empty());
}

#[test]
fn test_match_score_monotonic_and_saturating() {
    let weights = ScoringWeights::default();
    let mut previous = 0;
    for n in 0..10 {
        let score = compatibility_score(n, &weights);
        assert!(score >= previous);
        previous = score;
    }
    assert_eq!(compatibility_score(4, &weights), 100);
}

#[test]
fn test_keyword_matches_across_repositories() {
    let repos = vec![
        repo(1, "kafka-consumer", Some("Streaming ingestion"), Some("Java")),
        repo(2, "infra", Some("Terraform modules for AWS"), Some("HCL")),
    ];

    let result = match_keywords(
        "Backend engineer: Kafka, Terraform, Java, Postgres",
        &repos,
        &ScoringWeights::default(),
    );

    assert_eq!(result.matched_keywords, vec!["kafka", "terraform", "java"]);
    assert_eq!(result.score, 75);
}
