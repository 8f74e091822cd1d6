// Core algorithm exports
pub mod analyzer;
pub mod keywords;
pub mod languages;
pub mod scoring;
pub mod session;

pub use analyzer::Analyzer;
pub use keywords::{tokenize, repository_blob, match_keywords, compatibility_score};
pub use languages::language_distribution;
pub use scoring::{account_age_years, calculate_developer_score};
pub use session::{Dashboard, LoadState, RequestTicket, Role};
