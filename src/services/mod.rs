// Service exports
pub mod cache;
pub mod github;

pub use cache::{ProfileCache, CacheKey, CacheStats};
pub use github::{GithubClient, GithubError};
