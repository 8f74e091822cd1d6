use crate::models::FetchedProfile;
use crate::services::github::{GithubClient, GithubError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// In-memory cache of fetched profiles
///
/// Keeps recent GitHub lookups for a short TTL so repeated dashboard views
/// do not burn the unauthenticated rate limit. Failed lookups are never
/// cached. A capacity of zero disables caching.
pub struct ProfileCache {
    profiles: moka::future::Cache<String, FetchedProfile>,
    enabled: bool,
    ttl_secs: u64,
}

impl ProfileCache {
    /// Create a new profile cache
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let profiles = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs.max(1)))
            .build();

        Self {
            profiles,
            enabled: capacity > 0 && ttl_secs > 0,
            ttl_secs,
        }
    }

    /// Cache with lookups always passing through
    pub fn disabled() -> Self {
        Self::new(0, 0)
    }

    /// Return the cached profile or fetch it from GitHub
    pub async fn get_or_fetch(
        &self,
        github: &GithubClient,
        handle: &str,
    ) -> Result<FetchedProfile, GithubError> {
        let key = CacheKey::profile(handle);

        if self.enabled {
            if let Some(hit) = self.profiles.get(&key).await {
                tracing::trace!("Profile cache hit: {}", key);
                return Ok(hit);
            }
        }

        let fetched = github.fetch_profile(handle).await?;

        // Partial results are served but not remembered
        if self.enabled && fetched.repositories_complete {
            self.profiles.insert(key, fetched.clone()).await;
        }

        Ok(fetched)
    }

    pub async fn get(&self, handle: &str) -> Option<FetchedProfile> {
        self.profiles.get(&CacheKey::profile(handle)).await
    }

    pub async fn insert(&self, handle: &str, fetched: FetchedProfile) {
        if self.enabled {
            self.profiles.insert(CacheKey::profile(handle), fetched).await;
        }
    }

    /// Drop a cached profile
    pub async fn invalidate(&self, handle: &str) {
        self.profiles.invalidate(&CacheKey::profile(handle)).await;
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            enabled: self.enabled,
            entries: self.profiles.entry_count(),
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub enabled: bool,
    pub entries: u64,
    pub ttl_secs: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// GitHub handles are case-insensitive
    pub fn profile(handle: &str) -> String {
        format!("profile:{}", handle.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Profile;
    use chrono::Utc;

    fn fetched(login: &str) -> FetchedProfile {
        FetchedProfile {
            profile: Profile {
                login: login.to_string(),
                name: None,
                avatar_url: String::new(),
                created_at: Utc::now(),
                public_repos: 1,
                followers: 2,
                repos_url: None,
            },
            repositories: vec![],
            repositories_complete: true,
        }
    }

    #[test]
    fn test_cache_key_builder() {
        assert_eq!(CacheKey::profile("OctoCat"), "profile:octocat");
        assert_eq!(CacheKey::profile("  octocat "), "profile:octocat");
    }

    #[test]
    fn test_insert_and_get_case_insensitive() {
        let cache = ProfileCache::new(10, 60);
        tokio_test::block_on(async {
            cache.insert("Octocat", fetched("octocat")).await;
            let hit = cache.get("OCTOCAT").await;
            assert_eq!(hit.map(|f| f.profile.login), Some("octocat".to_string()));

            cache.invalidate("octocat").await;
            assert!(cache.get("octocat").await.is_none());
        });
    }

    #[test]
    fn test_disabled_cache_stores_nothing() {
        let cache = ProfileCache::disabled();
        tokio_test::block_on(async {
            cache.insert("octocat", fetched("octocat")).await;
            assert!(cache.get("octocat").await.is_none());
        });
        assert!(!cache.stats().enabled);
    }
}
