use crate::models::{FetchedProfile, Profile, RepositorySummary, MAX_REPOSITORIES};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when looking up a GitHub profile
#[derive(Debug, Error)]
pub enum GithubError {
    #[error("Invalid handle: {0}")]
    InvalidHandle(String),

    #[error("Profile not found: {handle} ({reason})")]
    ProfileNotFound { handle: String, reason: String },

    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

/// GitHub REST API client
///
/// Looks up a user record and then that user's most recently updated
/// repositories. The two requests run one after the other.
pub struct GithubClient {
    base_url: String,
    client: Client,
}

impl GithubClient {
    /// Create a new GitHub client
    pub fn new(
        base_url: String,
        token: Option<&str>,
        user_agent: &str,
        timeout_secs: u64,
    ) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a profile and its repositories
    ///
    /// Fails with `ProfileNotFound` when the user lookup fails for any
    /// reason. A failed repository listing does not fail the lookup: the
    /// list comes back empty and `repositories_complete` is false.
    pub async fn fetch_profile(&self, handle: &str) -> Result<FetchedProfile, GithubError> {
        let handle = handle.trim();
        if handle.is_empty() {
            return Err(GithubError::InvalidHandle("handle must not be empty".to_string()));
        }

        let profile = self.get_user(handle).await?;

        let (repositories, repositories_complete) = match self.get_repositories(&profile).await {
            Ok(repos) => (repos, true),
            Err(reason) => {
                tracing::warn!(
                    "Repository listing failed for {}, continuing without repositories: {}",
                    profile.login,
                    reason
                );
                (Vec::new(), false)
            }
        };

        tracing::debug!(
            "Fetched profile {} with {} repositories",
            profile.login,
            repositories.len()
        );

        Ok(FetchedProfile {
            profile,
            repositories,
            repositories_complete,
        })
    }

    /// Look up a single user by handle
    pub async fn get_user(&self, handle: &str) -> Result<Profile, GithubError> {
        let url = format!("{}/users/{}", self.base_url, urlencoding::encode(handle));

        tracing::debug!("Fetching user from: {}", url);

        let not_found = |reason: String| GithubError::ProfileNotFound {
            handle: handle.to_string(),
            reason,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| not_found(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::info!("User lookup for {} returned {}", handle, status);
            return Err(not_found(format!("GitHub returned {}", status)));
        }

        response
            .json::<Profile>()
            .await
            .map_err(|e| not_found(format!("invalid user payload: {}", e)))
    }

    /// List the user's most recently updated repositories (at most 12)
    async fn get_repositories(&self, profile: &Profile) -> Result<Vec<RepositorySummary>, String> {
        let url = self.repositories_url(profile);
        let per_page = MAX_REPOSITORIES.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[("sort", "updated"), ("per_page", per_page.as_str())])
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("GitHub returned {}", response.status()));
        }

        let mut repositories: Vec<RepositorySummary> = response
            .json()
            .await
            .map_err(|e| format!("invalid repository payload: {}", e))?;

        repositories.truncate(MAX_REPOSITORIES);
        Ok(repositories)
    }

    /// The payload's `repos_url` is only followed when it points back at the
    /// configured API, since the client carries the bearer token.
    fn repositories_url(&self, profile: &Profile) -> String {
        match profile.repos_url.as_deref() {
            Some(url) if self.is_api_url(url) => url.to_string(),
            _ => format!(
                "{}/users/{}/repos",
                self.base_url,
                urlencoding::encode(&profile.login)
            ),
        }
    }

    fn is_api_url(&self, url: &str) -> bool {
        url.strip_prefix(self.base_url.as_str())
            .map_or(false, |rest| rest.starts_with('/'))
    }
}
