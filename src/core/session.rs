//! Dashboard session state
//!
//! One record holds everything a dashboard view needs: the selected
//! workspace role and the load state of the current search. Transitions:
//!
//! ```text
//! Idle --begin_search--> Loading --resolve(Ok)--> Loaded
//!                                 \--resolve(Err)--> Errored --dismiss_error--> Idle
//! ```
//!
//! Every search gets a ticket. Only the newest ticket may resolve the
//! session, so a slow response for an earlier handle cannot overwrite the
//! result of a later search.

use serde::{Deserialize, Serialize};

use crate::core::Analyzer;
use crate::models::{AnalysisResult, FetchedProfile, MatchResult};
use crate::services::GithubError;

/// Which workspace the user picked on the landing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Unselected,
    Visitor,
    Recruiter,
}

/// Handle for one in-flight search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub id: u64,
    pub handle: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading { request_id: u64, handle: String },
    Loaded(FetchedProfile),
    Errored { message: String },
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    role: Role,
    state: LoadState,
    last_request_id: u64,
    analyzer: Analyzer,
}

impl Dashboard {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            role: Role::Unselected,
            state: LoadState::Idle,
            last_request_id: 0,
            analyzer,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Switch workspace; `Unselected` returns to the landing screen and
    /// drops the current search.
    pub fn select_role(&mut self, role: Role) {
        self.role = role;
        if role == Role::Unselected {
            // Any ticket issued so far is now stale
            self.last_request_id += 1;
            self.state = LoadState::Idle;
        }
    }

    /// Start a search, superseding any search still in flight
    pub fn begin_search(&mut self, handle: &str) -> Option<RequestTicket> {
        let handle = handle.trim();
        if handle.is_empty() {
            return None;
        }

        self.last_request_id += 1;
        self.state = LoadState::Loading {
            request_id: self.last_request_id,
            handle: handle.to_string(),
        };

        Some(RequestTicket {
            id: self.last_request_id,
            handle: handle.to_string(),
        })
    }

    /// Apply the outcome of a search
    ///
    /// Returns false and leaves the session untouched when the ticket has
    /// been superseded by a newer search.
    pub fn resolve(
        &mut self,
        ticket: &RequestTicket,
        outcome: Result<FetchedProfile, GithubError>,
    ) -> bool {
        if ticket.id != self.last_request_id {
            tracing::debug!(
                "Ignoring stale response for {} (request {}, latest {})",
                ticket.handle,
                ticket.id,
                self.last_request_id
            );
            return false;
        }

        self.state = match outcome {
            Ok(fetched) => LoadState::Loaded(fetched),
            // Errors replace the previous profile entirely
            Err(e) => LoadState::Errored { message: e.to_string() },
        };
        true
    }

    pub fn dismiss_error(&mut self) {
        if matches!(self.state, LoadState::Errored { .. }) {
            self.state = LoadState::Idle;
        }
    }

    pub fn profile(&self) -> Option<&FetchedProfile> {
        match &self.state {
            LoadState::Loaded(fetched) => Some(fetched),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Errored { message } => Some(message),
            _ => None,
        }
    }

    /// Recompute the analysis for the loaded profile
    pub fn analysis(&self) -> Option<AnalysisResult> {
        self.profile().map(|fetched| self.analyzer.analyze(fetched))
    }

    /// Job description match, recruiter workspace only
    pub fn match_job(&self, job_description: &str) -> Option<MatchResult> {
        if self.role != Role::Recruiter {
            return None;
        }
        self.profile()
            .map(|fetched| self.analyzer.compatibility(job_description, &fetched.repositories))
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Analyzer::default())
    }
}
