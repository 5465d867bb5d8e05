//! Client-side listing cache and liked/saved sets.
//!
//! The in-memory counterpart of the original job store: the last fetched
//! listings plus per-session liked/saved membership. Membership is not
//! synced to the backend (see DESIGN.md).

use std::collections::HashSet;

use hirehub_models::{Job, JobId};

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Listing cache for one session.
#[derive(Debug, Default)]
pub struct JobBoard {
    jobs: Vec<Job>,
    liked: HashSet<JobId>,
    saved: HashSet<JobId>,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refetch the listing through `client`, replacing the cache.
    pub async fn refresh_listings(&mut self, client: &ApiClient) -> ClientResult<&[Job]> {
        self.jobs = client.fetch_jobs().await?;
        Ok(&self.jobs)
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, id: &JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| &job.id == id)
    }

    /// Flip liked membership; returns the new state.
    pub fn toggle_liked(&mut self, id: &JobId) -> bool {
        toggle(&mut self.liked, id)
    }

    /// Flip saved membership; returns the new state.
    pub fn toggle_saved(&mut self, id: &JobId) -> bool {
        toggle(&mut self.saved, id)
    }

    pub fn is_liked(&self, id: &JobId) -> bool {
        self.liked.contains(id)
    }

    pub fn is_saved(&self, id: &JobId) -> bool {
        self.saved.contains(id)
    }

    /// Cached jobs the user saved, in listing order.
    pub fn saved_jobs(&self) -> Vec<&Job> {
        self.jobs
            .iter()
            .filter(|job| self.saved.contains(&job.id))
            .collect()
    }
}

fn toggle(set: &mut HashSet<JobId>, id: &JobId) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.clone());
        true
    }
}
