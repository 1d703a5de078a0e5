//! The displayed-profile container.
//!
//! One profile is on display at a time. A submission moves the container to
//! `Loading` and takes a fresh token; the completion must present that token,
//! and a token that is no longer current is discarded. The newest submission
//! therefore always decides the final state, even when an older fetch
//! finishes later. The lock is only held across state reads and writes,
//! never across an await point.

use std::sync::Arc;

use steamcard_core::UserProfile;
use tokio::sync::RwLock;

/// Lifecycle of the profile on display.
#[derive(Debug, Clone, Default)]
pub enum RequestState {
    /// Nothing has been looked up yet.
    #[default]
    Idle,
    /// A lookup is in flight.
    Loading,
    /// A profile is loaded and exportable.
    Loaded(Arc<UserProfile>),
    /// The last lookup failed or matched nothing.
    NotFound,
}

/// Token-guarded container for the current card.
///
/// Each lookup replaces the snapshot wholesale; states are never merged.
#[derive(Debug, Default)]
pub struct ProfileContainer {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    state: RequestState,
    token: u64,
}

impl ProfileContainer {
    /// Create a container in the `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new lookup: the state becomes `Loading` and a fresh token is
    /// issued. Pass the token back to [`complete`](Self::complete).
    pub async fn begin(&self) -> u64 {
        let mut inner = self.inner.write().await;
        inner.token += 1;
        inner.state = RequestState::Loading;
        inner.token
    }

    /// Finish the lookup that was issued `token` with its outcome
    /// (`Loaded` or `NotFound`).
    ///
    /// Returns `false` and leaves the state untouched when a newer
    /// submission has superseded this one.
    pub async fn complete(&self, token: u64, outcome: RequestState) -> bool {
        let mut inner = self.inner.write().await;
        if inner.token != token {
            tracing::debug!(
                token,
                current = inner.token,
                "stale lookup completion discarded"
            );
            return false;
        }
        inner.state = outcome;
        true
    }

    /// The current display state.
    pub async fn snapshot(&self) -> RequestState {
        self.inner.read().await.state.clone()
    }

    /// The loaded profile, when one is on display.
    pub async fn loaded_profile(&self) -> Option<Arc<UserProfile>> {
        match &self.inner.read().await.state {
            RequestState::Loaded(profile) => Some(Arc::clone(profile)),
            _ => None,
        }
    }
}
