use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::models::{DashboardState, SessionToken};
use crate::resolver::session_resolver::SessionDataResolver;
use crate::traits::event_handler::ResolutionHandler;

/// Result of a refresh request
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The resolution became the visible state
    Applied(DashboardState),
    /// A newer refresh started first; nothing was applied
    Superseded,
}

/// Visible-state lifecycle of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Resolving,
    Resolved,
}

#[derive(Default)]
struct ViewState {
    applied_generation: u64,
    current: Option<DashboardState>,
}

/// Marks a refresh as settled when it finishes or its future is dropped
struct SettleOnDrop<'a> {
    settled: &'a AtomicU64,
    generation: u64,
}

impl Drop for SettleOnDrop<'_> {
    fn drop(&mut self) {
        self.settled.fetch_max(self.generation, Ordering::SeqCst);
    }
}

/// Holds the dashboard a view shows. Last write wins: only the most recent
/// refresh may replace the visible state.
pub struct DashboardView {
    resolver: Arc<SessionDataResolver>,
    handlers: Vec<Arc<dyn ResolutionHandler>>,
    generation: AtomicU64,
    settled: AtomicU64,
    inflight: Mutex<Option<CancellationToken>>,
    state: Mutex<ViewState>,
}

impl DashboardView {
    /// Create a new view over a resolver
    pub fn new(resolver: Arc<SessionDataResolver>) -> Self {
        Self {
            resolver,
            handlers: Vec::new(),
            generation: AtomicU64::new(0),
            settled: AtomicU64::new(0),
            inflight: Mutex::new(None),
            state: Mutex::new(ViewState::default()),
        }
    }

    /// Add a handler notified on every applied resolution
    pub fn add_handler(&mut self, handler: Arc<dyn ResolutionHandler>) {
        self.handlers.push(handler);
    }

    /// Last applied dashboard, if any
    pub async fn current(&self) -> Option<DashboardState> {
        self.state.lock().await.current.clone()
    }

    /// `Resolving` while the latest refresh is still running. A refresh
    /// dropped before it settled leaves the previous dashboard visible.
    pub async fn phase(&self) -> ViewPhase {
        let state = self.state.lock().await;
        let latest = self.generation.load(Ordering::SeqCst);
        if latest == 0 {
            ViewPhase::Idle
        } else if self.settled.load(Ordering::SeqCst) < latest {
            ViewPhase::Resolving
        } else if state.current.is_none() {
            ViewPhase::Idle
        } else {
            ViewPhase::Resolved
        }
    }

    /// Refresh using the token in the session store
    pub async fn refresh_stored(&self) -> RefreshOutcome {
        let token = self.resolver.session_token();
        self.refresh(token).await
    }

    /// Resolve the dashboard for `token` and apply it unless a newer
    /// refresh started in the meantime. Cancels any refresh still in flight.
    pub async fn refresh(&self, token: SessionToken) -> RefreshOutcome {
        let cancel = CancellationToken::new();
        let generation = {
            let mut inflight = self.inflight.lock().await;
            if let Some(previous) = inflight.replace(cancel.clone()) {
                previous.cancel();
            }
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };
        let _settle = SettleOnDrop {
            settled: &self.settled,
            generation,
        };
        debug!("Refresh #{} started for session {}", generation, token);

        let dashboard = tokio::select! {
            _ = cancel.cancelled() => {
                return self.superseded(generation).await;
            }
            dashboard = self.resolver.resolve_dashboard(&token) => dashboard,
        };

        // Handlers run under the state lock so they see applies in order
        let mut state = self.state.lock().await;
        if generation != self.generation.load(Ordering::SeqCst) {
            drop(state);
            return self.superseded(generation).await;
        }
        state.applied_generation = generation;
        state.current = Some(dashboard.clone());

        for handler in &self.handlers {
            handler.handle_dashboard(&dashboard).await;
        }
        drop(state);

        RefreshOutcome::Applied(dashboard)
    }

    async fn superseded(&self, generation: u64) -> RefreshOutcome {
        debug!("Refresh #{} superseded, discarding", generation);
        for handler in &self.handlers {
            handler.handle_superseded(generation).await;
        }
        RefreshOutcome::Superseded
    }
}
