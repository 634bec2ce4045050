use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::RemoteError;
use crate::models::portfolio::is_full_allocation;
use crate::models::{
    AllocationSlice, DashboardState, PoliticianProfile, PortfolioSnapshot, PositionRecord,
    PriceAlert, ReportLink, ResolvedState, ResourceKind, SessionToken, TimelineScenario,
};
use crate::resolver::resource::{Resource, ResourceData};
use crate::traits::remote_api::RemoteApi;
use crate::traits::session_store::{load_token, LocalSessionStore};

/// Decides between live and mock data for each resource request.
///
/// Never fails: every remote problem is captured in the returned envelope.
pub struct SessionDataResolver {
    remote: Arc<dyn RemoteApi>,
    store: Arc<dyn LocalSessionStore>,
}

impl SessionDataResolver {
    /// Create a new resolver
    pub fn new(remote: Arc<dyn RemoteApi>, store: Arc<dyn LocalSessionStore>) -> Self {
        Self { remote, store }
    }

    /// Current token from the session store
    pub fn session_token(&self) -> SessionToken {
        load_token(self.store.as_ref())
    }

    /// Resolve one resource for the given session
    pub async fn resolve<T: Resource>(&self, token: &SessionToken) -> ResolvedState<T> {
        if token.is_empty() {
            debug!("No session token, serving mock {}", T::KIND);
            return ResolvedState::mock(T::mock());
        }

        match self.fetch::<T>(token).await {
            Ok(data) => ResolvedState::remote(data),
            Err(e) => {
                let kind = e.kind();
                warn!(
                    "Falling back to mock {} for session {}: {} ({})",
                    T::KIND,
                    token,
                    e,
                    kind
                );
                ResolvedState::fallback(T::mock(), kind)
            }
        }
    }

    async fn fetch<T: Resource>(&self, token: &SessionToken) -> Result<T, RemoteError> {
        let payload = self.remote.fetch(T::KIND, token).await?;
        let data: T =
            serde_json::from_value(payload).map_err(|e| RemoteError::Decode(e.to_string()))?;
        data.validate().map_err(RemoteError::Invalid)?;

        if let Some(total) = data.percent_total() {
            if !is_full_allocation(total) {
                debug!("{} percentages total {:.2}, not 100", T::KIND, total);
            }
        }

        Ok(data)
    }

    /// Resolve a resource chosen at runtime
    pub async fn resolve_kind(
        &self,
        kind: ResourceKind,
        token: &SessionToken,
    ) -> ResolvedState<ResourceData> {
        match kind {
            ResourceKind::Portfolio => self
                .resolve::<PortfolioSnapshot>(token)
                .await
                .map(ResourceData::Portfolio),
            ResourceKind::Positions => self
                .resolve::<Vec<PositionRecord>>(token)
                .await
                .map(ResourceData::Positions),
            ResourceKind::Allocation => self
                .resolve::<Vec<AllocationSlice>>(token)
                .await
                .map(ResourceData::Allocation),
            ResourceKind::Timelines => self
                .resolve::<Vec<TimelineScenario>>(token)
                .await
                .map(ResourceData::Timelines),
            ResourceKind::Politicians => self
                .resolve::<Vec<PoliticianProfile>>(token)
                .await
                .map(ResourceData::Politicians),
            ResourceKind::Alerts => self
                .resolve::<Vec<PriceAlert>>(token)
                .await
                .map(ResourceData::Alerts),
            ResourceKind::Reports => self
                .resolve::<Vec<ReportLink>>(token)
                .await
                .map(ResourceData::Reports),
        }
    }

    /// Resolve portfolio, positions and allocation concurrently.
    ///
    /// Each part settles on its own; a failure in one never affects the others.
    pub async fn resolve_dashboard(&self, token: &SessionToken) -> DashboardState {
        let (portfolio, positions, allocation) = tokio::join!(
            self.resolve::<PortfolioSnapshot>(token),
            self.resolve::<Vec<PositionRecord>>(token),
            self.resolve::<Vec<AllocationSlice>>(token),
        );

        let dashboard = DashboardState {
            portfolio,
            positions,
            allocation,
        };
        info!(
            "Dashboard resolved for session {} (mock: {}, errors: {})",
            token,
            dashboard.using_mock(),
            dashboard.errors().len()
        );
        dashboard
    }

    /// Resolve one resource using the stored session token
    pub async fn resolve_stored<T: Resource>(&self) -> ResolvedState<T> {
        self.resolve(&self.session_token()).await
    }

    /// Resolve the dashboard using the stored session token
    pub async fn resolve_dashboard_stored(&self) -> DashboardState {
        self.resolve_dashboard(&self.session_token()).await
    }

    /// Create or replace a position on the backend.
    ///
    /// Unlike reads there is no mock fallback: without a session, or when the
    /// record is invalid, nothing is sent.
    pub async fn upsert_position(
        &self,
        token: &SessionToken,
        position: &PositionRecord,
    ) -> Result<serde_json::Value, RemoteError> {
        position.validate().map_err(RemoteError::Invalid)?;
        self.submit(ResourceKind::Positions, position, token).await
    }

    /// Create a price alert on the backend
    pub async fn create_alert(
        &self,
        token: &SessionToken,
        alert: &PriceAlert,
    ) -> Result<serde_json::Value, RemoteError> {
        alert.validate().map_err(RemoteError::Invalid)?;
        self.submit(ResourceKind::Alerts, alert, token).await
    }

    async fn submit<B: Serialize>(
        &self,
        kind: ResourceKind,
        body: &B,
        token: &SessionToken,
    ) -> Result<serde_json::Value, RemoteError> {
        if token.is_empty() {
            return Err(RemoteError::NoSession);
        }
        let body = serde_json::to_value(body).map_err(|e| RemoteError::Invalid(e.to_string()))?;

        match self.remote.submit(kind, body, token).await {
            Ok(reply) => {
                info!("Saved {} for session {}", kind, token);
                Ok(reply)
            }
            Err(e) => {
                warn!("Failed to save {} for session {}: {}", kind, token, e);
                Err(e)
            }
        }
    }
}

impl Clone for SessionDataResolver {
    fn clone(&self) -> Self {
        Self {
            remote: self.remote.clone(),
            store: self.store.clone(),
        }
    }
}
