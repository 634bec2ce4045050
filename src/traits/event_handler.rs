use async_trait::async_trait;

use crate::models::DashboardState;

/// Handler for dashboard resolutions applied by a view
#[async_trait]
pub trait ResolutionHandler: Send + Sync {
    /// Called after a resolution became the visible state
    async fn handle_dashboard(&self, dashboard: &DashboardState);

    /// Called when a resolution was discarded because a newer one started
    async fn handle_superseded(&self, _generation: u64) {
        // Default implementation does nothing
    }
}
