//! Session-gated resolution of dashboard resources

pub mod dashboard_view;
pub mod resource;
pub mod session_resolver;

pub use dashboard_view::{DashboardView, RefreshOutcome, ViewPhase};
pub use resource::{Resource, ResourceData};
pub use session_resolver::SessionDataResolver;
