//! Data models for the dashboard data layer

pub mod dashboard;
pub mod fixtures;
pub mod insights;
pub mod kind;
pub mod portfolio;
pub mod resolved;
pub mod session;

// Re-export for convenience
pub use dashboard::DashboardState;
pub use insights::{
    DisclosedHolding, PoliticianProfile, PriceAlert, PublicPost, ReportLink, Sentiment,
    TimelineScenario,
};
pub use kind::ResourceKind;
pub use portfolio::{AllocationSlice, PortfolioSnapshot, PositionRecord};
pub use resolved::{DataSource, ErrorKind, ResolutionPhase, ResolvedState, ResolvedVia};
pub use session::SessionToken;
