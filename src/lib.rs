//! Portfolio Session Resolver
//!
//! Data layer for a portfolio-tracking dashboard. Given an optional session
//! token it fetches live data from the backend or falls back to deterministic
//! mock data, and always hands views a renderable result.

// Public modules - these are the API surface
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod resolver;
pub mod traits;
pub mod utils;

// Re-export commonly used items for easier access
pub use config::ResolverConfig;
pub use error::{RemoteError, StoreError};
pub use handlers::ConsoleEventHandler;
pub use models::{
    AllocationSlice, DashboardState, DataSource, ErrorKind, PortfolioSnapshot, PositionRecord,
    ResolutionPhase, ResolvedState, ResolvedVia, ResourceKind, SessionToken,
};
pub use providers::{FileSessionStore, HttpRemoteApi, InMemorySessionStore, TOKEN_HEADER};
pub use resolver::{
    DashboardView, RefreshOutcome, Resource, ResourceData, SessionDataResolver, ViewPhase,
};
pub use traits::{LocalSessionStore, RemoteApi, ResolutionHandler};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
