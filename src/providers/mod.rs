//! Concrete backends for the remote API and the session store

pub mod http_api;
pub mod session_store;

// Re-export for convenience
pub use http_api::{HttpRemoteApi, TOKEN_HEADER};
pub use session_store::{FileSessionStore, InMemorySessionStore};
