use async_trait::async_trait;

use crate::error::RemoteError;
use crate::models::{ResourceKind, SessionToken};

/// Core trait for fetching dashboard resources from the backend
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// Fetch the raw JSON payload for one resource, scoped by the session token
    async fn fetch(
        &self,
        kind: ResourceKind,
        token: &SessionToken,
    ) -> Result<serde_json::Value, RemoteError>;

    /// Send a JSON body to a writable resource, scoped by the session token.
    ///
    /// Read-only backends reject every write.
    async fn submit(
        &self,
        kind: ResourceKind,
        _body: serde_json::Value,
        _token: &SessionToken,
    ) -> Result<serde_json::Value, RemoteError> {
        Err(RemoteError::ReadOnly(kind))
    }

    /// Optional: check that the backend is reachable
    async fn health(&self) -> Result<(), RemoteError> {
        // Default implementation assumes healthy
        Ok(())
    }
}
