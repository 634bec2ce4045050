use tracing::warn;

use crate::error::StoreError;
use crate::models::{fixtures, PositionRecord, SessionToken};

/// Key under which the session token is persisted
pub const TOKEN_KEY: &str = "pt_token";

/// Key under which locally edited positions are persisted
pub const POSITIONS_KEY: &str = "pt_positions";

/// Persisted string storage for the session token.
///
/// Absence of a key is a normal state, not an error.
pub trait LocalSessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Read the current session token; empty when nothing is stored
pub fn load_token(store: &dyn LocalSessionStore) -> SessionToken {
    SessionToken::from(store.get(TOKEN_KEY))
}

/// Save a token as typed by the user. Blank input clears the session.
pub fn save_token(store: &dyn LocalSessionStore, raw: &str) -> Result<SessionToken, StoreError> {
    let token = SessionToken::new(raw);
    if token.is_empty() {
        store.remove(TOKEN_KEY)?;
    } else {
        store.set(TOKEN_KEY, token.as_str())?;
    }
    Ok(token)
}

pub fn clear_token(store: &dyn LocalSessionStore) -> Result<(), StoreError> {
    store.remove(TOKEN_KEY)
}

/// Locally edited positions, or the mock positions when none are saved.
///
/// An unreadable entry is logged and treated as absent.
pub fn load_positions(store: &dyn LocalSessionStore) -> Vec<PositionRecord> {
    let Some(raw) = store.get(POSITIONS_KEY) else {
        return fixtures::mock_positions();
    };
    match serde_json::from_str(&raw) {
        Ok(positions) => positions,
        Err(e) => {
            warn!("Ignoring unreadable {}: {}", POSITIONS_KEY, e);
            fixtures::mock_positions()
        }
    }
}

/// Persist the edited positions table as-is, including rows still being filled in
pub fn save_positions(
    store: &dyn LocalSessionStore,
    positions: &[PositionRecord],
) -> Result<(), StoreError> {
    let json = serde_json::to_string(positions)?;
    store.set(POSITIONS_KEY, &json)
}
