//! Core traits for the data layer

pub mod event_handler;
pub mod remote_api;
pub mod session_store;

// Re-export for convenience
pub use event_handler::ResolutionHandler;
pub use remote_api::RemoteApi;
pub use session_store::{
    clear_token, load_positions, load_token, save_positions, save_token, LocalSessionStore,
    POSITIONS_KEY, TOKEN_KEY,
};
