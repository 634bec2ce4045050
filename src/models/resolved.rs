use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where the data in a resolution envelope came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Remote,
    Mock,
}

/// Why a resolution fell back to mock data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Network failure, timeout or non-success HTTP status
    RemoteUnavailable,
    /// Transport succeeded but the payload had the wrong shape
    MalformedResponse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::RemoteUnavailable => write!(f, "remote unavailable"),
            ErrorKind::MalformedResponse => write!(f, "malformed response"),
        }
    }
}

/// Lifecycle of a single resolution call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPhase {
    Idle,
    Resolving,
    Resolved(ResolvedVia),
}

/// Terminal outcome of a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedVia {
    Remote,
    /// No session token; mock data by choice
    NoSession,
    /// Remote attempt failed; mock data as fallback
    Fallback(ErrorKind),
}

/// Resolution envelope: the data plus where it came from.
///
/// Equality compares `source`, `data` and `error`; `resolved_at` is
/// informational only.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedState<T> {
    pub source: DataSource,
    pub data: T,
    pub error: Option<ErrorKind>,
    pub resolved_at: DateTime<Utc>,
}

impl<T> ResolvedState<T> {
    pub fn remote(data: T) -> Self {
        Self::build(DataSource::Remote, data, None)
    }

    /// Mock data served because there is no session
    pub fn mock(data: T) -> Self {
        Self::build(DataSource::Mock, data, None)
    }

    /// Mock data served because the remote attempt failed
    pub fn fallback(data: T, error: ErrorKind) -> Self {
        Self::build(DataSource::Mock, data, Some(error))
    }

    fn build(source: DataSource, data: T, error: Option<ErrorKind>) -> Self {
        Self {
            source,
            data,
            error,
            resolved_at: Utc::now(),
        }
    }

    pub fn is_remote(&self) -> bool {
        self.source == DataSource::Remote
    }

    pub fn is_mock(&self) -> bool {
        self.source == DataSource::Mock
    }

    /// Terminal phase reached by the call that produced this envelope
    pub fn phase(&self) -> ResolutionPhase {
        let via = match (self.source, self.error) {
            (DataSource::Remote, _) => ResolvedVia::Remote,
            (DataSource::Mock, None) => ResolvedVia::NoSession,
            (DataSource::Mock, Some(kind)) => ResolvedVia::Fallback(kind),
        };
        ResolutionPhase::Resolved(via)
    }

    /// Transform the payload while keeping source, error and timestamp
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResolvedState<U> {
        ResolvedState {
            source: self.source,
            data: f(self.data),
            error: self.error,
            resolved_at: self.resolved_at,
        }
    }
}

impl<T: PartialEq> PartialEq for ResolvedState<T> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.error == other.error && self.data == other.data
    }
}
