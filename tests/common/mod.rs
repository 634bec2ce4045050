#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{json, Value};

use portfolio_session_resolver::models::DashboardState;
use portfolio_session_resolver::{
    InMemorySessionStore, RemoteApi, RemoteError, ResolutionHandler, ResourceKind,
    SessionDataResolver, SessionToken,
};

/// Canned reply for one resource
#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
    Timeout,
}

/// Fake backend answering from a script, optionally slowed per token
#[derive(Default)]
pub struct ScriptedApi {
    replies: HashMap<ResourceKind, Reply>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
    tokens_seen: Mutex<Vec<String>>,
    write_status: Option<u16>,
    submitted: Mutex<Vec<(ResourceKind, Value)>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every kind replies with the same status
    pub fn failing(status: u16) -> Self {
        ResourceKind::ALL
            .into_iter()
            .fold(Self::new(), |api, kind| api.reply(kind, Reply::Status(status)))
    }

    /// Portfolio, positions and allocation reply with `remote_*` payloads
    pub fn dashboard_ok() -> Self {
        Self::new()
            .reply(ResourceKind::Portfolio, Reply::Json(remote_portfolio()))
            .reply(ResourceKind::Positions, Reply::Json(remote_positions()))
            .reply(ResourceKind::Allocation, Reply::Json(remote_allocation()))
    }

    pub fn reply(mut self, kind: ResourceKind, reply: Reply) -> Self {
        self.replies.insert(kind, reply);
        self
    }

    pub fn delay_for(mut self, token: &str, delay: Duration) -> Self {
        self.delays.insert(token.to_string(), delay);
        self
    }

    /// Every write is answered with this status
    pub fn reject_writes(mut self, status: u16) -> Self {
        self.write_status = Some(status);
        self
    }

    pub fn submitted(&self) -> Vec<(ResourceKind, Value)> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn tokens_seen(&self) -> Vec<String> {
        self.tokens_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteApi for ScriptedApi {
    async fn fetch(&self, kind: ResourceKind, token: &SessionToken) -> Result<Value, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tokens_seen.lock().unwrap().push(token.as_str().to_string());

        if let Some(delay) = self.delays.get(token.as_str()) {
            tokio::time::sleep(*delay).await;
        }

        match self.replies.get(&kind) {
            Some(Reply::Json(value)) => Ok(value.clone()),
            Some(Reply::Status(code)) => Err(RemoteError::Status(*code)),
            Some(Reply::Timeout) => Err(RemoteError::Timeout),
            None => Err(RemoteError::Status(404)),
        }
    }

    async fn submit(
        &self,
        kind: ResourceKind,
        body: Value,
        token: &SessionToken,
    ) -> Result<Value, RemoteError> {
        self.tokens_seen.lock().unwrap().push(token.as_str().to_string());
        self.submitted.lock().unwrap().push((kind, body.clone()));
        match self.write_status {
            Some(code) => Err(RemoteError::Status(code)),
            None => Ok(json!({ "ok": true, "saved": body })),
        }
    }
}

/// Fake backend whose portfolio value depends on the token
pub struct PerTokenApi {
    portfolios: DashMap<String, (Duration, f64)>,
}

impl PerTokenApi {
    pub fn new(entries: &[(&str, Duration, f64)]) -> Self {
        let portfolios = DashMap::new();
        for (token, delay, value) in entries {
            portfolios.insert(token.to_string(), (*delay, *value));
        }
        Self { portfolios }
    }
}

#[async_trait]
impl RemoteApi for PerTokenApi {
    async fn fetch(&self, kind: ResourceKind, token: &SessionToken) -> Result<Value, RemoteError> {
        let entry = self.portfolios.get(token.as_str()).map(|e| *e.value());
        let Some((delay, value)) = entry else {
            return Err(RemoteError::Status(401));
        };
        tokio::time::sleep(delay).await;

        match kind {
            ResourceKind::Portfolio => Ok(json!({ "value": value, "dayChange": 0, "dayPct": 0 })),
            ResourceKind::Positions => Ok(remote_positions()),
            ResourceKind::Allocation => Ok(remote_allocation()),
            _ => Err(RemoteError::Status(404)),
        }
    }
}

/// Records what a view reported
#[derive(Default)]
pub struct RecordingHandler {
    pub applied: Mutex<Vec<DashboardState>>,
    pub superseded: Mutex<Vec<u64>>,
}

#[async_trait]
impl ResolutionHandler for RecordingHandler {
    async fn handle_dashboard(&self, dashboard: &DashboardState) {
        self.applied.lock().unwrap().push(dashboard.clone());
    }

    async fn handle_superseded(&self, generation: u64) {
        self.superseded.lock().unwrap().push(generation);
    }
}

/// Records applied portfolio values; the first notification is slow
#[derive(Default)]
pub struct SlowFirstHandler {
    pub delay: Duration,
    pub values: Mutex<Vec<f64>>,
    calls: AtomicUsize,
}

impl SlowFirstHandler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }
}

#[async_trait]
impl ResolutionHandler for SlowFirstHandler {
    async fn handle_dashboard(&self, dashboard: &DashboardState) {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            tokio::time::sleep(self.delay).await;
        }
        self.values.lock().unwrap().push(dashboard.portfolio.data.value);
    }
}

pub fn remote_portfolio() -> Value {
    json!({ "value": 52340, "dayChange": 532, "dayPct": 1.03 })
}

pub fn remote_positions() -> Value {
    json!([
        { "symbol": "AAPL", "name": "Apple Inc.", "qty": 30, "avgCost": 150.0, "price": 177.22, "weight": 60 },
        { "symbol": "VOO", "name": "S&P 500 ETF", "qty": 5, "avgCost": 480.0, "price": 512.1, "weight": 40 }
    ])
}

pub fn remote_allocation() -> Value {
    json!([
        { "name": "AAPL", "value": 60 },
        { "name": "VOO", "value": 40 }
    ])
}

pub fn resolver_with(api: Arc<dyn RemoteApi>) -> SessionDataResolver {
    SessionDataResolver::new(api, Arc::new(InMemorySessionStore::new()))
}
