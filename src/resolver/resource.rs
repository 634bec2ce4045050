use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::fixtures;
use crate::models::portfolio::{allocation_total, weight_total};
use crate::models::{
    AllocationSlice, PoliticianProfile, PortfolioSnapshot, PositionRecord, PriceAlert,
    ReportLink, ResourceKind, TimelineScenario,
};

/// A payload type the resolver can fetch remotely or substitute with mock data
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: ResourceKind;

    /// Canonical mock dataset for this resource
    fn mock() -> Self;

    /// Check field constraints after decoding
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Percentage total, for resources that carry one
    fn percent_total(&self) -> Option<f64> {
        None
    }
}

fn validate_each<T>(items: &[T], check: impl Fn(&T) -> Result<(), String>) -> Result<(), String> {
    items.iter().try_for_each(check)
}

impl Resource for PortfolioSnapshot {
    const KIND: ResourceKind = ResourceKind::Portfolio;

    fn mock() -> Self {
        fixtures::mock_portfolio()
    }

    fn validate(&self) -> Result<(), String> {
        if [self.value, self.day_change, self.day_pct].iter().all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err("portfolio summary contains a non-finite number".to_string())
        }
    }
}

impl Resource for Vec<PositionRecord> {
    const KIND: ResourceKind = ResourceKind::Positions;

    fn mock() -> Self {
        fixtures::mock_positions()
    }

    fn validate(&self) -> Result<(), String> {
        validate_each(self, PositionRecord::validate)
    }

    fn percent_total(&self) -> Option<f64> {
        Some(weight_total(self))
    }
}

impl Resource for Vec<AllocationSlice> {
    const KIND: ResourceKind = ResourceKind::Allocation;

    fn mock() -> Self {
        fixtures::mock_allocation()
    }

    fn validate(&self) -> Result<(), String> {
        validate_each(self, AllocationSlice::validate)
    }

    fn percent_total(&self) -> Option<f64> {
        Some(allocation_total(self))
    }
}

impl Resource for Vec<TimelineScenario> {
    const KIND: ResourceKind = ResourceKind::Timelines;

    fn mock() -> Self {
        fixtures::mock_timelines()
    }
}

impl Resource for Vec<PoliticianProfile> {
    const KIND: ResourceKind = ResourceKind::Politicians;

    fn mock() -> Self {
        fixtures::mock_politicians()
    }
}

impl Resource for Vec<PriceAlert> {
    const KIND: ResourceKind = ResourceKind::Alerts;

    fn mock() -> Self {
        fixtures::mock_alerts()
    }

    fn validate(&self) -> Result<(), String> {
        validate_each(self, PriceAlert::validate)
    }
}

impl Resource for Vec<ReportLink> {
    const KIND: ResourceKind = ResourceKind::Reports;

    fn mock() -> Self {
        fixtures::mock_reports()
    }
}

/// Payload of any resource kind, for callers that pick the kind at runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResourceData {
    Portfolio(PortfolioSnapshot),
    Positions(Vec<PositionRecord>),
    Allocation(Vec<AllocationSlice>),
    Timelines(Vec<TimelineScenario>),
    Politicians(Vec<PoliticianProfile>),
    Alerts(Vec<PriceAlert>),
    Reports(Vec<ReportLink>),
}

impl ResourceData {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceData::Portfolio(_) => ResourceKind::Portfolio,
            ResourceData::Positions(_) => ResourceKind::Positions,
            ResourceData::Allocation(_) => ResourceKind::Allocation,
            ResourceData::Timelines(_) => ResourceKind::Timelines,
            ResourceData::Politicians(_) => ResourceKind::Politicians,
            ResourceData::Alerts(_) => ResourceKind::Alerts,
            ResourceData::Reports(_) => ResourceKind::Reports,
        }
    }

    /// Canonical mock dataset for a kind
    pub fn mock_for(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Portfolio => ResourceData::Portfolio(PortfolioSnapshot::mock()),
            ResourceKind::Positions => ResourceData::Positions(Resource::mock()),
            ResourceKind::Allocation => ResourceData::Allocation(Resource::mock()),
            ResourceKind::Timelines => ResourceData::Timelines(Resource::mock()),
            ResourceKind::Politicians => ResourceData::Politicians(Resource::mock()),
            ResourceKind::Alerts => ResourceData::Alerts(Resource::mock()),
            ResourceKind::Reports => ResourceData::Reports(Resource::mock()),
        }
    }
}
