use serde::Serialize;

use super::portfolio::{AllocationSlice, PortfolioSnapshot, PositionRecord};
use super::resolved::{ErrorKind, ResolvedState};

/// The three resources a dashboard view needs, each resolved independently
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub portfolio: ResolvedState<PortfolioSnapshot>,
    pub positions: ResolvedState<Vec<PositionRecord>>,
    pub allocation: ResolvedState<Vec<AllocationSlice>>,
}

impl DashboardState {
    /// True if any part of the dashboard is showing mock data
    pub fn using_mock(&self) -> bool {
        self.portfolio.is_mock() || self.positions.is_mock() || self.allocation.is_mock()
    }

    /// Errors that caused a fallback, in portfolio/positions/allocation order
    pub fn errors(&self) -> Vec<(&'static str, ErrorKind)> {
        [
            ("portfolio", self.portfolio.error),
            ("positions", self.positions.error),
            ("allocation", self.allocation.error),
        ]
        .into_iter()
        .filter_map(|(name, error)| error.map(|e| (name, e)))
        .collect()
    }

    /// Advisory text for a banner, if anything is not live
    pub fn banner(&self) -> Option<String> {
        if !self.using_mock() {
            return None;
        }
        let errors = self.errors();
        if errors.is_empty() {
            return Some("Using mock data. Set a session token to fetch your portfolio.".to_string());
        }
        let parts: Vec<String> = errors
            .iter()
            .map(|(name, kind)| format!("{} ({})", name, kind))
            .collect();
        Some(format!(
            "Showing mock data for {}. Live data could not be loaded.",
            parts.join(", ")
        ))
    }
}
