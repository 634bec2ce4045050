use serde::{Deserialize, Serialize};

/// Headline numbers for a portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub value: f64,
    pub day_change: f64,
    pub day_pct: f64,
}

impl PortfolioSnapshot {
    /// Create a new snapshot
    pub fn new(value: f64, day_change: f64, day_pct: f64) -> Self {
        Self {
            value,
            day_change,
            day_pct,
        }
    }

    /// Value at the previous close
    pub fn previous_value(&self) -> f64 {
        self.value - self.day_change
    }

    pub fn is_up(&self) -> bool {
        self.day_change >= 0.0
    }
}

/// A single holding as shown in the positions table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    pub symbol: String,
    pub name: String,
    pub qty: f64,
    pub avg_cost: f64,
    pub price: f64,
    /// Percent of the portfolio, 0..=100
    pub weight: f64,
}

impl PositionRecord {
    /// Create a new position; the symbol is upper-cased
    pub fn new(
        symbol: impl AsRef<str>,
        name: impl Into<String>,
        qty: f64,
        avg_cost: f64,
        price: f64,
        weight: f64,
    ) -> Self {
        Self {
            symbol: symbol.as_ref().trim().to_uppercase(),
            name: name.into(),
            qty,
            avg_cost,
            price,
            weight,
        }
    }

    pub fn market_value(&self) -> f64 {
        self.qty * self.price
    }

    pub fn cost_basis(&self) -> f64 {
        self.qty * self.avg_cost
    }

    pub fn unrealized_pnl(&self) -> f64 {
        (self.price - self.avg_cost) * self.qty
    }

    /// Check field constraints, returning a description of the first violation
    pub fn validate(&self) -> Result<(), String> {
        if self.symbol.trim().is_empty() {
            return Err("position with empty symbol".to_string());
        }
        for (field, value) in [
            ("qty", self.qty),
            ("avgCost", self.avg_cost),
            ("price", self.price),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{}: {} must be a non-negative number, got {}", self.symbol, field, value));
            }
        }
        if !self.weight.is_finite() || !(0.0..=100.0).contains(&self.weight) {
            return Err(format!("{}: weight {} outside 0..=100", self.symbol, self.weight));
        }
        Ok(())
    }
}

/// One slice of the allocation pie; `value` is a percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub name: String,
    pub value: f64,
}

impl AllocationSlice {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("allocation slice with empty name".to_string());
        }
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(format!("{}: allocation value {} must be non-negative", self.name, self.value));
        }
        Ok(())
    }
}

/// Slack allowed before a weight total is reported as off
pub const WEIGHT_TOTAL_TOLERANCE: f64 = 0.5;

/// Sum of position weights. Not required to be 100 (cash slack, rounding).
pub fn weight_total(positions: &[PositionRecord]) -> f64 {
    positions.iter().map(|p| p.weight).sum()
}

/// Sum of allocation percentages
pub fn allocation_total(slices: &[AllocationSlice]) -> f64 {
    slices.iter().map(|s| s.value).sum()
}

/// True when a percentage total is within tolerance of 100
pub fn is_full_allocation(total: f64) -> bool {
    (total - 100.0).abs() <= WEIGHT_TOTAL_TOLERANCE
}
