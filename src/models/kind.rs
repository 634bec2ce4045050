use std::fmt;

use serde::{Deserialize, Serialize};

/// Resources a view can ask the resolver for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Portfolio,
    Positions,
    Allocation,
    Timelines,
    Politicians,
    Alerts,
    Reports,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Portfolio,
        ResourceKind::Positions,
        ResourceKind::Allocation,
        ResourceKind::Timelines,
        ResourceKind::Politicians,
        ResourceKind::Alerts,
        ResourceKind::Reports,
    ];

    /// Endpoint path on the remote API
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Portfolio => "/api/portfolio",
            ResourceKind::Positions => "/api/positions",
            ResourceKind::Allocation => "/api/allocation",
            ResourceKind::Timelines => "/api/timelines",
            ResourceKind::Politicians => "/api/politicians",
            ResourceKind::Alerts => "/api/alerts",
            ResourceKind::Reports => "/api/reports",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Portfolio => "portfolio",
            ResourceKind::Positions => "positions",
            ResourceKind::Allocation => "allocation",
            ResourceKind::Timelines => "timelines",
            ResourceKind::Politicians => "politicians",
            ResourceKind::Alerts => "alerts",
            ResourceKind::Reports => "reports",
        }
    }

    /// Whether the backend accepts writes for this resource
    pub fn is_writable(&self) -> bool {
        matches!(self, ResourceKind::Positions | ResourceKind::Alerts)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
