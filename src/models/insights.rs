//! Secondary dashboard resources: alternative timelines, politician
//! comparisons, price alerts and generated reports.

use serde::{Deserialize, Serialize};

/// Return of a "what-if" scenario, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineScenario {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicPost {
    pub id: String,
    pub text: String,
    pub date: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisclosedHolding {
    pub symbol: String,
    pub weight: f64,
}

/// A public figure to compare the portfolio against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliticianProfile {
    pub name: String,
    /// Percent of holdings shared with the user's portfolio
    pub portfolio_overlap: f64,
    #[serde(default)]
    pub tweets: Vec<PublicPost>,
    #[serde(default)]
    pub positions: Vec<DisclosedHolding>,
}

impl PoliticianProfile {
    /// Count posts with the given sentiment
    pub fn sentiment_count(&self, sentiment: Sentiment) -> usize {
        self.tweets.iter().filter(|t| t.sentiment == sentiment).count()
    }
}

/// Price alert with an upper and/or lower threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAlert {
    pub id: String,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub above: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below: Option<f64>,
    pub created: String,
}

impl PriceAlert {
    /// Check whether a price crosses either threshold
    pub fn is_triggered(&self, price: f64) -> bool {
        self.above.is_some_and(|a| price > a) || self.below.is_some_and(|b| price < b)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.symbol.trim().is_empty() {
            return Err(format!("alert {} has an empty symbol", self.id));
        }
        if self.above.is_none() && self.below.is_none() {
            return Err(format!("alert {} has no threshold", self.id));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLink {
    pub id: String,
    pub title: String,
    pub generated: String,
    pub url: String,
}
