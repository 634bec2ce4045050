//! Canonical mock datasets served when there is no session or the remote
//! API cannot be used.

use super::insights::{
    DisclosedHolding, PoliticianProfile, PriceAlert, PublicPost, ReportLink, Sentiment,
    TimelineScenario,
};
use super::portfolio::{AllocationSlice, PortfolioSnapshot, PositionRecord};

pub fn mock_portfolio() -> PortfolioSnapshot {
    PortfolioSnapshot::new(52340.0, 532.0, 1.03)
}

pub fn mock_positions() -> Vec<PositionRecord> {
    [
        ("AAPL", "Apple Inc.", 24.0, 168.12, 177.22, 18.0),
        ("MSFT", "Microsoft", 12.0, 362.15, 375.31, 16.0),
        ("NVDA", "NVIDIA", 6.0, 844.20, 867.90, 12.0),
        ("VOO", "S&P 500 ETF", 10.0, 505.40, 512.10, 12.0),
        ("TSLA", "Tesla", 8.0, 232.10, 228.70, 8.0),
        ("GOOG", "Alphabet", 10.0, 140.10, 145.30, 8.0),
        ("AMZN", "Amazon", 7.0, 125.50, 131.40, 7.0),
        ("META", "Meta", 4.0, 332.00, 345.10, 6.0),
        ("AMD", "AMD", 10.0, 112.40, 118.10, 5.0),
        ("NFLX", "Netflix", 3.0, 580.00, 592.20, 4.0),
        ("CASH", "Cash", 1.0, 1.00, 1.00, 4.0),
    ]
    .into_iter()
    .map(|(symbol, name, qty, avg_cost, price, weight)| {
        PositionRecord::new(symbol, name, qty, avg_cost, price, weight)
    })
    .collect()
}

pub fn mock_allocation() -> Vec<AllocationSlice> {
    mock_positions()
        .into_iter()
        .map(|p| AllocationSlice::new(p.symbol, p.weight))
        .collect()
}

pub fn mock_timelines() -> Vec<TimelineScenario> {
    [
        ("Hold NVDA from Jan", 14.2),
        ("Rotate into VOO Mar", 6.3),
        ("Add AAPL Jul", 3.8),
    ]
    .into_iter()
    .map(|(label, value)| TimelineScenario {
        label: label.to_string(),
        value,
    })
    .collect()
}

fn post(id: &str, text: &str, date: &str, sentiment: Sentiment) -> PublicPost {
    PublicPost {
        id: id.to_string(),
        text: text.to_string(),
        date: date.to_string(),
        sentiment,
    }
}

fn holding(symbol: &str, weight: f64) -> DisclosedHolding {
    DisclosedHolding {
        symbol: symbol.to_string(),
        weight,
    }
}

pub fn mock_politicians() -> Vec<PoliticianProfile> {
    vec![
        PoliticianProfile {
            name: "Nancy Pelosi".to_string(),
            portfolio_overlap: 22.0,
            tweets: vec![
                post("t1", "Strong innovation leads the market.", "2025-11-12", Sentiment::Positive),
                post("t2", "Concern about regulation impacts.", "2025-11-18", Sentiment::Negative),
            ],
            positions: vec![holding("AAPL", 18.0), holding("MSFT", 14.0), holding("NVDA", 10.0)],
        },
        PoliticianProfile {
            name: "Dan Crenshaw".to_string(),
            portfolio_overlap: 12.0,
            tweets: vec![post("t3", "Tech outlook remains mixed.", "2025-11-09", Sentiment::Neutral)],
            positions: vec![holding("XOM", 20.0), holding("MSFT", 8.0)],
        },
    ]
}

pub fn mock_alerts() -> Vec<PriceAlert> {
    vec![
        PriceAlert {
            id: "a1".to_string(),
            symbol: "AAPL".to_string(),
            above: Some(180.0),
            below: None,
            created: "2025-11-01".to_string(),
        },
        PriceAlert {
            id: "a2".to_string(),
            symbol: "NVDA".to_string(),
            above: None,
            below: Some(800.0),
            created: "2025-11-05".to_string(),
        },
    ]
}

pub fn mock_reports() -> Vec<ReportLink> {
    [("r1", "Transactions Q3", "2025-10-20"), ("r2", "Holdings Snapshot", "2025-11-01")]
        .into_iter()
        .map(|(id, title, generated)| ReportLink {
            id: id.to_string(),
            title: title.to_string(),
            generated: generated.to_string(),
            url: "#".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{allocation_total, weight_total};

    #[test]
    fn mock_portfolio_matches_headline() {
        assert_eq!(mock_portfolio(), PortfolioSnapshot::new(52340.0, 532.0, 1.03));
    }

    #[test]
    fn mock_positions_are_valid_and_sum_to_100() {
        let positions = mock_positions();
        assert_eq!(positions.len(), 11);
        assert!(positions.iter().all(|p| p.validate().is_ok()));
        assert_eq!(weight_total(&positions), 100.0);
        assert_eq!(allocation_total(&mock_allocation()), 100.0);
    }

    #[test]
    fn politician_sentiment_counts() {
        let politicians = mock_politicians();
        assert_eq!(politicians[0].sentiment_count(Sentiment::Positive), 1);
        assert_eq!(politicians[0].sentiment_count(Sentiment::Negative), 1);
        assert_eq!(politicians[1].sentiment_count(Sentiment::Positive), 0);
    }

    #[test]
    fn mock_alerts_are_valid() {
        assert!(mock_alerts().iter().all(|a| a.validate().is_ok()));
    }
}
