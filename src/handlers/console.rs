use async_trait::async_trait;
use tracing::{info, warn};

use crate::models::portfolio::weight_total;
use crate::models::{DashboardState, DataSource};
use crate::traits::event_handler::ResolutionHandler;
use crate::utils::{format_signed_pct, format_usd, truncate_string};

/// Console logging handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn source_label(source: DataSource) -> &'static str {
    match source {
        DataSource::Remote => "live",
        DataSource::Mock => "mock",
    }
}

#[async_trait]
impl ResolutionHandler for ConsoleEventHandler {
    async fn handle_dashboard(&self, dashboard: &DashboardState) {
        info!("{}", "=".repeat(80));
        info!("DASHBOARD");
        info!("{}", "=".repeat(80));

        if let Some(banner) = dashboard.banner() {
            warn!("{}", banner);
        }

        let portfolio = &dashboard.portfolio;
        info!("Total Value: {} [{}]", format_usd(portfolio.data.value), source_label(portfolio.source));
        info!(
            "Day Change: {} ({})",
            format_usd(portfolio.data.day_change),
            format_signed_pct(portfolio.data.day_pct)
        );

        info!("");
        info!("POSITIONS [{}]", source_label(dashboard.positions.source));
        info!("{}", "-".repeat(80));
        info!(
            "{:<6} {:<20} {:>8} {:>12} {:>12} {:>7}",
            "Symbol", "Name", "Qty", "Avg Cost", "Price", "Weight"
        );
        for p in &dashboard.positions.data {
            info!(
                "{:<6} {:<20} {:>8} {:>12} {:>12} {:>6}%",
                p.symbol,
                truncate_string(&p.name, 20),
                p.qty,
                format_usd(p.avg_cost),
                format_usd(p.price),
                p.weight
            );
        }
        info!("Total weight: {:.1}%", weight_total(&dashboard.positions.data));

        info!("");
        info!("ALLOCATION [{}]", source_label(dashboard.allocation.source));
        info!("{}", "-".repeat(80));
        for slice in &dashboard.allocation.data {
            info!("  {:<8} {:>5.1}%", slice.name, slice.value);
        }

        info!("{}", "=".repeat(80));
    }

    async fn handle_superseded(&self, generation: u64) {
        info!("Discarded stale dashboard refresh #{}", generation);
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::models::fixtures::{mock_allocation, mock_portfolio, mock_positions};
    use crate::models::{ErrorKind, ResolvedState};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn capture() -> (Captured, tracing::subscriber::DefaultGuard) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        (captured, tracing::subscriber::set_default(subscriber))
    }

    #[tokio::test]
    async fn mock_dashboard_prints_banner_and_table() {
        let dashboard = DashboardState {
            portfolio: ResolvedState::remote(mock_portfolio()),
            positions: ResolvedState::fallback(mock_positions(), ErrorKind::RemoteUnavailable),
            allocation: ResolvedState::mock(mock_allocation()),
        };
        let (captured, _guard) = capture();

        ConsoleEventHandler::new().handle_dashboard(&dashboard).await;

        let out = captured.text();
        assert!(out.contains("WARN"), "{}", out);
        assert!(out.contains("Showing mock data for positions"), "{}", out);
        assert!(out.contains("[live]"), "{}", out);
        assert!(out.contains("POSITIONS [mock]"), "{}", out);
        assert!(out.contains("NFLX"), "{}", out);
        assert!(out.contains("Total weight: 100.0%"), "{}", out);
    }

    #[tokio::test]
    async fn live_dashboard_has_no_banner() {
        let dashboard = DashboardState {
            portfolio: ResolvedState::remote(mock_portfolio()),
            positions: ResolvedState::remote(mock_positions()),
            allocation: ResolvedState::remote(mock_allocation()),
        };
        let (captured, _guard) = capture();

        let handler = ConsoleEventHandler::default();
        handler.handle_dashboard(&dashboard).await;
        handler.handle_superseded(3).await;

        let out = captured.text();
        assert!(!out.contains("WARN"), "{}", out);
        assert!(out.contains("Discarded stale dashboard refresh #3"), "{}", out);
    }
}
