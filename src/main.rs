use std::sync::Arc;

use tracing::level_filters::LevelFilter;
use tracing::{info, warn};

use portfolio_session_resolver::traits::session_store::{load_positions, save_token};
use portfolio_session_resolver::{
    ConsoleEventHandler, DashboardView, FileSessionStore, HttpRemoteApi, RefreshOutcome,
    RemoteApi, ResolverConfig, ResourceKind, SessionDataResolver,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_max_level(LevelFilter::DEBUG)
        .with_file(true)
        .with_line_number(true)
        .init();

    dotenvy::dotenv().ok();

    tokio::runtime::Runtime::new()?.block_on(async {
        let config = ResolverConfig::from_env();

        info!("Initializing dashboard data layer...");
        info!("API URL: {}", config.api_url);
        info!("Session file: {}", config.session_file.display());

        let store = Arc::new(FileSessionStore::open(&config.session_file));
        if let Some(raw) = &config.initial_token {
            let token = save_token(store.as_ref(), raw)?;
            info!("Session token set from environment: {}", token);
        }
        let local_positions = load_positions(store.as_ref());
        info!("Local positions table has {} rows", local_positions.len());

        let api = Arc::new(HttpRemoteApi::from_config(&config)?);
        match api.health().await {
            Ok(()) => info!("Backend is reachable"),
            Err(e) => warn!("Backend health check failed: {}", e),
        }

        let resolver = Arc::new(SessionDataResolver::new(api, store));
        let token = resolver.session_token();
        if token.is_empty() {
            info!("No session token stored; browsing with mock data");
        } else {
            info!("Using session token {}", token);
        }

        let mut view = DashboardView::new(resolver.clone());
        view.add_handler(Arc::new(ConsoleEventHandler::new()));

        if let RefreshOutcome::Superseded = view.refresh(token.clone()).await {
            warn!("Dashboard refresh was superseded");
        }

        for kind in [
            ResourceKind::Timelines,
            ResourceKind::Politicians,
            ResourceKind::Alerts,
            ResourceKind::Reports,
        ] {
            let resolved = resolver.resolve_kind(kind, &token).await;
            match resolved.error {
                Some(error) => warn!("{}: mock data ({})", kind, error),
                None => info!("{}: {:?} data", kind, resolved.source),
            }
        }

        info!("Done.");
        Ok(())
    })
}
