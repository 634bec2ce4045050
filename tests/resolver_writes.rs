mod common;

use std::sync::Arc;

use serde_json::json;

use common::{resolver_with, PerTokenApi, ScriptedApi};
use portfolio_session_resolver::models::{fixtures, PriceAlert};
use portfolio_session_resolver::{PositionRecord, RemoteError, ResourceKind, SessionToken};

fn alert(above: Option<f64>, below: Option<f64>) -> PriceAlert {
    PriceAlert {
        id: "a3".to_string(),
        symbol: "MSFT".to_string(),
        above,
        below,
        created: "2025-12-01".to_string(),
    }
}

#[tokio::test]
async fn upsert_position_posts_the_record() {
    let api = Arc::new(ScriptedApi::new());
    let resolver = resolver_with(api.clone());
    let position = PositionRecord::new("amd", "AMD", 12.0, 110.0, 118.1, 6.0);

    let reply = resolver
        .upsert_position(&SessionToken::new("abc123"), &position)
        .await
        .unwrap();
    assert_eq!(reply["ok"], true);

    let submitted = api.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].0, ResourceKind::Positions);
    assert_eq!(submitted[0].1["symbol"], "AMD");
    assert_eq!(submitted[0].1["avgCost"], 110.0);
    assert_eq!(api.tokens_seen(), vec!["abc123"]);
}

#[tokio::test]
async fn create_alert_posts_only_set_thresholds() {
    let api = Arc::new(ScriptedApi::new());
    let resolver = resolver_with(api.clone());

    resolver
        .create_alert(&SessionToken::new("abc123"), &alert(Some(400.0), None))
        .await
        .unwrap();

    let submitted = api.submitted();
    assert_eq!(submitted[0].0, ResourceKind::Alerts);
    assert_eq!(
        submitted[0].1,
        json!({ "id": "a3", "symbol": "MSFT", "above": 400.0, "created": "2025-12-01" })
    );
}

#[tokio::test]
async fn writes_without_session_are_not_sent() {
    let api = Arc::new(ScriptedApi::new());
    let resolver = resolver_with(api.clone());

    let err = resolver
        .upsert_position(&SessionToken::new("   "), &fixtures::mock_positions()[0])
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::NoSession), "{:?}", err);
    assert!(api.submitted().is_empty());
}

#[tokio::test]
async fn invalid_records_are_not_sent() {
    let api = Arc::new(ScriptedApi::new());
    let resolver = resolver_with(api.clone());
    let token = SessionToken::new("abc123");

    let bad_position = PositionRecord::new("AAPL", "Apple Inc.", -1.0, 1.0, 1.0, 1.0);
    let err = resolver.upsert_position(&token, &bad_position).await.unwrap_err();
    assert!(matches!(err, RemoteError::Invalid(_)), "{:?}", err);

    let err = resolver.create_alert(&token, &alert(None, None)).await.unwrap_err();
    assert!(matches!(err, RemoteError::Invalid(_)), "{:?}", err);

    assert!(api.submitted().is_empty());
}

#[tokio::test]
async fn backend_rejection_is_returned() {
    let api = Arc::new(ScriptedApi::new().reject_writes(401));
    let resolver = resolver_with(api.clone());

    let err = resolver
        .create_alert(&SessionToken::new("abc123"), &alert(None, Some(300.0)))
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::Status(401)), "{:?}", err);
    assert_eq!(api.submitted().len(), 1);
}

#[tokio::test]
async fn read_only_backend_rejects_writes() {
    let resolver = resolver_with(Arc::new(PerTokenApi::new(&[])));

    let err = resolver
        .upsert_position(&SessionToken::new("abc123"), &fixtures::mock_positions()[0])
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::ReadOnly(ResourceKind::Positions)), "{:?}", err);
}
