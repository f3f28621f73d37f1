//! Client tests against an in-process server backed by the static board.

use std::sync::Arc;

use fxquote_client::{ClientError, FxClient};
use fxquote_hex::{QuoteService, inbound::HttpServer};
use rate_providers::StaticBoardProvider;
use tokio::net::TcpListener;

/// Starts a server on an ephemeral port and returns its base URL.
async fn spawn_server() -> String {
    let service = QuoteService::new(vec![Arc::new(StaticBoardProvider::default())]);
    let router = HttpServer::new(service).router();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service()).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_health() {
    let client = FxClient::new(spawn_server().await);
    assert_eq!(client.health().await.unwrap().status, "healthy");
}

#[tokio::test]
async fn test_quote_with_debug_source() {
    let client = FxClient::new(spawn_server().await);

    let quote = client.quote("usd", "jpy", true).await.unwrap();
    assert_eq!(quote.rate, Some(149.5));
    assert_eq!(quote.source.as_deref(), Some("static"));

    let quote = client.quote("USD", "JPY", false).await.unwrap();
    assert_eq!(quote.source, None);
}

#[tokio::test]
async fn test_unavailable_rate_is_not_an_error() {
    let client = FxClient::new(spawn_server().await);

    let quote = client.quote("USD", "XAU", true).await.unwrap();
    assert!(!quote.is_available());
    assert_eq!(quote.date, "");
}

#[tokio::test]
async fn test_bad_request_surfaces_api_error() {
    let client = FxClient::new(spawn_server().await);

    match client.quote("U$D", "JPY", false).await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "invalid currency code: U$D");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}
