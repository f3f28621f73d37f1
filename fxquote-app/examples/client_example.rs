//! Client example running quotes against an in-process server.
//!
//! Uses the offline static board, so no upstream network access is needed.
//!
//! Run with: cargo run -p fxquote-app --example client_example

use std::net::SocketAddr;
use std::sync::Arc;

use fxquote_client::FxClient;
use fxquote_hex::{QuoteService, inbound::HttpServer};
use rate_providers::StaticBoardProvider;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    println!("🚀 Starting server on {addr}...");

    // Direct chain: the static board; inverse chain: the same board
    let board = Arc::new(StaticBoardProvider::default());
    let service = QuoteService::new(vec![board.clone()]).with_inverse(vec![board]);
    let router = HttpServer::new(service).router();

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {err}");
        }
    });

    let client = FxClient::new(format!("http://{addr}"));

    let health = client.health().await?;
    println!("✅ Server health: {}", health.status);

    for (base, target) in [("USD", "JPY"), ("eur", "gbp"), ("COP", "USD"), ("CHF", "CHF")] {
        let quote = client.quote(base, target, true).await?;
        println!(
            "✅ {base} -> {target}: {:?} on {:?} via {}",
            quote.rate,
            quote.date,
            quote.source.as_deref().unwrap_or("-")
        );
    }

    // Unknown to the board: reported as unavailable, not as an error
    let quote = client.quote("USD", "XAU", true).await?;
    println!("✅ USD -> XAU unavailable: rate={:?}", quote.rate);

    // Invalid input is a 400
    let err = client.quote("US1", "JPY", false).await.unwrap_err();
    println!("✅ Rejected invalid code: {err}");

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
