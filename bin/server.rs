// Congress Seats - Web Server
// JSON layouts and SVG charts over Axum

use anyhow::{Context, Result};
use congress_seats::api::{router, AppState};
use congress_seats::{ApiConfig, RosterLoader};
use tracing_subscriber::EnvFilter;

const ADDR_VAR: &str = "SEATS_SERVER_ADDR";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("🌐 Congress Seats - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Validate once; a bad config is reported on every chart request
    let config = ApiConfig::from_env();
    let loader = RosterLoader::from_config(&config);
    match &loader {
        Ok(_) => println!("✓ API configured: {}", config.base_url),
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("   Charts will show this message until the server is restarted with a key.");
        }
    }

    let app = router(AppState::new(loader));

    let addr = std::env::var(ADDR_VAR).unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    println!("\n🚀 Server running on http://{}", addr);
    println!("   API: http://{}/api/chambers/senate/layout", addr);
    println!("   UI:  http://{}", addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .context("Server exited with an error")?;

    Ok(())
}
