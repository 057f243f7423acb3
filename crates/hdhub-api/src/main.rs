use hdhub_api::{create_router, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = match AppState::new() {
        Ok(state) => state,
        Err(error) => {
            tracing::error!(%error, "failed to initialize scraper");
            std::process::exit(1);
        }
    };
    let app = create_router(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("failed to bind listen address");
    tracing::info!("Server running on http://localhost:{port}");
    axum::serve(listener, app).await.expect("server error");
}
