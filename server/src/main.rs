use datastore::InMemoryRepository;
use provider_stub::{ProviderStub, create_router};
use std::sync::Arc;
use tracing::info;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const GENERATED_VIDEOS: usize = 40;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,provider_stub=debug".into()),
        )
        .init();

    let addr = std::env::var("STUB_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    // Fixture catalog plus some generated bulk for paging
    let repo = InMemoryRepository::new();
    repo.populate_generated(GENERATED_VIDEOS);
    let stub = Arc::new(ProviderStub::new(Arc::new(repo)));
    let app = create_router(stub);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "Provider stub listening on http://{}/youtube/v3",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
