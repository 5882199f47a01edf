use std::net::SocketAddr;
use std::time::Duration;

use journey_server::planner::SearchConfig;
use journey_server::service::ServiceHandle;
use journey_server::web::{AppState, create_router};

/// How often to rebuild the snapshot from the dataset file (15 minutes).
const DATASET_REFRESH_INTERVAL: Duration = Duration::from_secs(15 * 60);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "journey_server=debug,info".into()),
        )
        .init();

    let dataset_path =
        std::env::var("JOURNEY_DATASET").unwrap_or_else(|_| "data/network.json".to_string());
    let addr: SocketAddr = std::env::var("JOURNEY_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()
        .expect("JOURNEY_ADDR must be a socket address");

    // Load the dataset and build the first snapshot (fail fast if missing)
    println!("Loading dataset from {dataset_path}...");
    let config = SearchConfig::default();
    let service = ServiceHandle::load(&dataset_path, config)
        .await
        .expect("Failed to load dataset");
    let stations = service.snapshot().await.network().station_count();
    println!("Loaded {stations} stations");

    // Spawn background task to refresh the snapshot periodically
    let refresh_handle = service.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(DATASET_REFRESH_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match refresh_handle.refresh().await {
                Ok(count) => println!("Refreshed dataset: {count} stations"),
                Err(e) => eprintln!("Failed to refresh dataset: {e}"),
            }
        }
    });

    // Build app state and router
    let state = AppState::new(service);
    let app = create_router(state);

    println!("Journey planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health                 - Health check");
    println!("  GET /journeys/shortest      - Shortest route between stations");
    println!("  GET /journeys/alternatives  - Alternative routes, cheapest first");
    println!("  GET /stations/suggest       - Station/keyword autocomplete");
    println!("  GET /reviews/search         - Keyword search over reviews");
    println!("  GET /fares                  - Sorted fare listing");
    println!("  GET /fares/range            - Fares within a price range");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
