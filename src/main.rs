mod data_loader;
mod indicators;
mod models;
mod routes;
mod services;
mod state;

use axum::{routing::get, Router};
use state::AppState;
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir};

const DEFAULT_DATA_PATH: &str = "data/BTC_Data.csv";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let data_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());

    let dataset = match data_loader::load_csv(Path::new(&data_path)) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("Failed to load {}: {}", data_path, e);
            std::process::exit(1);
        }
    };

    match dataset.date_span() {
        Some((start, end)) => {
            tracing::info!(
                "Loaded {} daily bars from {} ({} to {})",
                dataset.len(),
                data_path,
                start,
                end
            );
        }
        None => tracing::warn!("Loaded {} with no rows; charts will be empty", data_path),
    }

    let state = AppState::new(dataset);

    let api_routes = Router::new()
        .route("/range", get(routes::data::get_range))
        .route("/chart", get(routes::chart::get_chart))
        .route("/statistics", get(routes::statistics::get_statistics))
        .route("/data", get(routes::data::get_data));

    let app = Router::new()
        .nest("/api", api_routes)
        .nest_service("/", ServeDir::new("static"))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
