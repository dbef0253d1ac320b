//! Parcoursup dashboard API server.
//!
//! Loads the two source datasets at startup, then serves the map document,
//! institution drill-downs and chart figures over HTTP.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use clap::Parser;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use atlas_common::Session;
use dashboard_api::config::{DashboardConfig, DEFAULT_API_BASE_URL};
use dashboard_api::handlers;
use dashboard_api::state::AppState;

/// Parcoursup dashboard API server
#[derive(Parser, Debug)]
#[command(name = "dashboard-api")]
#[command(about = "Parcoursup admission dashboard API")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8080", env = "ATLAS_LISTEN_ADDR")]
    listen: String,

    /// Cartography GeoJSON file
    #[arg(
        long,
        default_value = "data/raw/fr-esr-cartographie_formations_parcoursup.geojson",
        env = "ATLAS_CARTO_FILE"
    )]
    carto_file: PathBuf,

    /// Specialty-pairs JSON file
    #[arg(
        long,
        default_value = "data/raw/fr-esr-parcoursup-enseignements-de-specialite-bacheliers-generaux-2.json",
        env = "ATLAS_SPECIALTIES_FILE"
    )]
    specialties_file: PathBuf,

    /// Session year the map is pre-filtered on
    #[arg(long, default_value = "2023", env = "ATLAS_YEAR")]
    year: u16,

    /// Base URL of the admission-records API
    #[arg(long, default_value = DEFAULT_API_BASE_URL, env = "ATLAS_API_BASE_URL")]
    api_base_url: String,

    /// Re-download the dataset files before loading them
    #[arg(long, env = "ATLAS_REFRESH_ON_START")]
    refresh: bool,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "ATLAS_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .expect("Failed to create Tokio runtime");

    runtime.block_on(async move {
        run_server(args).await;
    });
}

async fn run_server(args: Args) {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting dashboard API server");

    let config = DashboardConfig {
        carto_path: args.carto_file,
        specialties_path: args.specialties_file,
        year: Session(args.year),
        api_base_url: args.api_base_url,
        refresh_on_start: args.refresh,
    };

    // Initialize application state
    let state = match AppState::new(config).await {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to initialize application state: {:#}", e);
            std::process::exit(1);
        }
    };

    // Build router
    let app = Router::new()
        .route("/", get(handlers::home::home_handler))
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        .route("/api/map/features", get(handlers::map::map_features_handler))
        .route(
            "/api/institutions/:uai",
            get(handlers::institutions::institution_handler),
        )
        .route(
            "/api/institutions/:uai/programs/:index/figures/mentions",
            get(handlers::institutions::mentions_figure_handler),
        )
        .route(
            "/api/institutions/:uai/programs/:index/figures/admissions",
            get(handlers::institutions::admissions_figure_handler),
        )
        .route(
            "/api/institutions/:uai/programs/:index/figures/gender",
            get(handlers::institutions::gender_figure_handler),
        )
        .route(
            "/api/specialties/formations",
            get(handlers::specialties::formations_handler),
        )
        .route(
            "/api/specialties/heatmap",
            get(handlers::specialties::heatmap_handler),
        )
        .route(
            "/api/specialties/comparison",
            get(handlers::specialties::comparison_handler),
        )
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new());

    let listener = match tokio::net::TcpListener::bind(&args.listen).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %args.listen, "Failed to bind: {}", e);
            std::process::exit(1);
        }
    };

    info!(addr = %args.listen, "Listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
