// Finance tracker API server entry point

mod config;
mod db;
mod entity;
mod error;
mod handlers;
mod ids;
mod models;
mod services;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, Router};
use http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::ApiConfig;
use db::DbPool;
use handlers::{clients, dashboard, health, invoices, platforms, queries, transactions};

fn load_env() {
    dotenv::dotenv().ok();
}

#[tokio::main]
async fn main() {
    load_env();
    // Configure logging with tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load API configuration from environment
    let config = ApiConfig::from_env();
    tracing::info!("Configuration loaded");

    // Establish database connection pool
    let db_pool = DbPool::new(&config)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Connected to database");

    // Initialize data repositories
    let repositories = db_pool.repositories();
    let app_state = Arc::new(repositories);

    // Configure CORS policy
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::AUTHORIZATION,
        ])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(3600));

    // Set up API routes
    let app = Router::new()
        .route("/api/health", get(health::health_check))
        // Dashboard aggregation endpoints
        .route("/api/dashboard/stats", get(dashboard::get_dashboard_stats))
        .route("/api/dashboard/charts", get(dashboard::get_dashboard_charts))
        .route("/api/dashboard/search", get(dashboard::search))
        // Client CRUD
        .route(
            "/api/clientes",
            get(clients::get_clients).post(clients::create_client),
        )
        .route(
            "/api/clientes/{id}",
            get(clients::get_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        )
        .route("/api/clientes/{id}/invoices", get(clients::get_client_invoices))
        .route(
            "/api/clientes/{id}/transactions",
            get(clients::get_client_transactions),
        )
        // Invoice CRUD and summaries
        .route(
            "/api/invoices",
            get(invoices::get_invoices).post(invoices::create_invoice),
        )
        .route("/api/invoices/stats/summary", get(invoices::get_invoice_stats))
        .route(
            "/api/invoices/by-period/{period}",
            get(invoices::get_invoices_by_period),
        )
        .route(
            "/api/invoices/{invoiceNumber}",
            get(invoices::get_invoice)
                .put(invoices::update_invoice)
                .delete(invoices::delete_invoice),
        )
        // Transaction CRUD and summaries
        .route(
            "/api/transactions",
            get(transactions::get_transactions).post(transactions::create_transaction),
        )
        .route(
            "/api/transactions/stats/summary",
            get(transactions::get_transaction_stats),
        )
        .route(
            "/api/transactions/by-status/{status}",
            get(transactions::get_transactions_by_status),
        )
        .route(
            "/api/transactions/by-type/{type}",
            get(transactions::get_transactions_by_type),
        )
        .route(
            "/api/transactions/{id}",
            get(transactions::get_transaction)
                .put(transactions::update_transaction)
                .delete(transactions::delete_transaction),
        )
        // Platform CRUD and per-platform views
        .route(
            "/api/platform",
            get(platforms::get_platforms).post(platforms::create_platform),
        )
        .route(
            "/api/platform/{id}",
            get(platforms::get_platform)
                .put(platforms::update_platform)
                .delete(platforms::delete_platform),
        )
        .route(
            "/api/platform/{id}/clientes",
            get(platforms::get_platform_clients),
        )
        .route("/api/platform/{id}/stats", get(platforms::get_platform_stats))
        // Cross-entity analytical queries
        .route(
            "/api/queries/total-paid-by-client",
            get(queries::get_total_paid_by_client),
        )
        .route(
            "/api/queries/pending-invoices",
            get(queries::get_pending_invoices),
        )
        .route(
            "/api/queries/transactions-by-platform/{platformId}",
            get(queries::get_transactions_by_platform),
        )
        .route("/api/queries/platforms", get(queries::get_platforms_list))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .with_state(app_state);

    // Parse server address from config
    let addr: SocketAddr = config.server_addr().parse().expect("Invalid address");

    // Start HTTP server
    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
