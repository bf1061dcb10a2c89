//! Car Dealership Backend
//!
//! REST backend for a car-dealership marketing site: listing CRUD,
//! contact-inquiry capture with mail-relay notification, and a
//! static-credential admin gate.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod mail;
mod models;

use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::SessionStore;
use config::Config;
use db::Repository;
use mail::Mailer;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub mailer: Arc<Mailer>,
    pub sessions: SessionStore,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Car Dealership Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn about unconfigured optional integrations
    if !config.admin_gate_configured() {
        tracing::warn!(
            "Admin credentials not configured (DEALER_ADMIN_EMAIL/DEALER_ADMIN_PASSWORD). \
             Admin login is disabled and listing mutations are unguarded!"
        );
    }

    // Connect to the database; exhausting the retry budget is fatal
    let pool = match db::connect_with_retry(&config.db_path).await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!("Could not connect to database, giving up: {}", err);
            std::process::exit(1);
        }
    };
    let repo = Arc::new(Repository::new(pool));

    // Initialize the mail relay client
    let mailer = Arc::new(Mailer::from_config(&config));
    if !mailer.is_enabled() {
        tracing::warn!("Mail relay not configured. Inquiry notifications will be skipped.");
    }

    // Create application state
    let state = AppState {
        repo,
        mailer,
        sessions: SessionStore::new(),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration: the deployed frontend origin must be allowed
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes. The mutating listing endpoints take the AdminSession
    // extractor; everything else is public.
    let api_routes = Router::new()
        // Contact inquiries
        .route("/contact", post(api::submit_contact))
        // Car listings
        .route("/cars", get(api::list_cars))
        .route("/cars", post(api::create_car))
        .route("/cars/{id}", get(api::get_car))
        .route("/cars/{id}", delete(api::delete_car))
        .route("/cars/{id}/sold", patch(api::mark_car_sold))
        // Admin gate
        .route("/admin/login", post(api::admin_login));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
