//! Consignment Service
//!
//! HTTP service for booking consignments onto vessels. Every booking asks the
//! vessel service for a ship with enough capacity, binds the consignment to it
//! and stores the result.

mod config;
mod dto;
mod handlers;
mod routes;

use std::sync::Arc;

use anyhow::Result;
use shipper_domain::booking::BookingService;
use shipper_memory::InMemoryConsignmentRepository;
use shipper_vessel::HttpVesselClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat};

/// Application state shared across handlers
pub struct AppState<S> {
    pub booking_service: Arc<S>,
}

impl<S> AppState<S> {
    pub fn new(booking_service: S) -> Self {
        Self {
            booking_service: Arc::new(booking_service),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            booking_service: Arc::clone(&self.booking_service),
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(config.log_format);

    info!("Starting consignment service");

    // Create vessel client
    let vessels = HttpVesselClient::new(config.vessel_service_url.clone(), config.lookup_timeout)?;

    // Create repository
    let repository = InMemoryConsignmentRepository::new();

    // Create booking service
    let service = BookingService::new(repository, vessels, config.booking_config());

    let state = AppState::new(service);
    let app = routes::create_router(state);

    let addr = config.bind_addr();
    info!(addr = %addr, "Starting HTTP server");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
