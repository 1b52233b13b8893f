//! # Sign-in CLI
//!
//! Wires the sign-in use case to stub collaborators and a console view,
//! then submits the form once.

use std::sync::Arc;

use clap::Parser;

use signin_core::SignInUseCase;
use signin_core::ports::{Network, UserStore};
use signin_infra::{InMemoryUserStore, StubNetwork};

mod config;
mod telemetry;
mod view;

use config::AppConfig;
use telemetry::TelemetryConfig;
use view::ConsoleView;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::parse();
    telemetry::init_telemetry(&TelemetryConfig::from(&config))?;

    let use_case = build_use_case(&config);
    let view = ConsoleView::stdout();

    let stage = use_case
        .sign_in(config.email(), config.password(), &view)
        .await;
    tracing::debug!(%stage, "Sign-in attempt finished");

    Ok(())
}

fn build_use_case(config: &AppConfig) -> SignInUseCase {
    let network: Arc<dyn Network> = if config.network_offline {
        tracing::info!("Stub network is offline");
        Arc::new(StubNetwork::offline())
    } else {
        Arc::new(StubNetwork::new(config.stub_user()))
    };

    let store: Arc<dyn UserStore> = if config.store_read_only {
        tracing::info!("Stub store is read-only");
        Arc::new(InMemoryUserStore::read_only())
    } else {
        Arc::new(InMemoryUserStore::new())
    };

    SignInUseCase::new(network, store)
}
