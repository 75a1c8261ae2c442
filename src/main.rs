//! Model Router
//!
//! A model-aware HTTP reverse proxy: inference requests carry a model name
//! (JSON body field or query parameter) and are forwarded to the backend
//! registered for that name.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────┐
//!                      │               MODEL ROUTER                  │
//!                      │                                             │
//!   Client Request     │  ┌─────────┐    ┌──────────┐    ┌────────┐ │
//!   ──────────────────▶│  │  http   │───▶│ extract  │───▶│routing │ │
//!                      │  │ server  │    │body/query│    │ table  │ │
//!                      │  └─────────┘    └──────────┘    └───┬────┘ │
//!                      │                                     │      │
//!   Client Response    │  ┌─────────┐    ┌──────────┐        ▼      │
//!   ◀──────────────────│  │  error  │◀───│  proxy   │◀── upstream ──┼──▶ Backend
//!                      │  │envelope │    │ forward  │               │    (localhost:port)
//!                      │  └─────────┘    └──────────┘               │
//!                      └────────────────────────────────────────────┘
//! ```

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use model_router::config::RouterConfig;
use model_router::http::HttpServer;

#[derive(Parser)]
#[command(name = "model-router")]
#[command(about = "Model-aware HTTP reverse proxy router", long_about = None)]
struct Cli {
    /// Port to listen on.
    #[arg(short = 'l', long = "listen", default_value = "8087")]
    listen: String,

    /// Model configuration: name_port,name_port,...
    #[arg(short = 'm', long = "models")]
    models: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "model_router=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = RouterConfig {
        listen_port: cli.listen,
        model_spec: cli.models,
        ..RouterConfig::default()
    };

    let bind_address = config.bind_address();

    // Build the route table before binding; a bad model string must never
    // leave a half-configured process listening.
    let server = match HttpServer::new(config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "Invalid model configuration");
            return Err(e.into());
        }
    };

    let listener = TcpListener::bind(&bind_address).await?;

    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
