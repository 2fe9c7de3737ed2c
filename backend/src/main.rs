//! Service entry point: wires configuration, persistence, and the HTTP
//! server.

use std::env;

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_owned())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let mut config = ServerConfig::new(bind_addr);
    if let Ok(database_url) = env::var("DATABASE_URL") {
        let pool = DbPool::new(PoolConfig::new(database_url))
            .await
            .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
