//! Backend entry-point: loads settings, prepares storage and serves the API.

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use taskplanner::inbound::http::health::HealthState;
use taskplanner::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use taskplanner::server::{ServerConfig, create_server};
use taskplanner::settings::AppSettings;

/// Load [`AppSettings`] from `args`, the environment and config files.
fn load_settings<I>(args: I) -> std::io::Result<AppSettings>
where
    I: IntoIterator<Item = OsString>,
{
    AppSettings::load_from_iter(args).map_err(|e| std::io::Error::other(e.to_string()))
}

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

    let settings = load_settings(std::env::args_os())?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let mut config = ServerConfig::new(bind_addr);

    match settings.database_url() {
        Some(url) => {
            run_pending_migrations(url)
                .await
                .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;
            let pool =
                DbPool::lazy(PoolConfig::new(url).with_max_size(settings.pool_max_size()));
            config = config.with_db_pool(pool);
            info!("using PostgreSQL document store");
        }
        None if cfg!(debug_assertions) => {
            warn!("TASKPLANNER_DATABASE_URL unset; using in-memory store (dev only)");
        }
        None => {
            return Err(std::io::Error::other(
                "TASKPLANNER_DATABASE_URL must be set in release builds",
            ));
        }
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting server");
    create_server(health_state, config)?.await
}
