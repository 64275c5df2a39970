//! expensed - expense tracking HTTP API
//!
//! Boots the server: load .env, parse args/environment, connect the
//! pool, ensure the schema, serve until interrupted. Any failure before
//! serving is fatal and exits nonzero with a logged message.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use expensed_server::db::{create_pool, schema};
use expensed_server::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "expensed", version, about = "Expense tracking HTTP API")]
struct Cli {
    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 2565)]
    port: u16,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Shared secret for the Authorization header gate (unset = gate off)
    #[arg(long, env = "AUTH_TOKEN")]
    auth_token: Option<String>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let database_url = cli
        .database_url
        .context("DATABASE_URL not set. Set via --database-url or the DATABASE_URL env var")?;

    let pool = create_pool(&database_url)
        .await
        .context("failed to create database pool")?;

    schema::run(&pool)
        .await
        .context("failed to create expenses table")?;

    let config = ServerConfig {
        bind_addr: SocketAddr::new(cli.host, cli.port),
        auth_token: cli.auth_token,
    };

    tracing::info!("starting expensed on {}", config.bind_addr);

    run_server(pool, config).await.context("server error")?;

    Ok(())
}
