use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use station_router::cache::CacheConfig;
use station_router::cli::run_menu;
use station_router::fixture::demo_station;
use station_router::web::{AppState, create_router};

/// Shortest routes through a railway station.
#[derive(Debug, Parser)]
#[command(name = "station-router", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive numbered menu on stdin/stdout (the default).
    Menu,

    /// Serve the JSON API.
    Serve {
        /// Address to listen on.
        #[arg(long, env = "STATION_ADDR", default_value = "127.0.0.1:3000")]
        addr: SocketAddr,

        /// Seconds a cached route stays valid.
        #[arg(long, default_value_t = 600)]
        cache_ttl_secs: u64,

        /// Maximum number of cached routes.
        #[arg(long, default_value_t = 10_000)]
        cache_capacity: u64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with menu output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let station = demo_station()?;
    info!(
        points = station.points().len(),
        segments = station.segments().len(),
        parks = station.parks().len(),
        "loaded demo station"
    );

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let stdin = io::stdin();
            run_menu(&station, stdin.lock(), io::stdout())?;
        }
        Command::Serve {
            addr,
            cache_ttl_secs,
            cache_capacity,
        } => {
            let cache_config = CacheConfig {
                ttl: Duration::from_secs(cache_ttl_secs),
                max_capacity: cache_capacity,
            };
            let state = AppState::new(station, &cache_config);
            tokio::runtime::Runtime::new()?.block_on(serve(addr, state))?;
        }
    }

    Ok(())
}

async fn serve(addr: SocketAddr, state: AppState) -> io::Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Station router listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health                - Health check");
    info!("  GET  /route?from=ID&to=ID   - Shortest route between points");
    info!("  GET  /parks                 - All parks");
    info!("  GET  /parks/filled          - Parks with at least one path");
    info!("  GET  /parks/:id/vertices    - Vertices of a park");
    info!("  GET  /segments              - All segments");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
