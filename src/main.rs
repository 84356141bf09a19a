mod server;
mod stats;

use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

const PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args() {
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("statboard=info,scoreboard_api=info")),
        )
        .init();

    let app = server::router(server::AppState::new());
    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("server running at http://localhost:{PORT}");
    info!("dashboard available at http://localhost:{PORT}/index.html");
    axum::serve(listener, app).await?;

    Ok(())
}

fn handle_cli_args() -> bool {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return false;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            true
        }
        "-V" | "--version" => {
            println!("statboard {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "statboard - sports dashboard backend

Serves NBA and NFL top-performer stats on port 3000 and the dashboard's
static files from the working directory.

Usage:
  statboard
  statboard --help
  statboard --version

Endpoints:
  GET /api/nba-stats
  GET /api/nfl-stats
  GET /api/player-stats"
}
