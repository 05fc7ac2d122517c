//! stagefront-web - Server-rendered booking directory
//!
//! Browse venues and artists, search them by name, inspect detail pages
//! with upcoming/past shows, and list new venues, artists, and shows
//! through HTML forms.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use stagefront_common::db::init_database;
use stagefront_web::{build_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "stagefront-web", version, about = "Venue and artist booking directory")]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "STAGEFRONT_BIND", default_value = "127.0.0.1:5730")]
    bind: String,

    /// Path to the SQLite database (created on first run)
    #[arg(long, env = "STAGEFRONT_DB", default_value = "stagefront.db")]
    database: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    info!(
        "Starting Stagefront (stagefront-web) v{}",
        env!("CARGO_PKG_VERSION")
    );
    info!("Database path: {}", cli.database.display());

    let pool = init_database(&cli.database).await?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    info!("stagefront-web listening on http://{}", cli.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
