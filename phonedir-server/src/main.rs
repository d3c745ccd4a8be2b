//! phonedir-server - company phone directory HTTP backend
//!
//! Employee CRUD and search, spreadsheet import, photo upload and the
//! export table for the PDF renderer, served over a small axum API
//! backed by SQLite.

use anyhow::Result;
use clap::Parser;
use phonedir_common::{config, db};
use phonedir_server::{build_router, AppState};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "phonedir-server", about = "Company phone directory backend")]
struct Args {
    /// Data root folder (overrides env and config file)
    #[arg(long)]
    root_folder: Option<PathBuf>,

    /// Listen port
    #[arg(long, env = "PHONEDIR_PORT", default_value_t = 5780)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting phone directory backend (phonedir-server) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();

    let root_folder = config::resolve_root_folder(args.root_folder.as_deref());
    std::fs::create_dir_all(&root_folder)?;

    let db_path = config::database_path(&root_folder);
    info!("Database path: {}", db_path.display());
    let pool = db::init_database(&db_path).await?;

    let photos_dir = config::photos_dir(&root_folder);
    std::fs::create_dir_all(&photos_dir)?;

    let admin_token = config::load_admin_token();
    if admin_token.is_some() {
        info!("Admin gate enabled for mutating endpoints");
    } else {
        info!("Admin gate disabled (no admin token configured)");
    }

    let state = AppState::new(pool, photos_dir, admin_token);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("phonedir-server listening on http://127.0.0.1:{}", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
