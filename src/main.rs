use std::sync::Arc;

use golf_roster_app::build_application;
use golf_roster_persistence_sqlite::{
    create_roster_db_pool, ensure_schema, players::SqlitePlayerDirectory,
    roster::SqliteRosterStore,
};
use log::info;

mod logs;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, flushing roster...");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().expect("Failed to load .env file");

    logs::init_logger();

    let pool = create_roster_db_pool();
    ensure_schema(&pool)
        .await
        .expect("Failed to prepare roster database");

    let roster_store = Arc::new(SqliteRosterStore::new(pool.clone()));
    let player_directory = Arc::new(SqlitePlayerDirectory::new(pool.clone()));

    let app = Arc::new(build_application(roster_store, player_directory));

    let roster = app.roster_initialize_use_case.initialize().await;
    info!(
        "Roster ready with {} player(s) assigned, starting application",
        roster.len()
    );

    if let Err(e) = golf_roster_http_api::run(app.clone(), shutdown_signal()).await {
        log::error!("HTTP API failed: {}", e);
    }

    app.roster_writer.flush().await;
    pool.close().await;
    info!("Roster flushed, bye");
}
