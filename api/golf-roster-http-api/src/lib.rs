use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use golf_roster_app::Application;
use log::info;

mod error;
mod ghosts;
mod players;
mod roster;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
}

pub fn router(app: Arc<Application>) -> Router {
    Router::new()
        .nest(
            "/v1",
            Router::new()
                .route("/roster", get(roster::get_roster))
                .route("/roster/reset", post(roster::reset_roster))
                .route("/roster/start", post(roster::start_match))
                .route(
                    "/roster/{player_id}",
                    put(roster::assign_to_team).delete(roster::remove_from_roster),
                )
                .route(
                    "/players",
                    get(players::list_players).post(players::create_player),
                )
                .route(
                    "/players/{player_id}",
                    get(players::get_player)
                        .put(players::update_player)
                        .delete(players::delete_player),
                )
                .route("/ghosts", get(ghosts::list_ghosts).post(ghosts::admit_ghost))
                .route("/ghosts/sources", get(ghosts::list_ghost_sources))
                .route("/ghosts/{ghost_id}", delete(ghosts::remove_ghost)),
        )
        .with_state(AppState { app })
}

pub async fn run(
    app: Arc<Application>,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let port = std::env::var("GOLF_HTTP_API_PORT")
        .unwrap_or_else(|_| "3004".to_string())
        .parse::<u16>()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    info!("API server listening on port {}", port);
    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("HTTP API shut down gracefully");
    Ok(())
}
