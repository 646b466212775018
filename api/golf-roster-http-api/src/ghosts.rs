use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use golf_roster_app::domain::{PlayerId, Team, ghost::GhostPlayer, roster::MatchRoster};

use crate::{ApiError, AppState, players::JsonPlayer};

#[derive(serde::Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JsonGhost {
    id: PlayerId,
    source_player_id: PlayerId,
    first_name: String,
    last_name: String,
    handicap_index: f64,
}

impl From<GhostPlayer> for JsonGhost {
    fn from(ghost: GhostPlayer) -> Self {
        JsonGhost {
            id: ghost.id,
            source_player_id: ghost.source_player_id,
            first_name: ghost.first_name,
            last_name: ghost.last_name,
            handicap_index: ghost.handicap_index,
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmitGhostRequest {
    source_player_id: PlayerId,
    team: Team,
}

pub async fn list_ghosts(State(state): State<AppState>) -> Json<Vec<JsonGhost>> {
    let ghosts = state.app.ghost_list_use_case.list_ghosts();
    Json(ghosts.into_iter().map(JsonGhost::from).collect())
}

pub async fn list_ghost_sources(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonPlayer>>, ApiError> {
    let players = state.app.ghost_list_use_case.list_ghost_sources().await?;
    Ok(Json(players.into_iter().map(JsonPlayer::from).collect()))
}

pub async fn admit_ghost(
    State(state): State<AppState>,
    Json(request): Json<AdmitGhostRequest>,
) -> Result<(StatusCode, Json<JsonGhost>), ApiError> {
    let ghost = state
        .app
        .ghost_admit_use_case
        .admit_ghost(&request.source_player_id, request.team)
        .await?;
    Ok((StatusCode::CREATED, Json(ghost.into())))
}

pub async fn remove_ghost(
    Path(ghost_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MatchRoster>, ApiError> {
    let roster = state
        .app
        .ghost_remove_use_case
        .remove_ghost(&PlayerId::new(ghost_id))?;
    Ok(Json(roster))
}
