use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use golf_roster_app::domain::{
    PlayerId,
    player::{NewPlayer, PlayerRecord, PlayerUpdate},
};
use validator::Validate;

use crate::{ApiError, AppState};

#[derive(serde::Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonPlayer {
    id: PlayerId,
    first_name: String,
    last_name: String,
    handicap_index: f64,
}

impl From<PlayerRecord> for JsonPlayer {
    fn from(player: PlayerRecord) -> Self {
        JsonPlayer {
            id: player.id,
            first_name: player.first_name,
            last_name: player.last_name,
            handicap_index: player.handicap_index,
        }
    }
}

#[derive(serde::Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    #[validate(length(min = 1, max = 40))]
    first_name: String,
    #[validate(length(min = 1, max = 40))]
    last_name: String,
    #[validate(range(min = -10.0, max = 54.0))]
    handicap_index: f64,
}

#[derive(serde::Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    #[validate(length(min = 1, max = 40))]
    first_name: Option<String>,
    #[validate(length(min = 1, max = 40))]
    last_name: Option<String>,
    #[validate(range(min = -10.0, max = 54.0))]
    handicap_index: Option<f64>,
}

fn trimmed(request: CreatePlayerRequest) -> CreatePlayerRequest {
    CreatePlayerRequest {
        first_name: request.first_name.trim().to_string(),
        last_name: request.last_name.trim().to_string(),
        handicap_index: request.handicap_index,
    }
}

pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonPlayer>>, ApiError> {
    let players = state.app.player_list_use_case.list_players().await?;
    Ok(Json(players.into_iter().map(JsonPlayer::from).collect()))
}

pub async fn get_player(
    Path(player_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<JsonPlayer>, ApiError> {
    let player = state
        .app
        .player_list_use_case
        .get_player(&PlayerId::new(player_id))
        .await?;
    Ok(Json(player.into()))
}

pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<JsonPlayer>), ApiError> {
    let request = trimmed(request);
    request.validate()?;
    let player = state
        .app
        .player_create_use_case
        .create_player(NewPlayer {
            first_name: request.first_name,
            last_name: request.last_name,
            handicap_index: request.handicap_index,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(player.into())))
}

pub async fn update_player(
    Path(player_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpdatePlayerRequest>,
) -> Result<Json<JsonPlayer>, ApiError> {
    request.validate()?;
    let update = PlayerUpdate {
        first_name: request.first_name.map(|name| name.trim().to_string()),
        last_name: request.last_name.map(|name| name.trim().to_string()),
        handicap_index: request.handicap_index,
    };
    let player = state
        .app
        .player_update_use_case
        .update_player(&PlayerId::new(player_id), update)
        .await?;
    Ok(Json(player.into()))
}

pub async fn delete_player(
    Path(player_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state
        .app
        .player_delete_use_case
        .delete_player(&PlayerId::new(player_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
