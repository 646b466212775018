use axum::{
    Json,
    extract::{Path, State},
};
use golf_roster_app::{
    domain::{PlayerId, Team, roster::MatchRoster},
    workflow::roster::start_match::MatchLineup,
};

use crate::{ApiError, AppState};

#[derive(serde::Deserialize)]
pub struct AssignTeamRequest {
    team: Team,
}

pub async fn get_roster(State(state): State<AppState>) -> Json<MatchRoster> {
    Json(state.app.roster_get_use_case.get_roster())
}

pub async fn assign_to_team(
    Path(player_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<AssignTeamRequest>,
) -> Result<Json<MatchRoster>, ApiError> {
    let roster = state
        .app
        .roster_assign_use_case
        .assign_to_team(PlayerId::new(player_id), request.team)?;
    Ok(Json(roster))
}

pub async fn remove_from_roster(
    Path(player_id): Path<String>,
    State(state): State<AppState>,
) -> Json<MatchRoster> {
    Json(
        state
            .app
            .roster_remove_use_case
            .remove(&PlayerId::new(player_id)),
    )
}

pub async fn reset_roster(State(state): State<AppState>) -> Json<MatchRoster> {
    Json(state.app.roster_reset_use_case.reset_roster())
}

pub async fn start_match(State(state): State<AppState>) -> Result<Json<MatchLineup>, ApiError> {
    Ok(Json(state.app.match_start_use_case.start_match()?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::test_support::state_with_players;

    use super::*;

    fn assign(team: Team) -> Json<AssignTeamRequest> {
        Json(AssignTeamRequest { team })
    }

    #[tokio::test]
    async fn test_assign_and_remove() {
        let state = state_with_players(vec![]).await;

        let Json(roster) =
            assign_to_team(Path("p1".to_string()), State(state.clone()), assign(Team::Red))
                .await
                .unwrap();
        assert_eq!(roster.team(Team::Red), &[PlayerId::from("p1")]);
        let Json(roster) =
            assign_to_team(Path("p2".to_string()), State(state.clone()), assign(Team::Blue))
                .await
                .unwrap();
        assert_eq!(roster.len(), 2);
        let Json(roster) =
            assign_to_team(Path("p1".to_string()), State(state.clone()), assign(Team::Blue))
                .await
                .unwrap();
        assert_eq!(
            roster,
            MatchRoster::from_teams(vec![], vec!["p2".into(), "p1".into()])
        );

        let Json(roster) = remove_from_roster(Path("p1".to_string()), State(state.clone())).await;
        assert_eq!(roster, MatchRoster::from_teams(vec![], vec!["p2".into()]));

        let Json(current) = get_roster(State(state)).await;
        assert_eq!(current, roster);
    }

    #[tokio::test]
    async fn test_start_match_requires_full_teams() {
        let state = state_with_players(vec![]).await;
        let _roster =
            assign_to_team(Path("p1".to_string()), State(state.clone()), assign(Team::Red))
                .await
                .unwrap();

        let error = start_match(State(state.clone())).await.unwrap_err();
        assert_eq!(error.status(), StatusCode::CONFLICT);

        for (id, team) in [("p2", Team::Red), ("p3", Team::Blue), ("p4", Team::Blue)] {
            let Json(roster) =
                assign_to_team(Path(id.to_string()), State(state.clone()), assign(team))
                    .await
                    .unwrap();
            assert_eq!(roster.team_of(&PlayerId::from(id)), Some(team));
        }
        let Json(lineup) = start_match(State(state.clone())).await.unwrap();
        assert_eq!(lineup.red.len(), 2);

        let Json(roster) = reset_roster(State(state)).await;
        assert!(roster.is_empty());
    }
}
