use std::sync::Arc;

use thiserror::Error;

use crate::{
    domain::{
        PlayerId, Team,
        roster::{MatchRoster, RosterService},
    },
    processes::roster_writer::RosterWriter,
};

#[derive(Debug, Clone, Error)]
pub enum AssignToTeamError {
    #[error("player id must not be empty")]
    EmptyPlayerId,
}

pub trait AssignToTeamUseCase {
    /// Puts the player at the end of `team`, taking them off the other team
    /// if needed. Team sizes are not limited here.
    fn assign_to_team(
        &self,
        player_id: PlayerId,
        team: Team,
    ) -> Result<MatchRoster, AssignToTeamError>;
}

pub struct AssignToTeamUseCaseImpl<R: RosterService, W: RosterWriter> {
    roster_service: Arc<R>,
    roster_writer: Arc<W>,
}

impl<R: RosterService, W: RosterWriter> AssignToTeamUseCaseImpl<R, W> {
    pub fn new(roster_service: Arc<R>, roster_writer: Arc<W>) -> Self {
        Self {
            roster_service,
            roster_writer,
        }
    }
}

impl<R: RosterService, W: RosterWriter> AssignToTeamUseCase for AssignToTeamUseCaseImpl<R, W> {
    fn assign_to_team(
        &self,
        player_id: PlayerId,
        team: Team,
    ) -> Result<MatchRoster, AssignToTeamError> {
        if player_id.is_empty() {
            return Err(AssignToTeamError::EmptyPlayerId);
        }
        log::debug!("Assigning player {} to team {}", player_id, team);
        let roster = self.roster_service.assign_to_team(player_id, team);
        self.roster_writer.enqueue_save(roster.clone());
        Ok(roster)
    }
}
