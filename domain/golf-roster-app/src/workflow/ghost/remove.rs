use std::sync::Arc;

use thiserror::Error;

use crate::{
    domain::{PlayerId, ghost::GhostService, roster::MatchRoster},
    workflow::roster::remove::RemoveFromRosterUseCase,
};

#[derive(Debug, Clone, Error)]
pub enum RemoveGhostError {
    #[error("ghost {0} not found")]
    NotFound(PlayerId),
}

pub trait RemoveGhostUseCase {
    fn remove_ghost(&self, ghost_id: &PlayerId) -> Result<MatchRoster, RemoveGhostError>;
}

pub struct RemoveGhostUseCaseImpl<G: GhostService, RM: RemoveFromRosterUseCase> {
    ghost_service: Arc<G>,
    remove_from_roster_use_case: Arc<RM>,
}

impl<G: GhostService, RM: RemoveFromRosterUseCase> RemoveGhostUseCaseImpl<G, RM> {
    pub fn new(ghost_service: Arc<G>, remove_from_roster_use_case: Arc<RM>) -> Self {
        Self {
            ghost_service,
            remove_from_roster_use_case,
        }
    }
}

impl<G: GhostService, RM: RemoveFromRosterUseCase> RemoveGhostUseCase
    for RemoveGhostUseCaseImpl<G, RM>
{
    fn remove_ghost(&self, ghost_id: &PlayerId) -> Result<MatchRoster, RemoveGhostError> {
        if !self.ghost_service.is_ghost(ghost_id) {
            return Err(RemoveGhostError::NotFound(ghost_id.clone()));
        }
        Ok(self.remove_from_roster_use_case.remove(ghost_id))
    }
}
