use std::sync::Arc;

use crate::{
    domain::{
        DirectoryError,
        ghost::{GhostPlayer, GhostService},
        player::PlayerRecord,
    },
    ports::player_directory::PlayerDirectoryPort,
};

#[async_trait::async_trait]
pub trait ListGhostsUseCase {
    fn list_ghosts(&self) -> Vec<GhostPlayer>;
    /// Directory players that may back a new ghost right now.
    async fn list_ghost_sources(&self) -> Result<Vec<PlayerRecord>, DirectoryError>;
}

pub struct ListGhostsUseCaseImpl<D: PlayerDirectoryPort, G: GhostService> {
    player_directory: Arc<D>,
    ghost_service: Arc<G>,
}

impl<D: PlayerDirectoryPort, G: GhostService> ListGhostsUseCaseImpl<D, G> {
    pub fn new(player_directory: Arc<D>, ghost_service: Arc<G>) -> Self {
        Self {
            player_directory,
            ghost_service,
        }
    }
}

#[async_trait::async_trait]
impl<D: PlayerDirectoryPort + Send + Sync + 'static, G: GhostService + Send + Sync + 'static>
    ListGhostsUseCase for ListGhostsUseCaseImpl<D, G>
{
    fn list_ghosts(&self) -> Vec<GhostPlayer> {
        self.ghost_service.list_ghosts()
    }

    async fn list_ghost_sources(&self) -> Result<Vec<PlayerRecord>, DirectoryError> {
        let players = self.player_directory.list_players().await?;
        Ok(players
            .into_iter()
            .filter(|player| {
                !self.ghost_service.is_ghost(&player.id)
                    && !self.ghost_service.has_ghost_for_source(&player.id)
            })
            .collect())
    }
}
