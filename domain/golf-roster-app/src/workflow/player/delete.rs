use std::sync::Arc;

use crate::{
    domain::{DirectoryError, PlayerId, ghost::GhostService},
    ports::player_directory::PlayerDirectoryPort,
    workflow::roster::remove::RemoveFromRosterUseCase,
};

#[async_trait::async_trait]
pub trait DeletePlayerUseCase {
    /// Deletes the player from the directory and takes them, and any ghost
    /// built from them, off the roster.
    async fn delete_player(&self, player_id: &PlayerId) -> Result<(), DirectoryError>;
}

pub struct DeletePlayerUseCaseImpl<
    D: PlayerDirectoryPort,
    G: GhostService,
    RM: RemoveFromRosterUseCase,
> {
    player_directory: Arc<D>,
    ghost_service: Arc<G>,
    remove_from_roster_use_case: Arc<RM>,
}

impl<D: PlayerDirectoryPort, G: GhostService, RM: RemoveFromRosterUseCase>
    DeletePlayerUseCaseImpl<D, G, RM>
{
    pub fn new(
        player_directory: Arc<D>,
        ghost_service: Arc<G>,
        remove_from_roster_use_case: Arc<RM>,
    ) -> Self {
        Self {
            player_directory,
            ghost_service,
            remove_from_roster_use_case,
        }
    }
}

#[async_trait::async_trait]
impl<
    D: PlayerDirectoryPort + Send + Sync + 'static,
    G: GhostService + Send + Sync + 'static,
    RM: RemoveFromRosterUseCase + Send + Sync + 'static,
> DeletePlayerUseCase for DeletePlayerUseCaseImpl<D, G, RM>
{
    async fn delete_player(&self, player_id: &PlayerId) -> Result<(), DirectoryError> {
        self.player_directory.delete_player(player_id).await?;

        let ghost_ids: Vec<PlayerId> = self
            .ghost_service
            .list_ghosts()
            .into_iter()
            .filter(|ghost| &ghost.source_player_id == player_id)
            .map(|ghost| ghost.id)
            .collect();
        for ghost_id in &ghost_ids {
            self.remove_from_roster_use_case.remove(ghost_id);
        }
        self.remove_from_roster_use_case.remove(player_id);

        log::info!(
            "Deleted player {} and {} of their ghosts",
            player_id,
            ghost_ids.len()
        );
        Ok(())
    }
}
