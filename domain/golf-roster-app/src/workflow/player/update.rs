use std::sync::Arc;

use crate::{
    domain::{
        DirectoryError, PlayerId,
        player::{PlayerRecord, PlayerUpdate},
    },
    ports::player_directory::PlayerDirectoryPort,
};

#[async_trait::async_trait]
pub trait UpdatePlayerUseCase {
    async fn update_player(
        &self,
        player_id: &PlayerId,
        update: PlayerUpdate,
    ) -> Result<PlayerRecord, DirectoryError>;
}

pub struct UpdatePlayerUseCaseImpl<D: PlayerDirectoryPort> {
    player_directory: Arc<D>,
}

impl<D: PlayerDirectoryPort> UpdatePlayerUseCaseImpl<D> {
    pub fn new(player_directory: Arc<D>) -> Self {
        Self { player_directory }
    }
}

#[async_trait::async_trait]
impl<D: PlayerDirectoryPort + Send + Sync + 'static> UpdatePlayerUseCase
    for UpdatePlayerUseCaseImpl<D>
{
    async fn update_player(
        &self,
        player_id: &PlayerId,
        update: PlayerUpdate,
    ) -> Result<PlayerRecord, DirectoryError> {
        self.player_directory.update_player(player_id, update).await
    }
}
