use std::sync::Arc;

use crate::{
    domain::{DirectoryError, PlayerId, player::PlayerRecord},
    ports::player_directory::PlayerDirectoryPort,
};

#[async_trait::async_trait]
pub trait ListPlayersUseCase {
    async fn list_players(&self) -> Result<Vec<PlayerRecord>, DirectoryError>;
    async fn get_player(&self, player_id: &PlayerId) -> Result<PlayerRecord, DirectoryError>;
}

pub struct ListPlayersUseCaseImpl<D: PlayerDirectoryPort> {
    player_directory: Arc<D>,
}

impl<D: PlayerDirectoryPort> ListPlayersUseCaseImpl<D> {
    pub fn new(player_directory: Arc<D>) -> Self {
        Self { player_directory }
    }
}

#[async_trait::async_trait]
impl<D: PlayerDirectoryPort + Send + Sync + 'static> ListPlayersUseCase
    for ListPlayersUseCaseImpl<D>
{
    async fn list_players(&self) -> Result<Vec<PlayerRecord>, DirectoryError> {
        self.player_directory.list_players().await
    }

    async fn get_player(&self, player_id: &PlayerId) -> Result<PlayerRecord, DirectoryError> {
        self.player_directory.get_player(player_id).await
    }
}
