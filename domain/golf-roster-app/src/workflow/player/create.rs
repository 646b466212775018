use std::sync::Arc;

use crate::{
    domain::{
        DirectoryError, PlayerId,
        player::{NewPlayer, PlayerRecord},
    },
    ports::player_directory::PlayerDirectoryPort,
};

#[async_trait::async_trait]
pub trait CreatePlayerUseCase {
    async fn create_player(&self, new_player: NewPlayer) -> Result<PlayerRecord, DirectoryError>;
}

pub struct CreatePlayerUseCaseImpl<D: PlayerDirectoryPort> {
    player_directory: Arc<D>,
}

impl<D: PlayerDirectoryPort> CreatePlayerUseCaseImpl<D> {
    pub fn new(player_directory: Arc<D>) -> Self {
        Self { player_directory }
    }
}

#[async_trait::async_trait]
impl<D: PlayerDirectoryPort + Send + Sync + 'static> CreatePlayerUseCase
    for CreatePlayerUseCaseImpl<D>
{
    async fn create_player(&self, new_player: NewPlayer) -> Result<PlayerRecord, DirectoryError> {
        let player = PlayerRecord::new(PlayerId::generate(), new_player);
        self.player_directory.create_player(player.clone()).await?;
        log::info!("Created player {} ({})", player.display_name(), player.id);
        Ok(player)
    }
}
