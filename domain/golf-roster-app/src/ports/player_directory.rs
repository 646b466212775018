use crate::domain::{
    DirectoryError, PlayerId,
    player::{PlayerRecord, PlayerUpdate},
};

#[async_trait::async_trait]
pub trait PlayerDirectoryPort {
    /// All players in directory order.
    async fn list_players(&self) -> Result<Vec<PlayerRecord>, DirectoryError>;
    async fn get_player(&self, player_id: &PlayerId) -> Result<PlayerRecord, DirectoryError>;
    async fn create_player(&self, player: PlayerRecord) -> Result<(), DirectoryError>;
    async fn update_player(
        &self,
        player_id: &PlayerId,
        update: PlayerUpdate,
    ) -> Result<PlayerRecord, DirectoryError>;
    async fn delete_player(&self, player_id: &PlayerId) -> Result<(), DirectoryError>;
    /// Drops the legacy team marker. Succeeds if it is already cleared.
    async fn clear_legacy_team(&self, player_id: &PlayerId) -> Result<(), DirectoryError>;
}

#[cfg(test)]
pub use mock::MockPlayerDirectory;
