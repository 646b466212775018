use std::sync::Arc;

use crate::{
    domain::{DirectoryError, Team, roster::MatchRoster},
    ports::{player_directory::PlayerDirectoryPort, roster_store::RosterStorePort},
};

/// Maps a legacy team marker (`"Red"`, `"blue"`, ...) onto a team.
pub fn parse_legacy_team(marker: &str) -> Option<Team> {
    match marker.trim().to_lowercase().as_str() {
        "red" => Some(Team::Red),
        "blue" => Some(Team::Blue),
        _ => None,
    }
}

#[async_trait::async_trait]
pub trait MigrateLegacyTeamsWorkflow {
    /// Builds a roster from the legacy per-player team markers, clears those
    /// markers and saves the result. Only a failing directory listing is
    /// reported; everything after it is best effort.
    async fn migrate_legacy_teams(&self) -> Result<MatchRoster, DirectoryError>;
}

pub struct MigrateLegacyTeamsWorkflowImpl<D: PlayerDirectoryPort, S: RosterStorePort> {
    player_directory: Arc<D>,
    roster_store: Arc<S>,
}

impl<D: PlayerDirectoryPort, S: RosterStorePort> MigrateLegacyTeamsWorkflowImpl<D, S> {
    pub fn new(player_directory: Arc<D>, roster_store: Arc<S>) -> Self {
        Self {
            player_directory,
            roster_store,
        }
    }
}

#[async_trait::async_trait]
impl<D: PlayerDirectoryPort + Send + Sync + 'static, S: RosterStorePort + Send + Sync + 'static>
    MigrateLegacyTeamsWorkflow for MigrateLegacyTeamsWorkflowImpl<D, S>
{
    async fn migrate_legacy_teams(&self) -> Result<MatchRoster, DirectoryError> {
        let players = self.player_directory.list_players().await?;

        let mut roster = MatchRoster::new();
        let mut migrated = Vec::new();
        for player in players {
            let Some(marker) = player.legacy_team.as_deref() else {
                continue;
            };
            match parse_legacy_team(marker) {
                Some(team) => {
                    roster.assign(player.id.clone(), team);
                    migrated.push(player.id);
                }
                None => log::warn!(
                    "Ignoring unknown legacy team marker {:?} on player {}",
                    marker,
                    player.id
                ),
            }
        }

        let clears = migrated
            .iter()
            .map(|player_id| self.player_directory.clear_legacy_team(player_id));
        let results = futures::future::join_all(clears).await;
        for (player_id, result) in migrated.iter().zip(results) {
            if let Err(e) = result {
                log::error!("Failed to clear legacy team of player {}: {}", player_id, e);
            }
        }

        if let Err(e) = self.roster_store.save_roster(&roster).await {
            log::error!("Failed to save migrated roster: {}", e);
        }

        log::info!("Migrated {} players from legacy team markers", migrated.len());
        Ok(roster)
    }
}
