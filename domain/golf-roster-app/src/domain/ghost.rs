use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{PlayerId, player::PlayerRecord};

/// Fixed player ceiling of a match: two teams of two.
pub const MAX_MATCH_PLAYERS: usize = 4;

/// Per-match stand-in built from a real player's data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GhostPlayer {
    pub id: PlayerId,
    pub source_player_id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub handicap_index: f64,
}

impl GhostPlayer {
    pub fn from_source(source: &PlayerRecord) -> Self {
        let token = uuid::Uuid::new_v4().simple().to_string();
        Self {
            id: PlayerId::new(format!("{}-ghost-{}", source.id, token)),
            source_player_id: source.id.clone(),
            first_name: source.first_name.clone(),
            last_name: source.last_name.clone(),
            handicap_index: source.handicap_index,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum AdmitGhostError {
    #[error("a match cannot have more than {} players", MAX_MATCH_PLAYERS)]
    Capacity,

    #[error("player {0} already has a ghost")]
    DuplicateSource(PlayerId),

    #[error("player {0} not found")]
    SourceNotFound(PlayerId),

    #[error("ghost {0} cannot be the source of another ghost")]
    SourceIsGhost(PlayerId),

    #[error("player directory unavailable: {0}")]
    Directory(String),
}

pub trait GhostService {
    fn list_ghosts(&self) -> Vec<GhostPlayer>;
    fn is_ghost(&self, player_id: &PlayerId) -> bool;
    fn has_ghost_for_source(&self, source_player_id: &PlayerId) -> bool;
    /// Registers `ghost` unless its source already has one or the match is
    /// full. `real_players` is the number of non-ghost players on the roster.
    fn try_register(
        &self,
        ghost: GhostPlayer,
        real_players: usize,
    ) -> Result<GhostPlayer, AdmitGhostError>;
    fn remove_ghost(&self, player_id: &PlayerId) -> Option<GhostPlayer>;
    fn clear(&self) -> Vec<GhostPlayer>;
    /// Swaps in a registry restored from storage.
    fn replace_ghosts(&self, ghosts: Vec<GhostPlayer>);
}

#[derive(Clone)]
pub struct GhostServiceImpl {
    ghosts: Arc<RwLock<Vec<GhostPlayer>>>,
}

impl GhostServiceImpl {
    pub fn new() -> Self {
        Self {
            ghosts: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl GhostService for GhostServiceImpl {
    fn list_ghosts(&self) -> Vec<GhostPlayer> {
        self.ghosts.read().unwrap().clone()
    }

    fn is_ghost(&self, player_id: &PlayerId) -> bool {
        self.ghosts
            .read()
            .unwrap()
            .iter()
            .any(|ghost| &ghost.id == player_id)
    }

    fn has_ghost_for_source(&self, source_player_id: &PlayerId) -> bool {
        self.ghosts
            .read()
            .unwrap()
            .iter()
            .any(|ghost| &ghost.source_player_id == source_player_id)
    }

    fn try_register(
        &self,
        ghost: GhostPlayer,
        real_players: usize,
    ) -> Result<GhostPlayer, AdmitGhostError> {
        let mut ghosts = self.ghosts.write().unwrap();
        if ghosts
            .iter()
            .any(|existing| existing.source_player_id == ghost.source_player_id)
        {
            return Err(AdmitGhostError::DuplicateSource(ghost.source_player_id));
        }
        if real_players + ghosts.len() >= MAX_MATCH_PLAYERS {
            return Err(AdmitGhostError::Capacity);
        }
        ghosts.push(ghost.clone());
        Ok(ghost)
    }

    fn remove_ghost(&self, player_id: &PlayerId) -> Option<GhostPlayer> {
        let mut ghosts = self.ghosts.write().unwrap();
        let index = ghosts.iter().position(|ghost| &ghost.id == player_id)?;
        Some(ghosts.remove(index))
    }

    fn clear(&self) -> Vec<GhostPlayer> {
        std::mem::take(&mut *self.ghosts.write().unwrap())
    }

    fn replace_ghosts(&self, ghosts: Vec<GhostPlayer>) {
        *self.ghosts.write().unwrap() = ghosts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str) -> PlayerRecord {
        PlayerRecord {
            id: id.into(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            handicap_index: 12.4,
            legacy_team: None,
        }
    }

    #[test]
    fn test_ghost_copies_source() {
        let source = player("p1");
        let ghost = GhostPlayer::from_source(&source);
        assert_eq!(ghost.source_player_id, source.id);
        assert_eq!(ghost.handicap_index, 12.4);
        assert_ne!(ghost.id, source.id);
        assert!(ghost.id.as_str().starts_with("p1-ghost-"));
        assert_ne!(ghost.id, GhostPlayer::from_source(&source).id);
    }

    #[test]
    fn test_one_ghost_per_source() {
        let service = GhostServiceImpl::new();
        let source = player("p1");
        service
            .try_register(GhostPlayer::from_source(&source), 0)
            .expect("first ghost should register");
        assert!(matches!(
            service.try_register(GhostPlayer::from_source(&source), 0),
            Err(AdmitGhostError::DuplicateSource(id)) if id == source.id
        ));
        assert_eq!(service.list_ghosts().len(), 1);

        let ghost_id = service.list_ghosts()[0].id.clone();
        assert!(service.remove_ghost(&ghost_id).is_some());
        assert!(!service.has_ghost_for_source(&source.id));
        assert!(
            service
                .try_register(GhostPlayer::from_source(&source), 0)
                .is_ok()
        );
    }

    #[test]
    fn test_capacity_counts_real_players_and_ghosts() {
        let service = GhostServiceImpl::new();
        service
            .try_register(GhostPlayer::from_source(&player("p1")), 2)
            .unwrap();
        assert!(
            service
                .try_register(GhostPlayer::from_source(&player("p2")), 3)
                .is_err()
        );
        assert!(matches!(
            service.try_register(GhostPlayer::from_source(&player("p2")), 3),
            Err(AdmitGhostError::Capacity)
        ));
        assert!(
            service
                .try_register(GhostPlayer::from_source(&player("p2")), 2)
                .is_ok()
        );
        assert_eq!(service.list_ghosts().len(), 2);
    }

    #[test]
    fn test_replaced_registry_blocks_duplicates() {
        let service = GhostServiceImpl::new();
        let restored = GhostPlayer::from_source(&player("p1"));
        service.replace_ghosts(vec![restored.clone()]);

        assert!(service.is_ghost(&restored.id));
        assert!(matches!(
            service.try_register(GhostPlayer::from_source(&player("p1")), 0),
            Err(AdmitGhostError::DuplicateSource(_))
        ));
    }

    #[test]
    fn test_ghost_json_shape() {
        let ghost = GhostPlayer {
            id: "p1-ghost-1".into(),
            source_player_id: "p1".into(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            handicap_index: 12.4,
        };
        let json = serde_json::to_value(&ghost).unwrap();
        assert_eq!(json["sourcePlayerId"], "p1");
        let parsed: GhostPlayer = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, ghost);
    }
}
