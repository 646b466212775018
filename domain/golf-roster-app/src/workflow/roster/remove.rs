use std::sync::Arc;

use crate::{
    domain::{
        PlayerId,
        ghost::GhostService,
        roster::{MatchRoster, RosterService},
    },
    processes::roster_writer::RosterWriter,
};

pub trait RemoveFromRosterUseCase {
    /// Takes the player off whichever team holds them. Removing a ghost also
    /// drops it from the ghost registry.
    fn remove(&self, player_id: &PlayerId) -> MatchRoster;
}

pub struct RemoveFromRosterUseCaseImpl<R: RosterService, G: GhostService, W: RosterWriter> {
    roster_service: Arc<R>,
    ghost_service: Arc<G>,
    roster_writer: Arc<W>,
}

impl<R: RosterService, G: GhostService, W: RosterWriter> RemoveFromRosterUseCaseImpl<R, G, W> {
    pub fn new(roster_service: Arc<R>, ghost_service: Arc<G>, roster_writer: Arc<W>) -> Self {
        Self {
            roster_service,
            ghost_service,
            roster_writer,
        }
    }
}

impl<R: RosterService, G: GhostService, W: RosterWriter> RemoveFromRosterUseCase
    for RemoveFromRosterUseCaseImpl<R, G, W>
{
    fn remove(&self, player_id: &PlayerId) -> MatchRoster {
        if let Some(ghost) = self.ghost_service.remove_ghost(player_id) {
            log::info!(
                "Removed ghost {} of player {}",
                ghost.id,
                ghost.source_player_id
            );
            self.roster_writer
                .enqueue_ghosts(self.ghost_service.list_ghosts());
        }
        let (removed_from, roster) = self.roster_service.remove(player_id);
        if let Some(team) = removed_from {
            log::debug!("Removed player {} from team {}", player_id, team);
        }
        self.roster_writer.enqueue_save(roster.clone());
        roster
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::{
            Team,
            ghost::{GhostPlayer, GhostServiceImpl},
            player::PlayerRecord,
            roster::RosterServiceImpl,
        },
        ports::roster_store::MockRosterStore,
        processes::roster_writer::RosterWriterImpl,
    };

    use super::*;

    #[tokio::test]
    async fn test_remove_absent_player_leaves_roster_unchanged() {
        let store = MockRosterStore::default();
        let roster_service = Arc::new(RosterServiceImpl::new());
        let initial = MatchRoster::from_teams(vec!["p1".into()], vec!["p2".into()]);
        roster_service.replace_roster(initial.clone());
        let (writer, _handle) = RosterWriterImpl::spawn(Arc::new(store.clone()));
        let writer = Arc::new(writer);
        let use_case = RemoveFromRosterUseCaseImpl::new(
            roster_service.clone(),
            Arc::new(GhostServiceImpl::new()),
            writer.clone(),
        );

        assert_eq!(use_case.remove(&"p9".into()), initial);
        assert!(use_case.remove(&"p1".into()).team(Team::Red).is_empty());

        writer.flush().await;
        assert_eq!(
            store.stored(),
            Some(MatchRoster::from_teams(vec![], vec!["p2".into()]))
        );
    }

    #[tokio::test]
    async fn test_removing_ghost_unregisters_it() {
        let store = MockRosterStore::default();
        let roster_service = Arc::new(RosterServiceImpl::new());
        let ghost_service = Arc::new(GhostServiceImpl::new());
        let source = PlayerRecord {
            id: "p1".into(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            handicap_index: 3.1,
            legacy_team: None,
        };
        let ghost = ghost_service
            .try_register(GhostPlayer::from_source(&source), 0)
            .unwrap();
        roster_service.assign_to_team(ghost.id.clone(), Team::Red);
        let (writer, _handle) = RosterWriterImpl::spawn(Arc::new(store.clone()));
        let writer = Arc::new(writer);
        let use_case = RemoveFromRosterUseCaseImpl::new(
            roster_service.clone(),
            ghost_service.clone(),
            writer.clone(),
        );

        let roster = use_case.remove(&ghost.id);

        assert!(roster.is_empty());
        assert!(!ghost_service.is_ghost(&ghost.id));
        assert!(!ghost_service.has_ghost_for_source(&source.id));

        writer.flush().await;
        assert_eq!(store.stored_ghosts(), Some(vec![]));
    }
}
