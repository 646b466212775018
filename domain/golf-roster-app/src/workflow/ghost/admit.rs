use std::sync::Arc;

use crate::{
    domain::{
        DirectoryError, PlayerId, Team,
        ghost::{AdmitGhostError, GhostPlayer, GhostService},
        roster::RosterService,
    },
    ports::player_directory::PlayerDirectoryPort,
    processes::roster_writer::RosterWriter,
};

#[async_trait::async_trait]
pub trait AdmitGhostUseCase {
    /// Creates a ghost of `source_player_id` and puts it on `team`.
    ///
    /// Refused without touching any state when the source already has a
    /// ghost, is itself a ghost, is unknown, or the match is full.
    async fn admit_ghost(
        &self,
        source_player_id: &PlayerId,
        team: Team,
    ) -> Result<GhostPlayer, AdmitGhostError>;
}

pub struct AdmitGhostUseCaseImpl<
    D: PlayerDirectoryPort,
    R: RosterService,
    G: GhostService,
    W: RosterWriter,
> {
    player_directory: Arc<D>,
    roster_service: Arc<R>,
    ghost_service: Arc<G>,
    roster_writer: Arc<W>,
}

impl<D: PlayerDirectoryPort, R: RosterService, G: GhostService, W: RosterWriter>
    AdmitGhostUseCaseImpl<D, R, G, W>
{
    pub fn new(
        player_directory: Arc<D>,
        roster_service: Arc<R>,
        ghost_service: Arc<G>,
        roster_writer: Arc<W>,
    ) -> Self {
        Self {
            player_directory,
            roster_service,
            ghost_service,
            roster_writer,
        }
    }
}

#[async_trait::async_trait]
impl<
    D: PlayerDirectoryPort + Send + Sync + 'static,
    R: RosterService + Send + Sync + 'static,
    G: GhostService + Send + Sync + 'static,
    W: RosterWriter + Send + Sync + 'static,
> AdmitGhostUseCase for AdmitGhostUseCaseImpl<D, R, G, W>
{
    async fn admit_ghost(
        &self,
        source_player_id: &PlayerId,
        team: Team,
    ) -> Result<GhostPlayer, AdmitGhostError> {
        if self.ghost_service.is_ghost(source_player_id) {
            return Err(AdmitGhostError::SourceIsGhost(source_player_id.clone()));
        }
        if self.ghost_service.has_ghost_for_source(source_player_id) {
            return Err(AdmitGhostError::DuplicateSource(source_player_id.clone()));
        }

        let source = match self.player_directory.get_player(source_player_id).await {
            Ok(source) => source,
            Err(DirectoryError::NotFound(id)) => return Err(AdmitGhostError::SourceNotFound(id)),
            Err(e) => return Err(AdmitGhostError::Directory(e.to_string())),
        };

        // Only the ghost count is read under the registry lock. A real player
        // assigned concurrently orders as if assigned after this admission,
        // which assign allows since it never limits team size.
        let roster = self.roster_service.get_roster();
        let real_players = roster
            .players()
            .filter(|id| !self.ghost_service.is_ghost(id))
            .count();
        let ghost = self
            .ghost_service
            .try_register(GhostPlayer::from_source(&source), real_players)?;

        self.roster_writer
            .enqueue_ghosts(self.ghost_service.list_ghosts());
        let roster = self.roster_service.assign_to_team(ghost.id.clone(), team);
        self.roster_writer.enqueue_save(roster);

        log::info!(
            "Admitted ghost {} of {} to team {}",
            ghost.id,
            source.display_name(),
            team
        );
        Ok(ghost)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::{
            ghost::GhostServiceImpl,
            player::PlayerRecord,
            roster::{MatchRoster, RosterServiceImpl},
        },
        ports::{player_directory::MockPlayerDirectory, roster_store::MockRosterStore},
        processes::roster_writer::RosterWriterImpl,
    };

    use super::*;

    struct Fixture {
        roster_service: Arc<RosterServiceImpl>,
        ghost_service: Arc<GhostServiceImpl>,
        store: MockRosterStore,
        writer: Arc<RosterWriterImpl>,
        use_case: AdmitGhostUseCaseImpl<
            MockPlayerDirectory,
            RosterServiceImpl,
            GhostServiceImpl,
            RosterWriterImpl,
        >,
    }

    fn player(id: &str) -> PlayerRecord {
        PlayerRecord {
            id: id.into(),
            first_name: id.to_uppercase(),
            last_name: "Player".to_string(),
            handicap_index: 14.0,
            legacy_team: None,
        }
    }

    fn fixture(directory: MockPlayerDirectory) -> Fixture {
        let roster_service = Arc::new(RosterServiceImpl::new());
        let ghost_service = Arc::new(GhostServiceImpl::new());
        let store = MockRosterStore::default();
        let (writer, _handle) = RosterWriterImpl::spawn(Arc::new(store.clone()));
        let writer = Arc::new(writer);
        let use_case = AdmitGhostUseCaseImpl::new(
            Arc::new(directory),
            roster_service.clone(),
            ghost_service.clone(),
            writer.clone(),
        );
        Fixture {
            roster_service,
            ghost_service,
            store,
            writer,
            use_case,
        }
    }

    #[tokio::test]
    async fn test_admitted_ghost_joins_team() {
        let fx = fixture(MockPlayerDirectory::with_players(vec![player("p1"), player("p2")]));
        fx.roster_service.assign_to_team("p1".into(), Team::Red);

        let ghost = fx
            .use_case
            .admit_ghost(&"p2".into(), Team::Red)
            .await
            .expect("ghost should be admitted");

        assert_eq!(ghost.source_player_id, PlayerId::from("p2"));
        assert_eq!(
            fx.roster_service.get_roster().team(Team::Red),
            &[PlayerId::from("p1"), ghost.id.clone()]
        );
        assert_eq!(fx.ghost_service.list_ghosts(), vec![ghost.clone()]);

        fx.writer.flush().await;
        assert_eq!(fx.store.stored_ghosts(), Some(vec![ghost]));
        assert_eq!(fx.store.stored(), Some(fx.roster_service.get_roster()));
    }

    #[tokio::test]
    async fn test_full_match_refuses_ghost() {
        let fx = fixture(MockPlayerDirectory::with_players(vec![
            player("p1"),
            player("p2"),
            player("p3"),
            player("p4"),
        ]));
        fx.roster_service.assign_to_team("p1".into(), Team::Red);
        fx.roster_service.assign_to_team("p2".into(), Team::Red);
        fx.roster_service.assign_to_team("p3".into(), Team::Blue);
        fx.use_case
            .admit_ghost(&"p1".into(), Team::Blue)
            .await
            .unwrap();
        let before: MatchRoster = fx.roster_service.get_roster();
        assert_eq!(before.len(), 4);

        let result = fx.use_case.admit_ghost(&"p4".into(), Team::Blue).await;

        assert!(matches!(result, Err(AdmitGhostError::Capacity)));
        assert_eq!(fx.roster_service.get_roster(), before);
        assert_eq!(fx.ghost_service.list_ghosts().len(), 1);
    }

    #[tokio::test]
    async fn test_four_real_players_refuse_ghost() {
        let fx = fixture(MockPlayerDirectory::with_players(vec![player("p1")]));
        for (id, team) in [
            ("a", Team::Red),
            ("b", Team::Red),
            ("c", Team::Blue),
            ("d", Team::Blue),
        ] {
            fx.roster_service.assign_to_team(id.into(), team);
        }

        let result = fx.use_case.admit_ghost(&"p1".into(), Team::Red).await;

        assert!(matches!(result, Err(AdmitGhostError::Capacity)));
        assert!(fx.ghost_service.list_ghosts().is_empty());
    }

    #[tokio::test]
    async fn test_second_ghost_of_same_source_is_refused() {
        let fx = fixture(MockPlayerDirectory::with_players(vec![player("p1")]));
        let ghost = fx
            .use_case
            .admit_ghost(&"p1".into(), Team::Red)
            .await
            .unwrap();

        let result = fx.use_case.admit_ghost(&"p1".into(), Team::Blue).await;
        assert!(matches!(result, Err(AdmitGhostError::DuplicateSource(_))));

        let result = fx.use_case.admit_ghost(&ghost.id, Team::Blue).await;
        assert!(matches!(result, Err(AdmitGhostError::SourceIsGhost(_))));
        assert_eq!(fx.roster_service.get_roster().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_source_is_refused() {
        let directory = MockPlayerDirectory::with_players(vec![player("p1")]);
        let fx = fixture(directory.clone());

        let result = fx.use_case.admit_ghost(&"nobody".into(), Team::Red).await;
        assert!(matches!(result, Err(AdmitGhostError::SourceNotFound(_))));

        directory.set_offline(true);
        let result = fx.use_case.admit_ghost(&"p1".into(), Team::Red).await;
        assert!(matches!(result, Err(AdmitGhostError::Directory(_))));
        assert!(fx.roster_service.get_roster().is_empty());
    }
}
