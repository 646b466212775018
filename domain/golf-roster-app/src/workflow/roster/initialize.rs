use std::sync::Arc;

use crate::{
    domain::{
        ghost::{GhostPlayer, GhostService},
        roster::{MatchRoster, RosterService},
    },
    ports::roster_store::RosterStorePort,
    workflow::migration::legacy_teams::MigrateLegacyTeamsWorkflow,
};

#[async_trait::async_trait]
pub trait InitializeRosterUseCase {
    /// Loads the stored roster, falling back to legacy migration when none
    /// was ever saved. Ghosts stored with the roster are restored too. Never
    /// fails: any error leaves an empty roster.
    async fn initialize(&self) -> MatchRoster;
}

pub struct InitializeRosterUseCaseImpl<
    R: RosterService,
    G: GhostService,
    S: RosterStorePort,
    M: MigrateLegacyTeamsWorkflow,
> {
    roster_service: Arc<R>,
    ghost_service: Arc<G>,
    roster_store: Arc<S>,
    migrate_legacy_teams_workflow: Arc<M>,
}

impl<R: RosterService, G: GhostService, S: RosterStorePort, M: MigrateLegacyTeamsWorkflow>
    InitializeRosterUseCaseImpl<R, G, S, M>
{
    pub fn new(
        roster_service: Arc<R>,
        ghost_service: Arc<G>,
        roster_store: Arc<S>,
        migrate_legacy_teams_workflow: Arc<M>,
    ) -> Self {
        Self {
            roster_service,
            ghost_service,
            roster_store,
            migrate_legacy_teams_workflow,
        }
    }

    /// Stored ghosts that still sit on `roster`.
    async fn load_ghosts(&self, roster: &MatchRoster) -> Vec<GhostPlayer> {
        match self.roster_store.load_ghosts().await {
            Ok(ghosts) => ghosts
                .into_iter()
                .filter(|ghost| roster.contains(&ghost.id))
                .collect(),
            Err(e) => {
                log::error!("Failed to load stored ghosts: {}", e);
                Vec::new()
            }
        }
    }
}

#[async_trait::async_trait]
impl<
    R: RosterService + Send + Sync + 'static,
    G: GhostService + Send + Sync + 'static,
    S: RosterStorePort + Send + Sync + 'static,
    M: MigrateLegacyTeamsWorkflow + Send + Sync + 'static,
> InitializeRosterUseCase for InitializeRosterUseCaseImpl<R, G, S, M>
{
    async fn initialize(&self) -> MatchRoster {
        let (roster, ghosts) = match self.roster_store.load_roster().await {
            Ok(Some(roster)) => {
                let ghosts = self.load_ghosts(&roster).await;
                log::info!(
                    "Loaded stored roster with {} players ({} ghosts)",
                    roster.len(),
                    ghosts.len()
                );
                (roster, ghosts)
            }
            Ok(None) => {
                log::info!("No stored roster, migrating legacy team markers");
                match self
                    .migrate_legacy_teams_workflow
                    .migrate_legacy_teams()
                    .await
                {
                    Ok(roster) => (roster, Vec::new()),
                    Err(e) => {
                        log::error!("Legacy team migration failed: {}", e);
                        (MatchRoster::new(), Vec::new())
                    }
                }
            }
            Err(e) => {
                log::error!("Failed to load stored roster: {}", e);
                (MatchRoster::new(), Vec::new())
            }
        };

        self.ghost_service.replace_ghosts(ghosts);
        self.roster_service.replace_roster(roster.clone());
        roster
    }
}
