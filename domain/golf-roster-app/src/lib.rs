use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{
    domain::{ghost::GhostServiceImpl, roster::RosterServiceImpl},
    ports::{player_directory::PlayerDirectoryPort, roster_store::RosterStorePort},
    processes::roster_writer::{RosterWriter, RosterWriterImpl},
    workflow::{
        ghost::{
            admit::{AdmitGhostUseCase, AdmitGhostUseCaseImpl},
            list::{ListGhostsUseCase, ListGhostsUseCaseImpl},
            remove::{RemoveGhostUseCase, RemoveGhostUseCaseImpl},
        },
        migration::legacy_teams::MigrateLegacyTeamsWorkflowImpl,
        player::{
            create::{CreatePlayerUseCase, CreatePlayerUseCaseImpl},
            delete::{DeletePlayerUseCase, DeletePlayerUseCaseImpl},
            list::{ListPlayersUseCase, ListPlayersUseCaseImpl},
            update::{UpdatePlayerUseCase, UpdatePlayerUseCaseImpl},
        },
        roster::{
            assign::{AssignToTeamUseCase, AssignToTeamUseCaseImpl},
            get::{GetRosterUseCase, GetRosterUseCaseImpl},
            initialize::{InitializeRosterUseCase, InitializeRosterUseCaseImpl},
            remove::{RemoveFromRosterUseCase, RemoveFromRosterUseCaseImpl},
            reset::{ResetRosterUseCase, ResetRosterUseCaseImpl},
            start_match::{StartMatchUseCase, StartMatchUseCaseImpl},
        },
    },
};

pub mod domain;
pub mod ports;
pub mod processes;
pub mod workflow;

pub struct Application {
    pub roster_writer_job: JoinHandle<()>,
    pub roster_writer: Arc<dyn RosterWriter + Send + Sync + 'static>,

    pub roster_initialize_use_case: Box<dyn InitializeRosterUseCase + Send + Sync + 'static>,
    pub roster_get_use_case: Box<dyn GetRosterUseCase + Send + Sync + 'static>,
    pub roster_assign_use_case: Arc<dyn AssignToTeamUseCase + Send + Sync + 'static>,
    pub roster_remove_use_case: Arc<dyn RemoveFromRosterUseCase + Send + Sync + 'static>,
    pub roster_reset_use_case: Box<dyn ResetRosterUseCase + Send + Sync + 'static>,
    pub match_start_use_case: Box<dyn StartMatchUseCase + Send + Sync + 'static>,

    pub ghost_admit_use_case: Box<dyn AdmitGhostUseCase + Send + Sync + 'static>,
    pub ghost_remove_use_case: Box<dyn RemoveGhostUseCase + Send + Sync + 'static>,
    pub ghost_list_use_case: Box<dyn ListGhostsUseCase + Send + Sync + 'static>,

    pub player_create_use_case: Box<dyn CreatePlayerUseCase + Send + Sync + 'static>,
    pub player_update_use_case: Box<dyn UpdatePlayerUseCase + Send + Sync + 'static>,
    pub player_delete_use_case: Box<dyn DeletePlayerUseCase + Send + Sync + 'static>,
    pub player_list_use_case: Box<dyn ListPlayersUseCase + Send + Sync + 'static>,
}

/// Wires the roster services to the given adapters. Must be called inside a
/// tokio runtime since it starts the background roster writer.
pub fn build_application<
    S: RosterStorePort + Send + Sync + 'static,
    D: PlayerDirectoryPort + Send + Sync + 'static,
>(
    roster_store: Arc<S>,
    player_directory: Arc<D>,
) -> Application {
    let roster_service = Arc::new(RosterServiceImpl::new());
    let ghost_service = Arc::new(GhostServiceImpl::new());

    let (roster_writer, roster_writer_job) = RosterWriterImpl::spawn(roster_store.clone());
    let roster_writer = Arc::new(roster_writer);

    let migrate_legacy_teams_workflow = Arc::new(MigrateLegacyTeamsWorkflowImpl::new(
        player_directory.clone(),
        roster_store.clone(),
    ));

    let assign_use_case = Arc::new(AssignToTeamUseCaseImpl::new(
        roster_service.clone(),
        roster_writer.clone(),
    ));
    let remove_use_case = Arc::new(RemoveFromRosterUseCaseImpl::new(
        roster_service.clone(),
        ghost_service.clone(),
        roster_writer.clone(),
    ));

    Application {
        roster_writer_job,
        roster_writer: roster_writer.clone(),

        roster_initialize_use_case: Box::new(InitializeRosterUseCaseImpl::new(
            roster_service.clone(),
            ghost_service.clone(),
            roster_store.clone(),
            migrate_legacy_teams_workflow,
        )),
        roster_get_use_case: Box::new(GetRosterUseCaseImpl::new(roster_service.clone())),
        roster_assign_use_case: assign_use_case,
        roster_remove_use_case: remove_use_case.clone(),
        roster_reset_use_case: Box::new(ResetRosterUseCaseImpl::new(
            roster_service.clone(),
            ghost_service.clone(),
            roster_writer.clone(),
        )),
        match_start_use_case: Box::new(StartMatchUseCaseImpl::new(roster_service.clone())),

        ghost_admit_use_case: Box::new(AdmitGhostUseCaseImpl::new(
            player_directory.clone(),
            roster_service.clone(),
            ghost_service.clone(),
            roster_writer.clone(),
        )),
        ghost_remove_use_case: Box::new(RemoveGhostUseCaseImpl::new(
            ghost_service.clone(),
            remove_use_case.clone(),
        )),
        ghost_list_use_case: Box::new(ListGhostsUseCaseImpl::new(
            player_directory.clone(),
            ghost_service.clone(),
        )),

        player_create_use_case: Box::new(CreatePlayerUseCaseImpl::new(player_directory.clone())),
        player_update_use_case: Box::new(UpdatePlayerUseCaseImpl::new(player_directory.clone())),
        player_delete_use_case: Box::new(DeletePlayerUseCaseImpl::new(
            player_directory.clone(),
            ghost_service,
            remove_use_case,
        )),
        player_list_use_case: Box::new(ListPlayersUseCaseImpl::new(player_directory)),
    }
}
