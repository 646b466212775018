use std::sync::Arc;

use crate::{
    domain::{
        ghost::GhostService,
        roster::{MatchRoster, RosterService},
    },
    processes::roster_writer::RosterWriter,
};

pub trait ResetRosterUseCase {
    /// Empties both teams and discards all ghosts of the match.
    fn reset_roster(&self) -> MatchRoster;
}

pub struct ResetRosterUseCaseImpl<R: RosterService, G: GhostService, W: RosterWriter> {
    roster_service: Arc<R>,
    ghost_service: Arc<G>,
    roster_writer: Arc<W>,
}

impl<R: RosterService, G: GhostService, W: RosterWriter> ResetRosterUseCaseImpl<R, G, W> {
    pub fn new(roster_service: Arc<R>, ghost_service: Arc<G>, roster_writer: Arc<W>) -> Self {
        Self {
            roster_service,
            ghost_service,
            roster_writer,
        }
    }
}

impl<R: RosterService, G: GhostService, W: RosterWriter> ResetRosterUseCase
    for ResetRosterUseCaseImpl<R, G, W>
{
    fn reset_roster(&self) -> MatchRoster {
        let ghosts = self.ghost_service.clear();
        let roster = self.roster_service.reset();
        log::info!("Roster reset, {} ghosts discarded", ghosts.len());
        self.roster_writer.enqueue_ghosts(Vec::new());
        self.roster_writer.enqueue_save(roster.clone());
        roster
    }
}
