use std::sync::Arc;

use crate::domain::roster::{MatchRoster, RosterService};

pub trait GetRosterUseCase {
    fn get_roster(&self) -> MatchRoster;
}

pub struct GetRosterUseCaseImpl<R: RosterService> {
    roster_service: Arc<R>,
}

impl<R: RosterService> GetRosterUseCaseImpl<R> {
    pub fn new(roster_service: Arc<R>) -> Self {
        Self { roster_service }
    }
}

impl<R: RosterService> GetRosterUseCase for GetRosterUseCaseImpl<R> {
    fn get_roster(&self) -> MatchRoster {
        self.roster_service.get_roster()
    }
}
