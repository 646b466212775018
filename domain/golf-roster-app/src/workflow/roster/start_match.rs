use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::domain::{PlayerId, Team, roster::RosterService};

/// Players each team needs before a match can start.
pub const TEAM_SIZE: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchLineup {
    pub red: Vec<PlayerId>,
    pub blue: Vec<PlayerId>,
}

#[derive(Debug, Clone, Error)]
pub enum StartMatchError {
    #[error("team {team} has {size} players but needs {}", TEAM_SIZE)]
    TeamSize { team: Team, size: usize },
}

pub trait StartMatchUseCase {
    fn start_match(&self) -> Result<MatchLineup, StartMatchError>;
}

pub struct StartMatchUseCaseImpl<R: RosterService> {
    roster_service: Arc<R>,
}

impl<R: RosterService> StartMatchUseCaseImpl<R> {
    pub fn new(roster_service: Arc<R>) -> Self {
        Self { roster_service }
    }
}

impl<R: RosterService> StartMatchUseCase for StartMatchUseCaseImpl<R> {
    fn start_match(&self) -> Result<MatchLineup, StartMatchError> {
        let roster = self.roster_service.get_roster();
        for team in Team::ALL {
            let size = roster.team(team).len();
            if size != TEAM_SIZE {
                return Err(StartMatchError::TeamSize { team, size });
            }
        }
        log::info!("Starting match");
        Ok(MatchLineup {
            red: roster.team(Team::Red).to_vec(),
            blue: roster.team(Team::Blue).to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::roster::RosterServiceImpl;

    use super::*;

    #[test]
    fn test_match_needs_two_per_team() {
        let roster_service = Arc::new(RosterServiceImpl::new());
        let use_case = StartMatchUseCaseImpl::new(roster_service.clone());

        assert!(matches!(
            use_case.start_match(),
            Err(StartMatchError::TeamSize { team: Team::Red, size: 0 })
        ));

        roster_service.assign_to_team("p1".into(), Team::Red);
        roster_service.assign_to_team("p2".into(), Team::Red);
        roster_service.assign_to_team("p3".into(), Team::Blue);
        assert!(matches!(
            use_case.start_match(),
            Err(StartMatchError::TeamSize { team: Team::Blue, size: 1 })
        ));

        roster_service.assign_to_team("p4".into(), Team::Blue);
        let lineup = use_case.start_match().expect("match should start");
        assert_eq!(lineup.red, vec![PlayerId::from("p1"), PlayerId::from("p2")]);
        assert_eq!(lineup.blue, vec![PlayerId::from("p3"), PlayerId::from("p4")]);

        roster_service.assign_to_team("p5".into(), Team::Blue);
        assert!(matches!(
            use_case.start_match(),
            Err(StartMatchError::TeamSize { team: Team::Blue, size: 3 })
        ));
    }
}
