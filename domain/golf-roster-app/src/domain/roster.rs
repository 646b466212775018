use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, Team};

/// Assignment of players to the two match teams.
///
/// A player id appears in at most one team and at most once. Each team keeps
/// assignment order, most recently assigned last.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRoster {
    #[serde(default)]
    red: Vec<PlayerId>,
    #[serde(default)]
    blue: Vec<PlayerId>,
}

impl MatchRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from stored sequences as-is.
    pub fn from_teams(red: Vec<PlayerId>, blue: Vec<PlayerId>) -> Self {
        Self { red, blue }
    }

    pub fn team(&self, team: Team) -> &[PlayerId] {
        match team {
            Team::Red => &self.red,
            Team::Blue => &self.blue,
        }
    }

    fn team_mut(&mut self, team: Team) -> &mut Vec<PlayerId> {
        match team {
            Team::Red => &mut self.red,
            Team::Blue => &mut self.blue,
        }
    }

    pub fn team_of(&self, player_id: &PlayerId) -> Option<Team> {
        Team::ALL
            .into_iter()
            .find(|team| self.team(*team).contains(player_id))
    }

    pub fn contains(&self, player_id: &PlayerId) -> bool {
        self.team_of(player_id).is_some()
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerId> {
        self.red.iter().chain(self.blue.iter())
    }

    pub fn len(&self) -> usize {
        self.red.len() + self.blue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.red.is_empty() && self.blue.is_empty()
    }

    /// Moves the player to the end of `team`, dropping any previous assignment.
    pub fn assign(&mut self, player_id: PlayerId, team: Team) {
        self.remove(&player_id);
        self.team_mut(team).push(player_id);
    }

    /// Returns the team the player was removed from, if any.
    pub fn remove(&mut self, player_id: &PlayerId) -> Option<Team> {
        let mut removed_from = None;
        for team in Team::ALL {
            let players = self.team_mut(team);
            let before = players.len();
            players.retain(|id| id != player_id);
            if players.len() != before {
                removed_from = Some(team);
            }
        }
        removed_from
    }
}

pub trait RosterService {
    fn get_roster(&self) -> MatchRoster;
    fn replace_roster(&self, roster: MatchRoster);
    fn assign_to_team(&self, player_id: PlayerId, team: Team) -> MatchRoster;
    fn remove(&self, player_id: &PlayerId) -> (Option<Team>, MatchRoster);
    fn reset(&self) -> MatchRoster;
}

/// In-memory holder of the current roster. Every method returns the roster
/// as it stood right after the call so callers can persist that snapshot.
#[derive(Clone)]
pub struct RosterServiceImpl {
    roster: Arc<RwLock<MatchRoster>>,
}

impl RosterServiceImpl {
    pub fn new() -> Self {
        Self {
            roster: Arc::new(RwLock::new(MatchRoster::new())),
        }
    }
}

impl RosterService for RosterServiceImpl {
    fn get_roster(&self) -> MatchRoster {
        self.roster.read().unwrap().clone()
    }

    fn replace_roster(&self, roster: MatchRoster) {
        *self.roster.write().unwrap() = roster;
    }

    fn assign_to_team(&self, player_id: PlayerId, team: Team) -> MatchRoster {
        let mut roster = self.roster.write().unwrap();
        roster.assign(player_id, team);
        roster.clone()
    }

    fn remove(&self, player_id: &PlayerId) -> (Option<Team>, MatchRoster) {
        let mut roster = self.roster.write().unwrap();
        let removed_from = roster.remove(player_id);
        (removed_from, roster.clone())
    }

    fn reset(&self) -> MatchRoster {
        let mut roster = self.roster.write().unwrap();
        *roster = MatchRoster::new();
        roster.clone()
    }
}
