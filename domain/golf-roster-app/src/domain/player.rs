use crate::domain::PlayerId;

/// A player as held by the player directory.
///
/// `legacy_team` is the deprecated single-value team marker (`"Red"`/`"Blue"`)
/// left over from before rosters existed. It is read only during migration.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub handicap_index: f64,
    pub legacy_team: Option<String>,
}

impl PlayerRecord {
    pub fn new(id: PlayerId, new_player: NewPlayer) -> Self {
        Self {
            id,
            first_name: new_player.first_name,
            last_name: new_player.last_name,
            handicap_index: new_player.handicap_index,
            legacy_team: None,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub handicap_index: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PlayerUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub handicap_index: Option<f64>,
}

impl PlayerUpdate {
    pub fn apply(self, player: &mut PlayerRecord) {
        if let Some(first_name) = self.first_name {
            player.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            player.last_name = last_name;
        }
        if let Some(handicap_index) = self.handicap_index {
            player.handicap_index = handicap_index;
        }
    }
}
