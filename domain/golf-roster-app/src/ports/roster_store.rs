use crate::domain::{StoreError, ghost::GhostPlayer, roster::MatchRoster};

/// Key under which the current match roster is stored.
pub const CURRENT_ROSTER_KEY: &str = "currentRoster";

/// Key under which the ghosts of the current match are stored.
pub const CURRENT_GHOSTS_KEY: &str = "currentGhosts";

#[async_trait::async_trait]
pub trait RosterStorePort {
    /// Returns `None` when no roster has ever been saved.
    async fn load_roster(&self) -> Result<Option<MatchRoster>, StoreError>;
    async fn save_roster(&self, roster: &MatchRoster) -> Result<(), StoreError>;
    /// Returns an empty list when no ghosts have ever been saved.
    async fn load_ghosts(&self) -> Result<Vec<GhostPlayer>, StoreError>;
    async fn save_ghosts(&self, ghosts: &[GhostPlayer]) -> Result<(), StoreError>;
}

#[cfg(test)]
pub use mock::MockRosterStore;

#[cfg(test)]
mod mock {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    };

    use super::*;

    #[derive(Clone, Default)]
    pub struct MockRosterStore {
        stored: Arc<Mutex<Option<MatchRoster>>>,
        saves: Arc<Mutex<Vec<MatchRoster>>>,
        ghosts: Arc<Mutex<Option<Vec<GhostPlayer>>>>,
        load_calls: Arc<AtomicUsize>,
        fail_loads: Arc<AtomicBool>,
        fail_saves: Arc<AtomicBool>,
    }

    #[allow(unused)]
    impl MockRosterStore {
        pub fn with_roster(roster: MatchRoster) -> Self {
            let store = Self::default();
            *store.stored.lock().unwrap() = Some(roster);
            store
        }

        pub fn stored(&self) -> Option<MatchRoster> {
            self.stored.lock().unwrap().clone()
        }

        pub fn stored_ghosts(&self) -> Option<Vec<GhostPlayer>> {
            self.ghosts.lock().unwrap().clone()
        }

        pub fn get_saves(&self) -> Vec<MatchRoster> {
            self.saves.lock().unwrap().clone()
        }

        pub fn load_calls(&self) -> usize {
            self.load_calls.load(Ordering::SeqCst)
        }

        pub fn set_fail_loads(&self, fail: bool) {
            self.fail_loads.store(fail, Ordering::SeqCst);
        }

        pub fn set_fail_saves(&self, fail: bool) {
            self.fail_saves.store(fail, Ordering::SeqCst);
        }
    }

    #[async_trait::async_trait]
    impl RosterStorePort for MockRosterStore {
        async fn load_roster(&self) -> Result<Option<MatchRoster>, StoreError> {
            self.load_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_loads.load(Ordering::SeqCst) {
                return Err(StoreError::Storage("store offline".to_string()));
            }
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save_roster(&self, roster: &MatchRoster) -> Result<(), StoreError> {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(StoreError::Storage("store offline".to_string()));
            }
            self.saves.lock().unwrap().push(roster.clone());
            *self.stored.lock().unwrap() = Some(roster.clone());
            Ok(())
        }

        async fn load_ghosts(&self) -> Result<Vec<GhostPlayer>, StoreError> {
            if self.fail_loads.load(Ordering::SeqCst) {
                return Err(StoreError::Storage("store offline".to_string()));
            }
            Ok(self.ghosts.lock().unwrap().clone().unwrap_or_default())
        }

        async fn save_ghosts(&self, ghosts: &[GhostPlayer]) -> Result<(), StoreError> {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(StoreError::Storage("store offline".to_string()));
            }
            *self.ghosts.lock().unwrap() = Some(ghosts.to_vec());
            Ok(())
        }
    }
}
