use golf_roster_app::{
    domain::{StoreError, ghost::GhostPlayer, roster::MatchRoster},
    ports::roster_store::{CURRENT_GHOSTS_KEY, CURRENT_ROSTER_KEY, RosterStorePort},
};
use serde::{Serialize, de::DeserializeOwned};
use sqlx::{Pool, Sqlite};

pub struct SqliteRosterStore {
    pool: Pool<Sqlite>,
}

impl SqliteRosterStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    async fn load_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM key_value WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        value
            .map(|value| {
                serde_json::from_str(&value).map_err(|e| StoreError::Malformed(e.to_string()))
            })
            .transpose()
    }

    async fn save_value<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let value =
            serde_json::to_string(value).map_err(|e| StoreError::Malformed(e.to_string()))?;
        sqlx::query(
            "INSERT INTO key_value (key, value) VALUES (?, ?) ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl RosterStorePort for SqliteRosterStore {
    async fn load_roster(&self) -> Result<Option<MatchRoster>, StoreError> {
        self.load_value(CURRENT_ROSTER_KEY).await
    }

    async fn save_roster(&self, roster: &MatchRoster) -> Result<(), StoreError> {
        self.save_value(CURRENT_ROSTER_KEY, roster).await
    }

    async fn load_ghosts(&self) -> Result<Vec<GhostPlayer>, StoreError> {
        Ok(self
            .load_value(CURRENT_GHOSTS_KEY)
            .await?
            .unwrap_or_default())
    }

    async fn save_ghosts(&self, ghosts: &[GhostPlayer]) -> Result<(), StoreError> {
        self.save_value(CURRENT_GHOSTS_KEY, ghosts).await
    }
}
