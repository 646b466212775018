use golf_roster_app::{
    domain::{
        DirectoryError, PlayerId,
        player::{PlayerRecord, PlayerUpdate},
    },
    ports::player_directory::PlayerDirectoryPort,
};
use sqlx::{Pool, Row, Sqlite, sqlite::SqliteRow};

pub struct SqlitePlayerDirectory {
    pool: Pool<Sqlite>,
}

impl SqlitePlayerDirectory {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    fn player_from_row(row: &SqliteRow) -> sqlx::Result<PlayerRecord> {
        Ok(PlayerRecord {
            id: PlayerId::new(row.try_get::<String, _>("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            handicap_index: row.try_get("handicap_index")?,
            legacy_team: row.try_get("team")?,
        })
    }
}

fn unavailable(e: sqlx::Error) -> DirectoryError {
    DirectoryError::Unavailable(e.to_string())
}

#[async_trait::async_trait]
impl PlayerDirectoryPort for SqlitePlayerDirectory {
    async fn list_players(&self) -> Result<Vec<PlayerRecord>, DirectoryError> {
        let rows = sqlx::query("SELECT * FROM players ORDER BY seq")
            .fetch_all(&self.pool)
            .await
            .map_err(unavailable)?;
        rows.iter()
            .map(Self::player_from_row)
            .collect::<sqlx::Result<Vec<_>>>()
            .map_err(unavailable)
    }

    async fn get_player(&self, player_id: &PlayerId) -> Result<PlayerRecord, DirectoryError> {
        let row = sqlx::query("SELECT * FROM players WHERE id = ?")
            .bind(player_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(unavailable)?;
        match row {
            Some(row) => Self::player_from_row(&row).map_err(unavailable),
            None => Err(DirectoryError::NotFound(player_id.clone())),
        }
    }

    async fn create_player(&self, player: PlayerRecord) -> Result<(), DirectoryError> {
        let result = sqlx::query(
            "INSERT INTO players (id, first_name, last_name, handicap_index, team) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(player.id.as_str())
        .bind(&player.first_name)
        .bind(&player.last_name)
        .bind(player.handicap_index)
        .bind(&player.legacy_team)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DirectoryError::Conflict(player.id))
            }
            Err(e) => Err(unavailable(e)),
        }
    }

    async fn update_player(
        &self,
        player_id: &PlayerId,
        update: PlayerUpdate,
    ) -> Result<PlayerRecord, DirectoryError> {
        let result = sqlx::query(
            "UPDATE players SET first_name = COALESCE(?, first_name), last_name = COALESCE(?, last_name), handicap_index = COALESCE(?, handicap_index) WHERE id = ?",
        )
        .bind(update.first_name)
        .bind(update.last_name)
        .bind(update.handicap_index)
        .bind(player_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::NotFound(player_id.clone()));
        }
        self.get_player(player_id).await
    }

    async fn delete_player(&self, player_id: &PlayerId) -> Result<(), DirectoryError> {
        let result = sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(player_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;
        if result.rows_affected() == 0 {
            return Err(DirectoryError::NotFound(player_id.clone()));
        }
        Ok(())
    }

    async fn clear_legacy_team(&self, player_id: &PlayerId) -> Result<(), DirectoryError> {
        let result = sqlx::query("UPDATE players SET team = NULL WHERE id = ?")
            .bind(player_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;
        if result.rows_affected() == 0 {
            return Err(DirectoryError::NotFound(player_id.clone()));
        }
        Ok(())
    }
}
