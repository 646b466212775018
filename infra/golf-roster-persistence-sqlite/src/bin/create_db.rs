use golf_roster_app::{
    domain::{PlayerId, player::PlayerRecord},
    ports::player_directory::PlayerDirectoryPort,
};
use golf_roster_persistence_sqlite::{
    create_roster_db_pool, ensure_schema, players::SqlitePlayerDirectory,
};

const DEMO_PLAYERS: [(&str, &str, f64, Option<&str>); 5] = [
    ("Ann", "Lee", 8.4, Some("Red")),
    ("Bo", "Kim", 14.1, Some("Blue")),
    ("Cal", "Ortiz", 21.7, Some("Red")),
    ("Dee", "Walsh", 3.9, None),
    ("Eli", "Brandt", 17.0, Some("blue")),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db_path = std::env::var("GOLF_ROSTER_DB").expect("GOLF_ROSTER_DB env var not set");
    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory for DB");
            println!("Created parent directory for DB at {}", parent.display());
        }
    }
    if std::path::Path::new(&db_path).exists() {
        std::fs::remove_file(&db_path).expect("Failed to remove existing DB");
        println!("Removed existing DB at {}", db_path);
    }

    let pool = create_roster_db_pool();
    ensure_schema(&pool).await.expect("Failed to create tables");
    println!("Created new roster DB at {}", db_path);

    let directory = SqlitePlayerDirectory::new(pool);
    for (first_name, last_name, handicap_index, legacy_team) in DEMO_PLAYERS {
        let player = PlayerRecord {
            id: PlayerId::generate(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            handicap_index,
            legacy_team: legacy_team.map(str::to_string),
        };
        println!("Adding player {}", player.display_name());
        directory
            .create_player(player)
            .await
            .expect("Failed to add player");
    }
}
