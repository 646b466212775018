pub mod player_directory;
pub mod roster_store;
