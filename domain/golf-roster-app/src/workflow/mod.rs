pub mod ghost;
pub mod migration;
pub mod player;
pub mod roster;
