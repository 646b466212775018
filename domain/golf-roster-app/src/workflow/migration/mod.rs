pub mod legacy_teams;
