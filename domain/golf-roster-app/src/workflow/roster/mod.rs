pub mod assign;
pub mod get;
pub mod initialize;
pub mod remove;
pub mod reset;
pub mod start_match;
