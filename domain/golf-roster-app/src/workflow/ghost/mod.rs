pub mod admit;
pub mod list;
pub mod remove;
