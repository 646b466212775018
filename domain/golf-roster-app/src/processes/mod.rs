pub mod roster_writer;
