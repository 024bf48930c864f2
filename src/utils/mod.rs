pub mod terminal;
pub mod timefmt;
