pub mod assets;
pub mod config;
