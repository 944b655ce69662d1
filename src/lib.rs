// lib.rs
pub mod board;
pub mod combat;
pub mod faction;
pub mod game;
pub mod game_config;
pub mod mission;
pub mod territory;
