pub mod accuracy;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod resolver;
pub mod scoring;
pub mod simulation;
pub mod stats;
pub mod strategy;
