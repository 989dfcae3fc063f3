// Public API for integration tests and alternative front ends

pub mod bank;
pub mod cli;
pub mod config;
pub mod editor;
pub mod handlers;
pub mod llm;
pub mod protocol;
pub mod state;
pub mod types;
