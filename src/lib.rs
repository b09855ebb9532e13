//! UMS - University management backend
//!
//! This crate serves the student and faculty dashboards of the university
//! management system and records class attendance.

pub mod clock;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
