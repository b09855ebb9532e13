//! Request handlers module

pub mod auth;
pub mod faculty;
pub mod student;
