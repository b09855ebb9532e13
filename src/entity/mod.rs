//! Entity module - SeaORM entity definitions
//!
//! One module per table of the university store

pub mod attendance;
pub mod course;
pub mod enrollment;
pub mod fee;
pub mod timetable;
pub mod user;
