//! Service layer
//!
//! Query and write logic behind the HTTP handlers. Every function takes the
//! connection (or transaction) it runs on, so the same code serves requests
//! and tests.

pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod lookup;
