//! Login lookup
//!
//! There are no credentials: a user signs in with their numeric id alone.

use sea_orm::{ConnectionTrait, EntityTrait};

use crate::entity::user;
use crate::error::{AppError, AppResult, OptionExt};

/// Parse a login id; anything that is not an integer is rejected
pub fn parse_user_id(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::Validation(format!("Invalid user id: {:?}", raw)))
}

/// Look up the user behind a login id
pub async fn login<C: ConnectionTrait>(db: &C, raw_user_id: &str) -> AppResult<user::Model> {
    let user_id = parse_user_id(raw_user_id)?;

    let found = user::Entity::find_by_id(user_id).one(db).await?;
    match &found {
        Some(u) => tracing::info!("User {} signed in as {:?}", u.user_id, u.role),
        None => tracing::warn!("Login failed: user not found - {}", user_id),
    }
    found.ok_or_not_found("User not found")
}
