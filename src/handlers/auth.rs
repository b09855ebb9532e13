//! Authentication handlers
//!
//! Implements the login endpoint

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::entity::user::UserResponse;
use crate::error::AppResult;
use crate::service;
use crate::state::AppState;

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserResponse,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = service::auth::login(&state.db, &req.user_id).await?;

    Ok(Json(LoginResponse {
        success: true,
        user: user.into(),
    }))
}
