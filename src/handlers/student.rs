//! Student handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::service::dashboard::{self, StudentDashboard};
use crate::state::AppState;

/// GET /api/student/:id/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> AppResult<Json<StudentDashboard>> {
    let view = dashboard::student_dashboard(&state.db, state.clock.as_ref(), student_id).await?;
    Ok(Json(view))
}
