//! Faculty handlers
//!
//! Today's classes, class rosters, and attendance submission/rectification

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::service::attendance::{self, Summary};
use crate::service::dashboard::{self, ClassRoster, FacultyClasses};
use crate::state::AppState;

/// Query parameters for the roster
#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub date: Option<String>,
}

/// Attendance sheet sent by the frontend for submit and rectify
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRequest {
    pub class_id: i64,
    pub date: String,
    #[serde(default)]
    pub absentees: Vec<i64>,
}

/// Result of a submit or rectify call
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceResponse {
    pub success: bool,
    pub message: String,
    pub total_students: usize,
    pub absent_count: usize,
    pub present_count: usize,
}

impl AttendanceResponse {
    fn new(verb: &str, summary: Summary) -> Self {
        Self {
            success: true,
            message: format!(
                "Attendance {} for {} students ({} absent).",
                verb, summary.total, summary.absent
            ),
            total_students: summary.total,
            absent_count: summary.absent,
            present_count: summary.present,
        }
    }
}

/// GET /api/faculty/:id/classes
pub async fn classes(
    State(state): State<AppState>,
    Path(faculty_id): Path<i64>,
) -> AppResult<Json<FacultyClasses>> {
    let view = dashboard::faculty_classes(&state.db, state.clock.as_ref(), faculty_id).await?;
    Ok(Json(view))
}

/// GET /api/faculty/class/:class_id/students?date=YYYY-MM-DD
pub async fn class_students(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
    Query(query): Query<RosterQuery>,
) -> AppResult<Json<ClassRoster>> {
    let view = dashboard::class_roster(
        &state.db,
        state.clock.as_ref(),
        class_id,
        query.date.as_deref(),
    )
    .await?;
    Ok(Json(view))
}

/// POST /api/faculty/attendance
pub async fn submit_attendance(
    State(state): State<AppState>,
    Json(req): Json<AttendanceRequest>,
) -> AppResult<Json<AttendanceResponse>> {
    let summary = attendance::submit(&state.db, req.class_id, &req.date, &req.absentees).await?;
    Ok(Json(AttendanceResponse::new("recorded", summary)))
}

/// PUT /api/faculty/attendance/rectify
pub async fn rectify_attendance(
    State(state): State<AppState>,
    Json(req): Json<AttendanceRequest>,
) -> AppResult<Json<AttendanceResponse>> {
    let summary = attendance::rectify(&state.db, req.class_id, &req.date, &req.absentees).await?;
    Ok(Json(AttendanceResponse::new("rectified", summary)))
}
