//! Attendance reconciliation
//!
//! A submission names only the absentees. The course roster decides who gets
//! a row: every enrolled student is written as Present or Absent, and
//! absentee ids outside the roster are ignored.

use std::collections::HashSet;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::Serialize;
use tracing::info;

use crate::entity::attendance::{self, AttendanceStatus};
use crate::entity::timetable;
use crate::error::{AppError, AppResult};
use crate::service::lookup;

const ALREADY_MARKED: &str = "Attendance already marked for this class and date; use rectify";

/// Counts reported back after a submission
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub absent: usize,
    pub present: usize,
}

impl Summary {
    fn of(marks: &[(i64, AttendanceStatus)]) -> Self {
        let absent = marks
            .iter()
            .filter(|(_, status)| *status == AttendanceStatus::Absent)
            .count();
        Self {
            total: marks.len(),
            absent,
            present: marks.len() - absent,
        }
    }
}

/// Status for every roster student, in roster order
///
/// Duplicate roster ids collapse to their first occurrence.
pub fn reconcile(roster: &[i64], absentees: &[i64]) -> Vec<(i64, AttendanceStatus)> {
    let absent: HashSet<i64> = absentees.iter().copied().collect();
    let mut seen = HashSet::with_capacity(roster.len());

    roster
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .map(|id| {
            let status = if absent.contains(&id) {
                AttendanceStatus::Absent
            } else {
                AttendanceStatus::Present
            };
            (id, status)
        })
        .collect()
}

/// Record attendance for a (class, date) that has none yet
///
/// Fails with `Conflict` when rows already exist; those must go through
/// [`rectify`].
pub async fn submit(
    db: &DatabaseConnection,
    class_id: i64,
    date: &str,
    absentees: &[i64],
) -> AppResult<Summary> {
    let txn = db.begin().await?;

    let class = lookup::require_class(&txn, class_id).await?;
    if lookup::is_marked(&txn, class_id, date).await? {
        return Err(AppError::Conflict(ALREADY_MARKED.to_string()));
    }

    let summary = write_marks(&txn, &class, date, absentees).await?;
    txn.commit().await?;

    info!(
        "Attendance recorded: class={} date={} total={} absent={}",
        class_id, date, summary.total, summary.absent
    );
    Ok(summary)
}

/// Replace all attendance for a (class, date)
///
/// Delete and re-insert share one transaction, so concurrent callers never
/// observe a half-written sheet. An empty absentee list marks everyone present.
pub async fn rectify(
    db: &DatabaseConnection,
    class_id: i64,
    date: &str,
    absentees: &[i64],
) -> AppResult<Summary> {
    let txn = db.begin().await?;

    let class = lookup::require_class(&txn, class_id).await?;

    let removed = attendance::Entity::delete_many()
        .filter(attendance::Column::ClassId.eq(class_id))
        .filter(attendance::Column::Date.eq(date))
        .exec(&txn)
        .await?
        .rows_affected;

    let summary = write_marks(&txn, &class, date, absentees).await?;
    txn.commit().await?;

    info!(
        "Attendance rectified: class={} date={} replaced={} total={} absent={}",
        class_id, date, removed, summary.total, summary.absent
    );
    Ok(summary)
}

async fn write_marks(
    txn: &DatabaseTransaction,
    class: &timetable::Model,
    date: &str,
    absentees: &[i64],
) -> AppResult<Summary> {
    let roster: Vec<i64> = lookup::enrolled_roster(txn, &class.course_code)
        .await?
        .into_iter()
        .map(|entry| entry.user.user_id)
        .collect();

    let marks = reconcile(&roster, absentees);

    // insert_many rejects an empty batch
    if !marks.is_empty() {
        let rows = marks.iter().map(|&(student_id, status)| attendance::ActiveModel {
            student_id: Set(student_id),
            class_id: Set(class.id),
            status: Set(status),
            date: Set(date.to_string()),
            ..Default::default()
        });

        attendance::Entity::insert_many(rows)
            .exec(txn)
            .await
            .map_err(|e| AppError::from_db_with_conflict(e, ALREADY_MARKED))?;
    }

    Ok(Summary::of(&marks))
}
