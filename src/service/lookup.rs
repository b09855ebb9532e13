//! Shared data-access helpers

use std::collections::{HashMap, HashSet};

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::entity::attendance::{self, AttendanceStatus};
use crate::entity::user::{self, Role};
use crate::entity::{enrollment, timetable};
use crate::error::{AppResult, OptionExt};

/// A student enrolled in a course
#[derive(Clone, Debug, PartialEq)]
pub struct RosterEntry {
    pub user: user::Model,
    pub attendance_percent: f64,
}

/// Find a user only if it holds the given role
pub async fn find_user_with_role<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    role: Role,
) -> Result<Option<user::Model>, DbErr> {
    user::Entity::find_by_id(user_id)
        .filter(user::Column::Role.eq(role))
        .one(db)
        .await
}

/// Like `find_user_with_role`, failing with "<Role> not found"
pub async fn require_user_with_role<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    role: Role,
) -> AppResult<user::Model> {
    let found = find_user_with_role(db, user_id, role).await?;
    if found.is_none() {
        tracing::warn!("No {:?} with id {}", role, user_id);
    }
    found.ok_or_not_found(format!("{} not found", role.label()))
}

/// Resolve a class session by timetable id
pub async fn require_class<C: ConnectionTrait>(
    db: &C,
    class_id: i64,
) -> AppResult<timetable::Model> {
    let found = timetable::Entity::find_by_id(class_id).one(db).await?;
    if found.is_none() {
        tracing::warn!("No class session with id {}", class_id);
    }
    found.ok_or_not_found("Class not found")
}

/// Students enrolled in a course, ordered by name
///
/// Enrollments pointing at non-student users are left out.
pub async fn enrolled_roster<C: ConnectionTrait>(
    db: &C,
    course_code: &str,
) -> Result<Vec<RosterEntry>, DbErr> {
    let rows = enrollment::Entity::find()
        .filter(enrollment::Column::CourseCode.eq(course_code))
        .find_also_related(user::Entity)
        .filter(user::Column::Role.eq(Role::Student))
        .order_by_asc(user::Column::Name)
        .order_by_asc(user::Column::UserId)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(enrollment, user)| {
            user.map(|user| RosterEntry {
                user,
                attendance_percent: enrollment.attendance_percent,
            })
        })
        .collect())
}

/// Recorded statuses for a (class, date), keyed by student id
pub async fn recorded_statuses<C: ConnectionTrait>(
    db: &C,
    class_id: i64,
    date: &str,
) -> Result<HashMap<i64, AttendanceStatus>, DbErr> {
    let rows = attendance::Entity::find()
        .filter(attendance::Column::ClassId.eq(class_id))
        .filter(attendance::Column::Date.eq(date))
        .all(db)
        .await?;

    Ok(rows.into_iter().map(|r| (r.student_id, r.status)).collect())
}

/// Whether any attendance row exists for a (class, date)
pub async fn is_marked<C: ConnectionTrait>(
    db: &C,
    class_id: i64,
    date: &str,
) -> Result<bool, DbErr> {
    let count = attendance::Entity::find()
        .filter(attendance::Column::ClassId.eq(class_id))
        .filter(attendance::Column::Date.eq(date))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Subset of `class_ids` that already have attendance on `date`
pub async fn marked_classes<C: ConnectionTrait>(
    db: &C,
    class_ids: &[i64],
    date: &str,
) -> Result<HashSet<i64>, DbErr> {
    if class_ids.is_empty() {
        return Ok(HashSet::new());
    }

    let marked: Vec<i64> = attendance::Entity::find()
        .select_only()
        .column(attendance::Column::ClassId)
        .distinct()
        .filter(attendance::Column::ClassId.is_in(class_ids.iter().copied()))
        .filter(attendance::Column::Date.eq(date))
        .into_tuple()
        .all(db)
        .await?;

    Ok(marked.into_iter().collect())
}
