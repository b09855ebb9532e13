//! Dashboard aggregation
//!
//! Read-only views per role. "Today" and "now" come from the injected
//! [`Clock`](crate::clock::Clock).

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::clock::Clock;
use crate::entity::attendance::AttendanceStatus;
use crate::entity::fee::{self, FeeStatus};
use crate::entity::user::{self, Role};
use crate::entity::{course, enrollment, timetable};
use crate::error::AppResult;
use crate::service::lookup;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBrief {
    pub user_id: i64,
    pub name: String,
    pub role: Role,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseAttendance {
    pub course_code: String,
    pub course_name: String,
    pub percent: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct AttendanceOverview {
    /// Mean of the per-course percentages, one decimal place
    pub overall: f64,
    pub courses: Vec<CourseAttendance>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeView {
    pub amount: f64,
    pub status: FeeStatus,
    pub due_date: Option<String>,
}

impl Default for FeeView {
    fn default() -> Self {
        Self {
            amount: 0.0,
            status: FeeStatus::Nil,
            due_date: None,
        }
    }
}

impl From<fee::Model> for FeeView {
    fn from(m: fee::Model) -> Self {
        Self {
            amount: m.amount,
            status: m.status,
            due_date: m.due_date,
        }
    }
}

/// Timetable slot as the frontend consumes it (snake_case keys)
#[derive(Clone, Debug, Serialize)]
pub struct SessionView {
    pub course_code: String,
    pub course_name: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct StudentDashboard {
    pub user: UserBrief,
    pub attendance: AttendanceOverview,
    pub cgpa: f64,
    pub fee: FeeView,
    pub timetable: Vec<SessionView>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyBrief {
    pub user_id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct FacultyClass {
    #[serde(rename = "classId")]
    pub class_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub day_of_week: String,
    #[serde(rename = "attendanceMarked")]
    pub attendance_marked: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct FacultyClasses {
    pub faculty: FacultyBrief,
    pub classes: Vec<FacultyClass>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    pub class_id: i64,
    pub course_code: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStudent {
    pub user_id: i64,
    pub name: String,
    pub avatar_url: Option<String>,
    pub attendance_percent: f64,
    pub status: AttendanceStatus,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRoster {
    pub class_info: ClassInfo,
    pub already_marked: bool,
    pub students: Vec<RosterStudent>,
}

/// Arithmetic mean rounded to one decimal place; 0 for no values
pub fn mean_percent(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Student home view: attendance, CGPA, fees and the rest of today's timetable
pub async fn student_dashboard<C: ConnectionTrait>(
    db: &C,
    clock: &dyn Clock,
    student_id: i64,
) -> AppResult<StudentDashboard> {
    let student = lookup::require_user_with_role(db, student_id, Role::Student).await?;

    let enrollments = enrollment::Entity::find()
        .filter(enrollment::Column::StudentId.eq(student_id))
        .order_by_asc(enrollment::Column::Id)
        .find_also_related(course::Entity)
        .all(db)
        .await?;

    // CGPA is a per-student snapshot repeated on every enrollment row; the
    // first row in id order is taken as is.
    let cgpa = enrollments.first().map(|(e, _)| e.cgpa).unwrap_or(0.0);

    let courses: Vec<CourseAttendance> = enrollments
        .into_iter()
        .filter_map(|(e, c)| {
            c.map(|c| CourseAttendance {
                course_code: e.course_code,
                course_name: c.course_name,
                percent: e.attendance_percent,
            })
        })
        .collect();
    let percents: Vec<f64> = courses.iter().map(|c| c.percent).collect();

    let fee = fee::Entity::find()
        .filter(fee::Column::StudentId.eq(student_id))
        .order_by_asc(fee::Column::Id)
        .one(db)
        .await?
        .map(FeeView::from)
        .unwrap_or_default();

    let timetable = remaining_sessions_today(db, clock).await?;

    tracing::debug!(
        "Dashboard for student {}: {} courses, {} sessions left today",
        student_id,
        courses.len(),
        timetable.len()
    );

    Ok(StudentDashboard {
        user: UserBrief {
            user_id: student.user_id,
            name: student.name,
            role: student.role,
        },
        attendance: AttendanceOverview {
            overall: mean_percent(&percents),
            courses,
        },
        cgpa,
        fee,
        timetable,
    })
}

/// Sessions on today's weekday that have not ended yet, by start time
///
/// Compares zero-padded "HH:MM" strings lexically.
async fn remaining_sessions_today<C: ConnectionTrait>(
    db: &C,
    clock: &dyn Clock,
) -> AppResult<Vec<SessionView>> {
    let now = clock.time_of_day();

    let rows = timetable::Entity::find()
        .filter(timetable::Column::DayOfWeek.eq(clock.weekday_label()))
        .filter(timetable::Column::EndTime.gt(now.as_str()))
        .order_by_asc(timetable::Column::StartTime)
        .order_by_asc(timetable::Column::Id)
        .find_also_related(course::Entity)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(t, c)| {
            c.map(|c| SessionView {
                course_code: t.course_code,
                course_name: c.course_name,
                start_time: t.start_time,
                end_time: t.end_time,
                room: t.room,
            })
        })
        .collect())
}

/// Today's sessions for a faculty member, each flagged if attendance is in
pub async fn faculty_classes<C: ConnectionTrait>(
    db: &C,
    clock: &dyn Clock,
    faculty_id: i64,
) -> AppResult<FacultyClasses> {
    let faculty: user::Model = lookup::require_user_with_role(db, faculty_id, Role::Faculty).await?;
    let today = clock.today();

    let sessions = timetable::Entity::find()
        .filter(timetable::Column::FacultyId.eq(faculty_id))
        .filter(timetable::Column::DayOfWeek.eq(clock.weekday_label()))
        .order_by_asc(timetable::Column::StartTime)
        .order_by_asc(timetable::Column::Id)
        .find_also_related(course::Entity)
        .all(db)
        .await?;

    let ids: Vec<i64> = sessions.iter().map(|(t, _)| t.id).collect();
    let marked = lookup::marked_classes(db, &ids, &today).await?;

    let classes = sessions
        .into_iter()
        .filter_map(|(t, c)| {
            c.map(|c| FacultyClass {
                class_id: t.id,
                attendance_marked: marked.contains(&t.id),
                course_code: t.course_code,
                course_name: c.course_name,
                start_time: t.start_time,
                end_time: t.end_time,
                room: t.room,
                day_of_week: t.day_of_week,
            })
        })
        .collect();

    Ok(FacultyClasses {
        faculty: FacultyBrief {
            user_id: faculty.user_id,
            name: faculty.name,
        },
        classes,
    })
}

/// Roster of a class with each student's status for `date` (today if None)
///
/// Students without a recorded row show as Present.
pub async fn class_roster<C: ConnectionTrait>(
    db: &C,
    clock: &dyn Clock,
    class_id: i64,
    date: Option<&str>,
) -> AppResult<ClassRoster> {
    let class = lookup::require_class(db, class_id).await?;
    let date = match date {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => clock.today(),
    };

    let roster = lookup::enrolled_roster(db, &class.course_code).await?;
    let recorded = lookup::recorded_statuses(db, class_id, &date).await?;

    let students = roster
        .into_iter()
        .map(|entry| RosterStudent {
            status: recorded
                .get(&entry.user.user_id)
                .copied()
                .unwrap_or(AttendanceStatus::Present),
            user_id: entry.user.user_id,
            name: entry.user.name,
            avatar_url: entry.user.avatar_url,
            attendance_percent: entry.attendance_percent,
        })
        .collect();

    Ok(ClassRoster {
        class_info: ClassInfo {
            class_id: class.id,
            course_code: class.course_code,
            start_time: class.start_time,
            end_time: class.end_time,
            room: class.room,
        },
        already_marked: !recorded.is_empty(),
        students,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_percent() {
        assert_eq!(mean_percent(&[]), 0.0);
        assert_eq!(mean_percent(&[82.5, 78.0, 91.2]), 83.9);
        assert_eq!(mean_percent(&[70.0]), 70.0);
    }

    #[test]
    fn test_default_fee_view() {
        let json = serde_json::to_value(FeeView::default()).unwrap();
        assert_eq!(json["amount"], 0.0);
        assert_eq!(json["status"], "NIL");
        assert!(json["dueDate"].is_null());
    }

    #[test]
    fn test_faculty_class_keys() {
        let class = FacultyClass {
            class_id: 1,
            course_code: "CSE310".into(),
            course_name: "Data Structures & Algorithms".into(),
            start_time: "09:00".into(),
            end_time: "10:00".into(),
            room: "LH-301".into(),
            day_of_week: "Tuesday".into(),
            attendance_marked: false,
        };
        let json = serde_json::to_value(class).unwrap();
        assert_eq!(json["classId"], 1);
        assert_eq!(json["course_code"], "CSE310");
        assert_eq!(json["attendanceMarked"], false);
    }
}
