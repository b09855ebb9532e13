//! Shared fixture: an in-memory store seeded like the demo campus
//!
//! Timetable ids are fixed:
//! 1 CSE310 Tue 09:00-10:00, 2 CSE205 Tue 10:15-11:15, 3 MTH174 Tue 14:00-15:00,
//! 4 CSE310 Wed 11:00-12:00 (all faculty 14234), 5 PHY101 Tue 08:00-09:00
//! (faculty 14235, nobody enrolled).
//! Faculty 14235 also holds an enrollment row in MTH174.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use ums::clock::{Clock, FixedClock};
use ums::entity::attendance::{self, AttendanceStatus};
use ums::entity::fee::{self, FeeStatus};
use ums::entity::user::{self, Role};
use ums::entity::{course, enrollment, timetable};
use ums::{AppState, Config};

pub const FACULTY: i64 = 14234;
pub const TUESDAY_ONLY_FACULTY: i64 = 14235;
pub const STUDENT_WITHOUT_COURSES: i64 = 11899999;

pub const ADITYA: i64 = 11812345;
pub const PRIYA: i64 = 11812346;
pub const RAHUL: i64 = 11812347;
pub const SNEHA: i64 = 11812348;
pub const AMIT: i64 = 11812349;

pub const STUDENTS: [i64; 5] = [ADITYA, PRIYA, RAHUL, SNEHA, AMIT];

pub const CSE310_TUESDAY: i64 = 1;
pub const CSE205_TUESDAY: i64 = 2;
pub const MTH174_TUESDAY: i64 = 3;
pub const CSE310_WEDNESDAY: i64 = 4;
pub const EMPTY_CLASS: i64 = 5;

/// Course with a FACULTY user among its enrollments (taught in class 3)
pub const AUDITED_COURSE: &str = "MTH174";

/// The date the fixed clocks point at (a Tuesday)
pub const TUESDAY: &str = "2026-10-20";

/// Clock at the given time on a day of the fixture week
/// (offset 0 = Tuesday 2026-10-20)
pub fn clock_at(day_offset: u32, hour: u32, minute: u32) -> FixedClock {
    let date = NaiveDate::from_ymd_opt(2026, 10, 20 + day_offset).expect("valid date");
    FixedClock::at(date, hour, minute).expect("valid time")
}

pub fn tuesday_morning() -> FixedClock {
    clock_at(0, 10, 30)
}

pub async fn setup_db() -> DatabaseConnection {
    // one pooled connection: each sqlite::memory: connection is its own database
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.expect("connect sqlite");
    ums::db::auto_migrate(&db).await.expect("migrate");
    seed(&db).await;
    db
}

pub async fn setup_state(clock: impl Clock + 'static) -> AppState {
    AppState::with_clock(setup_db().await, Config::default(), Arc::new(clock))
}

async fn seed(db: &DatabaseConnection) {
    let users = [
        (ADITYA, "Aditya Kumar", Role::Student),
        (PRIYA, "Priya Sharma", Role::Student),
        (RAHUL, "Rahul Verma", Role::Student),
        (SNEHA, "Sneha Gupta", Role::Student),
        (AMIT, "Amit Patel", Role::Student),
        (STUDENT_WITHOUT_COURSES, "Zoya Khan", Role::Student),
        (FACULTY, "Dr. Rajesh Sharma", Role::Faculty),
        (TUESDAY_ONLY_FACULTY, "Dr. Meera Iyer", Role::Faculty),
    ];
    user::Entity::insert_many(users.iter().map(|&(id, name, role)| user::ActiveModel {
        user_id: Set(id),
        name: Set(name.to_string()),
        role: Set(role),
        avatar_url: Set(None),
    }))
    .exec(db)
    .await
    .expect("seed users");

    let courses = [
        ("CSE310", "Data Structures & Algorithms"),
        ("CSE205", "Object Oriented Programming"),
        ("MTH174", "Discrete Mathematics"),
        ("PHY101", "Engineering Physics"),
    ];
    course::Entity::insert_many(courses.iter().map(|&(code, name)| course::ActiveModel {
        course_code: Set(code.to_string()),
        course_name: Set(name.to_string()),
    }))
    .exec(db)
    .await
    .expect("seed courses");

    let codes = ["CSE310", "CSE205", "MTH174"];
    let percents = [
        [82.5, 78.0, 91.2],
        [90.0, 85.5, 72.3],
        [65.0, 88.0, 79.5],
        [95.0, 92.0, 88.8],
        [70.0, 60.5, 75.1],
    ];
    let cgpas = [8.2, 7.8, 6.5, 9.1, 7.0];
    let mut enrollments = Vec::new();
    for (i, student) in STUDENTS.iter().enumerate() {
        for (j, code) in codes.iter().enumerate() {
            enrollments.push(enrollment::ActiveModel {
                student_id: Set(*student),
                course_code: Set(code.to_string()),
                attendance_percent: Set(percents[i][j]),
                cgpa: Set(cgpas[i]),
                ..Default::default()
            });
        }
    }
    // faculty enrolled as an auditor; rosters must still list students only
    enrollments.push(enrollment::ActiveModel {
        student_id: Set(TUESDAY_ONLY_FACULTY),
        course_code: Set(AUDITED_COURSE.to_string()),
        attendance_percent: Set(0.0),
        cgpa: Set(0.0),
        ..Default::default()
    });
    enrollment::Entity::insert_many(enrollments)
        .exec(db)
        .await
        .expect("seed enrollments");

    let sessions = [
        (CSE310_TUESDAY, "CSE310", FACULTY, "Tuesday", "09:00", "10:00", "LH-301"),
        (CSE205_TUESDAY, "CSE205", FACULTY, "Tuesday", "10:15", "11:15", "LH-302"),
        (MTH174_TUESDAY, "MTH174", FACULTY, "Tuesday", "14:00", "15:00", "LH-205"),
        (CSE310_WEDNESDAY, "CSE310", FACULTY, "Wednesday", "11:00", "12:00", "LH-301"),
        (EMPTY_CLASS, "PHY101", TUESDAY_ONLY_FACULTY, "Tuesday", "08:00", "09:00", "LH-101"),
    ];
    timetable::Entity::insert_many(sessions.iter().map(
        |&(id, code, faculty, day, start, end, room)| timetable::ActiveModel {
            id: Set(id),
            course_code: Set(code.to_string()),
            faculty_id: Set(faculty),
            day_of_week: Set(day.to_string()),
            start_time: Set(start.to_string()),
            end_time: Set(end.to_string()),
            room: Set(room.to_string()),
        },
    ))
    .exec(db)
    .await
    .expect("seed timetable");

    let fees = [
        (ADITYA, 0.0, FeeStatus::Nil, None),
        (PRIYA, 45000.0, FeeStatus::Pending, Some("2026-03-15")),
        (RAHUL, 0.0, FeeStatus::Nil, None),
        (SNEHA, 12000.0, FeeStatus::Pending, Some("2026-04-01")),
        (AMIT, 0.0, FeeStatus::Paid, None),
    ];
    fee::Entity::insert_many(fees.iter().map(|&(student, amount, status, due)| fee::ActiveModel {
        student_id: Set(student),
        amount: Set(amount),
        status: Set(status),
        due_date: Set(due.map(str::to_string)),
        ..Default::default()
    }))
    .exec(db)
    .await
    .expect("seed fees");
}

/// Attendance rows for a (class, date), ordered by student id
pub async fn attendance_rows(
    db: &DatabaseConnection,
    class_id: i64,
    date: &str,
) -> Vec<(i64, AttendanceStatus)> {
    attendance::Entity::find()
        .filter(attendance::Column::ClassId.eq(class_id))
        .filter(attendance::Column::Date.eq(date))
        .order_by_asc(attendance::Column::StudentId)
        .all(db)
        .await
        .expect("query attendance")
        .into_iter()
        .map(|row| (row.student_id, row.status))
        .collect()
}
