//! Attendance entity
//!
//! Table: attendance. At most one row per (student, class session, date);
//! the composite unique index is created in `db::auto_migrate`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Attendance status, stored and sent over the wire as "P" / "A"
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(1))")]
pub enum AttendanceStatus {
    #[sea_orm(string_value = "P")]
    #[serde(rename = "P")]
    Present,
    #[sea_orm(string_value = "A")]
    #[serde(rename = "A")]
    Absent,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub student_id: i64,

    /// Timetable row id
    pub class_id: i64,

    pub status: AttendanceStatus,

    /// Calendar date, kept as the opaque string the client sent
    #[sea_orm(column_type = "String(Some(32))")]
    pub date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::UserId"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::timetable::Entity",
        from = "Column::ClassId",
        to = "super::timetable::Column::Id"
    )]
    Class,
}

impl ActiveModelBehavior for ActiveModel {}
