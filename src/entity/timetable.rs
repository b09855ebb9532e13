//! Timetable entity
//!
//! Table: timetable. A row is a weekly recurring class session, not a dated
//! occurrence. Times are zero-padded 24h "HH:MM" strings, so lexical order
//! equals chronological order.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "timetable")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(Some(16))")]
    pub course_code: String,

    pub faculty_id: i64,

    /// Monday .. Sunday
    #[sea_orm(column_type = "String(Some(16))")]
    pub day_of_week: String,

    #[sea_orm(column_type = "String(Some(5))")]
    pub start_time: String,

    #[sea_orm(column_type = "String(Some(5))")]
    pub end_time: String,

    #[sea_orm(column_type = "String(Some(32))", default_value = "LH-301")]
    pub room: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseCode",
        to = "super::course::Column::CourseCode"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FacultyId",
        to = "super::user::Column::UserId"
    )]
    Faculty,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
