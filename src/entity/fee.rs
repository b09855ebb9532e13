//! Fee entity
//!
//! Table: fees

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fee status
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeStatus {
    #[sea_orm(string_value = "NIL")]
    Nil,
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "PAID")]
    Paid,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub student_id: i64,

    pub amount: f64,

    pub status: FeeStatus,

    #[sea_orm(column_type = "String(Some(32))", nullable)]
    pub due_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::UserId"
    )]
    Student,
}

impl ActiveModelBehavior for ActiveModel {}
