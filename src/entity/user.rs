//! User entity
//!
//! Table: users. Students and faculty share one table; `role` tells them apart.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User role
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[sea_orm(string_value = "STUDENT")]
    Student,
    #[sea_orm(string_value = "FACULTY")]
    Faculty,
}

impl Role {
    /// Label used in "not found" messages
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Faculty => "Faculty",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Registration number (students) or employee number (faculty)
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,

    #[sea_orm(column_type = "String(Some(128))")]
    pub name: String,

    pub role: Role,

    #[sea_orm(column_type = "String(Some(255))", nullable)]
    pub avatar_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Public view of a user
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i64,
    pub name: String,
    pub role: Role,
    pub avatar_url: Option<String>,
}

impl From<Model> for UserResponse {
    fn from(model: Model) -> Self {
        Self {
            user_id: model.user_id,
            name: model.name,
            role: model.role,
            avatar_url: model.avatar_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"STUDENT\"");
        assert_eq!(serde_json::to_string(&Role::Faculty).unwrap(), "\"FACULTY\"");
        assert_eq!(Role::Faculty.to_value(), "FACULTY");
    }

    #[test]
    fn test_user_response() {
        let model = Model {
            user_id: 11812345,
            name: "Aditya Kumar".to_string(),
            role: Role::Student,
            avatar_url: None,
        };
        let json = serde_json::to_value(UserResponse::from(model)).unwrap();
        assert_eq!(json["userId"], 11812345);
        assert_eq!(json["role"], "STUDENT");
        assert!(json["avatarUrl"].is_null());
    }
}
