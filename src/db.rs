use sea_orm::sea_query::{Index, IndexCreateStatement, TableCreateStatement};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Schema,
};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::entity::{attendance, course, enrollment, fee, timetable, user};

/// Name of the index that keeps one attendance row per (student, class, date)
pub const ATTENDANCE_UNIQUE_INDEX: &str = "idx_attendance_student_class_date";

/// Name of the index that keeps one enrollment row per (student, course)
pub const ENROLLMENT_UNIQUE_INDEX: &str = "idx_enrollment_student_course";

/// Initialize database connection and auto-migrate tables
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    info!("Connecting to database: {}", config.display_target());

    let mut opt = ConnectOptions::new(config.connection_url());
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    let db = Database::connect(opt).await?;
    info!("Database connection established");

    auto_migrate(&db).await?;

    Ok(db)
}

/// Create every table and index that does not exist yet
pub async fn auto_migrate<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Running auto-migration for all entities...");

    // Create tables in dependency order
    // 1. Independent tables first
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(user::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(course::Entity)).await?;

    // 2. Tables with foreign key dependencies
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(enrollment::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(timetable::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(fee::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(attendance::Entity)).await?;

    // 3. Composite keys
    create_index_if_not_exists(db, backend, enrollment_unique_index()).await?;
    create_index_if_not_exists(db, backend, attendance_unique_index()).await?;

    info!("Auto-migration completed successfully");
    Ok(())
}

fn enrollment_unique_index() -> IndexCreateStatement {
    Index::create()
        .name(ENROLLMENT_UNIQUE_INDEX)
        .table(enrollment::Entity)
        .col(enrollment::Column::StudentId)
        .col(enrollment::Column::CourseCode)
        .unique()
        .to_owned()
}

fn attendance_unique_index() -> IndexCreateStatement {
    Index::create()
        .name(ATTENDANCE_UNIQUE_INDEX)
        .table(attendance::Entity)
        .col(attendance::Column::StudentId)
        .col(attendance::Column::ClassId)
        .col(attendance::Column::Date)
        .unique()
        .to_owned()
}

/// Create a table if it doesn't exist
async fn create_table_if_not_exists<C: ConnectionTrait>(
    db: &C,
    backend: DbBackend,
    mut stmt: TableCreateStatement,
) -> Result<(), DbErr> {
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

/// Create an index if it doesn't exist
async fn create_index_if_not_exists<C: ConnectionTrait>(
    db: &C,
    backend: DbBackend,
    mut stmt: IndexCreateStatement,
) -> Result<(), DbErr> {
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}
