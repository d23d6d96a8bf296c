use sqlx::SqliteConnection;

use crate::models::Course;

/// Every stored course, in whatever order SQLite returns them.
pub async fn fetch_courses(db: &mut SqliteConnection) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>("SELECT id, name, description FROM courses")
        .fetch_all(db)
        .await
}

pub async fn find_course_by_id(db: &mut SqliteConnection, id: i64) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>("SELECT id, name, description FROM courses WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

/// Inserts the course as given. A taken `id` surfaces as the storage
/// layer's unique constraint error.
pub async fn insert_course(db: &mut SqliteConnection, course: &Course) -> Result<Course, sqlx::Error> {
    sqlx::query("INSERT INTO courses (id, name, description) VALUES (?, ?, ?)")
        .bind(course.id)
        .bind(&course.name)
        .bind(&course.description)
        .execute(&mut *db)
        .await?;

    find_course_by_id(db, course.id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}
