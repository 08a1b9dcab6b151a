use sqlx::SqlitePool;
use tracing::error;

use crate::error::AppError;
use crate::models::{Course, CourseRow, NewCourseRequest};

/// Decodes the lessons column back into structured form. A row whose blob
/// does not parse is corruption, not an empty lesson list, so the whole
/// operation fails instead of skipping the row.
fn decode_row(row: CourseRow) -> Result<Course, AppError> {
    let lessons = serde_json::from_str(&row.lessons).map_err(|e| {
        error!("course {}: corrupt lessons blob: {}", row.id, e);
        AppError::LessonCodec(e)
    })?;

    Ok(Course {
        id: row.id,
        name: row.name,
        instructor: row.instructor,
        lessons,
    })
}

pub async fn fetch_courses(db: &SqlitePool) -> Result<Vec<Course>, AppError> {
    let rows = sqlx::query_as::<_, CourseRow>(
        "SELECT id, name, instructor, lessons FROM courses ORDER BY id",
    )
    .fetch_all(db)
    .await?;

    rows.into_iter().map(decode_row).collect()
}

pub async fn insert_course(
    db: &SqlitePool,
    req: NewCourseRequest,
) -> Result<Course, AppError> {
    req.validate()?;

    let lessons_json = serde_json::to_string(&req.lessons)?;

    let result = sqlx::query("INSERT INTO courses (name, instructor, lessons) VALUES (?, ?, ?)")
        .bind(&req.name)
        .bind(&req.instructor)
        .bind(&lessons_json)
        .execute(db)
        .await?;

    // id comes from the store
    Ok(Course {
        id: result.last_insert_rowid(),
        name: req.name,
        instructor: req.instructor,
        lessons: req.lessons,
    })
}

pub async fn find_course_by_id(db: &SqlitePool, id: i64) -> Result<Option<Course>, AppError> {
    let row = sqlx::query_as::<_, CourseRow>(
        "SELECT id, name, instructor, lessons FROM courses WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    row.map(decode_row).transpose()
}

/// Returns false when no row with that id existed, so the caller can report
/// not-found instead of silently succeeding.
pub async fn delete_course(db: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM courses WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
