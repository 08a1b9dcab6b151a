use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

/// Lessons are opaque to the service: stored and returned exactly as the
/// client sent them, in order. They have no id and no lifecycle of their own.
pub type Lesson = serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub instructor: String,
    pub lessons: Vec<Lesson>,
}

/// Raw row shape: lessons live in a single TEXT column as a JSON array.
#[derive(Debug, FromRow)]
pub struct CourseRow {
    pub id: i64,
    pub name: String,
    pub instructor: String,
    pub lessons: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourseRequest {
    pub name: String,
    pub instructor: String,
    // Required on create. A request without this field fails JSON
    // deserialization at the extractor and never reaches the repository.
    pub lessons: Vec<Lesson>,
}

impl NewCourseRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name must not be empty".to_string()));
        }
        if self.instructor.trim().is_empty() {
            return Err(AppError::Validation(
                "instructor must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
