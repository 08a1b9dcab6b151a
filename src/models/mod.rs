pub mod course;

pub use course::{Course, CourseRow, Lesson, NewCourseRequest};
