mod course_query;
mod course_repository;
mod feedback_query;
mod feedback_repository;
mod lesson_query;
mod lesson_repository;
mod teacher_query;
mod teacher_repository;

pub use course_query::{CourseQuery, CourseQueryError, CourseView};
pub use course_repository::{
    CourseRepository, CourseRepositoryError, CourseResult, CreateCourseData,
};
pub use feedback_query::{FeedbackQuery, FeedbackQueryError, FeedbackView};
pub use feedback_repository::{
    CreateFeedbackData, FeedbackRepository, FeedbackRepositoryError, FeedbackResult,
};
pub use lesson_query::{LessonQuery, LessonQueryError, LessonView};
pub use lesson_repository::{
    CreateLessonData, LessonRepository, LessonRepositoryError, LessonResult,
};
pub use teacher_query::{TeacherQuery, TeacherQueryError, TeacherView};
pub use teacher_repository::{
    CreateTeacherData, TeacherRepository, TeacherRepositoryError, TeacherResult,
};
