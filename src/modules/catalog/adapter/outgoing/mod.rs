pub mod sea_orm_entity;
mod course_query_postgres;
mod course_repository_postgres;
mod feedback_query_postgres;
mod feedback_repository_postgres;
mod lesson_query_postgres;
mod lesson_repository_postgres;
mod teacher_query_postgres;
mod teacher_repository_postgres;

pub use course_query_postgres::CourseQueryPostgres;
pub use course_repository_postgres::CourseRepositoryPostgres;
pub use feedback_query_postgres::FeedbackQueryPostgres;
pub use feedback_repository_postgres::FeedbackRepositoryPostgres;
pub use lesson_query_postgres::LessonQueryPostgres;
pub use lesson_repository_postgres::LessonRepositoryPostgres;
pub use teacher_query_postgres::TeacherQueryPostgres;
pub use teacher_repository_postgres::TeacherRepositoryPostgres;
