pub mod course_feedback;
pub mod course_teacher_links;
pub mod course_teachers;
pub mod courses;
pub mod lessons;
