mod assign_teacher;
mod create_course;
mod create_feedback;
mod create_lesson;
mod create_teacher;
mod get_course_feedback;
mod get_course_lessons;
mod get_course_teachers;
mod get_courses;
mod get_single_course;
mod hard_delete_course;
mod soft_delete_course;

pub use assign_teacher::assign_teacher_handler;
pub use create_course::create_course_handler;
pub use create_feedback::create_feedback_handler;
pub use create_lesson::create_lesson_handler;
pub use create_teacher::create_teacher_handler;
pub use get_course_feedback::get_course_feedback_handler;
pub use get_course_lessons::get_course_lessons_handler;
pub use get_course_teachers::get_course_teachers_handler;
pub use get_courses::get_courses_handler;
pub use get_single_course::get_single_course_handler;
pub use hard_delete_course::hard_delete_course_handler;
pub use soft_delete_course::soft_delete_course_handler;
