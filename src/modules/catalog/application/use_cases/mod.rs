pub mod assign_teacher;
pub mod create_course;
pub mod create_feedback;
pub mod create_lesson;
pub mod create_teacher;
pub mod get_course_feedback;
pub mod get_course_lessons;
pub mod get_course_teachers;
pub mod get_courses;
pub mod get_single_course;
pub mod hard_delete_course;
pub mod soft_delete_course;

pub use assign_teacher::{AssignTeacherError, AssignTeacherUseCase, IAssignTeacherUseCase};
pub use create_course::{
    CreateCourseCommand, CreateCourseCommandError, CreateCourseError, CreateCourseUseCase,
    ICreateCourseUseCase,
};
pub use create_feedback::{
    CreateFeedbackCommand, CreateFeedbackCommandError, CreateFeedbackError, CreateFeedbackUseCase,
    ICreateFeedbackUseCase,
};
pub use create_lesson::{
    CreateLessonCommand, CreateLessonCommandError, CreateLessonError, CreateLessonUseCase,
    ICreateLessonUseCase,
};
pub use create_teacher::{
    CreateTeacherCommand, CreateTeacherCommandError, CreateTeacherError, CreateTeacherUseCase,
    ICreateTeacherUseCase,
};
pub use get_course_feedback::{
    GetCourseFeedbackError, GetCourseFeedbackUseCase, IGetCourseFeedbackUseCase,
};
pub use get_course_lessons::{
    GetCourseLessonsError, GetCourseLessonsUseCase, IGetCourseLessonsUseCase,
};
pub use get_course_teachers::{
    GetCourseTeachersError, GetCourseTeachersUseCase, IGetCourseTeachersUseCase,
};
pub use get_courses::{GetCoursesError, GetCoursesUseCase, IGetCoursesUseCase};
pub use get_single_course::{
    GetSingleCourseError, GetSingleCourseUseCase, IGetSingleCourseUseCase,
};
pub use hard_delete_course::{
    HardDeleteCourseError, HardDeleteCourseUseCase, IHardDeleteCourseUseCase,
};
pub use soft_delete_course::{
    ISoftDeleteCourseUseCase, SoftDeleteCourseError, SoftDeleteCourseUseCase,
};
