use std::sync::Arc;

use crate::catalog::application::use_cases::{
    IAssignTeacherUseCase, ICreateCourseUseCase, ICreateFeedbackUseCase, ICreateLessonUseCase,
    ICreateTeacherUseCase, IGetCourseFeedbackUseCase, IGetCourseLessonsUseCase,
    IGetCourseTeachersUseCase, IGetCoursesUseCase, IGetSingleCourseUseCase,
    IHardDeleteCourseUseCase, ISoftDeleteCourseUseCase,
};

/// One handle for everything the catalog exposes, so `AppState` carries
/// a single field instead of a dozen.
#[derive(Clone)]
pub struct CatalogUseCases {
    pub create_course: Arc<dyn ICreateCourseUseCase + Send + Sync>,
    pub get_courses: Arc<dyn IGetCoursesUseCase + Send + Sync>,
    pub get_single_course: Arc<dyn IGetSingleCourseUseCase + Send + Sync>,
    pub soft_delete_course: Arc<dyn ISoftDeleteCourseUseCase + Send + Sync>,
    pub hard_delete_course: Arc<dyn IHardDeleteCourseUseCase + Send + Sync>,
    pub create_lesson: Arc<dyn ICreateLessonUseCase + Send + Sync>,
    pub get_course_lessons: Arc<dyn IGetCourseLessonsUseCase + Send + Sync>,
    pub create_teacher: Arc<dyn ICreateTeacherUseCase + Send + Sync>,
    pub assign_teacher: Arc<dyn IAssignTeacherUseCase + Send + Sync>,
    pub get_course_teachers: Arc<dyn IGetCourseTeachersUseCase + Send + Sync>,
    pub create_feedback: Arc<dyn ICreateFeedbackUseCase + Send + Sync>,
    pub get_course_feedback: Arc<dyn IGetCourseFeedbackUseCase + Send + Sync>,
}
