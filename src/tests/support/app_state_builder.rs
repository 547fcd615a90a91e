use actix_web::web;
use std::sync::Arc;

use crate::accounts::application::use_cases::{
    IFetchProfileUseCase, IRegisterAccountUseCase, IUpdateProfileUseCase,
};
use crate::catalog::application::use_cases::{ICreateFeedbackUseCase, IGetCoursesUseCase};
use crate::catalog::application::CatalogUseCases;
use crate::news::application::ports::incoming::use_cases::{
    BulkDeleteNewsUseCase, CreateNewsUseCase, GetNewsListUseCase, RestoreNewsUseCase,
    SoftDeleteNewsUseCase, UpdateNewsUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    create_news: Arc<dyn CreateNewsUseCase + Send + Sync>,
    update_news: Arc<dyn UpdateNewsUseCase + Send + Sync>,
    get_news_list: Arc<dyn GetNewsListUseCase + Send + Sync>,
    soft_delete_news: Arc<dyn SoftDeleteNewsUseCase + Send + Sync>,
    restore_news: Arc<dyn RestoreNewsUseCase + Send + Sync>,
    bulk_delete_news: Arc<dyn BulkDeleteNewsUseCase + Send + Sync>,
    catalog: CatalogUseCases,
    register_account: Arc<dyn IRegisterAccountUseCase + Send + Sync>,
    update_profile: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    fetch_profile: Arc<dyn IFetchProfileUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create_news: Arc::new(StubCreateNewsUseCase),
            update_news: Arc::new(StubUpdateNewsUseCase),
            get_news_list: Arc::new(StubGetNewsListUseCase),
            soft_delete_news: Arc::new(StubSoftDeleteNewsUseCase),
            restore_news: Arc::new(StubRestoreNewsUseCase),
            bulk_delete_news: Arc::new(StubBulkDeleteNewsUseCase),
            catalog: CatalogUseCases {
                create_course: Arc::new(StubCreateCourseUseCase),
                get_courses: Arc::new(StubGetCoursesUseCase),
                get_single_course: Arc::new(StubGetSingleCourseUseCase),
                soft_delete_course: Arc::new(StubSoftDeleteCourseUseCase),
                hard_delete_course: Arc::new(StubHardDeleteCourseUseCase),
                create_lesson: Arc::new(StubCreateLessonUseCase),
                get_course_lessons: Arc::new(StubGetCourseLessonsUseCase),
                create_teacher: Arc::new(StubCreateTeacherUseCase),
                assign_teacher: Arc::new(StubAssignTeacherUseCase),
                get_course_teachers: Arc::new(StubGetCourseTeachersUseCase),
                create_feedback: Arc::new(StubCreateFeedbackUseCase),
                get_course_feedback: Arc::new(StubGetCourseFeedbackUseCase),
            },
            register_account: Arc::new(StubRegisterAccountUseCase),
            update_profile: Arc::new(StubUpdateProfileUseCase),
            fetch_profile: Arc::new(StubFetchProfileUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_news(mut self, uc: impl CreateNewsUseCase + Send + Sync + 'static) -> Self {
        self.create_news = Arc::new(uc);
        self
    }

    pub fn with_get_news_list(
        mut self,
        uc: impl GetNewsListUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_news_list = Arc::new(uc);
        self
    }

    pub fn with_soft_delete_news(
        mut self,
        uc: impl SoftDeleteNewsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.soft_delete_news = Arc::new(uc);
        self
    }

    pub fn with_bulk_delete_news(
        mut self,
        uc: impl BulkDeleteNewsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.bulk_delete_news = Arc::new(uc);
        self
    }

    pub fn with_get_courses(mut self, uc: impl IGetCoursesUseCase + Send + Sync + 'static) -> Self {
        self.catalog.get_courses = Arc::new(uc);
        self
    }

    pub fn with_create_feedback(
        mut self,
        uc: impl ICreateFeedbackUseCase + Send + Sync + 'static,
    ) -> Self {
        self.catalog.create_feedback = Arc::new(uc);
        self
    }

    pub fn with_register_account(
        mut self,
        uc: impl IRegisterAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_account = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            create_news_use_case: self.create_news,
            update_news_use_case: self.update_news,
            get_news_list_use_case: self.get_news_list,
            soft_delete_news_use_case: self.soft_delete_news,
            restore_news_use_case: self.restore_news,
            bulk_delete_news_use_case: self.bulk_delete_news,
            catalog: self.catalog,
            register_account_use_case: self.register_account,
            update_profile_use_case: self.update_profile,
            fetch_profile_use_case: self.fetch_profile,
        })
    }
}
