//! Benign default stubs for every use case `AppState` carries. Route
//! tests override the one they exercise through the builder and leave
//! the rest on these.

use async_trait::async_trait;
use uuid::Uuid;

use crate::accounts::application::ports::outgoing::AccountResult;
use crate::accounts::application::use_cases::{
    FetchProfileError, IFetchProfileUseCase, IRegisterAccountUseCase, IUpdateProfileUseCase,
    RegisterAccountError, RegisterAccountInput, UpdateProfileError, UpdateProfileInput,
};
use crate::catalog::application::ports::outgoing::{
    CourseResult, CourseView, FeedbackResult, FeedbackView, LessonResult, LessonView,
    TeacherResult, TeacherView,
};
use crate::catalog::application::use_cases::{
    AssignTeacherError, CreateCourseCommand, CreateCourseError, CreateFeedbackCommand,
    CreateFeedbackError, CreateLessonCommand, CreateLessonError, CreateTeacherCommand,
    CreateTeacherError, GetCourseFeedbackError, GetCourseLessonsError, GetCourseTeachersError,
    GetCoursesError, GetSingleCourseError, HardDeleteCourseError, IAssignTeacherUseCase,
    ICreateCourseUseCase, ICreateFeedbackUseCase, ICreateLessonUseCase, ICreateTeacherUseCase,
    IGetCourseFeedbackUseCase, IGetCourseLessonsUseCase, IGetCourseTeachersUseCase,
    IGetCoursesUseCase, IGetSingleCourseUseCase, IHardDeleteCourseUseCase,
    ISoftDeleteCourseUseCase, SoftDeleteCourseError,
};
use crate::news::application::ports::incoming::use_cases::{
    BulkDeleteNewsError, BulkDeleteNewsUseCase, CreateNewsCommand, CreateNewsError,
    CreateNewsUseCase, GetNewsListError, GetNewsListUseCase, RestoreNewsError, RestoreNewsUseCase,
    SoftDeleteNewsError, SoftDeleteNewsUseCase, UpdateNewsCommand, UpdateNewsError,
    UpdateNewsUseCase,
};
use crate::news::application::ports::outgoing::{NewsListFilter, NewsResult, NewsView};
use crate::shared::pagination::{PageRequest, PageResult};

fn empty_page<T>(page: PageRequest) -> PageResult<T> {
    PageResult {
        items: vec![],
        page: page.page,
        per_page: page.per_page,
        total: 0,
    }
}

// ============================================================
// News stubs
// ============================================================

pub struct StubCreateNewsUseCase;

#[async_trait]
impl CreateNewsUseCase for StubCreateNewsUseCase {
    async fn execute(&self, _command: CreateNewsCommand) -> Result<NewsResult, CreateNewsError> {
        Ok(NewsResult {
            id: Uuid::new_v4(),
            title: "Заголовок".to_string(),
            preamble: "Вступление".to_string(),
            body: "Содержание".to_string(),
            body_as_markdown: false,
            deleted: false,
        })
    }
}

pub struct StubUpdateNewsUseCase;

#[async_trait]
impl UpdateNewsUseCase for StubUpdateNewsUseCase {
    async fn execute(&self, _command: UpdateNewsCommand) -> Result<NewsResult, UpdateNewsError> {
        Err(UpdateNewsError::NewsNotFound)
    }
}

pub struct StubGetNewsListUseCase;

#[async_trait]
impl GetNewsListUseCase for StubGetNewsListUseCase {
    async fn execute(
        &self,
        _filter: NewsListFilter,
        page: PageRequest,
    ) -> Result<PageResult<NewsView>, GetNewsListError> {
        Ok(empty_page(page))
    }
}

pub struct StubSoftDeleteNewsUseCase;

#[async_trait]
impl SoftDeleteNewsUseCase for StubSoftDeleteNewsUseCase {
    async fn execute(&self, _news_id: Uuid) -> Result<(), SoftDeleteNewsError> {
        Ok(())
    }
}

pub struct StubRestoreNewsUseCase;

#[async_trait]
impl RestoreNewsUseCase for StubRestoreNewsUseCase {
    async fn execute(&self, _news_id: Uuid) -> Result<NewsResult, RestoreNewsError> {
        Err(RestoreNewsError::NewsNotFound)
    }
}

pub struct StubBulkDeleteNewsUseCase;

#[async_trait]
impl BulkDeleteNewsUseCase for StubBulkDeleteNewsUseCase {
    async fn execute(&self, news_ids: Vec<Uuid>) -> Result<u64, BulkDeleteNewsError> {
        Ok(news_ids.len() as u64)
    }
}

// ============================================================
// Catalog stubs
// ============================================================

pub struct StubCreateCourseUseCase;

#[async_trait]
impl ICreateCourseUseCase for StubCreateCourseUseCase {
    async fn execute(
        &self,
        command: CreateCourseCommand,
    ) -> Result<CourseResult, CreateCourseError> {
        let data = command.into_data();
        Ok(CourseResult {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            cost: data.cost,
            deleted: false,
        })
    }
}

pub struct StubGetCoursesUseCase;

#[async_trait]
impl IGetCoursesUseCase for StubGetCoursesUseCase {
    async fn execute(
        &self,
        _include_deleted: bool,
        page: PageRequest,
    ) -> Result<PageResult<CourseView>, GetCoursesError> {
        Ok(empty_page(page))
    }
}

pub struct StubGetSingleCourseUseCase;

#[async_trait]
impl IGetSingleCourseUseCase for StubGetSingleCourseUseCase {
    async fn execute(
        &self,
        _course_id: Uuid,
        _include_deleted: bool,
    ) -> Result<CourseView, GetSingleCourseError> {
        Err(GetSingleCourseError::CourseNotFound)
    }
}

pub struct StubSoftDeleteCourseUseCase;

#[async_trait]
impl ISoftDeleteCourseUseCase for StubSoftDeleteCourseUseCase {
    async fn execute(&self, _course_id: Uuid) -> Result<(), SoftDeleteCourseError> {
        Ok(())
    }
}

pub struct StubHardDeleteCourseUseCase;

#[async_trait]
impl IHardDeleteCourseUseCase for StubHardDeleteCourseUseCase {
    async fn execute(&self, _course_id: Uuid) -> Result<(), HardDeleteCourseError> {
        Ok(())
    }
}

pub struct StubCreateLessonUseCase;

#[async_trait]
impl ICreateLessonUseCase for StubCreateLessonUseCase {
    async fn execute(
        &self,
        command: CreateLessonCommand,
    ) -> Result<LessonResult, CreateLessonError> {
        let data = command.into_data();
        Ok(LessonResult {
            id: Uuid::new_v4(),
            course_id: data.course_id,
            num: data.num,
            title: data.title,
            description: data.description,
            deleted: false,
        })
    }
}

pub struct StubGetCourseLessonsUseCase;

#[async_trait]
impl IGetCourseLessonsUseCase for StubGetCourseLessonsUseCase {
    async fn execute(
        &self,
        _course_id: Uuid,
        _include_deleted: bool,
    ) -> Result<Vec<LessonView>, GetCourseLessonsError> {
        Ok(vec![])
    }
}

pub struct StubCreateTeacherUseCase;

#[async_trait]
impl ICreateTeacherUseCase for StubCreateTeacherUseCase {
    async fn execute(
        &self,
        command: CreateTeacherCommand,
    ) -> Result<TeacherResult, CreateTeacherError> {
        let data = command.into_data();
        Ok(TeacherResult {
            id: Uuid::new_v4(),
            first_name: data.first_name,
            last_name: data.last_name,
            deleted: false,
        })
    }
}

pub struct StubAssignTeacherUseCase;

#[async_trait]
impl IAssignTeacherUseCase for StubAssignTeacherUseCase {
    async fn execute(&self, _course_id: Uuid, _teacher_id: Uuid) -> Result<(), AssignTeacherError> {
        Ok(())
    }
}

pub struct StubGetCourseTeachersUseCase;

#[async_trait]
impl IGetCourseTeachersUseCase for StubGetCourseTeachersUseCase {
    async fn execute(
        &self,
        _course_id: Uuid,
        _include_deleted: bool,
    ) -> Result<Vec<TeacherView>, GetCourseTeachersError> {
        Ok(vec![])
    }
}

pub struct StubCreateFeedbackUseCase;

#[async_trait]
impl ICreateFeedbackUseCase for StubCreateFeedbackUseCase {
    async fn execute(
        &self,
        command: CreateFeedbackCommand,
    ) -> Result<FeedbackResult, CreateFeedbackError> {
        let data = command.into_data();
        Ok(FeedbackResult {
            id: Uuid::new_v4(),
            course_id: data.course_id,
            user_id: data.user_id,
            rating: data.rating,
            feedback: data.feedback,
            deleted: false,
        })
    }
}

pub struct StubGetCourseFeedbackUseCase;

#[async_trait]
impl IGetCourseFeedbackUseCase for StubGetCourseFeedbackUseCase {
    async fn execute(
        &self,
        _course_id: Uuid,
        _include_deleted: bool,
    ) -> Result<Vec<FeedbackView>, GetCourseFeedbackError> {
        Ok(vec![])
    }
}

// ============================================================
// Account stubs
// ============================================================

pub struct StubRegisterAccountUseCase;

#[async_trait]
impl IRegisterAccountUseCase for StubRegisterAccountUseCase {
    async fn execute(
        &self,
        input: RegisterAccountInput,
    ) -> Result<AccountResult, RegisterAccountError> {
        Ok(AccountResult {
            id: Uuid::new_v4(),
            username: input.username,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            age: input.age,
            avatar_url: input.avatar_url,
        })
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        input: UpdateProfileInput,
    ) -> Result<AccountResult, UpdateProfileError> {
        Ok(AccountResult {
            id: input.account_id,
            username: "ivanpetrov".to_string(),
            email: "ivan@example.com".to_string(),
            first_name: input.first_name.unwrap_or_default(),
            last_name: input.last_name.unwrap_or_default(),
            age: input.age,
            avatar_url: input.avatar_url,
        })
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _account_id: Uuid) -> Result<AccountResult, FetchProfileError> {
        Err(FetchProfileError::AccountNotFound)
    }
}
