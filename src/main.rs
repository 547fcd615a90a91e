use campus_backend::accounts::adapter::outgoing::{
    AccountQueryPostgres, AccountRepositoryPostgres, Argon2Hasher,
};
use campus_backend::accounts::application::use_cases::{
    FetchProfileUseCase, RegisterAccountUseCase, UpdateProfileUseCase,
};
use campus_backend::api::openapi::ApiDoc;
use campus_backend::catalog::adapter::outgoing::{
    CourseQueryPostgres, CourseRepositoryPostgres, FeedbackQueryPostgres,
    FeedbackRepositoryPostgres, LessonQueryPostgres, LessonRepositoryPostgres,
    TeacherQueryPostgres, TeacherRepositoryPostgres,
};
use campus_backend::catalog::application::use_cases::{
    AssignTeacherUseCase, CreateCourseUseCase, CreateFeedbackUseCase, CreateLessonUseCase,
    CreateTeacherUseCase, GetCourseFeedbackUseCase, GetCourseLessonsUseCase,
    GetCourseTeachersUseCase, GetCoursesUseCase, GetSingleCourseUseCase, HardDeleteCourseUseCase,
    SoftDeleteCourseUseCase,
};
use campus_backend::catalog::application::CatalogUseCases;
use campus_backend::news::adapter::outgoing::{NewsQueryPostgres, NewsRepositoryPostgres};
use campus_backend::news::application::services::{
    BulkDeleteNewsService, CreateNewsService, GetNewsListService, RestoreNewsService,
    SoftDeleteNewsService, UpdateNewsService,
};
use campus_backend::shared::api::custom_json_config;
use campus_backend::AppState;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // News wiring
    let news_repo = NewsRepositoryPostgres::new(Arc::clone(&db_arc));
    let news_query = NewsQueryPostgres::new(Arc::clone(&db_arc));
    let create_news_use_case = CreateNewsService::new(news_repo.clone());
    let update_news_use_case = UpdateNewsService::new(news_repo.clone());
    let get_news_list_use_case = GetNewsListService::new(news_query.clone());
    let soft_delete_news_use_case = SoftDeleteNewsService::new(news_repo.clone());
    let restore_news_use_case = RestoreNewsService::new(news_repo.clone());
    let bulk_delete_news_use_case = BulkDeleteNewsService::new(news_repo);

    // Catalog wiring
    let course_repo = CourseRepositoryPostgres::new(Arc::clone(&db_arc));
    let course_query = CourseQueryPostgres::new(Arc::clone(&db_arc));
    let lesson_repo = LessonRepositoryPostgres::new(Arc::clone(&db_arc));
    let lesson_query = LessonQueryPostgres::new(Arc::clone(&db_arc));
    let teacher_repo = TeacherRepositoryPostgres::new(Arc::clone(&db_arc));
    let teacher_query = TeacherQueryPostgres::new(Arc::clone(&db_arc));
    let feedback_repo = FeedbackRepositoryPostgres::new(Arc::clone(&db_arc));
    let feedback_query = FeedbackQueryPostgres::new(Arc::clone(&db_arc));

    let catalog = CatalogUseCases {
        create_course: Arc::new(CreateCourseUseCase::new(course_repo.clone())),
        get_courses: Arc::new(GetCoursesUseCase::new(course_query.clone())),
        get_single_course: Arc::new(GetSingleCourseUseCase::new(course_query.clone())),
        soft_delete_course: Arc::new(SoftDeleteCourseUseCase::new(course_repo.clone())),
        hard_delete_course: Arc::new(HardDeleteCourseUseCase::new(course_repo)),
        create_lesson: Arc::new(CreateLessonUseCase::new(course_query, lesson_repo)),
        get_course_lessons: Arc::new(GetCourseLessonsUseCase::new(lesson_query)),
        create_teacher: Arc::new(CreateTeacherUseCase::new(teacher_repo.clone())),
        assign_teacher: Arc::new(AssignTeacherUseCase::new(teacher_repo)),
        get_course_teachers: Arc::new(GetCourseTeachersUseCase::new(teacher_query)),
        create_feedback: Arc::new(CreateFeedbackUseCase::new(feedback_repo)),
        get_course_feedback: Arc::new(GetCourseFeedbackUseCase::new(feedback_query)),
    };

    // Accounts wiring
    let account_repo = AccountRepositoryPostgres::new(Arc::clone(&db_arc));
    let account_query = AccountQueryPostgres::new(Arc::clone(&db_arc));
    let argon2_hasher = Arc::new(Argon2Hasher::from_env());
    let register_account_use_case = RegisterAccountUseCase::new(
        account_query.clone(),
        account_repo.clone(),
        argon2_hasher,
    );
    let update_profile_use_case = UpdateProfileUseCase::new(account_repo);
    let fetch_profile_use_case = FetchProfileUseCase::new(account_query);

    let state = AppState {
        create_news_use_case: Arc::new(create_news_use_case),
        update_news_use_case: Arc::new(update_news_use_case),
        get_news_list_use_case: Arc::new(get_news_list_use_case),
        soft_delete_news_use_case: Arc::new(soft_delete_news_use_case),
        restore_news_use_case: Arc::new(restore_news_use_case),
        bulk_delete_news_use_case: Arc::new(bulk_delete_news_use_case),
        catalog,
        register_account_use_case: Arc::new(register_account_use_case),
        update_profile_use_case: Arc::new(update_profile_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(campus_backend::health::health);
    cfg.service(campus_backend::health::readiness);
    // News
    cfg.service(campus_backend::news::adapter::incoming::web::routes::create_news_handler);
    cfg.service(campus_backend::news::adapter::incoming::web::routes::update_news_handler);
    cfg.service(campus_backend::news::adapter::incoming::web::routes::get_news_feed_handler);
    cfg.service(campus_backend::news::adapter::incoming::web::routes::moderation_list_news_handler);
    cfg.service(campus_backend::news::adapter::incoming::web::routes::soft_delete_news_handler);
    cfg.service(campus_backend::news::adapter::incoming::web::routes::restore_news_handler);
    cfg.service(campus_backend::news::adapter::incoming::web::routes::bulk_delete_news_handler);
    // Catalog
    cfg.service(campus_backend::catalog::adapter::incoming::web::routes::create_course_handler);
    cfg.service(campus_backend::catalog::adapter::incoming::web::routes::get_courses_handler);
    cfg.service(campus_backend::catalog::adapter::incoming::web::routes::get_single_course_handler);
    cfg.service(campus_backend::catalog::adapter::incoming::web::routes::soft_delete_course_handler);
    cfg.service(campus_backend::catalog::adapter::incoming::web::routes::hard_delete_course_handler);
    cfg.service(campus_backend::catalog::adapter::incoming::web::routes::create_lesson_handler);
    cfg.service(campus_backend::catalog::adapter::incoming::web::routes::get_course_lessons_handler);
    cfg.service(campus_backend::catalog::adapter::incoming::web::routes::create_teacher_handler);
    cfg.service(campus_backend::catalog::adapter::incoming::web::routes::assign_teacher_handler);
    cfg.service(campus_backend::catalog::adapter::incoming::web::routes::get_course_teachers_handler);
    cfg.service(campus_backend::catalog::adapter::incoming::web::routes::create_feedback_handler);
    cfg.service(campus_backend::catalog::adapter::incoming::web::routes::get_course_feedback_handler);
    // Accounts
    cfg.service(campus_backend::accounts::adapter::incoming::web::routes::register_account_handler);
    cfg.service(campus_backend::accounts::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(campus_backend::accounts::adapter::incoming::web::routes::get_profile_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
