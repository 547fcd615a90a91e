use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    news::application::ports::incoming::use_cases::SoftDeleteNewsError, shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[delete("/api/news/{news_id}")]
pub async fn soft_delete_news_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let news_id = path.into_inner();

    match data.soft_delete_news_use_case.execute(news_id).await {
        Ok(_) => ApiResponse::no_content(),
        Err(err) => map_soft_delete_news_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_soft_delete_news_error(err: SoftDeleteNewsError) -> actix_web::HttpResponse {
    match err {
        SoftDeleteNewsError::NewsNotFound => {
            ApiResponse::not_found("NEWS_NOT_FOUND", "News item not found")
        }
        SoftDeleteNewsError::DatabaseError(_) => ApiResponse::internal_error(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::{
        news::application::ports::incoming::use_cases::SoftDeleteNewsUseCase,
        tests::support::app_state_builder::TestAppStateBuilder,
    };

    #[derive(Clone)]
    struct MockSoftDeleteNewsUseCase {
        result: Result<(), SoftDeleteNewsError>,
    }

    impl MockSoftDeleteNewsUseCase {
        fn success() -> Self {
            Self { result: Ok(()) }
        }

        fn not_found() -> Self {
            Self {
                result: Err(SoftDeleteNewsError::NewsNotFound),
            }
        }

        fn db_error(msg: &str) -> Self {
            Self {
                result: Err(SoftDeleteNewsError::DatabaseError(msg.to_string())),
            }
        }
    }

    #[async_trait]
    impl SoftDeleteNewsUseCase for MockSoftDeleteNewsUseCase {
        async fn execute(&self, _news_id: Uuid) -> Result<(), SoftDeleteNewsError> {
            self.result.clone()
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn soft_delete_news_success_returns_no_content() {
        let state = TestAppStateBuilder::default()
            .with_soft_delete_news(MockSoftDeleteNewsUseCase::success())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(soft_delete_news_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/news/{}", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn soft_delete_news_not_found_returns_404() {
        let state = TestAppStateBuilder::default()
            .with_soft_delete_news(MockSoftDeleteNewsUseCase::not_found())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(soft_delete_news_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/news/{}", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let json = read_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "NEWS_NOT_FOUND");
    }

    #[actix_web::test]
    async fn soft_delete_news_db_error_returns_500() {
        let state = TestAppStateBuilder::default()
            .with_soft_delete_news(MockSoftDeleteNewsUseCase::db_error("db down"))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(soft_delete_news_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/news/{}", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}
