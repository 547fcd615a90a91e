use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    news::application::ports::incoming::use_cases::BulkDeleteNewsError, shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct BulkDeleteNewsRequest {
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
struct BulkDeleteNewsResponse {
    pub affected: u64,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// The moderation "mark as deleted" action. One statement flips the
/// whole selection; rows are marked, not removed.
#[post("/api/admin/news/mark-deleted")]
pub async fn bulk_delete_news_handler(
    data: web::Data<AppState>,
    payload: web::Json<BulkDeleteNewsRequest>,
) -> impl Responder {
    let ids = payload.into_inner().ids;

    match data.bulk_delete_news_use_case.execute(ids).await {
        Ok(affected) => ApiResponse::success(BulkDeleteNewsResponse { affected }),
        Err(err) => map_bulk_delete_news_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_bulk_delete_news_error(err: BulkDeleteNewsError) -> actix_web::HttpResponse {
    match err {
        BulkDeleteNewsError::EmptySelection => {
            ApiResponse::bad_request("EMPTY_SELECTION", "No rows selected")
        }
        BulkDeleteNewsError::DatabaseError(_) => ApiResponse::internal_error(),
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
        news::application::ports::incoming::use_cases::BulkDeleteNewsUseCase,
        tests::support::app_state_builder::TestAppStateBuilder,
    };

    #[derive(Clone)]
    struct MockBulkDeleteNewsUseCase {
        result: Result<u64, BulkDeleteNewsError>,
    }

    impl MockBulkDeleteNewsUseCase {
        fn affected(count: u64) -> Self {
            Self { result: Ok(count) }
        }

        fn empty_selection() -> Self {
            Self {
                result: Err(BulkDeleteNewsError::EmptySelection),
            }
        }

        fn db_error(msg: &str) -> Self {
            Self {
                result: Err(BulkDeleteNewsError::DatabaseError(msg.to_string())),
            }
        }
    }

    #[async_trait]
    impl BulkDeleteNewsUseCase for MockBulkDeleteNewsUseCase {
        async fn execute(&self, _news_ids: Vec<Uuid>) -> Result<u64, BulkDeleteNewsError> {
            self.result.clone()
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn bulk_delete_reports_affected_rows() {
        let state = TestAppStateBuilder::default()
            .with_bulk_delete_news(MockBulkDeleteNewsUseCase::affected(3))
            .build();

        let app = test::init_service(
            App::new().app_data(state).service(bulk_delete_news_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/news/mark-deleted")
            .set_json(serde_json::json!({
                "ids": [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["affected"], 3);
    }

    #[actix_web::test]
    async fn empty_selection_returns_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_bulk_delete_news(MockBulkDeleteNewsUseCase::empty_selection())
            .build();

        let app = test::init_service(
            App::new().app_data(state).service(bulk_delete_news_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/news/mark-deleted")
            .set_json(serde_json::json!({ "ids": [] }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "EMPTY_SELECTION");
    }

    #[actix_web::test]
    async fn bulk_delete_db_error_returns_500() {
        let state = TestAppStateBuilder::default()
            .with_bulk_delete_news(MockBulkDeleteNewsUseCase::db_error("db down"))
            .build();

        let app = test::init_service(
            App::new().app_data(state).service(bulk_delete_news_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/news/mark-deleted")
            .set_json(serde_json::json!({ "ids": [Uuid::new_v4()] }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}
