use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;
use crate::dashboards::d400_sales_prediction::PredictionService;

/// Конфигурация всех роутов приложения
pub fn configure_routes(service: PredictionService) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS
        // ========================================
        // D400 Sales Prediction Dashboard
        .route(
            "/api/d400/catalog",
            get(handlers::d400_sales_prediction::get_catalog),
        )
        .route(
            "/api/d400/sessions",
            post(handlers::d400_sales_prediction::create_session),
        )
        .route(
            "/api/d400/sessions/:id",
            get(handlers::d400_sales_prediction::get_session)
                .delete(handlers::d400_sales_prediction::delete_session),
        )
        .route(
            "/api/d400/sessions/:id/predict",
            post(handlers::d400_sales_prediction::predict),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_sales_prediction::service::tests::StubPredictor;
    use crate::dashboards::d400_sales_prediction::SessionStore;
    use axum::body::{self, Body};
    use axum::http::{Request, StatusCode};
    use chrono::Duration;
    use contracts::dashboards::d400_sales_prediction::{
        CatalogResponse, DisplayColor, ErrorResponse, PredictResponse, SessionResponse,
    };
    use serde::de::DeserializeOwned;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(value: f64) -> Router {
        let service = PredictionService::new(
            SessionStore::new(Duration::hours(1)),
            Arc::new(StubPredictor::new(value)),
            10.0,
        );
        configure_routes(service)
    }

    async fn json<T: DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    fn predict_request(session_id: &str, body: serde_json::Value) -> Request<Body> {
        Request::post(format!("/api/d400/sessions/{}/predict", session_id))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn dairy_body() -> serde_json::Value {
        serde_json::json!({
            "date": "2017-08-16",
            "promotion_count": 50,
            "days_of_week": ["Monday", "Tuesday"],
            "cluster_ids": [2],
            "store_ids": [1, 3],
            "product_category": "DAIRY"
        })
    }

    async fn open_session(app: &Router) -> SessionResponse {
        let response = app
            .clone()
            .oneshot(
                Request::post("/api/d400/sessions")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        json(response).await
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app(1.0)
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn catalog_lists_closed_choices() {
        let response = app(1.0)
            .oneshot(
                Request::get("/api/d400/catalog")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let catalog: CatalogResponse = json(response).await;
        assert_eq!(catalog.categories.len(), 33);
        assert_eq!(catalog.store_ids.len(), 54);
        assert_eq!(catalog.good_threshold, 10.0);
    }

    #[tokio::test]
    async fn predict_then_read_session_state() {
        let app = app(15.5);
        let session = open_session(&app).await;
        assert_eq!(session.display.text, "$0.00");

        let response = app
            .clone()
            .oneshot(predict_request(&session.session_id, dairy_body()))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let predicted: PredictResponse = json(response).await;
        assert_eq!(predicted.display.text, "$15.50");
        assert_eq!(predicted.display.color, DisplayColor::Green);
        assert_eq!(predicted.request.sales_lag_1, session.randoms.sales_lag_1);
        assert_eq!(predicted.request.rolling_std, session.randoms.rolling_std);

        let response = app
            .clone()
            .oneshot(
                Request::get(format!("/api/d400/sessions/{}", session.session_id))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        let state: SessionResponse = json(response).await;
        assert_eq!(state.last_prediction, 15.5);
        assert_eq!(state.randoms, session.randoms);
        assert_eq!(state.predictions_made, 1);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let response = app(1.0)
            .oneshot(predict_request("missing", dairy_body()))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ErrorResponse = json(response).await;
        assert!(error.error.contains("missing"));
    }

    #[tokio::test]
    async fn out_of_range_inputs_are_unprocessable() {
        let app = app(1.0);
        let session = open_session(&app).await;

        let mut body = dairy_body();
        body["store_ids"] = serde_json::json!([55]);
        let response = app
            .clone()
            .oneshot(predict_request(&session.session_id, body))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn malformed_inputs_get_json_error_body() {
        let app = app(1.0);
        let session = open_session(&app).await;

        let broken = [
            ("product_category", serde_json::json!("TOYS")),
            ("promotion_count", serde_json::json!(-1)),
            ("days_of_week", serde_json::json!(["Funday"])),
        ];
        for (field, value) in broken {
            let mut body = dairy_body();
            body[field] = value;
            let response = app
                .clone()
                .oneshot(predict_request(&session.session_id, body))
                .await
                .expect("response");
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", field);
            let error: ErrorResponse = json(response).await;
            assert!(error.error.contains(field), "{}: {}", field, error.error);
        }
    }

    #[tokio::test]
    async fn empty_store_selection_is_rejected_by_model() {
        let app = app(1.0);
        let session = open_session(&app).await;

        let mut body = dairy_body();
        body["store_ids"] = serde_json::json!([]);
        let response = app
            .clone()
            .oneshot(predict_request(&session.session_id, body))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn deleted_session_is_gone() {
        let app = app(1.0);
        let session = open_session(&app).await;
        let uri = format!("/api/d400/sessions/{}", session.session_id);

        let response = app
            .clone()
            .oneshot(Request::delete(&uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(Request::get(&uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
