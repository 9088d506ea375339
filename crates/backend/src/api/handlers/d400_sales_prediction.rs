use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use contracts::dashboards::d400_sales_prediction::{
    CatalogResponse, ErrorResponse, PredictResponse, PredictionInputs, SessionResponse,
};

use crate::dashboards::d400_sales_prediction::{PredictionService, ServiceError};
use crate::shared::model::ModelError;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(e: ServiceError) -> ApiError {
    let status = match &e {
        ServiceError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Model(ModelError::EmptyFrame { .. })
        | ServiceError::Model(ModelError::ShapeMismatch { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ServiceError::Model(ModelError::Evaluation(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!("D400 Dashboard: {}", e);
    } else {
        tracing::warn!("D400 Dashboard: {}", e);
    }

    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

/// Тело запроса не разобралось (неизвестная категория, отрицательное число и т.п.)
fn rejection_error(rejection: JsonRejection) -> ApiError {
    let status = rejection.status();
    let error = rejection.body_text();
    tracing::warn!("D400 Dashboard: rejected request body: {}", error);

    (status, Json(ErrorResponse { error }))
}

/// GET /api/d400/catalog
pub async fn get_catalog(State(service): State<PredictionService>) -> Json<CatalogResponse> {
    Json(service.catalog())
}

/// POST /api/d400/sessions
pub async fn create_session(State(service): State<PredictionService>) -> Json<SessionResponse> {
    Json(service.open_session())
}

/// GET /api/d400/sessions/:id
pub async fn get_session(
    State(service): State<PredictionService>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    service.session(&session_id).map(Json).map_err(api_error)
}

/// DELETE /api/d400/sessions/:id
pub async fn delete_session(
    State(service): State<PredictionService>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service
        .close_session(&session_id)
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(api_error)
}

/// POST /api/d400/sessions/:id/predict
pub async fn predict(
    State(service): State<PredictionService>,
    Path(session_id): Path<String>,
    payload: Result<Json<PredictionInputs>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(inputs) = payload.map_err(rejection_error)?;
    service
        .predict(&session_id, &inputs)
        .map(Json)
        .map_err(api_error)
}
