use contracts::dashboards::d400_sales_prediction::{
    CatalogResponse, ErrorResponse, PredictResponse, PredictionInputs, SessionResponse,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const API_BASE: &str = "/api/d400";

/// Текст ошибки сервера вида "HTTP 404: session 'x' not found"
async fn error_text(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => format!("HTTP {}: {}", status, body.error),
        Err(_) => format!("HTTP error: {}", status),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_text(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Получить списки значений формы
pub async fn get_catalog() -> Result<CatalogResponse, String> {
    let url = format!("{}/catalog", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_json(response).await
}

/// Открыть новую сессию (случайные признаки генерируются на сервере)
pub async fn create_session() -> Result<SessionResponse, String> {
    let url = format!("{}/sessions", API_BASE);

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_json(response).await
}

pub async fn get_session(session_id: &str) -> Result<SessionResponse, String> {
    let url = format!("{}/sessions/{}", API_BASE, session_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_json(response).await
}

pub async fn predict(
    session_id: &str,
    inputs: &PredictionInputs,
) -> Result<PredictResponse, String> {
    let url = format!("{}/sessions/{}/predict", API_BASE, session_id);

    let response = Request::post(&url)
        .json(inputs)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_json(response).await
}

/// Признак "сессия не найдена" в тексте ошибки
pub fn is_not_found(error: &str) -> bool {
    error.starts_with("HTTP 404")
}
