use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Middleware для логирования HTTP запросов.
///
/// Одна строка на запрос: статус, метод, путь, длительность и размер ответа.
/// Ошибки (4xx/5xx) пишутся уровнем `warn`, чтобы попасть в файл лога.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} {} failed to read response body after {}ms: {}",
                parts.status.as_u16(),
                method,
                path,
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let elapsed_ms = start.elapsed().as_millis();
    let size = format_size(bytes.len());
    if parts.status.is_client_error() || parts.status.is_server_error() {
        tracing::warn!(
            "{} {:>6} {} | {}ms | {}",
            parts.status.as_u16(),
            method,
            path,
            elapsed_ms,
            size
        );
    } else {
        tracing::info!(
            "{} {:>6} {} | {}ms | {}",
            parts.status.as_u16(),
            method,
            path,
            elapsed_ms,
            size
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
