use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, info_span, Instrument};

use super::domain::CorrelationId;

pub const CORRELATION_HEADER: &str = "x-correlation-id";

/// Resolves the request's correlation id, exposes it as an extension, echoes it on the
/// response and logs request timing. Only identifiers are logged, never payload fields.
///
/// A caller supplied header is echoed byte for byte, including values that are not
/// visible ASCII. Everything logged while the request runs carries the id as a span field.
pub async fn propagate_correlation_id(mut request: Request, next: Next) -> Response {
    let incoming = request.headers().get(CORRELATION_HEADER).cloned();
    let correlation_id = CorrelationId::from_header(
        incoming
            .as_ref()
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
            .as_deref(),
    );
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    info!(%method, %path, correlation_id = %correlation_id, "request started");

    request.extensions_mut().insert(correlation_id.clone());
    let started = Instant::now();
    let span = info_span!("request", correlation_id = %correlation_id);
    let mut response = next.run(request).instrument(span).await;

    let echoed = incoming
        .filter(|value| String::from_utf8_lossy(value.as_bytes()) == correlation_id.as_str())
        .or_else(|| HeaderValue::from_bytes(correlation_id.as_str().as_bytes()).ok());
    if let Some(value) = echoed {
        response.headers_mut().insert(CORRELATION_HEADER, value);
    }

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        duration_ms,
        correlation_id = %correlation_id,
        "request completed"
    );

    response
}
