use std::fmt;

use axum::{
    body::Body,
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::field;
use uuid::Uuid;

/// Header carrying the correlation id in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id attached to every request's extensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reuses a well-formed id sent by the caller, else mints one
    pub fn from_header(value: Option<&HeaderValue>) -> Self {
        value
            .and_then(|h| h.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .map(Self)
            .unwrap_or_default()
    }

    /// Lowercase hyphenated form, as echoed back to the caller
    pub fn header_value(&self) -> HeaderValue {
        let mut buffer = Uuid::encode_buffer();
        let text = self.0.hyphenated().encode_lower(&mut buffer);
        // hex digits and hyphens only
        HeaderValue::from_str(text).unwrap_or_else(|_| HeaderValue::from_static(""))
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

/// Tags the request with a [`RequestId`] and echoes it on the response
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_header(request.headers().get(REQUEST_ID_HEADER));
    request.extensions_mut().insert(request_id);

    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(REQUEST_ID_HEADER, request_id.header_value());
    response
}

/// `TraceLayer` span for one API call
///
/// Records the path without the query string. `request_id` stays empty when
/// the id middleware did not run first.
pub fn request_span(request: &Request<Body>) -> tracing::Span {
    let span = tracing::info_span!(
        "sofa_match_request",
        method = %request.method(),
        path = request.uri().path(),
        request_id = field::Empty,
    );
    if let Some(id) = request.extensions().get::<RequestId>() {
        span.record("request_id", field::display(id));
    }
    span
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reuses_valid_header() {
        let id = Uuid::new_v4();
        let header = HeaderValue::from_str(&id.to_string()).unwrap();
        assert_eq!(RequestId::from_header(Some(&header)), RequestId(id));
    }

    #[test]
    fn test_replaces_malformed_header() {
        let header = HeaderValue::from_static("not-a-uuid");
        let minted = RequestId::from_header(Some(&header));
        assert_ne!(minted.to_string(), "not-a-uuid");
    }

    #[test]
    fn test_uppercase_header_is_echoed_lowercase() {
        let header = HeaderValue::from_static("67E55044-10B1-426F-9247-BB680E5FE0C8");
        let id = RequestId::from_header(Some(&header));
        assert_eq!(
            id.header_value(),
            HeaderValue::from_static("67e55044-10b1-426f-9247-bb680e5fe0c8")
        );
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn test_span_builds_with_and_without_id() {
        let mut request = Request::builder()
            .uri("/api/sofas?page=2")
            .body(Body::empty())
            .unwrap();
        let _ = request_span(&request);

        request.extensions_mut().insert(RequestId::new());
        let _ = request_span(&request);
    }
}
