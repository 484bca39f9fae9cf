use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// RFC 7807 Problem Details payload.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub r#type: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// The HTTP status code for this occurrence.
    pub status: u16,
    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// A URI reference that identifies this specific occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// A stable, machine-readable application error code (DBK_...).
    pub code: String,
    /// The trace id of the failing request, for support and debugging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Build a Problem Details response with the correct content-type.
pub fn problem(
    status: StatusCode,
    code: &str,
    detail: Option<String>,
    instance: Option<String>,
    trace_id: Option<String>,
) -> Response {
    // Step 1: Build the problem payload.
    let payload = ProblemDetails {
        r#type: "about:blank".to_string(),
        title: status.canonical_reason().unwrap_or("Error").to_string(),
        status: status.as_u16(),
        detail,
        instance,
        code: code.to_string(),
        trace_id,
    };

    // Step 2: Convert to an HTTP response with JSON body.
    let mut response = (status, Json(payload)).into_response();

    // Step 3: Ensure RFC 7807 content type.
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/problem+json"),
    );

    response
}

// Stable application error codes.
pub const DBK_REQUEST_MALFORMED: &str = "DBK_REQUEST_MALFORMED";
pub const DBK_CLIENT_NOT_FOUND: &str = "DBK_CLIENT_NOT_FOUND";
pub const DBK_CLIENT_REJECTED: &str = "DBK_CLIENT_REJECTED";
pub const DBK_CLIENT_UPDATE_FAILED: &str = "DBK_CLIENT_UPDATE_FAILED";
pub const DBK_CLIENT_DELETE_FAILED: &str = "DBK_CLIENT_DELETE_FAILED";
pub const DBK_STORAGE_DB_ERROR: &str = "DBK_STORAGE_DB_ERROR";

#[cfg(test)]
mod tests {
    use super::{DBK_REQUEST_MALFORMED, problem};
    use axum::http::StatusCode;

    #[test]
    fn given_problem_when_built_should_use_problem_json_content_type() {
        let response = problem(
            StatusCode::BAD_REQUEST,
            DBK_REQUEST_MALFORMED,
            Some("O Id é invalido.".to_string()),
            None,
            None,
        );

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert!(content_type.starts_with("application/problem+json"));
    }
}
