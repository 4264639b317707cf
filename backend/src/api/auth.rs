//! Bearer token check.

use axum::http::{header, HeaderMap};

use crate::error::{ApiError, ApiResult};

/// Accept the request when it carries `Authorization: Bearer <token>`.
///
/// With an `expected` token the value must match exactly; without one any
/// non-blank token is accepted.
pub fn authorize(headers: &HeaderMap, expected: Option<&str>) -> ApiResult<()> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::Unauthorized)?;

    match expected {
        Some(expected) if expected != token => Err(ApiError::Unauthorized),
        _ => Ok(()),
    }
}
