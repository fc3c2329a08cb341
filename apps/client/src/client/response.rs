//! Shared handling of remote API responses

use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Decodes a JSON response or maps its status to an [`ApiError`]
///
/// `not_found_error` is returned for a 404; without it a 404 is reported as
/// `ApiError::Status` like any other failure.
pub(super) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
    not_found_error: Option<ApiError>,
) -> Result<T, ApiError> {
    let response = check_status(response, not_found_error).await?;
    Ok(response.json::<T>().await?)
}

/// Maps a non-success status to an [`ApiError`], ignoring any success body
pub(super) async fn handle_empty_response(
    response: reqwest::Response,
    not_found_error: Option<ApiError>,
) -> Result<(), ApiError> {
    check_status(response, not_found_error).await.map(|_| ())
}

async fn check_status(
    response: reqwest::Response,
    not_found_error: Option<ApiError>,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status == reqwest::StatusCode::NOT_FOUND
        && let Some(err) = not_found_error
    {
        return Err(err);
    }

    let body = response.text().await.unwrap_or_default();

    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}
