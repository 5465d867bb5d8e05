//! Typed endpoint wrappers.
//!
//! Every call site routes through [`crate::ApiClient::dispatch`]. These
//! modules interpret status codes and bodies; the pipeline does not.

pub mod admin;
pub mod applications;
pub mod assistant;
pub mod auth;
pub mod jobs;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use hirehub_models::ApiMessage;

use crate::error::{ClientError, ClientResult};

/// Map a non-success status to a `ClientError`, extracting the backend's
/// `{ message }` envelope when present.
pub(crate) async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiMessage>(&body)
        .map(|m| m.message)
        .unwrap_or(body);

    if status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized(message));
    }
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Parse a success body, or map a failure status to a `ClientError`.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let response = check_status(response).await?;
    response.json().await.map_err(ClientError::Network)
}
