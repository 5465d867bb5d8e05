//! Expired-session recovery.
//!
//! A 401 on a dispatched call moves the logical call from `Idle` through
//! `Refreshing` (exchange the refresh token for a new access token) and
//! `Retrying` (replay the original request once). Every failure mode exits
//! through `Failed`, which propagates the *original* 401: refresh errors
//! never mask the response the caller's request actually got.
//!
//! The retry bound is structural: the replay goes through `ApiClient::send`,
//! not `dispatch`, so a second 401 cannot re-enter recovery.

use reqwest::Response;
use tracing::{debug, warn};
use uuid::Uuid;

use hirehub_models::{RefreshRequest, RefreshResponse};

use crate::client::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::request::ApiRequest;

/// Outcome of the `Refreshing` state.
enum Refreshed {
    /// Exchange succeeded; retry with this token.
    Token(String),
    /// A concurrent call already rotated the token while this one waited
    /// on the gate; retry with the rotated token, no exchange needed.
    AlreadyRotated(String),
    /// No refresh token, rejected exchange, transport failure, or a 2xx
    /// body without an access token.
    Failed,
}

/// Recover one 401: refresh the access token and replay the request
/// exactly once. `original` is what the caller receives whenever recovery
/// is not possible.
pub(crate) async fn recover(
    client: &ApiClient,
    request: &ApiRequest,
    original: Response,
    sent_with: Option<&str>,
    call_id: Uuid,
) -> ClientResult<Response> {
    match refreshed_token(client, request, sent_with, call_id).await? {
        Refreshed::Token(token) | Refreshed::AlreadyRotated(token) => {
            debug!(%call_id, "retrying request with refreshed token");
            client.send(request, Some(&token)).await
        }
        Refreshed::Failed => Ok(original),
    }
}

/// The `Refreshing` state: serialize concurrent exchanges behind the gate,
/// then trade the refresh token for a new access token.
async fn refreshed_token(
    client: &ApiClient,
    request: &ApiRequest,
    sent_with: Option<&str>,
    call_id: Uuid,
) -> ClientResult<Refreshed> {
    let Some(refresh_token) = client.session.refresh_token() else {
        debug!(%call_id, "401 with no refresh token; propagating");
        return Ok(Refreshed::Failed);
    };

    let acquire = client.refresh_gate.lock();
    let _gate = match &request.cancel {
        Some(cancel) => tokio::select! {
            _ = cancel.cancelled() => return Err(ClientError::Cancelled),
            guard = acquire => guard,
        },
        None => acquire.await,
    };

    // A call that queued behind another expiry may find the token already
    // rotated; its own exchange would be redundant.
    if let Some(current) = client.session.access_token() {
        if sent_with != Some(current.as_str()) {
            debug!(%call_id, "token already rotated by a concurrent call");
            return Ok(Refreshed::AlreadyRotated(current));
        }
    }

    let url = format!("{}/refresh", client.config.base_url);
    let exchange = client
        .http
        .post(&url)
        .json(&RefreshRequest { refresh_token })
        .send();

    let result = match &request.cancel {
        Some(cancel) => tokio::select! {
            _ = cancel.cancelled() => return Err(ClientError::Cancelled),
            result = exchange => result,
        },
        None => exchange.await,
    };

    // Transport failures and rejections are equivalent here: the caller
    // gets the original 401 either way.
    let response = match result {
        Ok(r) if r.status().is_success() => r,
        Ok(r) => {
            warn!(%call_id, status = %r.status(), "token refresh rejected");
            return Ok(Refreshed::Failed);
        }
        Err(e) => {
            warn!(%call_id, error = %e, "token refresh failed");
            return Ok(Refreshed::Failed);
        }
    };

    let body: RefreshResponse = match response.json().await {
        Ok(body) => body,
        Err(e) => {
            warn!(%call_id, error = %e, "malformed refresh response");
            return Ok(Refreshed::Failed);
        }
    };

    let Some(token) = body.access_token else {
        warn!(%call_id, "refresh response missing access token");
        return Ok(Refreshed::Failed);
    };

    client.session.set_access_token(token.clone());
    debug!(%call_id, "access token refreshed");
    Ok(Refreshed::Token(token))
}
