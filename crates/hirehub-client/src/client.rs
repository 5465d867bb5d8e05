//! The request dispatcher.

use std::sync::Arc;

use reqwest::{Client, Response, StatusCode};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::refresh;
use crate::request::ApiRequest;
use crate::session::SessionStore;

/// Client for the HireHub backend.
///
/// One instance per session; cheap to share behind an `Arc`. All typed
/// endpoint wrappers (see [`crate::api`]) route through [`Self::dispatch`].
pub struct ApiClient {
    pub(crate) http: Client,
    pub(crate) config: ClientConfig,
    pub(crate) session: Arc<SessionStore>,
    /// Serializes concurrent refresh exchanges (see `refresh`).
    pub(crate) refresh_gate: Mutex<()>,
}

impl ApiClient {
    /// Create a new client over an explicit credential store.
    pub fn new(config: ClientConfig, session: Arc<SessionStore>) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self {
            http,
            config,
            session,
            refresh_gate: Mutex::new(()),
        })
    }

    /// Create from environment variables with an in-memory session.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env(), Arc::new(SessionStore::in_memory()))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Issue one logical call: attach the current access token, send, and
    /// recover a single 401 through the refresh coordinator.
    ///
    /// Any response other than 401 is returned unchanged; success and
    /// application errors alike are the caller's to interpret.
    pub async fn dispatch(&self, request: ApiRequest) -> ClientResult<Response> {
        let call_id = Uuid::new_v4();
        let sent_with = self.session.access_token();

        debug!(
            %call_id,
            method = %request.method,
            path = %request.path,
            authenticated = sent_with.is_some(),
            "dispatching request"
        );

        let response = self.send(&request, sent_with.as_deref()).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        refresh::recover(self, &request, response, sent_with.as_deref(), call_id).await
    }

    /// Send one attempt, honoring the request's cancellation token.
    pub(crate) async fn send(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
    ) -> ClientResult<Response> {
        let builder = request.build(&self.http, &self.config.base_url, token)?;
        let send = builder.send();

        match &request.cancel {
            Some(cancel) => tokio::select! {
                _ = cancel.cancelled() => Err(ClientError::Cancelled),
                result = send => result.map_err(ClientError::Network),
            },
            None => send.await.map_err(ClientError::Network),
        }
    }
}
