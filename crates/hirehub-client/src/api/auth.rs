//! Login, registration, and logout.

use tracing::info;

use hirehub_models::{ApiMessage, LoginRequest, LoginResponse, RegisterRequest, Session, UserRole};

use crate::api;
use crate::client::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::request::ApiRequest;

impl ApiClient {
    /// Log in and replace the stored session.
    ///
    /// The configured admin email is always granted the admin role,
    /// whatever `userType` the backend reports.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        role: Option<UserRole>,
    ) -> ClientResult<Session> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            role: role.map(|r| r.as_str().to_string()),
        };
        let request = ApiRequest::post("/login").json(serde_json::to_value(&payload)?);
        let response = self.dispatch(request).await?;
        let body: LoginResponse = api::parse_json(response).await?;

        let role = if email == self.config.admin_email {
            UserRole::Admin
        } else {
            body.user_type
                .parse::<UserRole>()
                .map_err(|e| ClientError::InvalidResponse(e.to_string()))?
        };

        let session = Session {
            access_token: Some(body.access_token),
            refresh_token: Some(body.refresh_token),
            email: Some(body.email.unwrap_or_else(|| email.to_string())),
            role: Some(role),
        };
        self.session.set_session(session.clone());
        info!(email, %role, "logged in");
        Ok(session)
    }

    /// Create a new account. Returns the backend's acknowledgement message.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> ClientResult<String> {
        let payload = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            user_type: role.as_str().to_string(),
        };
        let request = ApiRequest::post("/register").json(serde_json::to_value(&payload)?);
        let response = self.dispatch(request).await?;
        let body: ApiMessage = api::parse_json(response).await?;
        Ok(body.message)
    }

    /// Forget the stored session. Purely local and idempotent; the backend
    /// has no logout endpoint.
    pub fn logout(&self) {
        self.session.clear();
    }
}
