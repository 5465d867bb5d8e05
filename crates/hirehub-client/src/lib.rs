//! Authenticated HTTP client for the HireHub backend.
//!
//! Every call runs the same pipeline:
//!
//! 1. the dispatcher attaches the stored bearer token and sends the request;
//! 2. a 401 hands control to the refresh coordinator, which exchanges the
//!    refresh token (serialized across concurrent calls) and replays the
//!    request exactly once;
//! 3. every other response reaches the caller untouched.
//!
//! Credentials live in an injectable [`SessionStore`], in-memory or
//! file-backed so a session outlives the process.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod geocode;
mod refresh;
pub mod request;
pub mod session;
pub mod store;

pub use api::applications::ResumeFile;
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use request::{ApiRequest, FieldValue, MultipartField, RequestBody};
pub use session::SessionStore;
pub use store::JobBoard;
