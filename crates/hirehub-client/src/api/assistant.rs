//! Assistant endpoints.
//!
//! Replies are passed through as raw JSON; the assistant's response shape
//! is not part of any contract.

use crate::api;
use crate::api::applications::ResumeFile;
use crate::client::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::request::ApiRequest;

impl ApiClient {
    /// Ask the assistant a question.
    pub async fn chat(&self, question: &str) -> ClientResult<serde_json::Value> {
        let request = ApiRequest::post("/chat").json(serde_json::json!({ "question": question }));
        let response = self.dispatch(request).await?;
        let response = api::check_status(response).await?;
        response.json().await.map_err(ClientError::Network)
    }

    /// Ask with a resume attached for context.
    pub async fn chat_with_resume(
        &self,
        question: &str,
        resume: ResumeFile,
    ) -> ClientResult<serde_json::Value> {
        let request = ApiRequest::post("/upload_resume_and_chat")
            .text_field("question", question)
            .file_field("resume", resume.bytes, resume.filename, resume.mime);
        let response = self.dispatch(request).await?;
        let response = api::check_status(response).await?;
        response.json().await.map_err(ClientError::Network)
    }
}
