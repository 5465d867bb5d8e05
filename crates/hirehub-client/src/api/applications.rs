//! Resume uploads.

use hirehub_models::{ApiMessage, JobId};

use crate::api;
use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::request::ApiRequest;

/// A resume file to attach to an application or a chat message.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(
        filename: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

impl ApiClient {
    /// Apply to a job: multipart `name`, `email`, `resume`. The file part
    /// carries the caller's filename and MIME type unchanged.
    pub async fn upload_resume(
        &self,
        job_id: &JobId,
        name: &str,
        email: &str,
        resume: ResumeFile,
    ) -> ClientResult<String> {
        let request = ApiRequest::post(format!("/upload_resume/{job_id}"))
            .text_field("name", name)
            .text_field("email", email)
            .file_field("resume", resume.bytes, resume.filename, resume.mime);
        let response = self.dispatch(request).await?;
        let body: ApiMessage = api::parse_json(response).await?;
        Ok(body.message)
    }
}
