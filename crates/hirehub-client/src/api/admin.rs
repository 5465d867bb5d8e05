//! Admin moderation call sites.

use hirehub_models::{
    AdminLogEntry, JobId, JobRecord, JobStatus, LogsResponse, RejectJobRequest, ResumeEntry,
    ResumesResponse,
};

use crate::api;
use crate::client::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::request::ApiRequest;

impl ApiClient {
    /// Listings filtered by moderation status. Raw wire records: the admin
    /// view needs `_id` and `status` as the backend reports them.
    pub async fn admin_jobs(&self, status: JobStatus) -> ClientResult<Vec<JobRecord>> {
        let request = ApiRequest::get("/admin/jobs").with_query("status", status.as_str());
        let response = self.dispatch(request).await?;
        api::parse_json(response).await
    }

    /// Approve a pending posting.
    pub async fn approve_job(&self, id: &JobId) -> ClientResult<()> {
        let request = ApiRequest::post(format!("/approve-job/{id}")).json(serde_json::json!({}));
        let response = self.dispatch(request).await?;
        api::check_status(response).await?;
        Ok(())
    }

    /// Reject a pending posting with a reason.
    pub async fn reject_job(&self, id: &JobId, reason: &str) -> ClientResult<()> {
        let payload = RejectJobRequest {
            reason: reason.to_string(),
        };
        let request =
            ApiRequest::post(format!("/reject_job/{id}")).json(serde_json::to_value(&payload)?);
        let response = self.dispatch(request).await?;
        api::check_status(response).await?;
        Ok(())
    }

    /// Resumes submitted against one job.
    pub async fn job_resumes(&self, id: &JobId) -> ClientResult<Vec<ResumeEntry>> {
        let request = ApiRequest::get(format!("/resumes/{id}"));
        let response = self.dispatch(request).await?;
        let body: ResumesResponse = api::parse_json(response).await?;
        Ok(body.resumes)
    }

    /// Download one applicant resume as raw bytes.
    pub async fn download_resume(&self, resume_url: &str) -> ClientResult<Vec<u8>> {
        let request = ApiRequest::get("/admin/download_resume").with_query("url", resume_url);
        let response = self.dispatch(request).await?;
        let response = api::check_status(response).await?;
        let bytes = response.bytes().await.map_err(ClientError::Network)?;
        Ok(bytes.to_vec())
    }

    /// Record an admin action in the audit log.
    pub async fn record_action(&self, entry: &AdminLogEntry) -> ClientResult<()> {
        let request = ApiRequest::post("/log").json(serde_json::to_value(entry)?);
        let response = self.dispatch(request).await?;
        api::check_status(response).await?;
        Ok(())
    }

    /// Audit log for one job.
    pub async fn job_logs(&self, id: &JobId) -> ClientResult<Vec<AdminLogEntry>> {
        let request = ApiRequest::get("/admin/logs").with_query("jobId", id.as_str());
        let response = self.dispatch(request).await?;
        let body: LogsResponse = api::parse_json(response).await?;
        Ok(body.logs)
    }
}
