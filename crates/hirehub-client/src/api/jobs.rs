//! Job listing, posting, and hirer views.

use validator::Validate;

use hirehub_models::{
    ApiMessage, GenerateDescriptionRequest, GenerateDescriptionResponse, Job, JobId, JobRecord,
    PostJobRequest,
};

use crate::api;
use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::request::ApiRequest;

impl ApiClient {
    /// Fetch the public listing, mapped to view records.
    pub async fn fetch_jobs(&self) -> ClientResult<Vec<Job>> {
        let response = self.dispatch(ApiRequest::get("/api/jobs")).await?;
        let records: Vec<JobRecord> = api::parse_json(response).await?;
        Ok(records.into_iter().map(Job::from).collect())
    }

    /// Fetch one listing.
    pub async fn fetch_job(&self, id: &JobId) -> ClientResult<Job> {
        let request = ApiRequest::get(format!("/particularjob/{id}"));
        let response = self.dispatch(request).await?;
        let record: JobRecord = api::parse_json(response).await?;
        Ok(record.into())
    }

    /// Listings posted by one hirer.
    pub async fn fetch_hirer_jobs(&self, email: &str) -> ClientResult<Vec<Job>> {
        let request = ApiRequest::post("/posted/hirer_jobs")
            .json(serde_json::json!({ "emailid": email }));
        let response = self.dispatch(request).await?;
        let records: Vec<JobRecord> = api::parse_json(response).await?;
        Ok(records.into_iter().map(Job::from).collect())
    }

    /// Post a new listing. The payload is validated before anything goes
    /// on the wire.
    pub async fn post_job(&self, job: &PostJobRequest) -> ClientResult<String> {
        job.validate()?;
        let request = ApiRequest::post("/post-job").json(serde_json::to_value(job)?);
        let response = self.dispatch(request).await?;
        let body: ApiMessage = api::parse_json(response).await?;
        Ok(body.message)
    }

    /// Draft a job description from title, category, experience, and
    /// keywords.
    pub async fn generate_description(
        &self,
        request: &GenerateDescriptionRequest,
    ) -> ClientResult<String> {
        let request = ApiRequest::post("/generatedescription").json(serde_json::to_value(request)?);
        let response = self.dispatch(request).await?;
        let body: GenerateDescriptionResponse = api::parse_json(response).await?;
        Ok(body.description)
    }
}
