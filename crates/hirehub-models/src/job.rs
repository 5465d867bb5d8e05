//! Job listing models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::utils::stringly;

/// Server-assigned job identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Moderation state of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Awaiting moderation
    #[default]
    Pending,
    /// Visible in the public listing
    Approved,
    /// Rejected with a reason
    Rejected,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Approved => "approved",
            JobStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job record as the backend emits it.
///
/// The listing endpoint uses `id`, the moderation endpoints use `_id`;
/// both deserialize into the same field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(alias = "_id")]
    pub id: JobId,

    pub title: String,

    pub company_name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub location: String,

    #[serde(default, deserialize_with = "stringly")]
    pub salary: String,

    /// Skill keywords; absent on older records.
    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

/// Job listing as the caller-facing layer consumes it: the wire record
/// with the field mapping the original listing view applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub salary: String,
    pub skills: Vec<String>,
    /// `created_at` rendered as a calendar date; empty when the backend
    /// omitted the timestamp.
    pub posted_date: String,
}

impl From<JobRecord> for Job {
    fn from(record: JobRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            company: record.company_name,
            description: record.description,
            location: record.location,
            salary: record.salary,
            skills: record.keywords,
            posted_date: record
                .created_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Payload for `POST /post-job`, validated before dispatch the way the
/// original posting form validated its fields.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct PostJobRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    pub qualification: String,

    pub experience: String,

    pub category: String,

    pub keywords: Vec<String>,

    #[validate(length(min = 1, message = "company name is required"))]
    pub company_name: String,

    pub salary: String,

    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,

    #[validate(email(message = "hirer email must be a valid address"))]
    pub hirer_emailid: String,
}

/// Body for `POST /generatedescription`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateDescriptionRequest {
    pub title: String,
    pub category: String,
    pub experience: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateDescriptionResponse {
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_record_accepts_both_id_spellings() {
        let listing = r#"{"id":"j1","title":"Dev","company_name":"Acme"}"#;
        let moderation = r#"{"_id":"j2","title":"Ops","company_name":"Acme"}"#;

        let a: JobRecord = serde_json::from_str(listing).unwrap();
        let b: JobRecord = serde_json::from_str(moderation).unwrap();
        assert_eq!(a.id.as_str(), "j1");
        assert_eq!(b.id.as_str(), "j2");
    }

    #[test]
    fn test_record_to_view_mapping() {
        let body = r#"{
            "id": "j1",
            "title": "Backend Engineer",
            "company_name": "Acme",
            "description": "Build things",
            "location": "Remote",
            "salary": "12 LPA",
            "keywords": ["rust", "sql"],
            "created_at": "2025-06-01T10:30:00Z"
        }"#;
        let record: JobRecord = serde_json::from_str(body).unwrap();
        let job = Job::from(record);

        assert_eq!(job.company, "Acme");
        assert_eq!(job.skills, vec!["rust", "sql"]);
        assert_eq!(job.posted_date, "2025-06-01");
    }

    #[test]
    fn test_missing_keywords_default_empty() {
        let body = r#"{"id":"j1","title":"Dev","company_name":"Acme"}"#;
        let record: JobRecord = serde_json::from_str(body).unwrap();
        assert!(record.keywords.is_empty());
        assert_eq!(Job::from(record).posted_date, "");
    }

    #[test]
    fn test_post_job_validation() {
        let valid = PostJobRequest {
            title: "Dev".into(),
            description: "desc".into(),
            qualification: String::new(),
            experience: "2 years".into(),
            category: "Engineering".into(),
            keywords: vec!["rust".into()],
            company_name: "Acme".into(),
            salary: "10 LPA".into(),
            location: "Remote".into(),
            hirer_emailid: "hirer@acme.com".into(),
        };
        assert!(valid.validate().is_ok());

        let mut invalid = valid.clone();
        invalid.title = String::new();
        invalid.hirer_emailid = "not-an-email".into();
        let errors = invalid.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
        assert!(errors.field_errors().contains_key("hirer_emailid"));
    }

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&JobStatus::Pending).unwrap(),
            "\"pending\""
        );
        let status: JobStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(status, JobStatus::Rejected);
    }
}
