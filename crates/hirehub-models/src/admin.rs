//! Moderation and audit-log models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::job::JobId;

/// One applicant resume attached to a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeEntry {
    pub name: String,
    pub email: String,
    pub resume_url: String,
}

/// `GET /resumes/{jobId}` envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumesResponse {
    #[serde(default)]
    pub resumes: Vec<ResumeEntry>,
}

/// Audit log entry for an admin action. Wire field names are the
/// backend's camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLogEntry {
    pub admin_email: String,
    pub job_id: JobId,
    pub job_title: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

/// `GET /admin/logs` envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogsResponse {
    #[serde(default)]
    pub logs: Vec<AdminLogEntry>,
}

/// Body for `POST /reject_job/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct RejectJobRequest {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_log_entry_camel_case_wire() {
        let entry = AdminLogEntry {
            admin_email: "admin@hirehub.com".into(),
            job_id: "j1".into(),
            job_title: "Dev".into(),
            action: "Viewed Resumes".into(),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["adminEmail"], "admin@hirehub.com");
        assert_eq!(value["jobId"], "j1");
        assert_eq!(value["jobTitle"], "Dev");
    }

    #[test]
    fn test_empty_envelopes_default() {
        let resumes: ResumesResponse = serde_json::from_str("{}").unwrap();
        assert!(resumes.resumes.is_empty());

        let logs: LogsResponse = serde_json::from_str("{}").unwrap();
        assert!(logs.logs.is_empty());
    }
}
