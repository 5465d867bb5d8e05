//! Shared data models for the HireHub client.
//!
//! This crate provides Serde-serializable types for:
//! - Sessions and user roles
//! - Auth endpoint payloads
//! - Job listings, postings, and moderation state
//! - Applicant resumes and admin audit logs

pub mod admin;
pub mod auth;
pub mod job;
pub mod session;
mod utils;

// Re-export common types
pub use admin::{AdminLogEntry, LogsResponse, RejectJobRequest, ResumeEntry, ResumesResponse};
pub use auth::{
    ApiMessage, LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, RegisterRequest,
};
pub use job::{
    GenerateDescriptionRequest, GenerateDescriptionResponse, Job, JobId, JobRecord, JobStatus,
    PostJobRequest,
};
pub use session::{RoleParseError, Session, UserRole};
