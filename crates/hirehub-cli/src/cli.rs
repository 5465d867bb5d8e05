//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use hirehub_models::{JobStatus, UserRole};

#[derive(Debug, Parser)]
#[command(name = "hirehub", about = "HireHub job board client", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Role tab to sign in from
        #[arg(long, value_enum)]
        role: Option<Role>,
    },
    /// Forget the stored session
    Logout,
    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, value_enum)]
        role: Role,
    },
    /// Browse and manage listings
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// Apply to a job with a resume
    Apply {
        job_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// PDF or DOC resume file
        #[arg(long)]
        resume: PathBuf,
    },
    /// Ask the assistant a question
    Chat {
        question: String,
        /// Attach a resume for context
        #[arg(long)]
        resume: Option<PathBuf>,
    },
    /// Moderation actions
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum JobsCommand {
    /// List approved postings
    List,
    /// Show one posting
    Show { job_id: String },
    /// Postings by the signed-in hirer
    Mine {
        /// Defaults to the session email
        #[arg(long)]
        email: Option<String>,
    },
    /// Post a new listing
    Post {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        company: String,
        #[arg(long)]
        location: String,
        #[arg(long, default_value = "")]
        salary: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        experience: String,
        #[arg(long, default_value = "")]
        qualification: String,
        #[arg(long = "keyword")]
        keywords: Vec<String>,
        /// Draft the description from title, category, and keywords
        #[arg(long, conflicts_with = "description")]
        generate_description: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Listings by moderation status
    List {
        #[arg(long, value_enum, default_value = "pending")]
        status: Status,
    },
    /// Approve a pending posting
    Approve { job_id: String },
    /// Reject a pending posting
    Reject {
        job_id: String,
        #[arg(long)]
        reason: String,
    },
    /// Resumes submitted against a job
    Resumes { job_id: String },
    /// Download a resume to a file
    Download {
        resume_url: String,
        #[arg(long, default_value = "resume.pdf")]
        out: PathBuf,
        /// Job to attribute the download to in the audit log
        #[arg(long)]
        job_id: Option<String>,
    },
    /// Audit log for a job
    Logs { job_id: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Role {
    Seeker,
    Hirer,
    Admin,
}

impl From<Role> for UserRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Seeker => UserRole::Seeker,
            Role::Hirer => UserRole::Hirer,
            Role::Admin => UserRole::Admin,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Status {
    Pending,
    Approved,
    Rejected,
}

impl From<Status> for JobStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Pending => JobStatus::Pending,
            Status::Approved => JobStatus::Approved,
            Status::Rejected => JobStatus::Rejected,
        }
    }
}
