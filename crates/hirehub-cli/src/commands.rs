//! Command execution.

use std::path::Path;

use anyhow::{bail, Context};
use chrono::Utc;
use tracing::warn;

use hirehub_client::{ApiClient, ResumeFile};
use hirehub_models::{
    AdminLogEntry, GenerateDescriptionRequest, Job, JobId, PostJobRequest,
};

use crate::cli::{AdminCommand, Commands, JobsCommand};

pub async fn run(client: &ApiClient, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Login {
            email,
            password,
            role,
        } => {
            let session = client
                .login(&email, &password, role.map(Into::into))
                .await?;
            let role = session
                .role
                .map(|r| r.to_string())
                .unwrap_or_else(|| "unknown".into());
            println!("Logged in as {} ({role})", session.email.unwrap_or(email));
        }
        Commands::Logout => {
            client.logout();
            println!("Logged out");
        }
        Commands::Register {
            name,
            email,
            password,
            role,
        } => {
            let message = client
                .register(&name, &email, &password, role.into())
                .await?;
            println!("{message}");
        }
        Commands::Jobs { command } => jobs(client, command).await?,
        Commands::Apply {
            job_id,
            name,
            email,
            resume,
        } => {
            let file = read_resume(&resume)?;
            let message = client
                .upload_resume(&JobId::from(job_id.as_str()), &name, &email, file)
                .await?;
            println!("{message}");
        }
        Commands::Chat { question, resume } => {
            let reply = match resume {
                Some(path) => client.chat_with_resume(&question, read_resume(&path)?).await?,
                None => client.chat(&question).await?,
            };
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
        Commands::Admin { command } => admin(client, command).await?,
    }
    Ok(())
}

async fn jobs(client: &ApiClient, command: JobsCommand) -> anyhow::Result<()> {
    match command {
        JobsCommand::List => {
            for job in client.fetch_jobs().await? {
                print_summary(&job);
            }
        }
        JobsCommand::Show { job_id } => {
            let job = client.fetch_job(&JobId::from(job_id.as_str())).await?;
            print_summary(&job);
            println!("  skills: {}", job.skills.join(", "));
            println!("{}", job.description);
        }
        JobsCommand::Mine { email } => {
            let email = match email.or(client.session().session().email) {
                Some(email) => email,
                None => bail!("not logged in; pass --email or log in first"),
            };
            for job in client.fetch_hirer_jobs(&email).await? {
                print_summary(&job);
            }
        }
        JobsCommand::Post {
            title,
            description,
            company,
            location,
            salary,
            category,
            experience,
            qualification,
            keywords,
            generate_description,
        } => {
            let hirer_emailid = client
                .session()
                .session()
                .email
                .context("not logged in; log in as a hirer first")?;

            let description = if generate_description {
                client
                    .generate_description(&GenerateDescriptionRequest {
                        title: title.clone(),
                        category: category.clone(),
                        experience: experience.clone(),
                        keywords: keywords.clone(),
                    })
                    .await?
            } else {
                description.context("--description or --generate-description is required")?
            };

            let message = client
                .post_job(&PostJobRequest {
                    title,
                    description,
                    qualification,
                    experience,
                    category,
                    keywords,
                    company_name: company,
                    salary,
                    location,
                    hirer_emailid,
                })
                .await?;
            println!("{message}");
        }
    }
    Ok(())
}

async fn admin(client: &ApiClient, command: AdminCommand) -> anyhow::Result<()> {
    match command {
        AdminCommand::List { status } => {
            for record in client.admin_jobs(status.into()).await? {
                let status = record.status.map(|s| s.to_string()).unwrap_or_default();
                println!("{}  {}  [{status}]", record.id, record.title);
            }
        }
        AdminCommand::Approve { job_id } => {
            client.approve_job(&JobId::from(job_id.as_str())).await?;
            println!("Job approved successfully.");
        }
        AdminCommand::Reject { job_id, reason } => {
            client
                .reject_job(&JobId::from(job_id.as_str()), &reason)
                .await?;
            println!("Job rejected successfully.");
        }
        AdminCommand::Resumes { job_id } => {
            let id = JobId::from(job_id.as_str());
            for resume in client.job_resumes(&id).await? {
                println!("{} ({})  {}", resume.name, resume.email, resume.resume_url);
            }
            record_action(client, &id, "Viewed Resumes").await;
        }
        AdminCommand::Download {
            resume_url,
            out,
            job_id,
        } => {
            let bytes = client.download_resume(&resume_url).await?;
            std::fs::write(&out, &bytes)
                .with_context(|| format!("writing {}", out.display()))?;
            println!("Wrote {} bytes to {}", bytes.len(), out.display());
            if let Some(job_id) = job_id {
                record_action(client, &JobId::from(job_id.as_str()), "Downloaded Resume").await;
            }
        }
        AdminCommand::Logs { job_id } => {
            for entry in client.job_logs(&JobId::from(job_id.as_str())).await? {
                println!(
                    "{}  {} by {}",
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    entry.action,
                    entry.admin_email
                );
            }
        }
    }
    Ok(())
}

/// Audit-log an admin action. Best-effort: a logging failure never fails
/// the action it describes.
async fn record_action(client: &ApiClient, job_id: &JobId, action: &str) {
    let admin_email = client
        .session()
        .session()
        .email
        .unwrap_or_else(|| client.config().admin_email.clone());
    let job_title = match client.fetch_job(job_id).await {
        Ok(job) => job.title,
        Err(_) => job_id.to_string(),
    };

    let entry = AdminLogEntry {
        admin_email,
        job_id: job_id.clone(),
        job_title,
        action: action.to_string(),
        timestamp: Utc::now(),
    };
    if let Err(e) = client.record_action(&entry).await {
        warn!(error = %e, "failed to record admin action");
    }
}

fn print_summary(job: &Job) {
    println!(
        "{}  {} @ {}  {}  {}  {}",
        job.id, job.title, job.company, job.location, job.salary, job.posted_date
    );
}

fn read_resume(path: &Path) -> anyhow::Result<ResumeFile> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    let mime = match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => bail!("resume must be a PDF or DOC file"),
    };

    let bytes =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume.pdf")
        .to_string();
    Ok(ResumeFile::new(filename, mime, bytes))
}
