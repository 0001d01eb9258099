use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::matching::directory::{DirectoryError, TalentDirectory};
use crate::matching::domain::{
    Application, ApplicationId, ApplicationStatus, CompanyId, Job, JobId, JobType, LanguageEntry,
    Notification, NotificationId, RequiredSkills, SkillEntry, Talent, TalentId, WorkplaceType,
};
use crate::matching::snapshot::Snapshot;

pub(super) fn talent(id: u64, specialty: &str, skills: &[(&str, u32)]) -> Talent {
    Talent {
        id: TalentId(id),
        first_name: format!("Talent{id}"),
        last_name: "Sample".to_string(),
        occupation: None,
        specialty: Some(specialty.to_string()),
        skills: skills
            .iter()
            .map(|(skill, years)| SkillEntry {
                skill: skill.to_string(),
                experience_years: *years,
            })
            .collect(),
        languages: Vec::new(),
        city: None,
        country: None,
        minimum_salary: None,
        work_type: None,
        workplace_type: None,
        profile_image: None,
    }
}

pub(super) fn with_languages(mut talent: Talent, languages: &[&str]) -> Talent {
    talent.languages = languages
        .iter()
        .map(|language| LanguageEntry {
            language: language.to_string(),
            level: None,
        })
        .collect();
    talent
}

pub(super) fn job(id: u64, skills: &str) -> Job {
    Job {
        id: JobId(id),
        company_id: Some(CompanyId(7)),
        occupation: Some("Product Designer".to_string()),
        specialty: Some("UX".to_string()),
        location: Some("Tashkent".to_string()),
        salary_min: Some(800.0),
        salary_max: Some(1500.0),
        description: None,
        skills: RequiredSkills::from_comma_list(skills),
        workplace_type: WorkplaceType::Remote,
        job_type: JobType::FullTime,
        created_at: None,
    }
}

pub(super) fn application(
    id: u64,
    job_id: u64,
    talent_id: u64,
    status: ApplicationStatus,
) -> Application {
    Application {
        id: ApplicationId(id),
        job_id: JobId(job_id),
        talent_id: TalentId(talent_id),
        status,
        resume_url: None,
        created_at: None,
    }
}

pub(super) fn notification(id: u64, company_id: u64, day: u32, is_read: bool) -> Notification {
    Notification {
        id: NotificationId(id),
        company_id: Some(CompanyId(company_id)),
        talent_id: Some(TalentId(1)),
        job_id: None,
        title: format!("Notification {id}"),
        message: "Talent accepted your invitation".to_string(),
        kind: Some("invitation".to_string()),
        is_read,
        created_at: Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0).single(),
    }
}

/// The two-talent pool used throughout the scenarios: a UX designer and a Go developer.
pub(super) fn sample_pool() -> Vec<Talent> {
    vec![
        talent(1, "UX", &[("Figma", 4)]),
        talent(2, "Backend", &[("Go", 5)]),
    ]
}

pub(super) fn sample_snapshot() -> Snapshot {
    Snapshot {
        jobs: vec![job(10, "Figma, Sketch"), job(11, "")],
        talents: sample_pool(),
        applications: Vec::new(),
        notifications: vec![
            notification(1, 7, 1, true),
            notification(2, 7, 3, false),
            notification(3, 8, 2, false),
        ],
    }
}

pub(super) fn ids(talents: &[&Talent]) -> Vec<u64> {
    talents.iter().map(|talent| talent.id.0).collect()
}

pub(super) struct UnavailableDirectory;

impl TalentDirectory for UnavailableDirectory {
    fn job(&self, _id: JobId) -> Result<Option<Job>, DirectoryError> {
        Err(DirectoryError::Unavailable("api offline".to_string()))
    }

    fn talents(&self) -> Result<Vec<Talent>, DirectoryError> {
        Err(DirectoryError::Unavailable("api offline".to_string()))
    }

    fn applications(&self) -> Result<Vec<Application>, DirectoryError> {
        Err(DirectoryError::Unavailable("api offline".to_string()))
    }

    fn notifications(&self) -> Result<Vec<Notification>, DirectoryError> {
        Err(DirectoryError::Unavailable("api offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
