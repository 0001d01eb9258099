use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient::{self, normalize_term};

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(#[serde(deserialize_with = "lenient::identifier")] pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

identifier!(
    /// Identifier of a job posting.
    JobId
);
identifier!(
    /// Identifier of a talent profile.
    TalentId
);
identifier!(
    /// Identifier of an application or invitation.
    ApplicationId
);
identifier!(
    /// Identifier of the company owning jobs and notifications.
    CompanyId
);
identifier!(NotificationId);

/// A job posting as published by a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    #[serde(default)]
    pub company_id: Option<CompanyId>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub occupation: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub specialty: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_amount")]
    pub salary_min: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_amount")]
    pub salary_max: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub description: Option<String>,
    #[serde(rename = "skils", alias = "skills", default)]
    pub skills: RequiredSkills,
    #[serde(default)]
    pub workplace_type: WorkplaceType,
    #[serde(default)]
    pub job_type: JobType,
    #[serde(
        rename = "createdAt",
        alias = "created_at",
        default,
        deserialize_with = "lenient::timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Job {
    /// False when both salary bounds are present and the minimum exceeds the maximum.
    pub fn has_consistent_salary(&self) -> bool {
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }
}

/// Skills a job requires, normalized to trimmed, non-empty names.
///
/// The API sends either `"React, Figma"` or `["React", "Figma"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredSkills(#[serde(deserialize_with = "lenient::required_skills")] Vec<String>);

impl RequiredSkills {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            skills
                .into_iter()
                .map(|skill| skill.as_ref().trim().to_string())
                .filter(|skill| !skill.is_empty())
                .collect(),
        )
    }

    pub fn from_comma_list(raw: &str) -> Self {
        Self(lenient::split_skill_list(raw))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lower-cased, trimmed skill names used for overlap checks.
    pub fn normalized(&self) -> HashSet<String> {
        self.0.iter().map(|skill| normalize_term(skill)).collect()
    }

    /// Comma separated form used by job edit forms.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

/// Where the work happens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum WorkplaceType {
    #[default]
    Remote,
    Onsite,
    Hybrid,
}

impl WorkplaceType {
    pub fn parse(raw: &str) -> Option<Self> {
        match compact_label(raw).as_str() {
            "remote" => Some(Self::Remote),
            "onsite" => Some(Self::Onsite),
            "hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }
}

/// Contract shape of a job posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Freelance,
}

impl JobType {
    pub fn parse(raw: &str) -> Option<Self> {
        match compact_label(raw).as_str() {
            "fulltime" => Some(Self::FullTime),
            "parttime" => Some(Self::PartTime),
            "contract" => Some(Self::Contract),
            "freelance" => Some(Self::Freelance),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for WorkplaceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().and_then(Self::parse).unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for JobType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().and_then(Self::parse).unwrap_or_default())
    }
}

fn compact_label(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !matches!(ch, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A talent profile as listed in the talent directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talent {
    pub id: TalentId,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub occupation: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub specialty: Option<String>,
    #[serde(
        rename = "skils",
        alias = "skills",
        default,
        deserialize_with = "lenient::skill_entries"
    )]
    pub skills: Vec<SkillEntry>,
    #[serde(
        rename = "language",
        alias = "languages",
        default,
        deserialize_with = "lenient::language_entries"
    )]
    pub languages: Vec<LanguageEntry>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_amount")]
    pub minimum_salary: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub work_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub workplace_type: Option<String>,
    #[serde(
        default,
        alias = "image",
        alias = "profileimg_url",
        deserialize_with = "lenient::optional_text"
    )]
    pub profile_image: Option<String>,
}

impl Talent {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Upper-cased first letters of first and last name, `?` when both are blank.
    pub fn initials(&self) -> String {
        let initials: String = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|name| name.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }

    pub fn normalized_skills(&self) -> impl Iterator<Item = String> + '_ {
        self.skills.iter().map(|entry| normalize_term(&entry.skill))
    }
}

/// One declared skill with the years of experience behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub skill: String,
    pub experience_years: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// Link between a talent and a job, created by an application or an invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub talent_id: TalentId,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(
        default,
        alias = "resume",
        alias = "cv_url",
        deserialize_with = "lenient::optional_text"
    )]
    pub resume_url: Option<String>,
    #[serde(
        rename = "createdAt",
        alias = "created_at",
        default,
        deserialize_with = "lenient::timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// Progress of an application. Anything that is not an explicit rejection still engages the
/// talent with the job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn is_rejected(self) -> bool {
        matches!(self, ApplicationStatus::Rejected)
    }
}

impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let status = match value.as_str().map(normalize_term).as_deref() {
            Some("accepted") => ApplicationStatus::Accepted,
            Some("rejected") => ApplicationStatus::Rejected,
            _ => ApplicationStatus::Pending,
        };
        Ok(status)
    }
}

/// Message addressed to a company, e.g. a talent responding to an invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(default)]
    pub company_id: Option<CompanyId>,
    #[serde(default)]
    pub talent_id: Option<TalentId>,
    #[serde(default)]
    pub job_id: Option<JobId>,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub message: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::optional_text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_read: bool,
    #[serde(
        rename = "createdAt",
        alias = "created_at",
        default,
        deserialize_with = "lenient::timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
}
