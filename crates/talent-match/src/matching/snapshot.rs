use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::directory::{DirectoryError, TalentDirectory};
use super::domain::{Application, Job, JobId, Notification, Talent};

/// Point-in-time copy of the job-board records, as exported from the remote API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub jobs: Vec<Job>,
    pub talents: Vec<Talent>,
    pub applications: Vec<Application>,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("unable to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("snapshot is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Snapshot {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_reader(reader)?;
        snapshot.report_inconsistencies();
        Ok(snapshot)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            jobs = snapshot.jobs.len(),
            talents = snapshot.talents.len(),
            applications = snapshot.applications.len(),
            notifications = snapshot.notifications.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn find_job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    fn report_inconsistencies(&self) {
        for job in self.jobs.iter().filter(|job| !job.has_consistent_salary()) {
            warn!(
                job_id = %job.id,
                salary_min = ?job.salary_min,
                salary_max = ?job.salary_max,
                "job salary minimum exceeds maximum"
            );
        }
    }
}

impl TalentDirectory for Snapshot {
    fn job(&self, id: JobId) -> Result<Option<Job>, DirectoryError> {
        Ok(self.find_job(id).cloned())
    }

    fn talents(&self) -> Result<Vec<Talent>, DirectoryError> {
        Ok(self.talents.clone())
    }

    fn applications(&self) -> Result<Vec<Application>, DirectoryError> {
        Ok(self.applications.clone())
    }

    fn notifications(&self) -> Result<Vec<Notification>, DirectoryError> {
        Ok(self.notifications.clone())
    }
}
