use super::domain::{Application, Job, JobId, Notification, Talent};

/// Read access to the job-board records the evaluators run against.
///
/// Implementations hand out snapshots; nothing here mutates jobs, talents or applications.
pub trait TalentDirectory: Send + Sync {
    fn job(&self, id: JobId) -> Result<Option<Job>, DirectoryError>;
    fn talents(&self) -> Result<Vec<Talent>, DirectoryError>;
    fn applications(&self) -> Result<Vec<Application>, DirectoryError>;
    fn notifications(&self) -> Result<Vec<Notification>, DirectoryError>;
}

/// Error enumeration for directory failures.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}
