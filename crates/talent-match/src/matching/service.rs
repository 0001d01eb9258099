use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::directory::{DirectoryError, TalentDirectory};
use super::domain::{Application, CompanyId, JobId, Notification, Talent};
use super::filter::{self, FilterKind, FilterQuery, TalentFacets};
use super::inbox::company_inbox;
use super::matcher::{active_applications, compute_matches, matched_skills};

/// Service composing the directory with the matcher and filter evaluators.
pub struct MatchingService<D> {
    directory: Arc<D>,
}

impl<D> MatchingService<D>
where
    D: TalentDirectory + 'static,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// "All Matches" for one job.
    pub fn matches_for_job(&self, job_id: JobId) -> Result<JobMatches, MatchingServiceError> {
        let job = self
            .directory
            .job(job_id)?
            .ok_or(MatchingServiceError::JobNotFound(job_id))?;
        let talents = self.directory.talents()?;
        let applications = self.directory.applications()?;

        let matches: Vec<MatchedTalent> = compute_matches(&job, &talents, &applications)
            .into_iter()
            .map(|talent| MatchedTalent {
                matched_skills: matched_skills(&job, talent)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                talent: talent.clone(),
            })
            .collect();

        info!(%job_id, matches = matches.len(), "served job matches");

        Ok(JobMatches {
            job_id,
            required_skills: job.skills.as_slice().to_vec(),
            total: matches.len(),
            matches,
        })
    }

    /// Advanced talent search over the whole directory.
    pub fn search(&self, query: &FilterQuery) -> Result<SearchResults, MatchingServiceError> {
        let talents = self.directory.talents()?;
        let active_filters = query.active_filters();
        let results: Vec<Talent> = filter::evaluate(query, &talents)
            .into_iter()
            .cloned()
            .collect();

        info!(
            filters = active_filters.len(),
            results = results.len(),
            "served talent search"
        );

        Ok(SearchResults {
            active_filters,
            total: results.len(),
            talents: results,
        })
    }

    /// The job's "Applications" tab: everything not rejected.
    pub fn applications_for_job(
        &self,
        job_id: JobId,
    ) -> Result<Vec<Application>, MatchingServiceError> {
        if self.directory.job(job_id)?.is_none() {
            return Err(MatchingServiceError::JobNotFound(job_id));
        }
        let applications = self.directory.applications()?;
        Ok(active_applications(job_id, &applications)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn inbox(&self, company_id: CompanyId) -> Result<CompanyInbox, MatchingServiceError> {
        let notifications = self.directory.notifications()?;
        let inbox = company_inbox(company_id, &notifications);
        Ok(CompanyInbox {
            company_id,
            unread_count: inbox.unread_count(),
            unread: inbox.unread.into_iter().cloned().collect(),
            read: inbox.read.into_iter().cloned().collect(),
        })
    }

    pub fn facets(&self) -> Result<TalentFacets, MatchingServiceError> {
        let talents = self.directory.talents()?;
        Ok(filter::talent_facets(&talents))
    }
}

/// A matched talent together with the overlapping skills that made it a match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedTalent {
    pub talent: Talent,
    pub matched_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobMatches {
    pub job_id: JobId,
    pub required_skills: Vec<String>,
    pub total: usize,
    pub matches: Vec<MatchedTalent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub active_filters: Vec<FilterKind>,
    pub total: usize,
    pub talents: Vec<Talent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyInbox {
    pub company_id: CompanyId,
    pub unread_count: usize,
    pub unread: Vec<Notification>,
    pub read: Vec<Notification>,
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum MatchingServiceError {
    #[error("job {0} not found")]
    JobNotFound(JobId),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
