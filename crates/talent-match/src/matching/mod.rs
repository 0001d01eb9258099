//! Talent matching and search filter evaluation for the company portal.
//!
//! `compute_matches` and `evaluate` are pure functions over borrowed snapshots. The service and
//! router layers only fetch those snapshots from a [`TalentDirectory`] and shape responses.

pub mod directory;
pub mod domain;
pub mod filter;
pub mod inbox;
pub mod lenient;
pub mod matcher;
pub mod router;
pub mod service;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use directory::{DirectoryError, TalentDirectory};
pub use domain::{
    Application, ApplicationId, ApplicationStatus, CompanyId, Job, JobId, JobType, LanguageEntry,
    Notification, NotificationId, RequiredSkills, SkillEntry, Talent, TalentId, WorkplaceType,
};
pub use filter::{
    evaluate, talent_facets, FilterKind, FilterQuery, LocationFilter, QueryFileError, SalaryRange,
    SkillRow, TalentFacets, POPULAR_LANGUAGES,
};
pub use inbox::{company_inbox, Inbox};
pub use matcher::{active_applications, compute_matches, matched_skills};
pub use router::matching_router;
pub use service::{
    CompanyInbox, JobMatches, MatchedTalent, MatchingService, MatchingServiceError, SearchResults,
};
pub use snapshot::{Snapshot, SnapshotError};
