use std::collections::HashSet;

use tracing::debug;

use super::domain::{Application, Job, JobId, Talent, TalentId};
use super::lenient::normalize_term;

/// Talents whose declared skills overlap the job's required skills.
///
/// Talents already engaged with the job through a pending or accepted application are left
/// out, as is everyone when the job lists no skills. Input order is preserved.
pub fn compute_matches<'a>(
    job: &Job,
    talent_pool: &'a [Talent],
    applications: &[Application],
) -> Vec<&'a Talent> {
    let required = job.skills.normalized();
    if required.is_empty() {
        debug!(job_id = %job.id, "job lists no skills; no matches");
        return Vec::new();
    }

    let engaged: HashSet<TalentId> = active_applications(job.id, applications)
        .into_iter()
        .map(|application| application.talent_id)
        .collect();

    let matches: Vec<&Talent> = talent_pool
        .iter()
        .filter(|talent| !engaged.contains(&talent.id))
        .filter(|talent| {
            talent
                .normalized_skills()
                .any(|skill| required.contains(&skill))
        })
        .collect();

    debug!(
        job_id = %job.id,
        pool = talent_pool.len(),
        engaged = engaged.len(),
        matches = matches.len(),
        "computed job matches"
    );

    matches
}

/// Applications for the job that have not been rejected, in input order.
pub fn active_applications(job_id: JobId, applications: &[Application]) -> Vec<&Application> {
    applications
        .iter()
        .filter(|application| application.job_id == job_id && !application.status.is_rejected())
        .collect()
}

/// The talent's skill names (original spelling) that the job asks for.
pub fn matched_skills<'a>(job: &Job, talent: &'a Talent) -> Vec<&'a str> {
    let required = job.skills.normalized();
    let mut seen = HashSet::new();
    talent
        .skills
        .iter()
        .filter(|entry| {
            let normalized = normalize_term(&entry.skill);
            required.contains(&normalized) && seen.insert(normalized)
        })
        .map(|entry| entry.skill.as_str())
        .collect()
}
