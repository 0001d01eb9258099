use crate::infra::sample_snapshot;
use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use talent_match::error::AppError;
use talent_match::matching::{
    CompanyId, CompanyInbox, FilterQuery, JobId, JobMatches, MatchingService, SearchResults,
    Snapshot, Talent,
};

#[derive(Args, Debug)]
pub(crate) struct MatchesArgs {
    /// Snapshot JSON exported from the job board
    #[arg(long)]
    pub(crate) snapshot: PathBuf,
    /// Job to match talents against
    #[arg(long)]
    pub(crate) job: u64,
}

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Snapshot JSON exported from the job board
    #[arg(long)]
    pub(crate) snapshot: PathBuf,
    /// Filter query JSON, as posted to /api/v1/talents/search
    #[arg(long)]
    pub(crate) query: PathBuf,
}

pub(crate) fn run_matches(args: MatchesArgs) -> Result<(), AppError> {
    let service = MatchingService::new(Arc::new(Snapshot::from_path(&args.snapshot)?));
    let matches = service.matches_for_job(JobId(args.job))?;
    print!("{}", render_matches(&matches));
    Ok(())
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let query = FilterQuery::from_path(&args.query)?;
    let service = MatchingService::new(Arc::new(Snapshot::from_path(&args.snapshot)?));
    let results = service.search(&query)?;
    print!("{}", render_search(&results));
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let service = MatchingService::new(Arc::new(sample_snapshot()?));

    println!("Talent matching demo");
    for job_id in [JobId(10), JobId(11)] {
        println!();
        print!("{}", render_matches(&service.matches_for_job(job_id)?));
    }

    let backend_only = FilterQuery {
        selected_specs: vec!["Backend".to_string()],
        ..FilterQuery::default()
    };
    println!("\nSearch: selected specialties = Backend");
    print!("{}", render_search(&service.search(&backend_only)?));

    let designers = FilterQuery {
        occupation: "designer".to_string(),
        selected_langs: vec!["English".to_string()],
        ..FilterQuery::default()
    };
    println!("\nSearch: occupation ~ designer, speaks English");
    print!("{}", render_search(&service.search(&designers)?));

    let facets = service.facets()?;
    println!(
        "\nSpecialties: {} | Languages: {}",
        facets.specialties.join(", "),
        facets.languages.join(", ")
    );

    println!();
    print!("{}", render_inbox(&service.inbox(CompanyId(7))?));
    Ok(())
}

fn talent_line(talent: &Talent) -> String {
    format!(
        "[{}] {} ({}) - {}",
        talent.id,
        talent.display_name(),
        talent.initials(),
        talent.specialty.as_deref().unwrap_or("no specialty")
    )
}

pub(crate) fn render_matches(matches: &JobMatches) -> String {
    let mut out = String::new();
    let required = if matches.required_skills.is_empty() {
        "none".to_string()
    } else {
        matches.required_skills.join(", ")
    };
    let _ = writeln!(out, "Job {} requires: {}", matches.job_id, required);
    if matches.matches.is_empty() {
        let _ = writeln!(out, "- no matching talents");
    }
    for matched in &matches.matches {
        let _ = writeln!(
            out,
            "- {} | matched: {}",
            talent_line(&matched.talent),
            matched.matched_skills.join(", ")
        );
    }
    out
}

pub(crate) fn render_search(results: &SearchResults) -> String {
    let mut out = String::new();
    let filters: Vec<String> = results
        .active_filters
        .iter()
        .map(|kind| format!("{kind:?}"))
        .collect();
    let _ = writeln!(
        out,
        "{} talent(s), active filters: {}",
        results.total,
        if filters.is_empty() {
            "none".to_string()
        } else {
            filters.join(", ")
        }
    );
    for talent in &results.talents {
        let _ = writeln!(out, "- {}", talent_line(talent));
    }
    out
}

pub(crate) fn render_inbox(inbox: &CompanyInbox) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Company {} inbox: {} unread",
        inbox.company_id, inbox.unread_count
    );
    for (marker, notification) in inbox
        .unread
        .iter()
        .map(|n| ("*", n))
        .chain(inbox.read.iter().map(|n| (" ", n)))
    {
        let _ = writeln!(
            out,
            "{marker} {} - {}",
            notification.title, notification.message
        );
    }
    out
}
