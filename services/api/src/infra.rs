use chrono::{TimeZone, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use talent_match::matching::{Snapshot, SnapshotError};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the configured snapshot, or an empty directory when none is configured.
pub(crate) fn load_snapshot(path: Option<&Path>) -> Result<Snapshot, SnapshotError> {
    match path {
        Some(path) => Snapshot::from_path(path),
        None => {
            warn!("no snapshot configured; serving an empty talent directory");
            Ok(Snapshot::default())
        }
    }
}

/// Small job board used by `demo`, in the remote API's wire format.
pub(crate) fn sample_snapshot() -> Result<Snapshot, SnapshotError> {
    let posted = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).single();
    let replied = Utc.with_ymd_and_hms(2025, 3, 4, 16, 30, 0).single();
    let viewed = Utc.with_ymd_and_hms(2025, 3, 2, 11, 0, 0).single();

    let raw = json!({
        "jobs": [
            {
                "id": 10,
                "company_id": 7,
                "occupation": "Product Designer",
                "specialty": "UX",
                "location": "Tashkent",
                "salary_min": 800,
                "salary_max": 1500,
                "skils": "Figma, Sketch",
                "workplace_type": "Remote",
                "job_type": "Full-time",
                "createdAt": posted.map(|at| at.to_rfc3339()),
            },
            {
                "id": 11,
                "company_id": 7,
                "occupation": "Backend Engineer",
                "specialty": "Backend",
                "skils": ["Go", "PostgreSQL"],
                "workplace_type": "Hybrid",
                "job_type": "Contract",
            }
        ],
        "talents": [
            {
                "id": 1,
                "first_name": "Dilnoza",
                "last_name": "Karimova",
                "occupation": "Designer",
                "specialty": "UX",
                "skils": "[{\"skill\":\"Figma\",\"experience_years\":4}]",
                "language": "[{\"language\":\"Uzbek\",\"level\":\"native\"},{\"language\":\"English\",\"level\":\"B2\"}]",
                "city": "Tashkent",
                "country": "Uzbekistan",
                "minimum_salary": 900,
                "work_type": "fulltime",
                "workplace_type": "remote",
            },
            {
                "id": 2,
                "first_name": "Aziz",
                "last_name": "Tursunov",
                "occupation": "Engineer",
                "specialty": "Backend",
                "skils": [{ "skill": "Go", "experience_years": 5 }],
                "language": [{ "language": "Russian" }],
                "city": "Samarkand",
                "country": "Uzbekistan",
                "minimum_salary": "1200",
                "work_type": "contract",
                "workplace_type": "hybrid",
            },
            {
                "id": 3,
                "first_name": "Laylo",
                "last_name": "Rashidova",
                "occupation": "Designer",
                "specialty": "UI",
                "skils": [{ "skill": "Sketch", "experience_years": 2 }],
                "language": [{ "language": "Turkish" }],
                "country": "Turkey",
                "work_type": "parttime",
            }
        ],
        "applications": [
            { "id": 1, "job_id": 10, "talent_id": 3, "status": "pending" }
        ],
        "notifications": [
            {
                "id": 1,
                "company_id": 7,
                "talent_id": 3,
                "job_id": 10,
                "title": "New application",
                "message": "Laylo Rashidova applied to Product Designer",
                "type": "application",
                "is_read": true,
                "createdAt": viewed.map(|at| at.to_rfc3339()),
            },
            {
                "id": 2,
                "company_id": 7,
                "talent_id": 1,
                "job_id": 10,
                "title": "Invitation answered",
                "message": "Dilnoza Karimova replied to your invitation",
                "type": "invitation",
                "is_read": false,
                "createdAt": replied.map(|at| at.to_rfc3339()),
            }
        ]
    });

    Ok(serde_json::from_value(raw)?)
}
