use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::Talent;
use super::lenient::{self, normalize_term};

/// Languages always offered by the search panel, independent of the current pool.
pub const POPULAR_LANGUAGES: [&str; 5] = ["Uzbek", "English", "Russian", "Turkish", "German"];

/// Search predicates assembled by the talent browser.
///
/// Every field left empty (or sent as `null`) is inactive. Active predicates are combined
/// with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub occupation: String,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub speciality: String,
    #[serde(alias = "selectedSpecs", deserialize_with = "lenient::null_as_default")]
    pub selected_specs: Vec<String>,
    #[serde(alias = "selectedLangs", deserialize_with = "lenient::null_as_default")]
    pub selected_langs: Vec<String>,
    #[serde(alias = "skillsRows", deserialize_with = "lenient::null_as_default")]
    pub skills_rows: Vec<SkillRow>,
    #[serde(alias = "workType", deserialize_with = "lenient::null_as_default")]
    pub work_type: String,
    #[serde(alias = "workplaceType", deserialize_with = "lenient::null_as_default")]
    pub workplace_type: String,
    #[serde(alias = "salaryRange", deserialize_with = "lenient::null_as_default")]
    pub salary_range: SalaryRange,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub location: LocationFilter,
}

/// One "skill + minimum years" row. Rows with blank skill text are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillRow {
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub skill: String,
    #[serde(
        alias = "minExperience",
        alias = "experience",
        deserialize_with = "lenient::optional_years"
    )]
    pub min_experience: Option<u32>,
}

impl SkillRow {
    pub fn new(skill: impl Into<String>, min_experience: Option<u32>) -> Self {
        Self {
            skill: skill.into(),
            min_experience,
        }
    }
}

/// Bounds on the talent's expected minimum salary. Blank bounds are inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryRange {
    #[serde(deserialize_with = "lenient::optional_amount")]
    pub min: Option<f64>,
    #[serde(deserialize_with = "lenient::optional_amount")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationFilter {
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub city: String,
}

/// Predicate groups in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Occupation,
    Speciality,
    SelectedSpecs,
    SelectedLangs,
    SkillsRows,
    WorkType,
    WorkplaceType,
    SalaryMin,
    SalaryMax,
    Country,
    City,
}

enum Predicate<'q> {
    OccupationContains(String),
    SpecialtyContains(String),
    SpecialtyIn(&'q [String]),
    SpeaksAny(Vec<String>),
    SkillRows(Vec<(String, Option<u32>)>),
    WorkType(&'q str),
    WorkplaceType(&'q str),
    SalaryAtLeast(f64),
    SalaryAtMost(f64),
    CountryContains(String),
    CityContains(String),
}

impl Predicate<'_> {
    fn kind(&self) -> FilterKind {
        match self {
            Predicate::OccupationContains(_) => FilterKind::Occupation,
            Predicate::SpecialtyContains(_) => FilterKind::Speciality,
            Predicate::SpecialtyIn(_) => FilterKind::SelectedSpecs,
            Predicate::SpeaksAny(_) => FilterKind::SelectedLangs,
            Predicate::SkillRows(_) => FilterKind::SkillsRows,
            Predicate::WorkType(_) => FilterKind::WorkType,
            Predicate::WorkplaceType(_) => FilterKind::WorkplaceType,
            Predicate::SalaryAtLeast(_) => FilterKind::SalaryMin,
            Predicate::SalaryAtMost(_) => FilterKind::SalaryMax,
            Predicate::CountryContains(_) => FilterKind::Country,
            Predicate::CityContains(_) => FilterKind::City,
        }
    }

    fn accepts(&self, talent: &Talent) -> bool {
        match self {
            Predicate::OccupationContains(needle) => contains(&talent.occupation, needle),
            Predicate::SpecialtyContains(needle) => contains(&talent.specialty, needle),
            Predicate::SpecialtyIn(specs) => talent
                .specialty
                .as_deref()
                .is_some_and(|specialty| specs.iter().any(|spec| spec == specialty)),
            Predicate::SpeaksAny(languages) => talent
                .languages
                .iter()
                .any(|entry| languages.contains(&normalize_term(&entry.language))),
            Predicate::SkillRows(rows) => rows.iter().all(|(needle, min_years)| {
                talent.skills.iter().any(|entry| {
                    entry.skill.to_lowercase().contains(needle.as_str())
                        && min_years.map_or(true, |min| entry.experience_years >= min)
                })
            }),
            Predicate::WorkType(expected) => talent.work_type.as_deref() == Some(*expected),
            Predicate::WorkplaceType(expected) => {
                talent.workplace_type.as_deref() == Some(*expected)
            }
            Predicate::SalaryAtLeast(min) => talent.minimum_salary.unwrap_or(0.0) >= *min,
            Predicate::SalaryAtMost(max) => talent.minimum_salary.unwrap_or(0.0) <= *max,
            Predicate::CountryContains(needle) => contains(&talent.country, needle),
            Predicate::CityContains(needle) => contains(&talent.city, needle),
        }
    }
}

fn contains(field: &Option<String>, needle: &str) -> bool {
    field
        .as_deref()
        .is_some_and(|value| value.to_lowercase().contains(needle))
}

fn needle(raw: &str) -> Option<String> {
    let normalized = normalize_term(raw);
    (!normalized.is_empty()).then_some(normalized)
}

impl FilterQuery {
    fn predicates(&self) -> Vec<Predicate<'_>> {
        let mut predicates = Vec::new();

        if let Some(needle) = needle(&self.occupation) {
            predicates.push(Predicate::OccupationContains(needle));
        }
        if let Some(needle) = needle(&self.speciality) {
            predicates.push(Predicate::SpecialtyContains(needle));
        }
        if !self.selected_specs.is_empty() {
            predicates.push(Predicate::SpecialtyIn(&self.selected_specs));
        }
        let languages: Vec<String> = self
            .selected_langs
            .iter()
            .filter_map(|language| needle(language))
            .collect();
        if !languages.is_empty() {
            predicates.push(Predicate::SpeaksAny(languages));
        }
        let rows: Vec<(String, Option<u32>)> = self
            .skills_rows
            .iter()
            .filter_map(|row| needle(&row.skill).map(|skill| (skill, row.min_experience)))
            .collect();
        if !rows.is_empty() {
            predicates.push(Predicate::SkillRows(rows));
        }
        if !self.work_type.is_empty() {
            predicates.push(Predicate::WorkType(&self.work_type));
        }
        if !self.workplace_type.is_empty() {
            predicates.push(Predicate::WorkplaceType(&self.workplace_type));
        }
        if let Some(min) = self.salary_range.min {
            predicates.push(Predicate::SalaryAtLeast(min));
        }
        if let Some(max) = self.salary_range.max {
            predicates.push(Predicate::SalaryAtMost(max));
        }
        if let Some(needle) = needle(&self.location.country) {
            predicates.push(Predicate::CountryContains(needle));
        }
        if let Some(needle) = needle(&self.location.city) {
            predicates.push(Predicate::CityContains(needle));
        }

        predicates
    }

    /// Active predicate groups, in application order.
    pub fn active_filters(&self) -> Vec<FilterKind> {
        self.predicates().iter().map(Predicate::kind).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates().is_empty()
    }

    pub fn evaluate<'a>(&self, talent_pool: &'a [Talent]) -> Vec<&'a Talent> {
        evaluate(self, talent_pool)
    }

    /// Loads a saved query, in the same JSON shape the search endpoint accepts.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QueryFileError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| QueryFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| QueryFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QueryFileError {
    #[error("unable to read filter query {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("filter query {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Talents satisfying every active predicate of the query, in input order.
pub fn evaluate<'a>(query: &FilterQuery, talent_pool: &'a [Talent]) -> Vec<&'a Talent> {
    let predicates = query.predicates();
    let results: Vec<&Talent> = talent_pool
        .iter()
        .filter(|talent| predicates.iter().all(|predicate| predicate.accepts(talent)))
        .collect();

    debug!(
        pool = talent_pool.len(),
        active = predicates.len(),
        results = results.len(),
        "evaluated talent filter"
    );

    results
}

/// Option lists for the search panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TalentFacets {
    pub specialties: Vec<String>,
    pub languages: Vec<&'static str>,
}

/// Distinct non-blank specialties in first-seen order, plus the fixed language list.
pub fn talent_facets(talent_pool: &[Talent]) -> TalentFacets {
    let mut specialties: Vec<String> = Vec::new();
    for specialty in talent_pool
        .iter()
        .filter_map(|talent| talent.specialty.as_deref())
        .filter(|specialty| !specialty.trim().is_empty())
    {
        if !specialties.iter().any(|known| known == specialty) {
            specialties.push(specialty.to_string());
        }
    }

    TalentFacets {
        specialties,
        languages: POPULAR_LANGUAGES.to_vec(),
    }
}
