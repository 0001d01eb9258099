use super::common::*;
use crate::matching::domain::Talent;
use crate::matching::filter::{
    evaluate, talent_facets, FilterKind, FilterQuery, LocationFilter, SalaryRange, SkillRow,
    POPULAR_LANGUAGES,
};

fn designer(id: u64, work_type: &str) -> Talent {
    let mut talent = talent(id, "Product", &[("Figma", 4)]);
    talent.occupation = Some("Senior Designer".to_string());
    talent.work_type = Some(work_type.to_string());
    talent
}

#[test]
fn default_query_returns_the_pool_unchanged() {
    let pool = sample_pool();
    let query = FilterQuery::default();

    let results = evaluate(&query, &pool);

    assert!(query.is_empty());
    assert_eq!(results.len(), pool.len());
    assert!(results.iter().zip(&pool).all(|(left, right)| *left == right));
}

#[test]
fn selected_specialties_use_exact_membership() {
    let pool = sample_pool();
    let query = FilterQuery {
        selected_specs: vec!["Backend".to_string()],
        ..FilterQuery::default()
    };

    assert_eq!(ids(&evaluate(&query, &pool)), vec![2]);

    let lowercase = FilterQuery {
        selected_specs: vec!["backend".to_string()],
        ..FilterQuery::default()
    };
    assert!(evaluate(&lowercase, &pool).is_empty());
}

#[test]
fn predicates_compose_with_and() {
    let mut wrong_job = talent(3, "Product", &[]);
    wrong_job.occupation = Some("Developer".to_string());
    wrong_job.work_type = Some("fulltime".to_string());
    let pool = vec![designer(1, "fulltime"), designer(2, "parttime"), wrong_job];
    let query = FilterQuery {
        occupation: "Designer".to_string(),
        work_type: "fulltime".to_string(),
        ..FilterQuery::default()
    };

    assert_eq!(ids(&evaluate(&query, &pool)), vec![1]);
    assert_eq!(
        query.active_filters(),
        vec![FilterKind::Occupation, FilterKind::WorkType]
    );
}

#[test]
fn text_predicates_are_case_insensitive_substrings() {
    let mut talent = designer(1, "fulltime");
    talent.country = Some("Uzbekistan".to_string());
    talent.city = Some("Tashkent".to_string());
    let pool = vec![talent];
    let query = FilterQuery {
        occupation: "designer".to_string(),
        speciality: "PROD".to_string(),
        location: LocationFilter {
            country: "uzbek".to_string(),
            city: "kent".to_string(),
        },
        ..FilterQuery::default()
    };

    assert_eq!(ids(&evaluate(&query, &pool)), vec![1]);
}

#[test]
fn missing_text_fields_fail_active_substring_predicates() {
    let pool = vec![talent(1, "UX", &[])];
    let query = FilterQuery {
        location: LocationFilter {
            country: "Uz".to_string(),
            city: String::new(),
        },
        ..FilterQuery::default()
    };

    assert!(evaluate(&query, &pool).is_empty());
}

#[test]
fn language_selection_matches_any_case_insensitively() {
    let pool = vec![
        with_languages(talent(1, "UX", &[]), &["english", "Uzbek"]),
        with_languages(talent(2, "UX", &[]), &["German"]),
        talent(3, "UX", &[]),
    ];
    let query = FilterQuery {
        selected_langs: vec!["English".to_string(), "Russian".to_string()],
        ..FilterQuery::default()
    };

    assert_eq!(ids(&evaluate(&query, &pool)), vec![1]);
}

#[test]
fn skill_row_enforces_minimum_experience() {
    let pool = vec![
        talent(1, "UX", &[("Figma", 2)]),
        talent(2, "UX", &[("Figma", 3)]),
    ];
    let query = FilterQuery {
        skills_rows: vec![SkillRow::new("Figma", Some(3))],
        ..FilterQuery::default()
    };

    assert_eq!(ids(&evaluate(&query, &pool)), vec![2]);
}

#[test]
fn skill_row_without_minimum_only_needs_substring() {
    let pool = vec![
        talent(1, "Frontend", &[("React Native", 0)]),
        talent(2, "Frontend", &[("Vue", 6)]),
    ];
    let query = FilterQuery {
        skills_rows: vec![SkillRow::new("react", None)],
        ..FilterQuery::default()
    };

    assert_eq!(ids(&evaluate(&query, &pool)), vec![1]);
}

#[test]
fn every_skill_row_must_be_satisfied() {
    let pool = vec![
        talent(1, "Full stack", &[("Rust", 4), ("PostgreSQL", 2)]),
        talent(2, "Full stack", &[("Rust", 6)]),
    ];
    let query = FilterQuery {
        skills_rows: vec![
            SkillRow::new("rust", Some(3)),
            SkillRow::new("postgres", None),
            SkillRow::new("   ", Some(10)),
        ],
        ..FilterQuery::default()
    };

    assert_eq!(ids(&evaluate(&query, &pool)), vec![1]);
}

#[test]
fn blank_skill_rows_are_inactive() {
    let pool = sample_pool();
    let query = FilterQuery {
        skills_rows: vec![SkillRow::new("", Some(5))],
        ..FilterQuery::default()
    };

    assert!(query.is_empty());
    assert_eq!(evaluate(&query, &pool).len(), 2);
}

#[test]
fn workplace_type_is_an_exact_match() {
    let mut remote = talent(1, "UX", &[]);
    remote.workplace_type = Some("remote".to_string());
    let mut hybrid = talent(2, "UX", &[]);
    hybrid.workplace_type = Some("Remote".to_string());
    let pool = vec![remote, hybrid];
    let query = FilterQuery {
        workplace_type: "remote".to_string(),
        ..FilterQuery::default()
    };

    assert_eq!(ids(&evaluate(&query, &pool)), vec![1]);
}

#[test]
fn salary_range_treats_missing_salary_as_zero() {
    let mut modest = talent(1, "UX", &[]);
    modest.minimum_salary = Some(900.0);
    let mut senior = talent(2, "UX", &[]);
    senior.minimum_salary = Some(2500.0);
    let unspecified = talent(3, "UX", &[]);
    let pool = vec![modest, senior, unspecified];

    let capped = FilterQuery {
        salary_range: SalaryRange {
            min: None,
            max: Some(1000.0),
        },
        ..FilterQuery::default()
    };
    assert_eq!(ids(&evaluate(&capped, &pool)), vec![1, 3]);

    let band = FilterQuery {
        salary_range: SalaryRange {
            min: Some(500.0),
            max: Some(3000.0),
        },
        ..FilterQuery::default()
    };
    assert_eq!(ids(&evaluate(&band, &pool)), vec![1, 2]);
}

#[test]
fn salary_bounds_compare_fractional_amounts() {
    let mut asking = talent(1, "UX", &[]);
    asking.minimum_salary = Some(1200.5);
    let pool = vec![asking];

    let query_with = |range: serde_json::Value| -> FilterQuery {
        serde_json::from_value(serde_json::json!({ "salaryRange": range }))
            .expect("query deserializes")
    };

    assert!(evaluate(&query_with(serde_json::json!({ "max": "1200" })), &pool).is_empty());
    assert_eq!(
        ids(&evaluate(&query_with(serde_json::json!({ "max": 1200.5 })), &pool)),
        vec![1]
    );
    assert!(evaluate(&query_with(serde_json::json!({ "min": "1200.75" })), &pool).is_empty());
    assert_eq!(
        ids(&evaluate(&query_with(serde_json::json!({ "min": 1200 })), &pool)),
        vec![1]
    );
}

#[test]
fn null_fields_in_query_are_inactive() {
    let query: FilterQuery = serde_json::from_value(serde_json::json!({
        "occupation": null,
        "workType": null,
        "selectedSpecs": null,
        "selectedLangs": null,
        "skillsRows": [{ "skill": null, "minExperience": null }],
        "salaryRange": null,
        "location": { "country": null, "city": "tash" }
    }))
    .expect("query deserializes");

    assert_eq!(query.active_filters(), vec![FilterKind::City]);
    assert!(query.selected_specs.is_empty());
    assert_eq!(query.salary_range, SalaryRange::default());
}

#[test]
fn evaluation_is_repeatable() {
    let pool = sample_pool();
    let query = FilterQuery {
        speciality: "e".to_string(),
        ..FilterQuery::default()
    };

    let first = evaluate(&query, &pool);
    let second = query.evaluate(&pool);

    assert_eq!(first, second);
    assert_eq!(ids(&first), vec![2]);
}

#[test]
fn query_accepts_presentation_layer_field_names() {
    let query: FilterQuery = serde_json::from_value(serde_json::json!({
        "selectedSpecs": ["Backend"],
        "skillsRows": [
            { "skill": "Go", "experience": "4" },
            { "skill": "Docker", "experience": "" }
        ],
        "workType": "fulltime",
        "salaryRange": { "min": "1000", "max": "" },
        "location": { "country": "Uzbekistan" }
    }))
    .expect("query deserializes");

    assert_eq!(query.selected_specs, vec!["Backend".to_string()]);
    assert_eq!(query.skills_rows[0].min_experience, Some(4));
    assert_eq!(query.skills_rows[1].min_experience, None);
    assert_eq!(query.salary_range.min, Some(1000.0));
    assert_eq!(query.salary_range.max, None);
    assert_eq!(query.location.city, "");
}

#[test]
fn unparseable_numbers_in_query_read_as_zero() {
    let query: FilterQuery = serde_json::from_value(serde_json::json!({
        "skills_rows": [{ "skill": "Figma", "min_experience": "lots" }],
        "salary_range": { "min": "negotiable" }
    }))
    .expect("query deserializes");

    assert_eq!(query.skills_rows[0].min_experience, Some(0));
    assert_eq!(query.salary_range.min, Some(0.0));
    assert_eq!(evaluate(&query, &sample_pool()).len(), 1);
}

#[test]
fn facets_list_distinct_specialties_in_first_seen_order() {
    let mut pool = sample_pool();
    pool.push(talent(3, "UX", &[]));
    pool.push(talent(4, "  ", &[]));
    pool.push(talent(5, "Mobile", &[]));

    let facets = talent_facets(&pool);

    assert_eq!(facets.specialties, vec!["UX", "Backend", "Mobile"]);
    assert_eq!(facets.languages, POPULAR_LANGUAGES.to_vec());
}
