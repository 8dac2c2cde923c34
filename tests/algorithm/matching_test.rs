use pill_match::{
    CohortKey, Matcher, MeasurementInput, PillMatchConfig, PillMatchError, RecommendationOptions,
    category_options, filter_by_category, find_suitable,
};

use crate::utils::{catalog_of, entry, names, reference};

#[test]
fn test_high_bmi_teenager_gets_progestin_only_options() {
    let catalog = reference();
    let key = CohortKey::from_raw("Young - BMI Group 4");

    let suitable = find_suitable(&catalog, &key);
    let found = names(&suitable);

    assert_eq!(
        found,
        [
            "Norethindrone (Progestin-Only)",
            "Drospirenone (Progestin-Only)",
            "Norethindrone + Ethinyl Estradiol (High BMI)",
            "Levonorgestrel (Emergency)",
        ]
    );
    assert!(!found.contains(&"Levonorgestrel + Ethinyl Estradiol".to_string()));
}

#[test]
fn test_results_keep_catalog_order() {
    let catalog = reference();
    let key = CohortKey::from_raw("Mature - BMI Group 3");

    let suitable = find_suitable(&catalog, &key);
    let positions: Vec<usize> = suitable
        .iter()
        .map(|e| {
            catalog
                .iter()
                .position(|c| c.generic_name == e.generic_name)
                .unwrap()
        })
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(suitable.iter().all(|e| e.is_suitable_for(&key)));
}

#[test]
fn test_unknown_or_empty_cohort_finds_nothing() {
    let catalog = reference();

    assert!(find_suitable(&catalog, &CohortKey::from_raw("Elderly - BMI Group 9")).is_empty());

    let empty = catalog_of(Vec::new());
    assert!(find_suitable(&empty, &CohortKey::from_raw("Adult - BMI Group 2")).is_empty());
}

#[test]
fn test_membership_is_exact() {
    let catalog = catalog_of(vec![entry(
        "Spaced",
        "Combined Oral Contraceptive",
        &["Adult - BMI Group 2 "],
    )]);

    assert!(find_suitable(&catalog, &CohortKey::from_raw("Adult - BMI Group 2")).is_empty());
}

#[test]
fn test_category_filter() {
    let catalog = reference();
    let suitable = find_suitable(&catalog, &CohortKey::from_raw("Young - BMI Group 4"));

    assert_eq!(filter_by_category(&suitable, "all"), suitable);
    assert_eq!(
        names(&filter_by_category(&suitable, "Progestin-Only Pill")),
        ["Norethindrone (Progestin-Only)", "Drospirenone (Progestin-Only)"]
    );
    assert!(filter_by_category(&suitable, "Combined Oral Contraceptive").is_empty());
    assert!(filter_by_category(&suitable, "progestin-only pill").is_empty());

    assert_eq!(
        category_options(&suitable),
        [
            "all",
            "Progestin-Only Pill",
            "Combined Pill (High BMI)",
            "Emergency Contraception",
        ]
    );
}

#[test]
fn test_matcher_end_to_end() {
    let catalog = reference();
    let matcher = Matcher::new(PillMatchConfig::default());
    let options = RecommendationOptions {
        category: "Emergency Contraception".to_string(),
        show_brand_names: false,
    };

    let recommendation = matcher
        .recommend(&MeasurementInput::new(17, 95.0, 160.0, false), &catalog, &options)
        .unwrap();

    assert_eq!(recommendation.assessment.cohort_key.as_str(), "Young - BMI Group 4");
    assert_eq!(recommendation.suitable_count, 4);
    assert_eq!(recommendation.entries.len(), 1);
    assert_eq!(recommendation.entries[0].generic_name, "Levonorgestrel (Emergency)");
    assert_eq!(recommendation.category_options.len(), 4);
    assert!(!recommendation.options.show_brand_names);
}

#[test]
fn test_matcher_rejects_invalid_input_before_matching() {
    let catalog = reference();
    let matcher = Matcher::default();

    let result = matcher.recommend(
        &MeasurementInput::default(),
        &catalog,
        &RecommendationOptions::default(),
    );

    match result {
        Err(PillMatchError::Validation(messages)) => assert_eq!(messages.len(), 3),
        other => panic!("expected validation error, got {other:?}"),
    }
}
