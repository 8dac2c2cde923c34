use pill_match::{
    AgeGroup, BmiCategory, CohortKey, Measurement, MeasurementInput, PillMatchConfig,
    PillMatchError, assess, classify_age, classify_bmi, compute_bmi, resolve_final_bmi_group,
};
use proptest::prelude::*;

fn cohort_of(age: u32, weight_kg: f64, height_cm: f64, has_health_conditions: bool) -> CohortKey {
    let measurement = Measurement::new(age, weight_kg, height_cm, has_health_conditions);
    assess(&measurement).expect("positive measurement").cohort_key
}

#[test]
fn test_typical_adult_is_normal_weight() {
    let assessment = assess(&Measurement::new(22, 60.0, 165.0, false)).unwrap();

    assert_eq!(assessment.age_group, AgeGroup::Adult);
    assert!((assessment.bmi.value() - 22.0).abs() < f64::EPSILON);
    assert_eq!(assessment.bmi_category, BmiCategory::NormalWeight);
    assert_eq!(assessment.final_group.group, 2);
    assert!(!assessment.final_group.overridden);
    assert_eq!(assessment.cohort_key.as_str(), "Adult - BMI Group 2");
    assert_eq!(
        assessment.description(),
        "Adult age group with Group 2 BMI category"
    );
}

#[test]
fn test_obese_teenager() {
    assert_eq!(cohort_of(17, 95.0, 160.0, false).as_str(), "Young - BMI Group 4");
}

#[test]
fn test_health_conditions_override_bmi_group() {
    let assessment = assess(&Measurement::new(45, 50.0, 170.0, true)).unwrap();

    assert_eq!(assessment.bmi_category, BmiCategory::Underweight);
    assert_eq!(assessment.final_group.group, 4);
    assert_eq!(assessment.final_group.original, BmiCategory::Underweight);
    assert!(assessment.final_group.overridden);
    assert_eq!(
        assessment.final_group.reason(),
        "Health conditions override - assigned to Group 4"
    );
    assert_eq!(assessment.cohort_key.as_str(), "Mature - BMI Group 4");
}

#[test]
fn test_rounding_decides_the_band() {
    // A height of 1 m makes the BMI equal to the weight
    assert_eq!(cohort_of(30, 18.46, 100.0, false).as_str(), "Adult - BMI Group 2");
    assert_eq!(cohort_of(30, 24.96, 100.0, false).as_str(), "Adult - BMI Group 3");
    assert_eq!(cohort_of(30, 29.94, 100.0, false).as_str(), "Adult - BMI Group 3");
    assert_eq!(cohort_of(30, 30.0, 100.0, false).as_str(), "Adult - BMI Group 4");
}

#[test]
fn test_band_boundaries() {
    assert_eq!(classify_age(18), AgeGroup::Young);
    assert_eq!(classify_age(19), AgeGroup::Adult);
    assert_eq!(classify_age(40), AgeGroup::Mature);
    assert_eq!(classify_age(100), AgeGroup::Mature);

    assert_eq!(classify_bmi(18.4), BmiCategory::Underweight);
    assert_eq!(classify_bmi(18.5), BmiCategory::NormalWeight);
    assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
}

#[test]
fn test_override_keeps_original_category() {
    for category in BmiCategory::all() {
        let plain = resolve_final_bmi_group(category, false);
        assert_eq!(plain.group, category.group());
        assert!(!plain.overridden);

        let overridden = resolve_final_bmi_group(category, true);
        assert_eq!(overridden.group, 4);
        assert_eq!(overridden.original, category);
    }
}

#[test]
fn test_non_positive_measurements_are_rejected() {
    assert!(matches!(
        compute_bmi(0.0, 170.0),
        Err(PillMatchError::InvalidMeasurement(_))
    ));
    assert!(matches!(
        compute_bmi(70.0, -1.0),
        Err(PillMatchError::InvalidMeasurement(_))
    ));
}

#[test]
fn test_validation_reports_every_problem() {
    let input = MeasurementInput {
        age: Some(10),
        weight_kg: None,
        height_cm: Some(300.0),
        has_health_conditions: false,
    };

    let error = Measurement::from_input(&input, &PillMatchConfig::default()).unwrap_err();
    assert_eq!(
        error.validation_messages().unwrap(),
        [
            "Weight must be a positive number",
            "Age should be between 13 and 100 years",
            "Height should be between 100 and 250 cm",
        ]
    );
    assert!(error.to_string().starts_with("Please correct the following errors:"));
}

#[test]
fn test_validation_uses_configured_ranges() {
    let config = PillMatchConfig::default().with_age_range(18.0, 60.0);
    let input = MeasurementInput::new(16, 60.0, 165.0, false);

    let error = Measurement::from_input(&input, &config).unwrap_err();
    assert_eq!(
        error.validation_messages().unwrap(),
        ["Age should be between 18 and 60 years"]
    );
    assert!(Measurement::from_input(&input, &PillMatchConfig::default()).is_ok());
}

proptest! {
    #[test]
    fn bmi_is_rounded_to_one_decimal(weight in 20.0f64..300.0, height in 100.0f64..250.0) {
        let bmi = compute_bmi(weight, height).unwrap();
        let expected = ((weight / ((height / 100.0) * (height / 100.0))) * 10.0).round() / 10.0;
        prop_assert_eq!(bmi.value(), expected);
    }

    #[test]
    fn cohort_key_is_always_known(
        age in 13u32..100,
        weight in 20.0f64..300.0,
        height in 100.0f64..250.0,
        has_health_conditions in any::<bool>(),
    ) {
        let key = cohort_of(age, weight, height, has_health_conditions);
        prop_assert!(key.is_known());
        if has_health_conditions {
            prop_assert!(key.as_str().ends_with("BMI Group 4"));
        }
    }
}
