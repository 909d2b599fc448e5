// ABOUTME: Integration tests for derived feature computation through the public API
// ABOUTME: Covers BMI rounding, pulse pressure, MAP, and interaction terms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HeartWise Score

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use heartwise_score::intelligence::{
    calculate_bmi, derive_features, mean_arterial_pressure, pulse_pressure,
};
use heartwise_score::models::{ExamLevel, Gender, HealthInput};

fn reference_input() -> HealthInput {
    HealthInput {
        age: 40,
        gender: Gender::Male,
        cholesterol: ExamLevel::Normal,
        glucose: ExamLevel::Normal,
        smoking: false,
        alcohol: false,
        physically_active: true,
        height_cm: 170.0,
        weight_kg: 70.0,
        systolic: 120.0,
        diastolic: 80.0,
    }
}

#[test]
fn test_bmi_reference_value() {
    // 70 / (1.70)^2 = 24.2214... rounded to 24.22
    let bmi = calculate_bmi(70.0, 170.0);
    assert!((bmi - 24.22).abs() < 1e-9, "BMI should be 24.22, got {bmi}");
}

#[test]
fn test_bmi_rounds_to_two_decimals() {
    // 80 / (1.83)^2 = 23.8888... rounded to 23.89
    let bmi = calculate_bmi(80.0, 183.0);
    assert!((bmi - 23.89).abs() < 1e-9, "BMI should be 23.89, got {bmi}");
}

#[test]
fn test_pulse_pressure_reference_value() {
    assert!((pulse_pressure(120.0, 80.0) - 40.0).abs() < f64::EPSILON);
}

#[test]
fn test_map_reference_value_unrounded() {
    // (2*80 + 120) / 3 = 280 / 3 = 93.333...
    let map = mean_arterial_pressure(120.0, 80.0);
    assert!(
        (map - 93.333_333_333_333_33).abs() < 1e-9,
        "MAP should be 93.33..., got {map}"
    );
}

#[test]
fn test_derive_features_bundles_all_five_features() {
    let features = derive_features(&reference_input());

    assert!((features.bmi - 24.22).abs() < 1e-9);
    assert!((features.pulse_pressure - 40.0).abs() < f64::EPSILON);
    assert!((features.mean_arterial_pressure - 280.0 / 3.0).abs() < 1e-9);
    // Interaction terms consume the rounded BMI
    assert!((features.age_bmi_interaction - 968.8).abs() < 1e-9);
    assert!((features.pulse_map_interaction - 40.0 * (280.0 / 3.0)).abs() < 1e-9);
}

#[test]
fn test_derivation_is_deterministic() {
    let input = reference_input();
    assert_eq!(derive_features(&input), derive_features(&input));
}
