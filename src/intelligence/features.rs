// ABOUTME: Derived feature computation from raw health inputs
// ABOUTME: Implements BMI, pulse pressure, mean arterial pressure, and interaction terms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HeartWise Score

//! Feature derivation
//!
//! Maps raw health inputs to the derived numeric features consumed by the
//! scorers and by result display. All functions are pure; with height above
//! zero (guaranteed by upstream validation) there are no failure modes.

use crate::models::{DerivedFeatures, HealthInput};

/// Round a value to two decimal places
///
/// BMI is rounded before any downstream use so the scorer and display consume
/// the same value and cannot drift apart.
fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calculate Body Mass Index
///
/// Formula: `BMI = weight_kg / (height_m)²`, rounded to two decimals.
///
/// # Example
///
/// ```rust
/// use heartwise_score::intelligence::calculate_bmi;
///
/// let bmi = calculate_bmi(70.0, 170.0);
/// assert!((bmi - 24.22).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_two_decimals(weight_kg / (height_m * height_m))
}

/// Calculate pulse pressure
///
/// Formula: `PP = systolic - diastolic`
#[must_use]
pub fn pulse_pressure(systolic: f64, diastolic: f64) -> f64 {
    systolic - diastolic
}

/// Calculate mean arterial pressure
///
/// Formula: `MAP = (2 x diastolic + systolic) / 3`, unrounded.
#[must_use]
pub fn mean_arterial_pressure(systolic: f64, diastolic: f64) -> f64 {
    (2.0f64.mul_add(diastolic, systolic)) / 3.0
}

/// Derive all features from one health input
///
/// The interaction terms are computed from the rounded BMI, keeping the
/// rounded value the single source of truth.
#[must_use]
pub fn derive_features(input: &HealthInput) -> DerivedFeatures {
    let bmi = calculate_bmi(input.weight_kg, input.height_cm);
    let pp = pulse_pressure(input.systolic, input.diastolic);
    let map = mean_arterial_pressure(input.systolic, input.diastolic);

    DerivedFeatures {
        bmi,
        pulse_pressure: pp,
        mean_arterial_pressure: map,
        age_bmi_interaction: f64::from(input.age) * bmi,
        pulse_map_interaction: pp * map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExamLevel, Gender};

    #[test]
    fn bmi_reference_value() {
        // 70 / 1.7^2 = 24.2214... -> 24.22
        let bmi = calculate_bmi(70.0, 170.0);
        assert!((bmi - 24.22).abs() < 1e-9, "expected 24.22, got {bmi}");
    }

    #[test]
    fn pulse_pressure_reference_value() {
        assert!((pulse_pressure(120.0, 80.0) - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn map_is_unrounded() {
        // (160 + 120) / 3 = 93.333...
        let map = mean_arterial_pressure(120.0, 80.0);
        assert!((map - 280.0 / 3.0).abs() < 1e-9, "expected 93.33..., got {map}");
    }

    #[test]
    fn interactions_use_rounded_bmi() {
        let input = HealthInput {
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
        };
        let features = derive_features(&input);
        assert!((features.age_bmi_interaction - 40.0 * 24.22).abs() < 1e-9);
        assert!((features.pulse_map_interaction - 40.0 * (280.0 / 3.0)).abs() < 1e-9);
    }
}
