// ABOUTME: Risk-factor insight enumeration for assessment explanations
// ABOUTME: Lists the contributing factors behind a High risk classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HeartWise Score

//! Risk-factor insights
//!
//! For a High classification, callers render an explanation list of the
//! factors that likely contributed. The display thresholds here are slightly
//! tighter than the scoring thresholds (elevated rather than hypertensive
//! blood pressure) so borderline contributors are surfaced too.

use crate::models::{DerivedFeatures, ExamLevel, Gender, HealthInput, RiskLevel};
use crate::risk_constants::{age, blood_pressure, body_composition};
use serde::{Deserialize, Serialize};

/// Categories of contributing risk factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorCategory {
    /// Age above the elevated-risk threshold
    Age,
    /// Gender-linked baseline risk
    Gender,
    /// Elevated cholesterol
    Cholesterol,
    /// Elevated glucose
    Glucose,
    /// Smoking
    Smoking,
    /// Regular alcohol consumption
    Alcohol,
    /// Lack of physical activity
    Inactivity,
    /// BMI above the recommended range
    BodyComposition,
    /// Elevated blood pressure
    BloodPressure,
}

/// One contributing risk factor with a renderable message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Factor category
    pub category: RiskFactorCategory,
    /// Human-readable explanation
    pub message: String,
}

impl RiskFactor {
    fn new(category: RiskFactorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

/// Identify the factors contributing to a High risk classification
///
/// Returns an empty list for a Low classification: a low-risk assessment has
/// no contributing factors to explain.
#[must_use]
pub fn identify_risk_factors(
    input: &HealthInput,
    features: &DerivedFeatures,
    risk: RiskLevel,
) -> Vec<RiskFactor> {
    if risk == RiskLevel::Low {
        return Vec::new();
    }

    let mut factors = Vec::new();

    if input.age > age::ELEVATED_RISK_AGE {
        factors.push(RiskFactor::new(
            RiskFactorCategory::Age,
            format!(
                "Age above {} increases cardiovascular risk",
                age::ELEVATED_RISK_AGE
            ),
        ));
    }

    if input.gender == Gender::Male {
        factors.push(RiskFactor::new(
            RiskFactorCategory::Gender,
            "Men tend to have slightly higher cardiovascular risk",
        ));
    }

    if input.cholesterol != ExamLevel::Normal {
        factors.push(RiskFactor::new(
            RiskFactorCategory::Cholesterol,
            "Elevated cholesterol levels",
        ));
    }

    if input.glucose != ExamLevel::Normal {
        factors.push(RiskFactor::new(
            RiskFactorCategory::Glucose,
            "Elevated glucose levels",
        ));
    }

    if input.smoking {
        factors.push(RiskFactor::new(
            RiskFactorCategory::Smoking,
            "Smoking significantly increases risk",
        ));
    }

    if input.alcohol {
        factors.push(RiskFactor::new(
            RiskFactorCategory::Alcohol,
            "Regular alcohol consumption",
        ));
    }

    if !input.physically_active {
        factors.push(RiskFactor::new(
            RiskFactorCategory::Inactivity,
            "Lack of regular physical activity",
        ));
    }

    if features.bmi > body_composition::OVERWEIGHT_BMI {
        factors.push(RiskFactor::new(
            RiskFactorCategory::BodyComposition,
            "BMI above recommended range",
        ));
    }

    if input.systolic > blood_pressure::ELEVATED_SYSTOLIC {
        factors.push(RiskFactor::new(
            RiskFactorCategory::BloodPressure,
            "Elevated systolic blood pressure",
        ));
    }

    if input.diastolic > blood_pressure::ELEVATED_DIASTOLIC {
        factors.push(RiskFactor::new(
            RiskFactorCategory::BloodPressure,
            "Elevated diastolic blood pressure",
        ));
    }

    factors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::features::derive_features;

    fn high_risk_input() -> HealthInput {
        HealthInput {
            age: 55,
            gender: Gender::Male,
            cholesterol: ExamLevel::WellAboveNormal,
            glucose: ExamLevel::Normal,
            smoking: true,
            alcohol: false,
            physically_active: false,
            height_cm: 170.0,
            weight_kg: 70.0,
            systolic: 150.0,
            diastolic: 95.0,
        }
    }

    #[test]
    fn high_risk_lists_contributing_factors() {
        let input = high_risk_input();
        let features = derive_features(&input);
        let factors = identify_risk_factors(&input, &features, RiskLevel::High);

        let categories: Vec<RiskFactorCategory> = factors.iter().map(|f| f.category).collect();
        assert!(categories.contains(&RiskFactorCategory::Age));
        assert!(categories.contains(&RiskFactorCategory::Smoking));
        assert!(categories.contains(&RiskFactorCategory::Inactivity));
        assert!(categories.contains(&RiskFactorCategory::Cholesterol));
        assert!(categories.contains(&RiskFactorCategory::BloodPressure));
        assert!(!categories.contains(&RiskFactorCategory::Alcohol));
        assert!(!categories.contains(&RiskFactorCategory::Glucose));
    }

    #[test]
    fn low_risk_lists_nothing() {
        let input = high_risk_input();
        let features = derive_features(&input);
        assert!(identify_risk_factors(&input, &features, RiskLevel::Low).is_empty());
    }
}
