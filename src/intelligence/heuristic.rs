// ABOUTME: Additive heuristic risk scoring over raw inputs and derived features
// ABOUTME: Deterministic point system with a capped probability and binary label conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HeartWise Score

//! Heuristic risk scoring
//!
//! A deterministic additive point model: every risk factor contributes a
//! fixed increment, the sum is capped, and the label falls out of a single
//! threshold. Total over the validated input domain; no error paths.

use crate::models::{DerivedFeatures, ExamLevel, Gender, HealthInput, RiskLevel, RiskResult};
use crate::risk_constants::{blood_pressure, body_composition, heuristic};

/// Compute the heuristic risk probability in `[0, 0.95]`
///
/// All terms are additive and order-independent. The cholesterol and glucose
/// tiers are mutually exclusive; the BMI contributions are cumulative (an
/// obese subject receives both the overweight and the obesity increment).
#[must_use]
pub fn heuristic_probability(input: &HealthInput, features: &DerivedFeatures) -> f64 {
    let mut risk = heuristic::BASE_RISK;

    risk += (f64::from(input.age) - heuristic::AGE_REFERENCE_YEARS) * heuristic::AGE_RISK_PER_YEAR;

    if input.gender == Gender::Male {
        risk += heuristic::MALE_RISK;
    }

    risk += match input.cholesterol {
        ExamLevel::Normal => 0.0,
        ExamLevel::AboveNormal => heuristic::CHOLESTEROL_ABOVE_NORMAL_RISK,
        ExamLevel::WellAboveNormal => heuristic::CHOLESTEROL_WELL_ABOVE_NORMAL_RISK,
    };

    risk += match input.glucose {
        ExamLevel::Normal => 0.0,
        ExamLevel::AboveNormal => heuristic::GLUCOSE_ABOVE_NORMAL_RISK,
        ExamLevel::WellAboveNormal => heuristic::GLUCOSE_WELL_ABOVE_NORMAL_RISK,
    };

    if input.smoking {
        risk += heuristic::SMOKING_RISK;
    }
    if input.alcohol {
        risk += heuristic::ALCOHOL_RISK;
    }
    if !input.physically_active {
        risk += heuristic::INACTIVITY_RISK;
    }

    if features.bmi > body_composition::OVERWEIGHT_BMI {
        risk += heuristic::OVERWEIGHT_RISK;
    }
    if features.bmi > body_composition::OBESE_BMI {
        risk += heuristic::OBESE_ADDITIONAL_RISK;
    }

    if input.systolic > blood_pressure::HYPERTENSIVE_SYSTOLIC {
        risk += heuristic::HYPERTENSIVE_SYSTOLIC_RISK;
    }
    if input.diastolic > blood_pressure::HYPERTENSIVE_DIASTOLIC {
        risk += heuristic::HYPERTENSIVE_DIASTOLIC_RISK;
    }

    risk.min(heuristic::MAX_PROBABILITY)
}

/// Convert a raw probability into the reported [`RiskResult`]
///
/// The label is High strictly above the threshold; the reported probability
/// is the percentage rounded to one decimal place.
#[must_use]
pub fn to_result(probability: f64) -> RiskResult {
    let risk = if probability > heuristic::HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else {
        RiskLevel::Low
    };

    RiskResult {
        risk,
        probability: (probability * 1000.0).round() / 10.0,
    }
}
