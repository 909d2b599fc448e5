// ABOUTME: Clinical constants and additive model weights for cardiovascular risk scoring
// ABOUTME: Organized in nested modules by domain with guideline references
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HeartWise Score

//! Clinical constants for cardiovascular risk estimation
//!
//! Thresholds follow widely published clinical guidelines; the additive model
//! weights are the fixed parameters of the heuristic scorer and are kept here
//! so the scorer itself reads as pure arithmetic.

/// Weights of the additive heuristic risk model
///
/// The heuristic is a deterministic point system: a base risk plus one
/// contribution per risk factor, capped at `MAX_PROBABILITY`.
pub mod heuristic {
    /// Baseline risk assigned to every subject
    pub const BASE_RISK: f64 = 0.05;

    /// Per-year risk increment above the reference age
    pub const AGE_RISK_PER_YEAR: f64 = 0.005;

    /// Reference age at which the age contribution is zero
    pub const AGE_REFERENCE_YEARS: f64 = 20.0;

    /// Contribution for male subjects
    pub const MALE_RISK: f64 = 0.05;

    /// Cholesterol contributions (mutually exclusive tiers)
    pub const CHOLESTEROL_ABOVE_NORMAL_RISK: f64 = 0.07;
    pub const CHOLESTEROL_WELL_ABOVE_NORMAL_RISK: f64 = 0.15;

    /// Glucose contributions (mutually exclusive tiers)
    pub const GLUCOSE_ABOVE_NORMAL_RISK: f64 = 0.05;
    pub const GLUCOSE_WELL_ABOVE_NORMAL_RISK: f64 = 0.10;

    /// Lifestyle contributions
    pub const SMOKING_RISK: f64 = 0.15;
    pub const ALCOHOL_RISK: f64 = 0.08;
    pub const INACTIVITY_RISK: f64 = 0.12;

    /// BMI contributions (cumulative: both apply above the obese threshold)
    pub const OVERWEIGHT_RISK: f64 = 0.05;
    pub const OBESE_ADDITIONAL_RISK: f64 = 0.10;

    /// Blood pressure contributions
    pub const HYPERTENSIVE_SYSTOLIC_RISK: f64 = 0.15;
    pub const HYPERTENSIVE_DIASTOLIC_RISK: f64 = 0.10;

    /// Upper bound on the computed probability
    pub const MAX_PROBABILITY: f64 = 0.95;

    /// Probability above which the label is High
    pub const HIGH_RISK_THRESHOLD: f64 = 0.30;
}

/// Blood pressure thresholds (mmHg)
///
/// Reference: 2018 ESC/ESH Guidelines for the management of arterial
/// hypertension; stage 2 hypertension at 140/90 mmHg.
pub mod blood_pressure {
    /// Systolic pressure above which the hypertension contribution applies
    pub const HYPERTENSIVE_SYSTOLIC: f64 = 140.0;

    /// Diastolic pressure above which the hypertension contribution applies
    pub const HYPERTENSIVE_DIASTOLIC: f64 = 90.0;

    /// Elevated systolic pressure reported in risk-factor insights
    pub const ELEVATED_SYSTOLIC: f64 = 130.0;

    /// Elevated diastolic pressure reported in risk-factor insights
    pub const ELEVATED_DIASTOLIC: f64 = 85.0;
}

/// Body composition thresholds
///
/// Reference: WHO BMI classification (overweight >= 25, obese >= 30 kg/m²).
pub mod body_composition {
    /// BMI above which the overweight contribution applies
    pub const OVERWEIGHT_BMI: f64 = 25.0;

    /// BMI above which the additional obesity contribution applies
    pub const OBESE_BMI: f64 = 30.0;
}

/// Age thresholds
pub mod age {
    /// Age above which risk-factor insights call out age as a contributor
    pub const ELEVATED_RISK_AGE: u32 = 50;
}

/// Accepted input ranges, mirroring the intake form's validation
pub mod input_limits {
    /// Minimum accepted age (years)
    pub const MIN_AGE: u32 = 18;
    /// Maximum accepted age (years)
    pub const MAX_AGE: u32 = 120;

    /// Accepted height range (cm)
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    pub const MAX_HEIGHT_CM: f64 = 250.0;

    /// Accepted weight range (kg)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    pub const MAX_WEIGHT_KG: f64 = 300.0;

    /// Accepted systolic pressure range (mmHg)
    pub const MIN_SYSTOLIC: f64 = 70.0;
    pub const MAX_SYSTOLIC: f64 = 250.0;

    /// Accepted diastolic pressure range (mmHg)
    pub const MIN_DIASTOLIC: f64 = 40.0;
    pub const MAX_DIASTOLIC: f64 = 150.0;
}
