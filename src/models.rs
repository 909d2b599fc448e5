// ABOUTME: Domain data models for cardiovascular risk assessment
// ABOUTME: HealthInput, DerivedFeatures, RiskLevel, RiskResult, and RiskAssessment definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HeartWise Score

use crate::errors::{AppError, AppResult};
use crate::risk_constants::input_limits;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subject gender as collected by the intake form
///
/// The remote prediction service encodes gender ordinally (0 = female,
/// 1 = male), matching the cardiovascular training dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male subject (ordinal 1)
    Male,
    /// Female subject (ordinal 0)
    Female,
}

impl Gender {
    /// Ordinal wire encoding used by the prediction service
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Male => 1,
            Self::Female => 0,
        }
    }
}

/// Tiered exam result for cholesterol and glucose measurements
///
/// Self-reported as one of three levels; encoded ordinally (1-3) on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamLevel {
    /// Within normal range (ordinal 1)
    Normal,
    /// Above normal range (ordinal 2)
    AboveNormal,
    /// Well above normal range (ordinal 3)
    WellAboveNormal,
}

impl ExamLevel {
    /// Ordinal wire encoding used by the prediction service
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Normal => 1,
            Self::AboveNormal => 2,
            Self::WellAboveNormal => 3,
        }
    }
}

/// Self-reported cardiovascular risk factors for one assessment
///
/// Immutable per call. Range validation is the caller's responsibility before
/// scoring; [`HealthInput::validate`] ships the same checks the intake form
/// performs for callers that want them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthInput {
    /// Age in years (18-120)
    pub age: u32,
    /// Subject gender
    pub gender: Gender,
    /// Cholesterol exam tier
    pub cholesterol: ExamLevel,
    /// Glucose exam tier
    pub glucose: ExamLevel,
    /// Whether the subject smokes
    pub smoking: bool,
    /// Whether the subject consumes alcohol regularly
    pub alcohol: bool,
    /// Whether the subject is physically active
    pub physically_active: bool,
    /// Height in centimeters (100-250)
    pub height_cm: f64,
    /// Weight in kilograms (30-300)
    pub weight_kg: f64,
    /// Systolic blood pressure in mmHg; must exceed diastolic
    pub systolic: f64,
    /// Diastolic blood pressure in mmHg
    pub diastolic: f64,
}

impl HealthInput {
    /// Validate that every field falls within the accepted intake ranges
    ///
    /// # Errors
    ///
    /// Returns `AppError::ValueOutOfRange` for the first field outside its
    /// accepted range, or `AppError::InvalidInput` if systolic pressure does
    /// not exceed diastolic pressure.
    pub fn validate(&self) -> AppResult<()> {
        if !(input_limits::MIN_AGE..=input_limits::MAX_AGE).contains(&self.age) {
            return Err(AppError::value_out_of_range(format!(
                "age {} is outside the accepted range ({}-{} years)",
                self.age,
                input_limits::MIN_AGE,
                input_limits::MAX_AGE
            )));
        }

        if !(input_limits::MIN_HEIGHT_CM..=input_limits::MAX_HEIGHT_CM).contains(&self.height_cm) {
            return Err(AppError::value_out_of_range(format!(
                "height {:.1}cm is outside the accepted range (100-250 cm)",
                self.height_cm
            )));
        }

        if !(input_limits::MIN_WEIGHT_KG..=input_limits::MAX_WEIGHT_KG).contains(&self.weight_kg) {
            return Err(AppError::value_out_of_range(format!(
                "weight {:.1}kg is outside the accepted range (30-300 kg)",
                self.weight_kg
            )));
        }

        if !(input_limits::MIN_SYSTOLIC..=input_limits::MAX_SYSTOLIC).contains(&self.systolic) {
            return Err(AppError::value_out_of_range(format!(
                "systolic pressure {:.0} mmHg is outside the accepted range (70-250 mmHg)",
                self.systolic
            )));
        }

        if !(input_limits::MIN_DIASTOLIC..=input_limits::MAX_DIASTOLIC).contains(&self.diastolic) {
            return Err(AppError::value_out_of_range(format!(
                "diastolic pressure {:.0} mmHg is outside the accepted range (40-150 mmHg)",
                self.diastolic
            )));
        }

        if self.systolic <= self.diastolic {
            return Err(AppError::invalid_input(format!(
                "systolic pressure ({:.0}) must be greater than diastolic pressure ({:.0})",
                self.systolic, self.diastolic
            )));
        }

        Ok(())
    }
}

/// Numeric features derived from one [`HealthInput`]
///
/// Exists only as a return value; BMI is rounded to two decimals before any
/// downstream use so the scorer and display consume the same value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFeatures {
    /// Body Mass Index, kg/m², rounded to two decimals
    pub bmi: f64,
    /// Pulse pressure: systolic minus diastolic (mmHg)
    pub pulse_pressure: f64,
    /// Mean arterial pressure: (2 x diastolic + systolic) / 3 (mmHg)
    pub mean_arterial_pressure: f64,
    /// Interaction term: age x BMI
    pub age_bmi_interaction: f64,
    /// Interaction term: pulse pressure x mean arterial pressure
    pub pulse_map_interaction: f64,
}

/// Binary risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Probability at or below the high-risk threshold
    Low,
    /// Probability above the high-risk threshold
    High,
}

/// Outcome of one scoring call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Risk classification
    pub risk: RiskLevel,
    /// Risk probability as a percentage in [0, 100], one decimal place
    pub probability: f64,
}

impl RiskResult {
    /// Safe default returned by the legacy remote fallback path
    pub const SAFE_DEFAULT: Self = Self {
        risk: RiskLevel::Low,
        probability: 0.0,
    };
}

/// Complete assessment envelope for rendering
///
/// Bundles the derived features with the scoring outcome so a caller can
/// display both from a single value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Features derived from the input
    pub features: DerivedFeatures,
    /// Scoring outcome
    pub result: RiskResult,
    /// Name of the scorer that produced the result
    pub scorer: String,
    /// When the assessment was produced
    pub generated_at: DateTime<Utc>,
}
