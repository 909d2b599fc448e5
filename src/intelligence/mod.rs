// ABOUTME: Intelligence module for cardiovascular feature derivation and risk analysis
// ABOUTME: Pure, stateless transforms: derived features, heuristic scoring, risk-factor insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HeartWise Score

//! Feature derivation and risk analysis
//!
//! Everything in this module is referentially transparent: the same input
//! always produces the same output, with no I/O and no shared state.

/// Derived feature computation (BMI, pulse pressure, MAP, interactions)
pub mod features;

/// Additive heuristic risk scoring
pub mod heuristic;

/// Risk-factor insight enumeration for assessment explanations
pub mod risk_factors;

pub use features::{calculate_bmi, derive_features, mean_arterial_pressure, pulse_pressure};
pub use heuristic::{heuristic_probability, to_result};
pub use risk_factors::{identify_risk_factors, RiskFactor, RiskFactorCategory};
