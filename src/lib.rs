// ABOUTME: Main library entry point for the HeartWise Score risk estimation core
// ABOUTME: Feature derivation plus heuristic or remote cardiovascular risk scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HeartWise Score

#![deny(unsafe_code)]

//! # HeartWise Score
//!
//! Cardiovascular risk estimation core: collects self-reported risk factors,
//! derives numeric features (BMI, pulse pressure, mean arterial pressure, two
//! interaction terms), and produces a binary risk classification — either via
//! a local additive heuristic or by delegating to a remote prediction service.
//!
//! The crate is a library; form rendering, input UX, and result presentation
//! are the embedding application's concern. Callers supply a validated
//! [`models::HealthInput`] and receive a [`models::RiskResult`] (plus
//! [`models::DerivedFeatures`] for display).
//!
//! ## Architecture
//!
//! - **models**: domain types (`HealthInput`, `DerivedFeatures`, `RiskResult`)
//! - **intelligence**: pure transforms — feature derivation, the additive
//!   heuristic, and risk-factor insights
//! - **scoring**: the [`scoring::RiskScorer`] capability trait with the local
//!   [`scoring::HeuristicScorer`]
//! - **external**: the remote prediction client and
//!   [`external::RemoteScorer`]
//!
//! ## Example
//!
//! ```rust
//! use heartwise_score::models::{ExamLevel, Gender, HealthInput};
//! use heartwise_score::scoring::{assess, HeuristicScorer};
//!
//! # #[tokio::main]
//! # async fn main() -> heartwise_score::errors::AppResult<()> {
//! let input = HealthInput {
//!     age: 40,
//!     gender: Gender::Male,
//!     cholesterol: ExamLevel::Normal,
//!     glucose: ExamLevel::Normal,
//!     smoking: false,
//!     alcohol: false,
//!     physically_active: true,
//!     height_cm: 170.0,
//!     weight_kg: 70.0,
//!     systolic: 120.0,
//!     diastolic: 80.0,
//! };
//! input.validate()?;
//!
//! let assessment = assess(&HeuristicScorer::new(), &input).await?;
//! println!("{:?} ({}%)", assessment.result.risk, assessment.result.probability);
//! # Ok(())
//! # }
//! ```

/// Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
pub mod errors;

/// External prediction service client and remote scorer
pub mod external;

/// Feature derivation, heuristic scoring, and risk-factor insights
pub mod intelligence;

/// Structured logging configuration
pub mod logging;

/// Domain data models
pub mod models;

/// Clinical constants and additive model weights
pub mod risk_constants;

/// Risk scoring contract and the local heuristic scorer
pub mod scoring;

pub use errors::{AppError, AppResult, ErrorCode};
pub use external::{PredictionClient, PredictionClientConfig, RemoteScorer};
pub use intelligence::{derive_features, identify_risk_factors};
pub use models::{DerivedFeatures, HealthInput, RiskAssessment, RiskLevel, RiskResult};
pub use scoring::{assess, HeuristicScorer, RiskScorer};
