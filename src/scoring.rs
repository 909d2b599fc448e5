// ABOUTME: RiskScorer capability trait with the local heuristic implementation
// ABOUTME: Callers depend on the scoring contract, not on a concrete scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HeartWise Score

//! Risk scoring contract
//!
//! One polymorphic capability with two variants: the local additive heuristic
//! ([`HeuristicScorer`]) and the remote prediction service
//! ([`crate::external::RemoteScorer`]). The trait is async because the remote
//! variant performs one HTTP round trip; the heuristic completes immediately
//! and never fails.

use crate::errors::AppResult;
use crate::intelligence::{derive_features, heuristic_probability, to_result};
use crate::models::{DerivedFeatures, HealthInput, RiskAssessment, RiskResult};
use chrono::Utc;

/// Scoring capability shared by the heuristic and remote variants
#[async_trait::async_trait]
pub trait RiskScorer: Send + Sync {
    /// Score one input against its derived features
    ///
    /// # Errors
    ///
    /// The heuristic variant never returns an error. The remote variant
    /// returns `AppError::ExternalServiceError` or
    /// `AppError::ExternalServiceUnavailable` when the prediction call fails,
    /// so callers can distinguish "unavailable" from "low risk".
    async fn score(
        &self,
        input: &HealthInput,
        features: &DerivedFeatures,
    ) -> AppResult<RiskResult>;

    /// Scorer name for logging and assessment envelopes
    fn name(&self) -> &'static str;
}

/// Local deterministic scorer backed by the additive heuristic
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    /// Create a new heuristic scorer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl RiskScorer for HeuristicScorer {
    async fn score(
        &self,
        input: &HealthInput,
        features: &DerivedFeatures,
    ) -> AppResult<RiskResult> {
        Ok(to_result(heuristic_probability(input, features)))
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Run a complete assessment: derive features, score, and stamp the envelope
///
/// # Errors
///
/// Propagates any scoring error from the underlying scorer.
pub async fn assess(scorer: &dyn RiskScorer, input: &HealthInput) -> AppResult<RiskAssessment> {
    let features = derive_features(input);
    let result = scorer.score(input, &features).await?;

    tracing::debug!(
        scorer = scorer.name(),
        risk = ?result.risk,
        probability = result.probability,
        "risk assessment completed"
    );

    Ok(RiskAssessment {
        features,
        result,
        scorer: scorer.name().to_owned(),
        generated_at: Utc::now(),
    })
}
