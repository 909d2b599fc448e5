// ABOUTME: RemoteScorer delegating risk scoring to the prediction service
// ABOUTME: Surfaces failures by default; offers the legacy safe-default fallback explicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HeartWise Score

//! Remote risk scorer
//!
//! Delegates scoring to the prediction service through a [`PredictionApi`]
//! transport. `score` surfaces failures as errors so callers can distinguish
//! an unavailable backend from a genuinely low risk; the blanket
//! `{Low, 0}` fallback of earlier versions survives only as the explicitly
//! named [`RemoteScorer::score_or_default`].

use crate::errors::AppResult;
use crate::external::prediction::{
    PredictionApi, PredictionClient, PredictionRequest, PredictionResponse,
};
use crate::models::{DerivedFeatures, HealthInput, RiskResult};
use crate::scoring::RiskScorer;
use std::sync::atomic::{AtomicU64, Ordering};

/// Risk scorer backed by the remote prediction service
pub struct RemoteScorer<T: PredictionApi> {
    api: T,
    failures: AtomicU64,
}

impl RemoteScorer<PredictionClient> {
    /// Create a remote scorer with an HTTP client configured from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(PredictionClient::from_env())
    }
}

impl<T: PredictionApi> RemoteScorer<T> {
    /// Create a remote scorer over the given transport
    #[must_use]
    pub const fn new(api: T) -> Self {
        Self {
            api,
            failures: AtomicU64::new(0),
        }
    }

    /// Number of failed prediction calls observed by this scorer
    ///
    /// Counts every failure, whether the caller used [`RiskScorer::score`]
    /// or [`Self::score_or_default`].
    #[must_use]
    pub fn failure_count(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Score with the legacy safe-default fallback
    ///
    /// Any failure is logged, counted, and converted into exactly
    /// `{risk: Low, probability: 0.0}`. Prefer [`RiskScorer::score`] in new
    /// callers: the safe default masks backend outages as low risk.
    pub async fn score_or_default(
        &self,
        input: &HealthInput,
        features: &DerivedFeatures,
    ) -> RiskResult {
        match self.score(input, features).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "prediction call failed; returning safe default result"
                );
                RiskResult::SAFE_DEFAULT
            }
        }
    }
}

#[async_trait::async_trait]
impl<T: PredictionApi> RiskScorer for RemoteScorer<T> {
    async fn score(
        &self,
        input: &HealthInput,
        features: &DerivedFeatures,
    ) -> AppResult<RiskResult> {
        let request = PredictionRequest::new(input, features);

        let outcome = self
            .api
            .predict(&request)
            .await
            .and_then(PredictionResponse::into_result);

        if outcome.is_err() {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }

        outcome
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
