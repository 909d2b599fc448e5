// ABOUTME: Integration tests for the remote scorer using the mock prediction transport
// ABOUTME: Covers response mapping, failure surfacing, the legacy safe default, and diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HeartWise Score

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use heartwise_score::errors::ErrorCode;
use heartwise_score::external::{MockPredictionApi, PredictionResponse, RemoteScorer};
use heartwise_score::intelligence::derive_features;
use heartwise_score::models::{ExamLevel, Gender, HealthInput, RiskLevel, RiskResult};
use heartwise_score::scoring::RiskScorer;

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

#[tokio::test]
async fn test_remote_success_maps_prediction_to_risk_level() {
    let scorer = RemoteScorer::new(MockPredictionApi::with_response(PredictionResponse {
        prediction: 1,
        probability: 67.3,
    }));

    let input = reference_input();
    let features = derive_features(&input);
    let result = scorer.score(&input, &features).await.unwrap();

    assert_eq!(result.risk, RiskLevel::High);
    // Probability passes through the backend's value unchanged
    assert!((result.probability - 67.3).abs() < f64::EPSILON);
    assert_eq!(scorer.failure_count(), 0);
}

#[tokio::test]
async fn test_remote_low_prediction_maps_to_low() {
    let scorer = RemoteScorer::new(MockPredictionApi::with_response(PredictionResponse {
        prediction: 0,
        probability: 8.1,
    }));

    let input = reference_input();
    let features = derive_features(&input);
    let result = scorer.score(&input, &features).await.unwrap();
    assert_eq!(result.risk, RiskLevel::Low);
}

#[tokio::test]
async fn test_score_surfaces_network_failure_as_error() {
    let scorer = RemoteScorer::new(MockPredictionApi::unreachable());

    let input = reference_input();
    let features = derive_features(&input);
    let err = scorer.score(&input, &features).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(scorer.failure_count(), 1);
}

#[tokio::test]
async fn test_score_surfaces_http_failure_as_error() {
    let scorer = RemoteScorer::new(MockPredictionApi::failing_with_status(503));

    let input = reference_input();
    let features = derive_features(&input);
    let err = scorer.score(&input, &features).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(scorer.failure_count(), 1);
}

#[tokio::test]
async fn test_score_or_default_returns_exact_safe_default_on_failure() {
    let scorer = RemoteScorer::new(MockPredictionApi::unreachable());

    let input = reference_input();
    let features = derive_features(&input);
    let result = scorer.score_or_default(&input, &features).await;

    assert_eq!(result, RiskResult::SAFE_DEFAULT);
    assert_eq!(result.risk, RiskLevel::Low);
    assert!((result.probability - 0.0).abs() < f64::EPSILON);
    assert_eq!(scorer.failure_count(), 1);
}

#[tokio::test]
async fn test_score_or_default_passes_successes_through() {
    let scorer = RemoteScorer::new(MockPredictionApi::with_response(PredictionResponse {
        prediction: 1,
        probability: 55.0,
    }));

    let input = reference_input();
    let features = derive_features(&input);
    let result = scorer.score_or_default(&input, &features).await;

    assert_eq!(result.risk, RiskLevel::High);
    assert!((result.probability - 55.0).abs() < f64::EPSILON);
    assert_eq!(scorer.failure_count(), 0);
}

#[tokio::test]
async fn test_failure_count_accumulates_across_calls() {
    let scorer = RemoteScorer::new(MockPredictionApi::failing_with_status(500));

    let input = reference_input();
    let features = derive_features(&input);
    for _ in 0..3 {
        let _ = scorer.score_or_default(&input, &features).await;
    }
    assert_eq!(scorer.failure_count(), 3);
}

#[tokio::test]
async fn test_remote_scoring_is_idempotent_with_deterministic_backend() {
    let scorer = RemoteScorer::new(MockPredictionApi::with_response(PredictionResponse {
        prediction: 0,
        probability: 14.2,
    }));

    let input = reference_input();
    let features = derive_features(&input);
    let first = scorer.score(&input, &features).await.unwrap();
    let second = scorer.score(&input, &features).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_malformed_prediction_value_is_an_error() {
    let scorer = RemoteScorer::new(MockPredictionApi::with_response(PredictionResponse {
        prediction: 7,
        probability: 50.0,
    }));

    let input = reference_input();
    let features = derive_features(&input);
    let err = scorer.score(&input, &features).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(scorer.failure_count(), 1);
}
