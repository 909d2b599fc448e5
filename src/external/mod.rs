// ABOUTME: External service integrations for the HeartWise Score library
// ABOUTME: Remote prediction API client, transport trait, and remote scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HeartWise Score

//! External prediction service integration

/// Prediction API client, wire types, and mock transport
pub mod prediction;

/// Remote scorer over a prediction transport
pub mod remote;

pub use prediction::{
    MockPredictionApi, PredictionApi, PredictionClient, PredictionClientConfig, PredictionRequest,
    PredictionResponse,
};
pub use remote::RemoteScorer;
