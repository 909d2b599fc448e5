// ABOUTME: HTTP client for the remote cardiovascular prediction service
// ABOUTME: Ordinal payload encoding, response mapping, and a mock transport for testing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HeartWise Score

//! Remote prediction service client
//!
//! One `POST {base_url}/predict` per scoring call: a single attempt with no
//! retry and no cancellation support. Categorical fields are re-encoded as
//! ordinal integers on the wire, matching the cardiovascular training
//! dataset's column conventions (`ap_hi`, `gluc`, `smoke`, ...).

use crate::errors::{AppError, AppResult};
use crate::models::{DerivedFeatures, HealthInput, RiskLevel, RiskResult};
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use uuid::Uuid;

/// Service name used in error messages and logs
const SERVICE_NAME: &str = "prediction service";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Prediction service client configuration
#[derive(Debug, Clone)]
pub struct PredictionClientConfig {
    /// Base URL of the prediction service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for PredictionClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl PredictionClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads `HEARTWISE_PREDICTION_URL`; timeouts fall back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("HEARTWISE_PREDICTION_URL") {
            config.base_url = url;
        }
        config
    }
}

/// Wire payload for one prediction request
///
/// Carries the raw inputs re-encoded as ordinals (gender Male=1/Female=0,
/// exam tiers 1-3, booleans 0/1) together with the derived features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Age in years
    pub age: u32,
    /// Gender ordinal (0 = female, 1 = male)
    pub gender: u8,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Systolic blood pressure (mmHg)
    pub ap_hi: f64,
    /// Diastolic blood pressure (mmHg)
    pub ap_lo: f64,
    /// Cholesterol tier ordinal (1-3)
    pub cholesterol: u8,
    /// Glucose tier ordinal (1-3)
    pub gluc: u8,
    /// Smoking flag (0/1)
    pub smoke: u8,
    /// Alcohol flag (0/1)
    pub alco: u8,
    /// Physical activity flag (0/1)
    pub active: u8,
    /// Body Mass Index (rounded to two decimals)
    pub bmi: f64,
    /// Pulse pressure (mmHg)
    pub pulse_pressure: f64,
    /// Mean arterial pressure (mmHg)
    pub map: f64,
    /// Age x BMI interaction term
    pub age_bmi_interaction: f64,
    /// Pulse pressure x MAP interaction term
    pub pulse_map_interaction: f64,
}

impl PredictionRequest {
    /// Build the wire payload from one input and its derived features
    #[must_use]
    pub fn new(input: &HealthInput, features: &DerivedFeatures) -> Self {
        Self {
            age: input.age,
            gender: input.gender.ordinal(),
            height: input.height_cm,
            weight: input.weight_kg,
            ap_hi: input.systolic,
            ap_lo: input.diastolic,
            cholesterol: input.cholesterol.ordinal(),
            gluc: input.glucose.ordinal(),
            smoke: u8::from(input.smoking),
            alco: u8::from(input.alcohol),
            active: u8::from(input.physically_active),
            bmi: features.bmi,
            pulse_pressure: features.pulse_pressure,
            map: features.mean_arterial_pressure,
            age_bmi_interaction: features.age_bmi_interaction,
            pulse_map_interaction: features.pulse_map_interaction,
        }
    }
}

/// Wire response from the prediction service
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Binary prediction (0 = low risk, 1 = high risk)
    pub prediction: u8,
    /// Risk probability as a percentage, passed through unchanged
    pub probability: f64,
}

impl PredictionResponse {
    /// Map the wire response into a [`RiskResult`]
    ///
    /// # Errors
    ///
    /// Returns `AppError::ExternalServiceError` if the prediction value is
    /// neither 0 nor 1.
    pub fn into_result(self) -> AppResult<RiskResult> {
        let risk = match self.prediction {
            0 => RiskLevel::Low,
            1 => RiskLevel::High,
            other => {
                return Err(AppError::external_service(
                    SERVICE_NAME,
                    format!("prediction value {other} is not 0 or 1"),
                ))
            }
        };

        Ok(RiskResult {
            risk,
            probability: self.probability,
        })
    }
}

/// Transport seam over the prediction service
///
/// [`PredictionClient`] is the HTTP implementation; [`MockPredictionApi`]
/// provides canned responses and forced failures for tests.
#[async_trait::async_trait]
pub trait PredictionApi: Send + Sync {
    /// Submit one prediction request
    ///
    /// # Errors
    ///
    /// Returns an external-service error for network failures, non-2xx
    /// responses, and malformed bodies.
    async fn predict(&self, request: &PredictionRequest) -> AppResult<PredictionResponse>;
}

/// HTTP client for the prediction service
pub struct PredictionClient {
    config: PredictionClientConfig,
    http_client: Client,
}

impl PredictionClient {
    /// Create a new prediction client
    #[must_use]
    pub fn new(config: PredictionClientConfig) -> Self {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            config,
            http_client,
        }
    }

    /// Create a client configured from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(PredictionClientConfig::from_env())
    }
}

#[async_trait::async_trait]
impl PredictionApi for PredictionClient {
    async fn predict(&self, request: &PredictionRequest) -> AppResult<PredictionResponse> {
        let request_id = Uuid::new_v4();
        let url = format!("{}/predict", self.config.base_url);

        tracing::debug!(
            request.id = %request_id,
            url = %url,
            "submitting prediction request"
        );

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service_unavailable(SERVICE_NAME, e.to_string())
                    .with_request_id(request_id)
                    .with_source(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("HTTP {status}: {body}"),
            )
            .with_request_id(request_id));
        }

        response
            .json::<PredictionResponse>()
            .await
            .map_err(|e| {
                AppError::external_service(SERVICE_NAME, format!("malformed response body: {e}"))
                    .with_request_id(request_id)
                    .with_source(e)
            })
    }
}

/// Mock prediction transport for testing (no HTTP calls)
pub struct MockPredictionApi {
    behavior: MockBehavior,
}

enum MockBehavior {
    Respond(PredictionResponse),
    FailUnavailable,
    FailHttp(u16),
}

impl MockPredictionApi {
    /// Mock that always returns the given response
    #[must_use]
    pub const fn with_response(response: PredictionResponse) -> Self {
        Self {
            behavior: MockBehavior::Respond(response),
        }
    }

    /// Mock that simulates a network failure
    #[must_use]
    pub const fn unreachable() -> Self {
        Self {
            behavior: MockBehavior::FailUnavailable,
        }
    }

    /// Mock that simulates a non-2xx HTTP response
    #[must_use]
    pub const fn failing_with_status(status: u16) -> Self {
        Self {
            behavior: MockBehavior::FailHttp(status),
        }
    }
}

#[async_trait::async_trait]
impl PredictionApi for MockPredictionApi {
    async fn predict(&self, _request: &PredictionRequest) -> AppResult<PredictionResponse> {
        match self.behavior {
            MockBehavior::Respond(response) => Ok(response),
            MockBehavior::FailUnavailable => Err(AppError::external_service_unavailable(
                SERVICE_NAME,
                "connection refused",
            )),
            MockBehavior::FailHttp(status) => Err(AppError::external_service(
                SERVICE_NAME,
                format!("HTTP {status}: "),
            )),
        }
    }
}
