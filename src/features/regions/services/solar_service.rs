use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::core::config::SolarConfig;

/// Climatology parameter requested from NASA POWER: all-sky surface
/// shortwave downward irradiance (kWh/m^2/day)
const IRRADIANCE_PARAMETER: &str = "ALLSKY_SFC_SW_DWN";

/// Key of the annual-mean entry in the climatology response
const ANNUAL_MEAN_KEY: &str = "ANN";

/// Why a solar-flux lookup produced no value.
///
/// The collaborator is best-effort: callers log the reason and degrade to a
/// null field, they never surface this as a request failure.
#[derive(Debug, Error)]
pub enum SolarFluxError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status: {0}")]
    BadStatus(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// NASA POWER climatology response structure
#[derive(Debug, Deserialize)]
pub struct PowerResponse {
    pub properties: PowerProperties,
}

#[derive(Debug, Deserialize)]
pub struct PowerProperties {
    pub parameter: HashMap<String, HashMap<String, f64>>,
}

impl PowerResponse {
    /// Pull the annual-mean irradiance out of the parameter map
    fn annual_mean(&self) -> Option<f64> {
        self.properties
            .parameter
            .get(IRRADIANCE_PARAMETER)
            .and_then(|series| series.get(ANNUAL_MEAN_KEY))
            .copied()
    }
}

/// Client for the NASA POWER climatology point endpoint
pub struct SolarFluxService {
    client: reqwest::Client,
    base_url: String,
}

impl SolarFluxService {
    pub fn new(config: &SolarConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("ChargeGridCore/1.0 (ev-station-admin)")
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.base_url.clone(),
        }
    }

    /// Fetch the annual-mean solar irradiance for a point.
    ///
    /// No retries; the timeout comes from configuration.
    pub async fn annual_mean_irradiance(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> std::result::Result<f64, SolarFluxError> {
        let url = format!(
            "{}/api/temporal/climatology/point?parameters={}&community=RE&longitude={}&latitude={}&format=JSON",
            self.base_url, IRRADIANCE_PARAMETER, longitude, latitude
        );

        tracing::debug!("Fetching solar flux: ({}, {}) -> {}", latitude, longitude, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                SolarFluxError::Timeout
            } else {
                SolarFluxError::Network(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(SolarFluxError::BadStatus(response.status().as_u16()));
        }

        let body: PowerResponse = response
            .json()
            .await
            .map_err(|e| SolarFluxError::Malformed(e.to_string()))?;

        body.annual_mean().ok_or_else(|| {
            SolarFluxError::Malformed(format!(
                "response missing {}/{}",
                IRRADIANCE_PARAMETER, ANNUAL_MEAN_KEY
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_response_annual_mean() {
        let raw = r#"
        {
            "properties": {
                "parameter": {
                    "ALLSKY_SFC_SW_DWN": {
                        "JAN": 5.12,
                        "FEB": 5.68,
                        "ANN": 5.46
                    }
                }
            }
        }
        "#;

        let parsed: PowerResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.annual_mean(), Some(5.46));
    }

    #[test]
    fn test_power_response_missing_annual_mean() {
        let raw = r#"{"properties": {"parameter": {"ALLSKY_SFC_SW_DWN": {"JAN": 5.12}}}}"#;
        let parsed: PowerResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.annual_mean(), None);
    }

    #[test]
    fn test_power_response_missing_parameter_is_error_not_panic() {
        let raw = r#"{"properties": {"parameter": {}}}"#;
        let parsed: PowerResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.annual_mean(), None);
    }
}
