//! HTTP gateway for the AQI and weather endpoints.
//!
//! The gateway is the single touchpoint with the backend. Every call settles
//! into a [`FetchOutcome`]: transport faults, error statuses, and undecodable
//! bodies are folded into [`GatewayError`] values rather than surfaced as
//! panics or raw client errors.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::outcome::{error_detail, join_readings, FetchOutcome, GatewayError, SettledReadings};
use crate::state::{AqiReading, Coordinates, WeatherReading};

/// The two datasets served by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dataset {
    Aqi,
    Weather,
}

impl Dataset {
    /// Endpoint path for this dataset.
    pub fn path(self) -> &'static str {
        match self {
            Dataset::Aqi => "/aqi",
            Dataset::Weather => "/weather",
        }
    }
}

/// Build the request URL for one dataset.
///
/// Coordinates are sent as the raw field text; validation is the backend's
/// job, so a malformed value still makes a well-formed request.
fn request_url(base_url: &str, dataset: Dataset, coords: &Coordinates) -> String {
    format!(
        "{}{}?lat={}&lon={}",
        base_url.trim_end_matches('/'),
        dataset.path(),
        urlencoding::encode(&coords.latitude),
        urlencoding::encode(&coords.longitude),
    )
}

/// Client for the dashboard backend.
#[derive(Clone, Debug)]
pub struct ApiGateway {
    client: reqwest::Client,
    base_url: String,
}

impl ApiGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current air quality reading.
    pub async fn fetch_aqi(&self, coords: &Coordinates) -> FetchOutcome<AqiReading> {
        self.request(Dataset::Aqi, coords).await
    }

    /// Fetch the current weather reading.
    pub async fn fetch_weather(&self, coords: &Coordinates) -> FetchOutcome<WeatherReading> {
        self.request(Dataset::Weather, coords).await
    }

    /// Issue both calls of one fetch round and wait for both to settle.
    ///
    /// The calls run concurrently against the same coordinate snapshot and
    /// neither aborts the other.
    pub async fn fetch_both(&self, coords: &Coordinates) -> SettledReadings {
        join_readings(self.fetch_aqi(coords), self.fetch_weather(coords)).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        dataset: Dataset,
        coords: &Coordinates,
    ) -> FetchOutcome<T> {
        let url = request_url(&self.base_url, dataset, coords);
        debug!(url = %url, "issuing request");

        let outcome = async {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| GatewayError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(GatewayError::Status {
                    status: status.as_u16(),
                    detail: error_detail(&body),
                });
            }

            response
                .json::<T>()
                .await
                .map_err(|e| GatewayError::Decode(e.to_string()))
        }
        .await;

        if let Err(error) = &outcome {
            warn!(url = %url, error = %error, "request failed");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_formats_query() {
        let coords = Coordinates::new("28.6139", "77.2090");
        assert_eq!(
            request_url("http://localhost:8000", Dataset::Aqi, &coords),
            "http://localhost:8000/aqi?lat=28.6139&lon=77.2090"
        );
        assert_eq!(
            request_url("http://localhost:8000", Dataset::Weather, &coords),
            "http://localhost:8000/weather?lat=28.6139&lon=77.2090"
        );
    }

    #[test]
    fn test_request_url_trims_trailing_slash() {
        let coords = Coordinates::new("51.5", "-0.12");
        assert_eq!(
            request_url("http://localhost:8000/", Dataset::Weather, &coords),
            "http://localhost:8000/weather?lat=51.5&lon=-0.12"
        );
    }

    #[test]
    fn test_request_url_encodes_raw_field_text() {
        let coords = Coordinates::new("28.6 north", "77,20");
        assert_eq!(
            request_url("http://localhost:8000", Dataset::Aqi, &coords),
            "http://localhost:8000/aqi?lat=28.6%20north&lon=77%2C20"
        );
    }
}
