//! Fetch outcomes: normalized failures and the compound join.
//!
//! Every gateway call ends in a [`FetchOutcome`]; nothing downstream of the
//! gateway ever sees a raised transport fault. [`join_readings`] is the
//! fan-in point for the two calls of one fetch: both outcomes are collected
//! before anyone gets to look at either.

use std::fmt;
use std::future::Future;

use crate::state::{AqiReading, WeatherReading};

/// Result of one gateway call.
pub type FetchOutcome<T> = Result<T, GatewayError>;

/// A gateway failure, normalized at the boundary.
///
/// `Display` is the user-facing message: the structured detail from the
/// response body when one exists, otherwise a generic description. The
/// variants keep the taxonomy inspectable without tying callers to any
/// transport library's error shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a response.
    Transport(String),
    /// The server answered with a non-success status.
    Status { status: u16, detail: Option<String> },
    /// A success response whose body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Transport(msg) => write!(f, "{}", msg),
            GatewayError::Status { status, detail } => match detail {
                Some(detail) => write!(f, "{}", detail),
                None => write!(f, "request failed with status {}", status),
            },
            GatewayError::Decode(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Extract the structured `detail` field from a JSON error body.
///
/// String details are taken verbatim. Other non-null shapes (validation
/// errors arrive as arrays) are rendered as compact JSON rather than
/// dropped. Anything unparseable yields `None` and the caller falls back
/// to a generic message.
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Both outcomes of one compound fetch, available only once both settled.
#[derive(Clone, Debug, PartialEq)]
pub struct SettledReadings {
    pub aqi: FetchOutcome<AqiReading>,
    pub weather: FetchOutcome<WeatherReading>,
}

impl SettledReadings {
    /// The message to publish, if any call failed.
    ///
    /// When both failed, the AQI message wins (first-declared order).
    pub fn error_message(&self) -> Option<String> {
        self.aqi
            .as_ref()
            .err()
            .or(self.weather.as_ref().err())
            .map(|e| e.to_string())
    }
}

/// Await both gateway calls and collect their outcomes.
///
/// The two futures start in the same event-loop turn and progress
/// concurrently; neither short-circuits the other. The settled pair is the
/// same no matter which call finishes first.
pub async fn join_readings<A, W>(aqi: A, weather: W) -> SettledReadings
where
    A: Future<Output = FetchOutcome<AqiReading>>,
    W: Future<Output = FetchOutcome<WeatherReading>>,
{
    let (aqi, weather) = tokio::join!(aqi, weather);
    SettledReadings { aqi, weather }
}
