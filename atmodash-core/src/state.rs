//! Dashboard state: coordinates, readings, and the published view.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};

/// Geographic coordinates as entered by the user.
///
/// Both fields are free-form text and always present (possibly empty).
/// They are never parsed locally; the backend decides what is valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinates {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
    }
}

/// Air-quality reading from the `/aqi` endpoint.
///
/// Every field is optional: the backend passes through whatever its upstream
/// provider produced, so missing keys decode as absent rather than failing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AqiReading {
    /// Air-quality index on the provider's scale.
    pub aqi: Option<f64>,
    /// Pollutant concentrations keyed by name, ordered for stable display.
    pub components: BTreeMap<String, f64>,
    /// Unix timestamp of the measurement.
    pub timestamp: Option<i64>,
}

/// Weather reading from the `/weather` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeatherReading {
    /// Temperature in °C.
    pub temperature: Option<f64>,
    /// Apparent temperature in °C.
    pub feels_like: Option<f64>,
    /// Relative humidity in percent.
    pub humidity: Option<f64>,
    /// Atmospheric pressure in hPa.
    pub pressure: Option<f64>,
    /// Wind speed in m/s.
    pub wind_speed: Option<f64>,
    /// Short condition description ("Clear", "Rain", ...).
    pub condition: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Where the dashboard is in its fetch lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No fetch triggered yet.
    #[default]
    Idle,
    /// A compound fetch is in flight; further triggers are dropped.
    Loading,
    /// Both calls of the last fetch have settled.
    Settled,
}

/// The single published view of the dashboard.
///
/// One writer (the reducer, driven by the dispatch loop); everything else
/// reads it. The held coordinates live here too, but an in-flight fetch
/// works from its own snapshot taken at trigger time, so edits made while
/// loading never leak into a request already on the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    /// Coordinates as currently entered.
    pub coords: Coordinates,
    pub phase: Phase,
    /// Air-quality reading from the last settled fetch.
    pub aqi: Option<AqiReading>,
    /// Weather reading from the last settled fetch.
    pub weather: Option<WeatherReading>,
    /// Failure message from the last settled fetch, if any call failed.
    pub error: Option<String>,
}

impl DashboardState {
    /// Initial idle state holding the given coordinates.
    pub fn new(coords: Coordinates) -> Self {
        Self {
            coords,
            phase: Phase::Idle,
            aqi: None,
            weather: None,
            error: None,
        }
    }

    /// True while a compound fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(Coordinates::default())
    }
}
