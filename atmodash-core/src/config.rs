//! Backend endpoint configuration.

use crate::state::Coordinates;

/// Environment variable that overrides the backend base URL.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Base URL used when [`BASE_URL_ENV`] is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default coordinates shown before the user types anything (New Delhi).
pub const DEFAULT_LATITUDE: &str = "28.6139";
pub const DEFAULT_LONGITUDE: &str = "77.2090";

/// Resolved gateway configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub coords: Coordinates,
}

impl Config {
    /// Read the base URL from the environment, falling back to the default.
    ///
    /// An empty value counts as unset.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            coords: Coordinates::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            coords: Coordinates::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.coords, Coordinates::new("28.6139", "77.2090"));
    }
}
