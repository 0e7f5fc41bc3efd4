//! Actions consumed by the dashboard reducer.

use crate::outcome::SettledReadings;

/// Everything that can happen to the dashboard.
///
/// `Fetch` is the user intent; `ReadingsSettled` is its async result,
/// carrying both outcomes of the compound fetch at once.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Latitude input changed.
    SetLatitude(String),
    /// Longitude input changed.
    SetLongitude(String),
    /// Fetch both readings for the held coordinates.
    Fetch,
    /// Both gateway calls have produced an outcome.
    ReadingsSettled(SettledReadings),
}

impl Action {
    /// Static name for dispatch logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetLatitude(_) => "SetLatitude",
            Action::SetLongitude(_) => "SetLongitude",
            Action::Fetch => "Fetch",
            Action::ReadingsSettled(_) => "ReadingsSettled",
        }
    }
}
