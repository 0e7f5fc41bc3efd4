//! Pure state transitions for the dashboard.
//!
//! The reducer is the only writer of [`DashboardState`]. It mutates state,
//! reports whether anything changed, and declares effects; it never performs
//! I/O itself. Fetch work is described as an [`Effect`] and executed by the
//! runtime's effect handler.

use crate::action::Action;
use crate::effect::{DispatchResult, Effect};
use crate::state::{DashboardState, Phase};

/// Apply one action to the dashboard state.
pub fn reduce(state: &mut DashboardState, action: Action) -> DispatchResult {
    match action {
        Action::SetLatitude(value) => {
            state.coords.latitude = value;
            DispatchResult::changed()
        }

        Action::SetLongitude(value) => {
            state.coords.longitude = value;
            DispatchResult::changed()
        }

        Action::Fetch => {
            if state.is_loading() {
                // One round in flight at a time; extra requests are dropped,
                // not queued, and the running calls are left alone.
                return DispatchResult::unchanged();
            }
            state.phase = Phase::Loading;
            state.error = None;
            DispatchResult::changed_with(Effect::FetchReadings {
                coords: state.coords.clone(),
            })
        }

        Action::ReadingsSettled(settled) => {
            state.phase = Phase::Settled;
            state.error = settled.error_message();
            // Wholesale replacement: a failed call clears its slot rather
            // than leaving a stale reading behind.
            state.aqi = settled.aqi.ok();
            state.weather = settled.weather.ok();
            DispatchResult::changed()
        }
    }
}
