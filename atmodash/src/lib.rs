//! Terminal dashboard for live air quality and weather readings.
//!
//! The UI is a single screen: a coordinate form on top, one card per
//! reading below. State handling follows a dispatch loop. Components turn
//! key presses into actions, [`reduce`] folds actions into [`AppState`]
//! and declares effects, and the [`runtime`] performs those effects and
//! feeds their results back in as actions. Domain rules (the fetch
//! lifecycle, error precedence, endpoint access) live in `atmodash-core`;
//! this crate only adds the terminal shell around them.

pub mod action;
pub mod components;
pub mod event;
pub mod logging;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod testing;

pub use action::Action;
pub use reducer::reduce;
pub use state::{AppState, Focus, LOADING_ANIM_TICK_MS};
