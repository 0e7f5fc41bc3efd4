//! Domain core for atmodash: state, actions, and the fetch pipeline.
//!
//! This crate is UI-free. It provides:
//!
//! - **State**: [`DashboardState`], the single published view of the dashboard
//! - **Actions**: [`Action`] values describing every state change
//! - **Reducer**: [`reduce`], the only writer of the state
//! - **Gateway**: [`ApiGateway`], the HTTP boundary where every failure is
//!   normalized into a [`GatewayError`] value
//! - **Outcomes**: [`SettledReadings`], the joined result of one fetch round
//!
//! A fetch round runs as: [`Action::Fetch`] marks the state loading and emits
//! [`Effect::FetchReadings`] with a snapshot of the current coordinates; the
//! runtime calls [`ApiGateway::fetch_both`], which issues both requests
//! concurrently and waits for both to settle; the pair comes back as
//! [`Action::ReadingsSettled`] and is folded into the state. Triggers that
//! arrive while a round is in flight are dropped, and in-flight calls are
//! never cancelled.

pub mod action;
pub mod config;
pub mod effect;
pub mod gateway;
pub mod outcome;
pub mod reducer;
pub mod state;

pub use action::Action;
pub use config::{Config, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
pub use effect::{DispatchResult, Effect};
pub use gateway::ApiGateway;
pub use outcome::{error_detail, join_readings, FetchOutcome, GatewayError, SettledReadings};
pub use reducer::reduce;
pub use state::{AqiReading, Coordinates, DashboardState, Phase, WeatherReading};
