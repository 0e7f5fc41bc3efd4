//! Application state for the TUI shell.
//!
//! Components receive `&AppState` as props and never mutate it; the reducer
//! is the single writer. Domain state lives in [`DashboardState`], the shell
//! only adds what the terminal UI needs on top.

use atmodash_core::DashboardState;

/// Milliseconds between animation ticks.
pub const LOADING_ANIM_TICK_MS: u64 = 100;

/// Which form control currently receives keyboard input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Latitude,
    Longitude,
    FetchButton,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Latitude => Focus::Longitude,
            Focus::Longitude => Focus::FetchButton,
            Focus::FetchButton => Focus::Latitude,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Latitude => Focus::FetchButton,
            Focus::Longitude => Focus::Latitude,
            Focus::FetchButton => Focus::Longitude,
        }
    }
}

/// Everything the UI needs to render.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Dashboard domain state: coordinates, phase, readings, error.
    pub dashboard: DashboardState,
    /// Keyboard focus within the coordinate form.
    pub focus: Focus,
    /// Animation frame counter (for the loading spinner).
    pub tick_count: u32,
}

impl AppState {
    pub fn new(dashboard: DashboardState) -> Self {
        Self {
            dashboard,
            focus: Focus::default(),
            tick_count: 0,
        }
    }
}
