//! Reducer for the TUI shell.
//!
//! Dashboard actions are delegated to the domain reducer; everything else
//! is shell state (focus, animation). No side effects happen here.

use atmodash_core::{reduce as reduce_dashboard, DispatchResult};

use crate::action::Action;
use crate::state::AppState;

/// Apply one action to the app state.
pub fn reduce(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        Action::Dashboard(action) => reduce_dashboard(&mut state.dashboard, action),

        Action::FocusNext => {
            state.focus = state.focus.next();
            DispatchResult::changed()
        }

        Action::FocusPrev => {
            state.focus = state.focus.prev();
            DispatchResult::changed()
        }

        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Only the loading spinner animates, so idle ticks skip the render.
            if state.dashboard.is_loading() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Quit is handled by the runtime loop, not here.
        Action::Quit => DispatchResult::unchanged(),
    }
}
