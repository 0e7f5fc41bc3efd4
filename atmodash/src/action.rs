//! Actions for the TUI shell.

use atmodash_core::Action as DashboardAction;

/// Everything that can happen in the app.
///
/// Dashboard actions are wrapped verbatim and forwarded to the domain
/// reducer; the remaining variants drive the shell itself.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Forwarded to the dashboard reducer.
    Dashboard(DashboardAction),
    /// Move focus to the next form control.
    FocusNext,
    /// Move focus to the previous form control.
    FocusPrev,
    /// Animation tick.
    Tick,
    /// Leave the application.
    Quit,
}

impl Action {
    /// Static name for dispatch logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Dashboard(inner) => inner.name(),
            Action::FocusNext => "FocusNext",
            Action::FocusPrev => "FocusPrev",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}

impl From<DashboardAction> for Action {
    fn from(action: DashboardAction) -> Self {
        Action::Dashboard(action)
    }
}
