//! UI components for the dashboard.
//!
//! Components are pure views: props carry every piece of read-only data a
//! render needs, `handle_event` turns raw input into actions, and nothing
//! here mutates application state directly. Internal UI state such as a
//! cursor position may live in `&mut self`.

pub mod aqi_card;
pub mod coord_form;
pub mod dashboard;
pub mod help_bar;
pub mod input_field;
pub mod weather_card;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::action::Action;
use crate::event::EventKind;

pub use aqi_card::{AqiCard, AqiCardProps};
pub use coord_form::{CoordForm, CoordFormProps};
pub use dashboard::{Dashboard, DashboardProps, SPINNERS};
pub use help_bar::{HelpBar, HelpBarProps};
pub use input_field::{InputField, InputFieldProps};
pub use weather_card::{WeatherCard, WeatherCardProps};

/// A pure UI element that renders from props and emits actions.
pub trait Component {
    /// Read-only data required to render the component.
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Render-only components keep the default, which emits nothing.
    #[allow(unused_variables)]
    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        Vec::new()
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
