//! Coordinate entry form: latitude, longitude, and the fetch button.

use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use atmodash_core::{Action as DashboardAction, Coordinates};

use super::{Component, InputField, InputFieldProps};
use crate::action::Action;
use crate::event::EventKind;
use crate::state::Focus;

fn latitude_changed(value: String) -> Action {
    DashboardAction::SetLatitude(value).into()
}

fn longitude_changed(value: String) -> Action {
    DashboardAction::SetLongitude(value).into()
}

/// Props for [`CoordForm`].
pub struct CoordFormProps<'a> {
    /// Coordinates as currently entered.
    pub coords: &'a Coordinates,
    /// Which control owns keyboard focus.
    pub focus: Focus,
    /// Whether a fetch round is in flight (changes the button caption).
    pub is_loading: bool,
}

/// The coordinate form.
///
/// Enter triggers a fetch from anywhere in the form, Tab and Shift+Tab move
/// focus, everything else is routed to the focused text field.
pub struct CoordForm {
    latitude: InputField,
    longitude: InputField,
}

impl CoordForm {
    /// Form with cursors placed after the starting values.
    pub fn new(coords: &Coordinates) -> Self {
        Self {
            latitude: InputField::end_of(&coords.latitude),
            longitude: InputField::end_of(&coords.longitude),
        }
    }
}

impl Component for CoordForm {
    type Props<'a> = CoordFormProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if let EventKind::Key(key) = event {
            match key.code {
                // The reducer drops the trigger while a round is in flight.
                KeyCode::Enter => return vec![DashboardAction::Fetch.into()],
                KeyCode::Tab => return vec![Action::FocusNext],
                KeyCode::BackTab => return vec![Action::FocusPrev],
                _ => {}
            }
        }

        match props.focus {
            Focus::Latitude => self.latitude.handle_event(
                event,
                InputFieldProps {
                    value: &props.coords.latitude,
                    label: "Latitude",
                    is_focused: true,
                    on_change: latitude_changed,
                },
            ),
            Focus::Longitude => self.longitude.handle_event(
                event,
                InputFieldProps {
                    value: &props.coords.longitude,
                    label: "Longitude",
                    is_focused: true,
                    on_change: longitude_changed,
                },
            ),
            Focus::FetchButton => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::horizontal([
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ])
        .split(area);

        self.latitude.render(
            frame,
            chunks[0],
            InputFieldProps {
                value: &props.coords.latitude,
                label: "Latitude",
                is_focused: props.focus == Focus::Latitude,
                on_change: latitude_changed,
            },
        );
        self.longitude.render(
            frame,
            chunks[1],
            InputFieldProps {
                value: &props.coords.longitude,
                label: "Longitude",
                is_focused: props.focus == Focus::Longitude,
                on_change: longitude_changed,
            },
        );

        let caption = if props.is_loading {
            "[ Loading... ]"
        } else {
            "[ Fetch ]"
        };
        let style = if props.focus == Focus::FetchButton {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Cyan)
        };

        // Center the button vertically against the bordered fields.
        let [button_area] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(chunks[2]);
        frame.render_widget(Paragraph::new(caption).style(style).centered(), button_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{char_key, key, RenderHarness};

    fn form_props(coords: &Coordinates, focus: Focus) -> CoordFormProps<'_> {
        CoordFormProps {
            coords,
            focus,
            is_loading: false,
        }
    }

    #[test]
    fn test_enter_triggers_a_fetch_from_any_control() {
        let coords = Coordinates::default();
        let mut form = CoordForm::new(&coords);

        for focus in [Focus::Latitude, Focus::Longitude, Focus::FetchButton] {
            let actions = form.handle_event(
                &EventKind::Key(key(KeyCode::Enter)),
                form_props(&coords, focus),
            );
            assert_eq!(actions, vec![Action::Dashboard(DashboardAction::Fetch)]);
        }
    }

    #[test]
    fn test_tab_cycles_focus() {
        let coords = Coordinates::default();
        let mut form = CoordForm::new(&coords);

        let actions = form.handle_event(
            &EventKind::Key(key(KeyCode::Tab)),
            form_props(&coords, Focus::Latitude),
        );
        assert_eq!(actions, vec![Action::FocusNext]);

        let actions = form.handle_event(
            &EventKind::Key(key(KeyCode::BackTab)),
            form_props(&coords, Focus::Latitude),
        );
        assert_eq!(actions, vec![Action::FocusPrev]);
    }

    #[test]
    fn test_typing_edits_the_focused_field() {
        let coords = Coordinates::new("28.6139", "77.2090");
        let mut form = CoordForm::new(&coords);

        let actions = form.handle_event(
            &EventKind::Key(char_key('5')),
            form_props(&coords, Focus::Longitude),
        );

        assert_eq!(
            actions,
            vec![Action::Dashboard(DashboardAction::SetLongitude(
                "77.20905".into()
            ))]
        );
    }

    #[test]
    fn test_button_focus_swallows_text_keys() {
        let coords = Coordinates::default();
        let mut form = CoordForm::new(&coords);

        let actions = form.handle_event(
            &EventKind::Key(char_key('x')),
            form_props(&coords, Focus::FetchButton),
        );

        assert!(actions.is_empty());
    }

    #[test]
    fn test_render_shows_fields_and_button() {
        let coords = Coordinates::new("28.6139", "77.2090");
        let mut form = CoordForm::new(&coords);

        let mut render = RenderHarness::new(70, 3);
        let output = render.render_to_string_plain(|frame| {
            form.render(frame, frame.area(), form_props(&coords, Focus::Latitude));
        });

        assert!(output.contains("Latitude"), "Should label latitude");
        assert!(output.contains("Longitude"), "Should label longitude");
        assert!(output.contains("28.6139"), "Should show latitude value");
        assert!(output.contains("77.2090"), "Should show longitude value");
        assert!(output.contains("[ Fetch ]"), "Should show the button");
    }

    #[test]
    fn test_render_loading_button_caption() {
        let coords = Coordinates::default();
        let mut form = CoordForm::new(&coords);

        let mut render = RenderHarness::new(70, 3);
        let output = render.render_to_string_plain(|frame| {
            form.render(
                frame,
                frame.area(),
                CoordFormProps {
                    coords: &coords,
                    focus: Focus::FetchButton,
                    is_loading: true,
                },
            );
        });

        assert!(output.contains("[ Loading... ]"), "Should show busy caption");
    }
}
