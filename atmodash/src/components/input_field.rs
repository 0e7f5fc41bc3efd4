//! Single-line text field with a movable cursor.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::Component;
use crate::action::Action;
use crate::event::EventKind;

/// Props for [`InputField`].
pub struct InputFieldProps<'a> {
    /// Current field text.
    pub value: &'a str,
    /// Label drawn in the border title.
    pub label: &'a str,
    /// Whether the field owns keyboard focus.
    pub is_focused: bool,
    /// Maps an edited value to the action that stores it.
    pub on_change: fn(String) -> Action,
}

/// A bordered one-line text input.
///
/// The value itself lives in application state; the component only keeps
/// the cursor (a byte index into the value) and emits `on_change` actions
/// for every edit.
#[derive(Default)]
pub struct InputField {
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field with the cursor placed after the existing text.
    pub fn end_of(value: &str) -> Self {
        Self {
            cursor: value.len(),
        }
    }

    /// Keep the cursor inside the current value.
    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
    }

    fn move_left(&mut self, value: &str) {
        self.cursor = value[..self.cursor]
            .char_indices()
            .last()
            .map_or(0, |(i, _)| i);
    }

    fn move_right(&mut self, value: &str) {
        if let Some(c) = value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn insert(&mut self, value: &str, c: char) -> String {
        let mut next = String::with_capacity(value.len() + c.len_utf8());
        next.push_str(&value[..self.cursor]);
        next.push(c);
        next.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        next
    }

    /// Backspace: drop the character before the cursor.
    fn delete_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let start = value[..self.cursor]
            .char_indices()
            .last()
            .map_or(0, |(i, _)| i);
        let mut next = String::with_capacity(value.len());
        next.push_str(&value[..start]);
        next.push_str(&value[self.cursor..]);
        self.cursor = start;
        Some(next)
    }

    /// Delete: drop the character under the cursor.
    fn delete_at(&self, value: &str) -> Option<String> {
        let c = value[self.cursor..].chars().next()?;
        let mut next = String::with_capacity(value.len() - c.len_utf8());
        next.push_str(&value[..self.cursor]);
        next.push_str(&value[self.cursor + c.len_utf8()..]);
        Some(next)
    }
}

impl Component for InputField {
    type Props<'a> = InputFieldProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused {
            return Vec::new();
        }
        self.clamp_cursor(props.value);

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('a') => self.cursor = 0,
                KeyCode::Char('e') => self.cursor = props.value.len(),
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    return vec![(props.on_change)(String::new())];
                }
                _ => {}
            }
            return Vec::new();
        }

        match key.code {
            KeyCode::Char(c) => {
                let next = self.insert(props.value, c);
                vec![(props.on_change)(next)]
            }
            KeyCode::Backspace => self
                .delete_before(props.value)
                .map(|v| (props.on_change)(v))
                .into_iter()
                .collect(),
            KeyCode::Delete => self
                .delete_at(props.value)
                .map(|v| (props.on_change)(v))
                .into_iter()
                .collect(),
            KeyCode::Left => {
                self.move_left(props.value);
                Vec::new()
            }
            KeyCode::Right => {
                self.move_right(props.value);
                Vec::new()
            }
            KeyCode::Home => {
                self.cursor = 0;
                Vec::new()
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(props.label);
        let inner = block.inner(area);

        frame.render_widget(Paragraph::new(props.value).block(block), area);

        if props.is_focused {
            let cursor_x = inner.x + self.cursor as u16;
            if cursor_x < inner.x + inner.width {
                frame.set_cursor_position((cursor_x, inner.y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{char_key, ctrl_key, key, RenderHarness};
    use atmodash_core::Action as DashboardAction;

    fn changed(value: String) -> Action {
        DashboardAction::SetLatitude(value).into()
    }

    fn props(value: &str, is_focused: bool) -> InputFieldProps<'_> {
        InputFieldProps {
            value,
            label: "Latitude",
            is_focused,
            on_change: changed,
        }
    }

    #[test]
    fn test_typing_inserts_at_cursor() {
        let mut field = InputField::end_of("28.");

        let actions = field.handle_event(&EventKind::Key(char_key('6')), props("28.", true));

        assert_eq!(actions, vec![changed("28.6".into())]);
    }

    #[test]
    fn test_typing_mid_value() {
        let mut field = InputField::new();
        field.handle_event(&EventKind::Key(key(KeyCode::Right)), props("286", true));

        let actions = field.handle_event(&EventKind::Key(char_key('.')), props("286", true));

        assert_eq!(actions, vec![changed("2.86".into())]);
    }

    #[test]
    fn test_backspace_removes_previous_char() {
        let mut field = InputField::end_of("28.6");

        let actions = field.handle_event(&EventKind::Key(key(KeyCode::Backspace)), props("28.6", true));

        assert_eq!(actions, vec![changed("28.".into())]);
    }

    #[test]
    fn test_backspace_at_start_is_ignored() {
        let mut field = InputField::new();

        let actions = field.handle_event(&EventKind::Key(key(KeyCode::Backspace)), props("28.6", true));

        assert!(actions.is_empty());
    }

    #[test]
    fn test_delete_removes_char_under_cursor() {
        let mut field = InputField::new();

        let actions = field.handle_event(&EventKind::Key(key(KeyCode::Delete)), props("77.2", true));

        assert_eq!(actions, vec![changed("7.2".into())]);
    }

    #[test]
    fn test_ctrl_u_clears_the_field() {
        let mut field = InputField::end_of("28.6139");

        let actions = field.handle_event(&EventKind::Key(ctrl_key('u')), props("28.6139", true));

        assert_eq!(actions, vec![changed(String::new())]);
    }

    #[test]
    fn test_unfocused_field_ignores_keys() {
        let mut field = InputField::new();

        let actions = field.handle_event(&EventKind::Key(char_key('9')), props("28.6", false));

        assert!(actions.is_empty());
    }

    #[test]
    fn test_cursor_clamps_to_shorter_value() {
        let mut field = InputField::end_of("28.6139");

        // The value shrank since the cursor was placed; typing must not panic
        // and should append at the new end.
        let actions = field.handle_event(&EventKind::Key(char_key('5')), props("28", true));

        assert_eq!(actions, vec![changed("285".into())]);
    }

    #[test]
    fn test_render_shows_label_and_value() {
        let mut render = RenderHarness::new(24, 3);
        let mut field = InputField::end_of("28.6139");

        let output = render.render_to_string_plain(|frame| {
            field.render(frame, frame.area(), props("28.6139", true));
        });

        assert!(output.contains("Latitude"), "Should show label");
        assert!(output.contains("28.6139"), "Should show value");
    }
}
