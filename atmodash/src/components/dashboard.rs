//! Root component: coordinate form, status line, and the two reading cards.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use atmodash_core::Phase;

use super::{
    AqiCard, AqiCardProps, Component, CoordForm, CoordFormProps, HelpBar, HelpBarProps,
    WeatherCard, WeatherCardProps,
};
use crate::action::Action;
use crate::event::EventKind;
use crate::state::AppState;

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Props for [`Dashboard`].
pub struct DashboardProps<'a> {
    pub state: &'a AppState,
}

/// The full-screen dashboard.
pub struct Dashboard {
    form: CoordForm,
}

impl Dashboard {
    /// Build the dashboard with form cursors matching the starting state.
    pub fn new(state: &AppState) -> Self {
        Self {
            form: CoordForm::new(&state.dashboard.coords),
        }
    }
}

impl Component for Dashboard {
    type Props<'a> = DashboardProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if let EventKind::Key(key) = event {
            let ctrl_c =
                key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
            if key.code == KeyCode::Esc || ctrl_c {
                return vec![Action::Quit];
            }
        }

        let state = props.state;
        self.form.handle_event(
            event,
            CoordFormProps {
                coords: &state.dashboard.coords,
                focus: state.focus,
                is_loading: state.dashboard.is_loading(),
            },
        )
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let loading_indicator = if state.dashboard.is_loading() {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            format!(" {} ", spinner)
        } else {
            String::new()
        };

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" Weather & AQI Dashboard{}", loading_indicator))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);
        frame.render_widget(outer.clone(), area);
        let inner = outer.inner(area);

        let chunks = Layout::vertical([
            Constraint::Length(3), // coordinate form
            Constraint::Length(1), // status line
            Constraint::Min(1),    // reading cards
            Constraint::Length(1), // help bar
        ])
        .split(inner);

        self.form.render(
            frame,
            chunks[0],
            CoordFormProps {
                coords: &state.dashboard.coords,
                focus: state.focus,
                is_loading: state.dashboard.is_loading(),
            },
        );

        frame.render_widget(Paragraph::new(status_line(state)).centered(), chunks[1]);

        let cards =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[2]);
        let mut aqi = AqiCard;
        aqi.render(
            frame,
            cards[0],
            AqiCardProps {
                reading: state.dashboard.aqi.as_ref(),
            },
        );
        let mut weather = WeatherCard;
        weather.render(
            frame,
            cards[1],
            WeatherCardProps {
                reading: state.dashboard.weather.as_ref(),
            },
        );

        let mut help = HelpBar;
        help.render(frame, chunks[3], HelpBarProps);
    }
}

fn status_line(state: &AppState) -> Line<'static> {
    if let Some(error) = &state.dashboard.error {
        return Line::styled(error.clone(), Style::default().fg(Color::Red));
    }
    match state.dashboard.phase {
        Phase::Loading => {
            let dots = ".".repeat((state.tick_count as usize / 3) % 4);
            Line::styled(
                format!("fetching readings{:<3}", dots),
                Style::default().fg(Color::Gray),
            )
        }
        Phase::Idle => Line::styled(
            "Enter coordinates to fetch real-time readings.",
            Style::default().fg(Color::DarkGray),
        ),
        Phase::Settled => Line::from(""),
    }
}
