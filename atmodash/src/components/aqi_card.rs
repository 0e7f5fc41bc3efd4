//! Card showing the latest air-quality reading.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use atmodash_core::AqiReading;

use super::Component;

/// Props for [`AqiCard`].
pub struct AqiCardProps<'a> {
    /// Last published reading, if any.
    pub reading: Option<&'a AqiReading>,
}

/// Renders the air-quality half of the dashboard.
#[derive(Default)]
pub struct AqiCard;

impl Component for AqiCard {
    type Props<'a> = AqiCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" AQI ")
            .title_style(Style::default().fg(Color::Cyan).bold());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = match props.reading {
            Some(reading) => reading_lines(reading),
            None => placeholder_lines(),
        };
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn placeholder_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::styled("No data yet.", Style::default().fg(Color::DarkGray)).centered(),
    ]
}

fn reading_lines(reading: &AqiReading) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Headline value, "-" when the provider had no index.
    let headline = match reading.aqi {
        Some(aqi) => Span::styled(
            format!("{}", aqi),
            Style::default().fg(aqi_color(aqi)).bold(),
        ),
        None => Span::styled("-", Style::default().fg(Color::DarkGray).bold()),
    };
    lines.push(Line::from(headline));

    if !reading.components.is_empty() {
        lines.push(Line::from(""));
        for (name, level) in &reading.components {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<8}", name), Style::default().fg(Color::Gray)),
                Span::raw(format!("{}", level)),
            ]));
        }
    }

    if let Some(timestamp) = reading.timestamp {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            clock_time(timestamp),
            Style::default().fg(Color::DarkGray),
        ));
    }

    lines
}

/// Color for an AQI value, following the US EPA bands.
fn aqi_color(aqi: f64) -> Color {
    match aqi as i64 {
        ..=50 => Color::Green,                  // Good
        51..=100 => Color::Yellow,              // Moderate
        101..=150 => Color::Rgb(255, 150, 80),  // Unhealthy for sensitive groups
        151..=200 => Color::Red,                // Unhealthy
        201..=300 => Color::Magenta,            // Very unhealthy
        _ => Color::Rgb(150, 40, 60),           // Hazardous
    }
}

/// Wall-clock time of day (UTC) for a Unix timestamp.
fn clock_time(timestamp: i64) -> String {
    let seconds = timestamp.rem_euclid(86_400);
    format!(
        "{:02}:{:02}:{:02} UTC",
        seconds / 3_600,
        seconds % 3_600 / 60,
        seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::testing::RenderHarness;

    #[test]
    fn test_clock_time_formats_utc() {
        assert_eq!(clock_time(1_724_612_345), "18:59:05 UTC");
        assert_eq!(clock_time(0), "00:00:00 UTC");
    }

    #[test]
    fn test_aqi_color_bands() {
        assert_eq!(aqi_color(42.0), Color::Green);
        assert_eq!(aqi_color(55.0), Color::Yellow);
        assert_eq!(aqi_color(160.0), Color::Red);
        assert_eq!(aqi_color(500.0), Color::Rgb(150, 40, 60));
    }

    #[test]
    fn test_render_placeholder_without_reading() {
        let mut render = RenderHarness::new(30, 10);
        let mut card = AqiCard;

        let output = render.render_to_string_plain(|frame| {
            card.render(frame, frame.area(), AqiCardProps { reading: None });
        });

        assert!(output.contains("AQI"), "Should show the card title");
        assert!(output.contains("No data yet."), "Should show the placeholder");
    }

    #[test]
    fn test_render_reading_shows_value_and_components() {
        let reading = AqiReading {
            aqi: Some(55.0),
            components: BTreeMap::from([("co".to_string(), 0.5)]),
            timestamp: Some(1_724_612_345),
        };

        let mut render = RenderHarness::new(30, 10);
        let mut card = AqiCard;

        let output = render.render_to_string_plain(|frame| {
            card.render(
                frame,
                frame.area(),
                AqiCardProps {
                    reading: Some(&reading),
                },
            );
        });

        assert!(output.contains("55"), "Should show the index");
        assert!(output.contains("co"), "Should list the pollutant");
        assert!(output.contains("0.5"), "Should show the level");
        assert!(output.contains("18:59:05 UTC"), "Should show the clock time");
    }

    #[test]
    fn test_render_reading_without_index() {
        let reading = AqiReading {
            aqi: None,
            components: BTreeMap::from([("pm2_5".to_string(), 10.0)]),
            timestamp: None,
        };

        let mut render = RenderHarness::new(30, 10);
        let mut card = AqiCard;

        let output = render.render_to_string_plain(|frame| {
            card.render(
                frame,
                frame.area(),
                AqiCardProps {
                    reading: Some(&reading),
                },
            );
        });

        assert!(output.contains("-"), "Should show a dash for the missing index");
        assert!(output.contains("pm2_5"), "Should still list pollutants");
    }
}
