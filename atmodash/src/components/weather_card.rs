//! Card showing the latest weather reading.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use atmodash_core::WeatherReading;

use super::Component;

/// Props for [`WeatherCard`].
pub struct WeatherCardProps<'a> {
    /// Last published reading, if any.
    pub reading: Option<&'a WeatherReading>,
}

/// Renders the weather half of the dashboard.
#[derive(Default)]
pub struct WeatherCard;

impl Component for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" Weather ")
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

/// Temperature and humidity always render (with `-` gaps); the remaining
/// fields appear only when the backend sent them.
fn reading_lines(reading: &WeatherReading) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(city) = &reading.city {
        let place = match &reading.country {
            Some(country) => format!("{}, {}", city, country),
            None => city.clone(),
        };
        lines.push(Line::styled(place, Style::default().fg(Color::Gray)));
        lines.push(Line::from(""));
    }

    let headline = match reading.temperature {
        Some(temperature) => Span::styled(
            format!("{}°C", temperature),
            Style::default().fg(temp_color(temperature)).bold(),
        ),
        None => Span::styled("-°C", Style::default().fg(Color::DarkGray).bold()),
    };
    lines.push(Line::from(headline));

    if let Some(condition) = &reading.condition {
        lines.push(Line::styled(
            condition.clone(),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(feels_like) = reading.feels_like {
        lines.push(Line::styled(
            format!("feels like {}°C", feels_like),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let humidity = match reading.humidity {
        Some(humidity) => format!("Humidity: {}%", humidity),
        None => "Humidity: -%".to_string(),
    };
    let mut details = vec![humidity];
    if let Some(pressure) = reading.pressure {
        details.push(format!("{} hPa", pressure));
    }
    if let Some(wind_speed) = reading.wind_speed {
        details.push(format!("wind {} m/s", wind_speed));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        details.join("  "),
        Style::default().fg(Color::Gray),
    ));

    lines
}

/// Color for a temperature in °C.
fn temp_color(celsius: f64) -> Color {
    match celsius as i64 {
        ..=0 => Color::Rgb(100, 180, 255),    // Freezing
        1..=15 => Color::Rgb(100, 220, 200),  // Cool
        16..=25 => Color::Rgb(150, 230, 150), // Mild
        26..=35 => Color::Rgb(255, 220, 100), // Hot
        _ => Color::Rgb(255, 100, 100),       // Scorching
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RenderHarness;

    #[test]
    fn test_temp_color_bands() {
        assert_eq!(temp_color(-5.0), Color::Rgb(100, 180, 255));
        assert_eq!(temp_color(21.0), Color::Rgb(150, 230, 150));
        assert_eq!(temp_color(40.0), Color::Rgb(255, 100, 100));
    }

    #[test]
    fn test_render_placeholder_without_reading() {
        let mut render = RenderHarness::new(30, 10);
        let mut card = WeatherCard;

        let output = render.render_to_string_plain(|frame| {
            card.render(frame, frame.area(), WeatherCardProps { reading: None });
        });

        assert!(output.contains("Weather"), "Should show the card title");
        assert!(output.contains("No data yet."), "Should show the placeholder");
    }

    #[test]
    fn test_render_full_reading() {
        let reading = WeatherReading {
            temperature: Some(21.0),
            feels_like: Some(19.5),
            humidity: Some(40.0),
            pressure: Some(1013.0),
            wind_speed: Some(3.2),
            condition: Some("Clear".to_string()),
            city: Some("New Delhi".to_string()),
            country: Some("IN".to_string()),
        };

        let mut render = RenderHarness::new(44, 12);
        let mut card = WeatherCard;

        let output = render.render_to_string_plain(|frame| {
            card.render(
                frame,
                frame.area(),
                WeatherCardProps {
                    reading: Some(&reading),
                },
            );
        });

        assert!(output.contains("New Delhi, IN"), "Should show the place");
        assert!(output.contains("21°C"), "Should show the temperature");
        assert!(output.contains("Clear"), "Should show the condition");
        assert!(output.contains("feels like 19.5°C"), "Should show apparent temperature");
        assert!(output.contains("Humidity: 40%"), "Should show humidity");
        assert!(output.contains("1013 hPa"), "Should show pressure");
        assert!(output.contains("wind 3.2 m/s"), "Should show wind");
    }

    #[test]
    fn test_render_sparse_reading_marks_gaps() {
        let reading = WeatherReading {
            condition: Some("Mist".to_string()),
            ..Default::default()
        };

        let mut render = RenderHarness::new(30, 8);
        let mut card = WeatherCard;

        let output = render.render_to_string_plain(|frame| {
            card.render(
                frame,
                frame.area(),
                WeatherCardProps {
                    reading: Some(&reading),
                },
            );
        });

        assert!(output.contains("Mist"), "Should show the condition");
        assert!(output.contains("-°C"), "Missing temperature renders as a dash");
        assert!(output.contains("Humidity: -%"), "Missing humidity renders as a dash");
    }
}
