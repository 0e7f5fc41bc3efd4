//! Render tests for the assembled dashboard screen.

use std::collections::BTreeMap;

use atmodash::components::{Component, Dashboard, DashboardProps};
use atmodash::testing::RenderHarness;
use atmodash::AppState;
use atmodash_core::{AqiReading, Phase, WeatherReading};

fn render_dashboard(state: &AppState) -> String {
    let mut render = RenderHarness::new(80, 24);
    let mut dashboard = Dashboard::new(state);
    render.render_to_string_plain(|frame| {
        dashboard.render(frame, frame.area(), DashboardProps { state });
    })
}

#[test]
fn test_render_initial_state() {
    let state = AppState::default();

    let output = render_dashboard(&state);

    assert!(output.contains("Latitude"), "Should label the latitude field");
    assert!(output.contains("Longitude"), "Should label the longitude field");
    assert!(output.contains("28.6139"), "Should prefill the latitude");
    assert!(output.contains("77.2090"), "Should prefill the longitude");
    assert!(output.contains("[ Fetch ]"), "Should show the idle button");
    assert!(
        output.contains("Enter coordinates to fetch real-time readings."),
        "Should show the idle prompt"
    );
    assert!(output.contains("No data yet."), "Cards start empty");
}

#[test]
fn test_render_loading_state() {
    let mut state = AppState::default();
    state.dashboard.phase = Phase::Loading;

    let output = render_dashboard(&state);

    assert!(output.contains("[ Loading... ]"), "Should show the busy button");
    assert!(
        output.contains("fetching readings"),
        "Should show the loading status"
    );
}

#[test]
fn test_render_full_readings() {
    let mut state = AppState::default();
    state.dashboard.phase = Phase::Settled;
    state.dashboard.aqi = Some(AqiReading {
        aqi: Some(55.0),
        components: BTreeMap::from([("co".to_string(), 0.5)]),
        timestamp: None,
    });
    state.dashboard.weather = Some(WeatherReading {
        temperature: Some(21.0),
        humidity: Some(40.0),
        condition: Some("Clear".to_string()),
        ..Default::default()
    });

    let output = render_dashboard(&state);

    assert!(output.contains("55"), "Should show the index");
    assert!(output.contains("co"), "Should list the pollutant");
    assert!(output.contains("0.5"), "Should show the pollutant level");
    assert!(output.contains("21°C"), "Should show the temperature");
    assert!(output.contains("Clear"), "Should show the condition");
    assert!(output.contains("Humidity: 40%"), "Should show humidity");
}

#[test]
fn test_render_partial_failure_keeps_the_aqi_card() {
    let mut state = AppState::default();
    state.dashboard.phase = Phase::Settled;
    state.dashboard.error = Some("timeout".to_string());
    state.dashboard.aqi = Some(AqiReading {
        aqi: Some(42.0),
        components: BTreeMap::from([("pm2_5".to_string(), 10.0)]),
        timestamp: None,
    });

    let output = render_dashboard(&state);

    assert!(output.contains("timeout"), "Should surface the failure");
    assert!(output.contains("42"), "Should keep the successful reading");
    assert!(output.contains("pm2_5"), "Should keep the pollutant list");
    assert!(output.contains("No data yet."), "Weather card stays empty");
}

#[test]
fn test_render_help_bar() {
    let state = AppState::default();

    let output = render_dashboard(&state);

    assert!(output.contains("next field"), "Should explain tab");
    assert!(output.contains("fetch"), "Should explain enter");
    assert!(output.contains("quit"), "Should explain esc");
}
