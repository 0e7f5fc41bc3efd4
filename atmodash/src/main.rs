//! Binary entry point: terminal setup, wiring, teardown.

use std::cell::RefCell;
use std::io;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use atmodash::components::{Component, Dashboard, DashboardProps};
use atmodash::logging::{init_logging, DEFAULT_LOG_DIR};
use atmodash::runtime::{EffectContext, EventOutcome, Runtime};
use atmodash::{reduce, Action, AppState};
use atmodash_core::{
    Action as DashboardAction, ApiGateway, Config, Coordinates, DashboardState, Effect,
    DEFAULT_LATITUDE, DEFAULT_LONGITUDE,
};

/// Live air quality and weather for a coordinate pair.
#[derive(Parser, Debug)]
#[command(name = "atmodash")]
#[command(about = "Terminal dashboard for air quality and weather readings")]
struct Args {
    /// Starting latitude.
    #[arg(long, default_value = DEFAULT_LATITUDE)]
    lat: String,

    /// Starting longitude.
    #[arg(long, default_value = DEFAULT_LONGITUDE)]
    lon: String,

    /// Directory for the session log file.
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    log_dir: String,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let _logging = init_logging(&args.log_dir)?;

    let mut config = Config::from_env();
    config.coords = Coordinates::new(args.lat, args.lon);
    info!(base_url = %config.base_url, "starting atmodash");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("stopped");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: Config,
) -> io::Result<()> {
    let gateway = ApiGateway::new(config.base_url);
    let state = AppState::new(DashboardState::new(config.coords));

    let ui = RefCell::new(Dashboard::new(&state));
    let mut runtime = Runtime::new(state, reduce);

    runtime
        .run(
            terminal,
            |frame, area, state| {
                ui.borrow_mut()
                    .render(frame, area, DashboardProps { state });
            },
            |event, state| {
                let actions = ui.borrow_mut().handle_event(event, DashboardProps { state });
                // Cursor-only keys emit no action but still move the caret.
                EventOutcome::from_actions(actions).with_render()
            },
            |action| matches!(action, Action::Quit),
            |effect, ctx| handle_effect(&gateway, effect, ctx),
        )
        .await
}

/// Perform a declared effect by spawning the I/O it names.
fn handle_effect(gateway: &ApiGateway, effect: Effect, ctx: &EffectContext<'_>) {
    match effect {
        Effect::FetchReadings { coords } => {
            let gateway = gateway.clone();
            let action_tx = ctx.action_tx();
            tokio::spawn(async move {
                let settled = gateway.fetch_both(&coords).await;
                info!(
                    aqi_ok = settled.aqi.is_ok(),
                    weather_ok = settled.weather.is_ok(),
                    "fetch settled"
                );
                let _ = action_tx.send(Action::Dashboard(DashboardAction::ReadingsSettled(
                    settled,
                )));
            });
        }
    }
}
