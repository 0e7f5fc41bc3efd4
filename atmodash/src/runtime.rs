//! The event/action/render loop.
//!
//! Terminal events and async fetch results both arrive as actions; the
//! reducer folds them into state and declares effects; the effect handler
//! performs the I/O. The UI re-renders only when a dispatch changed state
//! or an event asked for it. Actions are applied one at a time on this
//! loop, which is what makes the reducer the single writer.

use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use atmodash_core::{DispatchResult, Effect};

use crate::action::Action;
use crate::event::{spawn_event_poller, EventKind};
use crate::state::{AppState, LOADING_ANIM_TICK_MS};

/// Configuration for the event poller.
#[derive(Debug, Clone, Copy)]
pub struct PollerConfig {
    /// Timeout passed to each `crossterm::event::poll` call.
    pub poll_timeout: Duration,
    /// Sleep between poll cycles.
    pub loop_sleep: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            loop_sleep: Duration::from_millis(16),
        }
    }
}

/// Result of mapping an event into actions plus an optional render hint.
#[derive(Debug, Clone, PartialEq)]
pub struct EventOutcome {
    /// Actions to enqueue.
    pub actions: Vec<Action>,
    /// Whether to force a re-render.
    pub needs_render: bool,
}

impl EventOutcome {
    /// No actions and no render.
    pub fn ignored() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: false,
        }
    }

    /// Wrap a single action.
    pub fn action(action: Action) -> Self {
        Self {
            actions: vec![action],
            needs_render: false,
        }
    }

    /// Collect actions from a component's `handle_event`.
    pub fn from_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            needs_render: false,
        }
    }

    /// Mark that a render is needed.
    pub fn with_render(mut self) -> Self {
        self.needs_render = true;
        self
    }
}

impl Default for EventOutcome {
    fn default() -> Self {
        Self::ignored()
    }
}

/// Reducer signature used by the runtime.
pub type Reducer = fn(&mut AppState, Action) -> DispatchResult;

/// Context handed to the effect handler.
pub struct EffectContext<'a> {
    action_tx: &'a mpsc::UnboundedSender<Action>,
}

impl EffectContext<'_> {
    /// Send an action back into the loop.
    pub fn emit(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    /// Clone the action sender for a spawned task.
    pub fn action_tx(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }
}

/// Drives the dispatch loop until quit.
pub struct Runtime {
    state: AppState,
    reducer: Reducer,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    poller_config: PollerConfig,
    should_render: bool,
}

impl Runtime {
    /// Create a runtime from initial state and a reducer.
    pub fn new(state: AppState, reducer: Reducer) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state,
            reducer,
            action_tx,
            action_rx,
            poller_config: PollerConfig::default(),
            should_render: true,
        }
    }

    /// Configure event polling behavior.
    pub fn with_event_poller(mut self, config: PollerConfig) -> Self {
        self.poller_config = config;
        self
    }

    /// Send an action into the runtime queue.
    pub fn enqueue(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    /// Clone the action sender.
    pub fn action_tx(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Access the current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn dispatch(&mut self, action: Action) -> DispatchResult {
        let is_tick = matches!(action, Action::Tick);
        let name = action.name();
        let result = (self.reducer)(&mut self.state, action);
        if !is_tick {
            debug!(action = %name, state_changed = result.changed, "action processed");
        }
        result
    }

    /// Run the event/action loop until `should_quit` accepts an action.
    ///
    /// Effects emitted by a dispatch are handed to `handle_effect` in the
    /// same loop turn, before the next action is received.
    pub async fn run<B, FRender, FEvent, FQuit, FEffect>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
        mut should_quit: FQuit,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &AppState),
        FEvent: FnMut(&EventKind, &AppState) -> EventOutcome,
        FQuit: FnMut(&Action) -> bool,
        FEffect: FnMut(Effect, &EffectContext<'_>),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<EventKind>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(
            event_tx,
            self.poller_config.poll_timeout,
            self.poller_config.loop_sleep,
            cancel_token.clone(),
        );

        let mut ticker = tokio::time::interval(Duration::from_millis(LOADING_ANIM_TICK_MS));

        loop {
            if self.should_render {
                let state = &self.state;
                terminal.draw(|frame| render(frame, frame.area(), state))?;
                self.should_render = false;
            }

            tokio::select! {
                Some(event) = event_rx.recv() => {
                    let outcome = map_event(&event, &self.state);
                    if outcome.needs_render {
                        self.should_render = true;
                    }
                    for action in outcome.actions {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if should_quit(&action) {
                        break;
                    }

                    let result = self.dispatch(action);
                    if result.has_effects() {
                        let ctx = EffectContext {
                            action_tx: &self.action_tx,
                        };
                        for effect in result.effects {
                            handle_effect(effect, &ctx);
                        }
                    }
                    self.should_render = result.changed;
                }

                _ = ticker.tick() => {
                    let _ = self.action_tx.send(Action::Tick);
                }
            }
        }

        cancel_token.cancel();
        Ok(())
    }
}
