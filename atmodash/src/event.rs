//! Terminal event polling.

use std::time::Duration;

use crossterm::event::{self, KeyEvent};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Input events the app reacts to.
#[derive(Clone, Debug)]
pub enum EventKind {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Spawn the event polling task with cancellation support.
///
/// Polls crossterm in batches and forwards events through the channel until
/// cancelled or the receiver goes away. Polling happens on the blocking side
/// of `event::poll`, so the sleep keeps the task from starving the runtime.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<EventKind>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("event poller cancelled, draining buffer");
                    // Drain anything left in the crossterm buffer before exiting
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        if let Ok(evt) = event::read() {
                            let kind = match evt {
                                event::Event::Key(key) => Some(EventKind::Key(key)),
                                event::Event::Resize(w, h) => Some(EventKind::Resize(w, h)),
                                _ => None,
                            };
                            if let Some(kind) = kind {
                                if tx.send(kind).is_err() {
                                    debug!("event channel closed, stopping poller");
                                    return;
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
