use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use tracing::error;

use crate::github::{FetchError, Repository};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    /// Terminal size changed; the next draw picks up the new area.
    Resize,
    /// A fetch started by `GitHubFetchLauncher` finished.
    FetchCompleted {
        request: u64,
        result: Result<Vec<Repository>, FetchError>,
    },
}

/// Single queue for terminal input, ticks and fetch completions, consumed by
/// the UI thread.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the terminal input thread.
    pub fn new(tick_rate: Duration) -> Self {
        let handler = Self::detached();
        let event_tx = handler.sender();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                            Ok(Event::Resize(_, _)) => event_tx.send(AppEvent::Resize),
                            Ok(_) => Ok(()),
                            Err(err) => {
                                error!(error = %err, "Failed to read terminal event");
                                break;
                            }
                        };
                        if forwarded.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        error!(error = %err, "Failed to poll terminal events");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        handler
    }

    /// Channel without an input thread. Events only arrive through
    /// [`sender`](Self::sender).
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
