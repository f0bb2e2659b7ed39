//! Event channel feeding the UI loop.
//!
//! A dedicated thread polls crossterm for input and emits ticks; async
//! tasks (API fetches, simulated auth calls) post their completions on the
//! same channel. The UI loop is the only consumer, so every state mutation
//! happens between events, never concurrently.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent};

use crate::api::{Category, GiftCard, Review, User};
use crate::ui::signin::SignInIntent;
use crate::ui::signup::SignUpIntent;

/// A fetch completion, tagged with the generation the fetch was begun with.
#[derive(Debug)]
pub enum ApiEvent {
    Categories {
        generation: u64,
        result: Result<Vec<Category>, String>,
    },
    Trending {
        generation: u64,
        result: Result<Vec<GiftCard>, String>,
    },
    AllItems {
        generation: u64,
        result: Result<Vec<GiftCard>, String>,
    },
    Reviews {
        generation: u64,
        result: Result<Vec<Review>, String>,
    },
    User {
        generation: u64,
        result: Result<User, String>,
    },
}

pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    Api(ApiEvent),
    /// Async completion for the sign-in wizard.
    SignIn(SignInIntent),
    /// Async completion for the sign-up wizard.
    SignUp(SignUpIntent),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match crossterm::event::poll(timeout) {
                    Ok(true) => match crossterm::event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    },
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Cloneable sender for async tasks posting completions.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
