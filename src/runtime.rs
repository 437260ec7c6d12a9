//! Event loop for the terminal front end.
//!
//! The loop blocks until the next key or resize. There is no timer: stats are
//! recomputed when input changes, so nothing needs redrawing between events.

use std::collections::VecDeque;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};
use tracing::warn;

use crate::app::App;
use crate::clock::Clock;
use crate::corpus::ReferenceTextProvider;
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
}

/// Where the loop gets its events from
pub trait AppEventSource {
    /// Block until the next event. `None` ends the loop.
    fn next_event(&mut self) -> Option<AppEvent>;
}

/// Reads the real terminal
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Option<AppEvent> {
        loop {
            match event::read() {
                // Windows reports releases too; only presses edit text
                Ok(CtEvent::Key(key)) if key.kind != KeyEventKind::Release => {
                    return Some(AppEvent::Key(key))
                }
                Ok(CtEvent::Resize(_, _)) => return Some(AppEvent::Resize),
                Ok(_) => continue,
                Err(e) => {
                    warn!(target: "dactylo::app", error = %e, "terminal read failed");
                    return None;
                }
            }
        }
    }
}

/// Replays a fixed list of events, then ends
#[derive(Debug, Default)]
pub struct ScriptedEventSource {
    events: VecDeque<AppEvent>,
}

impl ScriptedEventSource {
    pub fn new(events: impl IntoIterator<Item = AppEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl AppEventSource for ScriptedEventSource {
    fn next_event(&mut self) -> Option<AppEvent> {
        self.events.pop_front()
    }
}

/// Draw once, then apply events and redraw after each until the app quits
/// or the source runs dry.
pub fn run<P, C, S, F>(app: &mut App<P, C>, source: &mut S, mut redraw: F) -> Result<()>
where
    P: ReferenceTextProvider,
    C: Clock,
    S: AppEventSource,
    F: FnMut(&App<P, C>) -> std::io::Result<()>,
{
    redraw(app)?;

    while !app.should_quit() {
        let Some(event) = source.next_event() else {
            break;
        };
        if let AppEvent::Key(key) = event {
            app.handle_key(key)?;
        }
        redraw(app)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::Config;
    use crate::controller::SessionController;
    use crate::corpus::FixedTextProvider;
    use crate::error::{ConfigurationError, DactyloError};
    use crate::session::SessionStatus;
    use assert_matches::assert_matches;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app(text: &str) -> App<FixedTextProvider, ManualClock> {
        App::with_controller(
            SessionController::with_clock(FixedTextProvider::new(text), ManualClock::new()),
            Config::default(),
        )
    }

    #[test]
    fn scripted_source_replays_in_order() {
        let mut source = ScriptedEventSource::new([AppEvent::Resize, key(KeyCode::Enter)]);
        assert_eq!(source.next_event(), Some(AppEvent::Resize));
        assert_eq!(source.next_event(), Some(key(KeyCode::Enter)));
        assert_eq!(source.next_event(), None);
    }

    #[test]
    fn redraws_initially_and_after_every_event() {
        let mut app = app("ab");
        let mut source = ScriptedEventSource::new([
            key(KeyCode::Enter),
            AppEvent::Resize,
            key(KeyCode::Char('a')),
        ]);
        let mut frames = 0;

        run(&mut app, &mut source, |_| {
            frames += 1;
            Ok(())
        })
        .unwrap();

        assert_eq!(frames, 4);
        assert_eq!(app.input(), "a");
        assert_eq!(app.controller.status(), SessionStatus::Active);
    }

    #[test]
    fn stops_at_quit_without_draining_source() {
        let mut app = app("ab");
        let mut source = ScriptedEventSource::new([
            AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            key(KeyCode::Enter),
        ]);

        run(&mut app, &mut source, |_| Ok(())).unwrap();

        assert!(app.should_quit());
        assert_eq!(source.remaining(), 1);
        assert_eq!(app.controller.status(), SessionStatus::Idle);
    }

    struct EmptyProvider;

    impl ReferenceTextProvider for EmptyProvider {
        fn pick_random(&mut self) -> std::result::Result<String, ConfigurationError> {
            Err(ConfigurationError::EmptyCorpus)
        }
    }

    #[test]
    fn start_failure_surfaces_as_configuration_error() {
        let mut app = App::with_controller(
            SessionController::with_clock(EmptyProvider, ManualClock::new()),
            Config::default(),
        );
        let mut source = ScriptedEventSource::new([key(KeyCode::Enter), key(KeyCode::Char('a'))]);

        let result = run(&mut app, &mut source, |_| Ok(()));

        assert_matches!(
            result,
            Err(DactyloError::Configuration(ConfigurationError::EmptyCorpus))
        );
        assert_eq!(source.remaining(), 1);
        assert_eq!(app.controller.status(), SessionStatus::Idle);
    }

    #[test]
    fn redraw_failure_stops_the_loop() {
        let mut app = app("ab");
        let mut source = ScriptedEventSource::new([key(KeyCode::Enter)]);

        let result = run(&mut app, &mut source, |_| {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "gone"))
        });

        assert_matches!(result, Err(DactyloError::Io(_)));
        assert_eq!(source.remaining(), 1);
    }
}
