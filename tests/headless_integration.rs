use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dactylo::app::App;
use dactylo::clock::ManualClock;
use dactylo::config::Config;
use dactylo::corpus::FixedTextProvider;
use dactylo::runtime::{self, AppEvent, ScriptedEventSource};
use dactylo::{SessionController, SessionStatus};

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

// Drives App through the event loop without a TTY
#[test]
fn headless_typing_flow_completes() {
    let clock = ManualClock::new();
    let controller = SessionController::with_clock(FixedTextProvider::new("hi there"), &clock);
    let mut app = App::with_controller(controller, Config::default());

    let mut source = ScriptedEventSource::new(
        std::iter::once(key(KeyCode::Enter)).chain("hi there".chars().map(|c| key(KeyCode::Char(c)))),
    );

    // Each frame moves the clock on, so keys land 7.5s apart
    runtime::run(&mut app, &mut source, |_| {
        clock.advance_millis(7_500);
        Ok(())
    })
    .unwrap();

    assert_eq!(source.remaining(), 0);
    assert_eq!(app.controller.status(), SessionStatus::Finished);
    let stats = app.controller.stats();
    assert_eq!(stats.mistake_count, 0);
    assert_eq!(stats.accuracy_percent, 100.0);
    // 2 words, 8 keystrokes after Enter at 7.5s apart = one minute
    assert_eq!(stats.wpm, 2);
}

#[test]
fn headless_reset_and_quit() {
    let mut app = App::with_controller(
        SessionController::with_clock(FixedTextProvider::new("abc"), ManualClock::new()),
        Config::default(),
    );

    let mut source = ScriptedEventSource::new([
        key(KeyCode::Enter),
        key(KeyCode::Char('x')),
        key(KeyCode::Esc),
        key(KeyCode::Esc),
        key(KeyCode::Enter),
    ]);
    let mut frames = Vec::new();

    runtime::run(&mut app, &mut source, |app| {
        frames.push(app.controller.status());
        Ok(())
    })
    .unwrap();

    assert!(app.should_quit());
    assert_eq!(source.remaining(), 1);
    assert_eq!(
        frames,
        [
            SessionStatus::Idle,
            SessionStatus::Active,
            SessionStatus::Active,
            SessionStatus::Idle,
            SessionStatus::Idle,
        ]
    );
    assert_eq!(app.controller.status(), SessionStatus::Idle);
    assert_eq!(app.controller.stats().mistake_count, 0);
}
