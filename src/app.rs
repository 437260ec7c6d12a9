use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::clock::{Clock, MonotonicClock};
use crate::config::Config;
use crate::controller::SessionController;
use crate::corpus::ReferenceTextProvider;
use crate::error::ConfigurationError;

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Reset,
    /// Reset when a session exists, otherwise quit
    Escape,
    Quit,
    Type(char),
    Backspace,
}

pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            KeyCode::Char('r') => Some(Command::Reset),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Command::Start),
        KeyCode::Esc => Some(Command::Escape),
        KeyCode::Backspace => Some(Command::Backspace),
        KeyCode::Char(c) => Some(Command::Type(c)),
        _ => None,
    }
}

/// Terminal front end state: the controller plus the text the user has typed
#[derive(Debug)]
pub struct App<P, C = MonotonicClock> {
    pub controller: SessionController<P, C>,
    pub config: Config,
    input: String,
    should_quit: bool,
}

impl<P: ReferenceTextProvider> App<P, MonotonicClock> {
    pub fn new(provider: P, config: Config) -> Self {
        Self::with_controller(SessionController::new(provider), config)
    }
}

impl<P: ReferenceTextProvider, C: Clock> App<P, C> {
    pub fn with_controller(controller: SessionController<P, C>, config: Config) -> Self {
        Self {
            controller,
            config,
            input: String::new(),
            should_quit: false,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), ConfigurationError> {
        match command_for(key) {
            Some(command) => self.apply(command),
            None => Ok(()),
        }
    }

    /// Run a command, skipping anything the current controls do not allow
    pub fn apply(&mut self, command: Command) -> Result<(), ConfigurationError> {
        let controls = self.controller.controls();

        match command {
            Command::Quit => self.should_quit = true,
            Command::Start if controls.start_enabled => {
                self.controller.start()?;
                self.input.clear();
            }
            Command::Reset if controls.reset_enabled => self.reset(),
            Command::Escape if controls.reset_enabled => self.reset(),
            Command::Escape => self.should_quit = true,
            Command::Type(c) if controls.input_enabled => {
                self.input.push(c);
                self.controller.on_input_changed(&self.input);
            }
            Command::Backspace if controls.input_enabled => {
                if self.input.pop().is_some() {
                    self.controller.on_input_changed(&self.input);
                }
            }
            other => debug!(target: "dactylo::app", command = ?other, "command not available"),
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.input.clear();
        self.controller.reset();
    }
}
