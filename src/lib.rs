// Library surface for the binary, headless tests, and other front ends.
pub mod app;
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod controller;
pub mod corpus;
pub mod diff;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod stats;
pub mod ui;

pub use controller::{ControlState, InputUpdate, SessionController, SessionSnapshot};
pub use corpus::{PracticeCorpus, RandomTextProvider, ReferenceTextProvider};
pub use diff::{classify, CharacterClassification, Classification};
pub use error::{ConfigurationError, DactyloError};
pub use session::SessionStatus;
pub use stats::StatsSnapshot;
