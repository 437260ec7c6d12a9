use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use dactylo::{
    app::App,
    config::{Config, ConfigStore, FileConfigStore},
    corpus::{PracticeCorpus, RandomTextProvider, ReferenceTextProvider},
    error::DactyloError,
    logging::{self, LogConfig},
    runtime::{self, CrosstermEventSource},
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};
use tracing::info;

/// typing practice against a random reference sentence
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type the sentence shown on screen. Every keystroke is scored live: per-character highlighting, mistakes, words per minute and accuracy."
)]
pub struct Cli {
    /// hide the preview of the untyped remainder
    #[clap(long)]
    no_ghost: bool,

    /// seed the sentence picker for a reproducible sequence
    #[clap(long)]
    seed: Option<u64>,

    /// persist the display flags given on this run as the new defaults
    #[clap(long)]
    save_config: bool,

    /// write logs to the state directory
    #[clap(long)]
    log: bool,

    /// write logs to this file instead
    #[clap(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// include ignored input and other debug events in the log
    #[clap(long)]
    debug: bool,

    /// only log warnings and errors
    #[clap(short, long)]
    quiet: bool,
}

impl Cli {
    /// Apply command line overrides on top of the stored config
    fn merge_into(&self, mut config: Config) -> Config {
        if self.no_ghost {
            config.show_ghost_text = false;
        }
        config
    }

    fn provider(&self) -> Box<dyn ReferenceTextProvider> {
        let corpus = PracticeCorpus::builtin();
        match self.seed {
            Some(seed) => Box::new(RandomTextProvider::with_rng(
                corpus,
                StdRng::seed_from_u64(seed),
            )),
            None => Box::new(RandomTextProvider::new(corpus)),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let log_config = LogConfig::from_cli(cli.debug, cli.quiet, cli.log, cli.log_file.clone());
    if let Some(path) = logging::init(&log_config)? {
        info!(target: "dactylo::startup", path = %path.display(), "logging enabled");
    }

    let store = FileConfigStore::new();
    let config = cli.merge_into(store.load());
    if cli.save_config {
        store.save(&config)?;
        info!(target: "dactylo::startup", path = %store.path().display(), "config saved");
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(cli.provider(), config);
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<Box<dyn ReferenceTextProvider>>,
) -> Result<(), DactyloError> {
    runtime::run(app, &mut CrosstermEventSource, |app| {
        terminal.draw(|f| f.render_widget(app, f.area()))?;
        Ok(())
    })
}
