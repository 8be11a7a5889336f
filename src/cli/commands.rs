use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use anyhow::{Context, Result};
use crate::cli::console::{Console, Style};
use crate::cli::error::internal_error;
use crate::cli::output::{is_tty, paint, Tone, CLEAR_SCREEN};
use crate::cli::session::{Session, FAREWELL};
use crate::db::{Store, DEFAULT_DB_FILE};

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "An interactive to-do list backed by a SQLite file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Database file to use
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DB_FILE)]
    pub db: PathBuf,
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
    /// Never clear the screen between commands
    #[arg(long)]
    pub no_clear: bool,
    /// Exit instead of continuing when the database cannot be initialized
    #[arg(long)]
    pub strict: bool,
}

/// Settings for one run, resolved from the command line and the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub style: Style,
    pub strict: bool,
}

impl Config {
    /// Colors and screen clearing are only used when stdout is a terminal
    pub fn from_cli(cli: &Cli, stdout_is_tty: bool) -> Self {
        Self {
            db_path: cli.db.clone(),
            style: Style {
                color: stdout_is_tty && !cli.no_color,
                clear_screen: stdout_is_tty && !cli.no_clear,
            },
            strict: cli.strict,
        }
    }
}

/// Write the farewell shown when the session is interrupted
pub fn write_interrupt_farewell(out: &mut impl Write, style: Style) -> io::Result<()> {
    if style.clear_screen {
        write!(out, "{}", CLEAR_SCREEN)?;
    }
    writeln!(out, "\n{}", paint(FAREWELL, Tone::Heading, style.color))?;
    out.flush()
}

/// Ctrl-C leaves through the same farewell as `quit`
///
/// The handler only writes to stdout, so it is safe to fire before the
/// store has been set up.
fn install_interrupt_handler(style: Style) -> Result<()> {
    ctrlc::set_handler(move || {
        let _ = write_interrupt_farewell(&mut io::stdout(), style);
        log::info!("interrupted");
        std::process::exit(0);
    })
    .context("Failed to install interrupt handler")
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli, is_tty());
    log::debug!("{:?}", config);

    install_interrupt_handler(config.style)?;

    let store = Store::new(&config.db_path);
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout(), config.style);
    let mut session = Session::new(store, console);

    if !session.init_store()? && config.strict {
        internal_error(&format!(
            "Failed to initialize database schema: {}",
            config.db_path.display()
        ));
    }

    session.run()
}
