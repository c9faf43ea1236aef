//! `ewui`: load an `.eui` file, build it against a console host, and replay
//! a scripted list of events.
//!
//! ```bash
//! ewui form.eui --event set:e1=hello --event click:b1 --dump
//! ```

mod console;
mod dump;
mod script;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use ewui_runtime::{LoggingConfig, Session, SessionConfig, init_logging};

use crate::console::ConsoleHost;
use crate::script::Step;

#[derive(Parser)]
#[command(name = "ewui")]
#[command(about = "Run an EWUI markup file headlessly", long_about = None)]
#[command(version)]
struct Cli {
    /// Markup file to load
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Event to replay after building, in order. One of click:ID,
    /// tick:ID[*N], set:ID=TEXT, select:ID=N, check:ID=N, uncheck:ID=N,
    /// slide:ID=N, date:ID=YYYY-MM-DD
    #[arg(short, long = "event", value_name = "EVENT")]
    events: Vec<Step>,

    /// Print the component tree after the last event
    #[arg(long)]
    dump: bool,

    /// Print build diagnostics (skipped lines, redefined ids, warnings)
    #[arg(long)]
    diagnostics: bool,

    /// Title of the window used when the file declares none
    #[arg(long, value_name = "TITLE")]
    default_title: Option<String>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::from_verbosity(cli.verbose));

    let src = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    let mut config = SessionConfig::new();
    if let Some(title) = cli.default_title {
        config = config.default_title(title);
    }

    let mut host = ConsoleHost::default();
    let mut session = Session::with_config(config);
    session.parse_and_run(&src, &mut host);

    if cli.diagnostics {
        for diagnostic in session.diagnostics() {
            eprintln!("{}: {}", cli.file.display(), dump::diagnostic(diagnostic));
        }
    }

    for step in &cli.events {
        log::debug!("replaying {step}");
        if let Err(e) = step.apply(&mut session, &mut host) {
            log::warn!("{step}: {e}");
            eprintln!("{step}: {e}");
        }
    }

    if cli.dump {
        print!("{}", dump::tree(&session));
    }

    log::info!(
        "{} messages shown, {} warnings, {} build diagnostics",
        host.shown,
        host.warnings,
        session.diagnostics().len()
    );
    Ok(())
}
