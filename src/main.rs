use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use spendbook::cli::{Menu, Prompter};
use spendbook::config::paths::{TrackerPaths, CONFIG_DIR_ENV};
use spendbook::config::Settings;
use spendbook::credential::CredentialScheme;
use spendbook::services::TrackerService;

#[derive(Parser)]
#[command(
    name = "spendbook",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "spendbook keeps a list of named expenses per user for the \
                  length of one session. Register, log in, then add, view and \
                  delete expenses from an interactive menu. Nothing is saved \
                  when the program exits."
)]
struct Cli {
    /// Path to a settings file (JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, env = CONFIG_DIR_ENV, value_name = "DIR", hide_env_values = true)]
    config_dir: Option<PathBuf>,

    /// Currency symbol used when printing amounts
    #[arg(long, value_name = "SYMBOL")]
    currency: Option<String>,

    /// How new credentials are stored
    #[arg(long, value_enum)]
    credential_scheme: Option<CredentialScheme>,

    /// Echo passwords instead of reading them hidden from the terminal
    #[arg(long)]
    show_input: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::resolve(cli.config, cli.config_dir)?;
    let settings = Settings::load_or_default(&paths)?
        .with_overrides(cli.currency, cli.credential_scheme);

    init_tracing(cli.verbose, &settings.log_filter);
    info!(settings_file = %paths.settings_file().display(), "starting spendbook");

    let mut service = TrackerService::new(settings.credentials.clone());

    let stdin = io::stdin();
    let hide_credentials = !cli.show_input && stdin.is_terminal();
    let prompter = Prompter::new(stdin.lock(), io::stdout(), io::stderr(), hide_credentials);

    Menu::new(&mut service, &settings, prompter).run()?;

    info!(accounts = service.account_count(), "exiting; session data discarded");
    Ok(())
}

/// Log to stderr. RUST_LOG wins, then -v, then the settings file.
fn init_tracing(verbose: u8, configured: &str) {
    let fallback = match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
