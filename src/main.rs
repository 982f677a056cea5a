//! photon - Entry Point

use clap::Parser;
use photon::integration::process_lines;
use photon::model::{AppError, FieldsMetadata, FragmentError};
use photon::navigation::FileLocation;
use photon::state::{fragment, Action, State, StatePatch, Store};
use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;
use tracing::{info, warn};

/// photon - edit a log-exploration query state from the command line
#[derive(Parser, Debug)]
#[command(name = "photon")]
#[command(version)]
#[command(about = "Apply field and search-expression edits to a persisted query state")]
pub struct Args {
    /// Lines to apply: `+field[@pos]`, `-field`, or a search expression
    /// such as `status:200,404`. Read from stdin when none are given.
    pub lines: Vec<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// File holding the encoded state between runs
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// `_fields` JSON document describing the dataset
    #[arg(long)]
    pub fields: Option<PathBuf>,

    /// Navigate to this fragment before applying lines
    #[arg(long)]
    pub fragment: Option<String>,

    /// Also print the query request JSON
    #[arg(long)]
    pub query: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = photon::config::load_config_with_precedence(args.config.clone())?;
        let merged = photon::config::merge_config(config_file);
        let with_env = photon::config::apply_env_overrides(merged);

        // --query only overrides when passed
        let query_override = args.query.then_some(true);

        photon::config::apply_cli_overrides(
            with_env,
            args.state_file.clone(),
            args.fields.clone(),
            query_override,
        )
    };

    photon::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let metadata = match &config.fields_file {
        Some(path) => FieldsMetadata::from_path(path)?,
        None => FieldsMetadata::default(),
    };
    info!(fields = metadata.fields.len(), "Field metadata loaded");

    let mut store = Store::new(FileLocation::new(config.state_file.clone()));

    if let Some(text) = &args.fragment {
        store.dispatch(Action::Replace(fragment_patch(text)));
    }

    let lines = if args.lines.is_empty() && !std::io::stdin().is_terminal() {
        std::io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()?
    } else {
        args.lines
    };

    let report = process_lines(&mut store, &lines, &metadata);
    info!(
        applied = report.applied,
        skipped = report.skipped.len(),
        "Lines processed"
    );
    for line in &report.skipped {
        eprintln!("photon: ignored line: {}", line);
    }

    println!("{}", fragment::encode(store.state()));
    if config.print_query {
        println!("{}", serde_json::to_string_pretty(&store.state().query_request())?);
    }

    Ok(())
}

/// Patch for an explicit `--fragment`. An unusable one resets the state.
fn fragment_patch(text: &str) -> StatePatch {
    match fragment::decode_patch(text) {
        Ok(patch) => patch,
        Err(FragmentError::Empty) => StatePatch::from(State::default()),
        Err(e) => {
            warn!(error = %e, "Ignoring malformed --fragment");
            StatePatch::from(State::default())
        }
    }
}
