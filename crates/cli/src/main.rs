use std::process::ExitCode;

use clap::Parser;
use log::debug;

use histscript_cli::cli_args::Args;
use histscript_cli::menu::{ConsoleTerminal, Session, SessionOptions};
use histscript_core::config::{self, Config};
use histscript_core::error::Result;
use histscript_core::history_source::{HistoryFile, HistorySource, ShellHistory};
use histscript_core::script::FileScriptWriter;

/// Load the configuration file and apply command-line overrides
fn initialize_config(args: &Args) -> Result<Config> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);

    let config = args.apply_to(config::load_config(&config_path)?);
    config.validate()?;

    Ok(config)
}

fn run_session<H: HistorySource>(source: H, config: &Config) -> Result<()> {
    let terminal = ConsoleTerminal::new(&config.display)?;
    let writer = FileScriptWriter::new(config.output_directory());
    let options = SessionOptions {
        page_size: config.page_size,
        history_limit: config.history_limit,
    };

    Session::start(terminal, source, writer, options)?.run()
}

fn execute() -> Result<()> {
    let args = Args::parse();
    let config = initialize_config(&args)?;

    match &args.history_file {
        Some(path) => run_session(
            HistoryFile {
                path: config::expand_path(path),
            },
            &config,
        ),
        None => run_session(
            ShellHistory {
                shell: config.shell(),
            },
            &config,
        ),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
