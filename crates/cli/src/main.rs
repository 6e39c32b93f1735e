use std::process::ExitCode;

use clap::Parser;
use log::debug;
use quickrun_cli::cli_args::Args;
use quickrun_cli::menu::{run_menu, InteractionController, Theme};
use quickrun_core::catalog::ActionCatalog;
use quickrun_core::config::{self, DEFAULT_SHELL};
use quickrun_core::execution::ShellExecutor;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);

    let catalog = match ActionCatalog::load(&config_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let shell = args.shell.as_deref().unwrap_or(DEFAULT_SHELL);
    let executor = ShellExecutor::new(shell).with_dry_run(args.dry_run);
    let mut controller = InteractionController::new(catalog, executor);

    match run_menu(&mut controller, &Theme::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error running program: {e}");
            ExitCode::FAILURE
        }
    }
}
