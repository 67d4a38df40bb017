use std::process::ExitCode;

use substract::cli::Cli;
use substract::config::Config;
use substract::errors::{Result, SubstractError};
use substract::logging::init_logging;
use substract::{App, RunSummary};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::from_args();

    if let Err(e) = init_logging(cli.log_filter(), cli.is_trace()) {
        eprintln!("Warning: {e}");
    }

    // Load configuration
    let mut config = Config::from_env();
    config.merge_with_cli(&cli);
    if let Err(e) = config.validate() {
        return fail(&cli, &e);
    }

    if cli.input_source().is_none() {
        let e = SubstractError::NoInput;
        if cli.error_enabled() {
            eprintln!("Error: {e}");
        }
        print!("{}", Cli::usage());
        return ExitCode::from(e.exit_code());
    }

    let app = App::new(cli.clone(), config);

    let outcome: Result<RunSummary> = tokio::select! {
        joined = tokio::task::spawn_blocking(move || app.run()) => {
            joined.unwrap_or_else(|e| Err(SubstractError::internal_with("extraction task failed", e)))
        }
        Ok(()) = tokio::signal::ctrl_c() => Err(SubstractError::Cancelled),
    };

    match outcome {
        Ok(summary) => {
            debug!(?summary, "run complete");
            ExitCode::SUCCESS
        }
        Err(SubstractError::Cancelled) => {
            // Reported regardless of verbosity. Exit now; dropping the
            // runtime would wait on the blocking task.
            eprintln!("\n{}", SubstractError::Cancelled);
            std::process::exit(SubstractError::Cancelled.exit_code().into());
        }
        Err(e) => fail(&cli, &e),
    }
}

fn fail(cli: &Cli, e: &SubstractError) -> ExitCode {
    debug!(category = %e.category(), "run failed");
    if cli.error_enabled() {
        match e {
            SubstractError::Io { .. } => eprintln!("{e}"),
            _ => eprintln!("Error: {e}"),
        }
    }
    ExitCode::from(e.exit_code())
}
