use clap::Parser;
use dupexports::cli::{setup, Cli};
use dupexports::commands::{handle_check, CheckConfig};
use std::process::ExitCode;

const EXIT_DUPLICATES: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup::init_logging(cli.verbosity);
    setup::configure_thread_pool(setup::get_worker_count(cli.jobs));

    let config = build_check_config(cli);
    match handle_check(config) {
        Ok(outcome) if outcome.has_duplicates() => {
            log::info!(
                "{} duplicated names in {} files",
                outcome.report.len(),
                outcome.files_analyzed
            );
            ExitCode::from(EXIT_DUPLICATES)
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

// Pure function to build check configuration
fn build_check_config(cli: Cli) -> CheckConfig {
    CheckConfig {
        formatting_config: setup::create_formatting_config(cli.plain || cli.output.is_some()),
        path: cli.path,
        whitelist: cli.whitelist,
        ignore: cli.ignore_path,
        format: cli.format,
        output: cli.output,
        config_file: cli.config,
        no_parallel: cli.no_parallel,
    }
}
