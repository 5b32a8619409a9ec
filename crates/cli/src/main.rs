use clap::Parser;
use log::error;
use std::process::ExitCode;
use wersy_cli::args::Args;
use wersy_cli::config::Config;
use wersy_cli::{logging, presentation};
use wersy_engine::report::RunResult;

fn report_errors(result: &RunResult) {
    for (name, err) in &result.errors {
        error!("skipping {name}: {err}");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if config.watch {
        let run_cycle = || {
            presentation::print_clear_screen(config.watch_output);

            match wersy_engine::run(&config) {
                Ok(result) => {
                    report_errors(&result);
                    if let Err(e) = presentation::print_results(&result.reports, &config) {
                        error!("output failed: {e}");
                    }
                }
                Err(e) => error!("watch cycle failed: {e}"),
            }
        };

        if let Err(e) = wersy_engine::watch::watch_loop(&config, run_cycle) {
            eprintln!("Watch Error: {e}");
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    } else {
        match wersy_engine::run(&config) {
            Ok(result) => {
                report_errors(&result);
                if let Err(e) = presentation::print_results(&result.reports, &config) {
                    eprintln!("Output Error: {e}");
                    return ExitCode::FAILURE;
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Application Error: {e}");
                ExitCode::FAILURE
            }
        }
    }
}
