// crates/engine/src/lib.rs
pub mod analysis;
pub mod config;
pub mod error;
pub mod options;
pub mod report;
pub mod session;
pub mod source;
pub mod watch;

use crate::config::Config;
use crate::error::Result;
use crate::report::RunResult;
use log::debug;

/// Analyze every configured input.
///
/// Returns a `RunResult` containing both the reports of inputs that were
/// analyzed and the errors of those that were not. Reporting the errors is
/// left to the caller.
///
/// # Errors
///
/// In strict mode the first failing input aborts the run.
pub fn run(config: &Config) -> Result<RunResult> {
    let mut result = RunResult::default();

    for source in source::sources(config) {
        let name = source.name();
        match source
            .read()
            .and_then(|text| analysis::analyze(name.clone(), text, config))
        {
            Ok(report) => result.reports.push(report),
            Err(e) if config.strict => return Err(e),
            Err(e) => {
                debug!("input {name} failed: {e}");
                result.errors.push((name, e));
            }
        }
    }

    Ok(result)
}
