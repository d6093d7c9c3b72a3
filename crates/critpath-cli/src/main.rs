//! `critpath` binary: reads a task network and prints its PERT schedule.

#![allow(clippy::print_stderr)]

mod cli;
mod errors;
mod input;
mod report;
mod tracing;

use crate::cli::{Cli, InputSource, OutputFormat};
use crate::errors::CliError;
use crate::input::TaskNetwork;
use crate::report::Report;
use crate::tracing::{Level, TracingConfig};
use ::tracing::{debug, info, instrument, warn};
use clap::Parser;
use std::io::{self, Read, Write};
use std::process::ExitCode;

/// Exit code when the input graph contains a cycle.
const EXIT_NOT_A_DAG: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let tracing_config = TracingConfig {
        format: cli.log_format,
        level: Level::from(cli.level),
    };
    if let Err(e) = crate::tracing::init_tracing(tracing_config) {
        eprintln!("Failed to initialize tracing: {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(report) if report.is_scheduled() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(EXIT_NOT_A_DAG),
        Err(e) => {
            let code = e.exit_code();
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::from(code)
        }
    }
}

#[instrument(name = "critpath", skip_all)]
fn run(cli: &Cli) -> Result<Report, CliError> {
    let network = load(&cli.source())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.print_graph {
        report::write_graph(&network, &mut out).map_err(CliError::Output)?;
    }

    let report = match critpath::pert(&network.graph, &network.durations) {
        Ok(schedule) => {
            info!(
                project_length = schedule.critical_path_length(),
                num_critical = schedule.num_critical(),
                "Schedule computed"
            );
            Report::from_schedule(&schedule)
        }
        Err(error) => {
            warn!(%error, "Task network rejected");
            Report::from_error(error).map_err(CliError::Analysis)?
        }
    };

    match cli.format {
        OutputFormat::Table => report.write_table(&mut out),
        OutputFormat::Json => report.write_json(&mut out),
    }
    .and_then(|()| out.flush())
    .map_err(CliError::Output)?;

    Ok(report)
}

fn load(source: &InputSource) -> Result<TaskNetwork, CliError> {
    debug!(?source, "Loading task network");
    let text = match source {
        InputSource::Sample => return Ok(TaskNetwork::sample()?),
        InputSource::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| CliError::io("<stdin>", e))?;
            text
        }
        InputSource::File(path) => {
            std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?
        }
    };
    Ok(TaskNetwork::parse(&text)?)
}
