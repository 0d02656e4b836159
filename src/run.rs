use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::{reporter::Reporter, runner::Runner, suite::Suite};

#[derive(Clone, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Command-line arguments a harness binary accepts, for use from its `main`.
#[derive(Parser)]
pub struct HarnessArgs {
    #[clap(value_enum, long = "color", default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

pub enum HarnessError {
    TestFailed,
    ReportingError,
}

impl HarnessError {
    pub fn to_exit_status(&self) -> i32 {
        match self {
            HarnessError::TestFailed => 1,
            HarnessError::ReportingError => 2,
        }
    }
}

/// Builds a runner from `suites` and runs it against stdout.
pub fn run(suites: Vec<Suite>, use_color: bool) -> Result<(), HarnessError> {
    let mut runner = Runner::new(suites);
    let mut w = std::io::stdout();
    let mut reporter = Reporter::new(Some(&mut w), use_color);

    match runner.run_with_reporter(&mut reporter) {
        Ok(true) => Ok(()),
        Ok(false) => Err(HarnessError::TestFailed),
        Err(err) => {
            eprintln!("cannot write report: {}", err);
            Err(HarnessError::ReportingError)
        }
    }
}

/// Complete `main` body for a test binary: parses the command line, runs the
/// suites, and exits with the mapped status.
pub fn harness_main(suites: Vec<Suite>) -> ! {
    let args = HarnessArgs::parse();

    let use_color = match args.color {
        ColorChoice::Auto => std::io::stdout().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    match run(suites, use_color) {
        Ok(()) => std::process::exit(0),
        Err(err) => std::process::exit(err.to_exit_status()),
    }
}
