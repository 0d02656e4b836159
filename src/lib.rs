//! In-process test-execution harness: suites of named cases are shuffled at
//! construction, run sequentially, and summarized in a linear text report.
//!
//! Intended to drive `main()` of a test binary; see [`harness_main`].

mod case;
mod reporter;
mod run;
mod runner;
mod stopwatch;
mod suite;
mod utility;

pub use case::{Case, CaseResult, Status};
pub use reporter::{Color, ColorMarker, Reporter};
pub use run::{harness_main, run, ColorChoice, HarnessArgs, HarnessError};
pub use runner::Runner;
pub use stopwatch::StopWatch;
pub use suite::Suite;
pub use utility::{numbered, shuffle};
