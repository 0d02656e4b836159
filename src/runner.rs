use std::io::Write;

use crate::{
    case::{CaseResult, Status},
    reporter::Reporter,
    stopwatch::StopWatch,
    suite::Suite,
    utility,
};

/// Owns a collection of suites and drives one run: shuffle at construction,
/// sequential execution, aggregation, and the final report.
///
/// The suite order is randomized once, when the runner is built; repeated
/// `run` calls reuse the same order, and cloning a runner preserves it.
#[derive(Debug, Clone, PartialEq)]
pub struct Runner {
    suites: Vec<Suite>,
}

impl Runner {
    /// Takes ownership of `suites` and shuffles them. Results are read back
    /// through [`Runner::suites`] or [`Runner::classified_results`] after a
    /// run.
    pub fn new(mut suites: Vec<Suite>) -> Self {
        utility::shuffle(&mut suites);
        Self { suites }
    }

    /// The suites in their current (shuffled) order.
    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    /// Runs all suites, reporting to `sink` without color. An absent sink
    /// suppresses the report but not the execution.
    pub fn run(&mut self, sink: Option<&mut dyn Write>) -> Result<bool, String> {
        let mut reporter = Reporter::new(sink, false);
        self.run_with_reporter(&mut reporter)
    }

    /// Runs every suite in the shuffled order, never aborting early, then
    /// aggregates each case into the passed/failed summary.
    ///
    /// Returns `Ok(true)` iff the collection is non-empty and every suite
    /// succeeded; an empty collection is `Ok(false)` with no output. `Err`
    /// occurs only when the reporter's sink rejects a write.
    pub fn run_with_reporter(&mut self, reporter: &mut Reporter) -> Result<bool, String> {
        if self.suites.is_empty() {
            return Ok(false);
        }

        let case_count = self.suites.len();
        let test_count: usize = self.suites.iter().map(Suite::len).sum();
        let mut time = StopWatch::new();
        let mut success = true;

        reporter.on_run_start(test_count, case_count)?;
        self.setup(reporter)?;

        time.start();
        reporter.separator()?;
        for suite in &mut self.suites {
            if !suite.run(reporter)? {
                success = false;
            }
        }
        time.stop();

        self.teardown(reporter)?;
        reporter.on_run_end(test_count, case_count, &time)?;

        let (passed, failed) = self.classified_results();
        reporter.on_summary(&passed, &failed)?;

        Ok(success)
    }

    /// Splits every case result into passed and failed buckets, in suite
    /// traversal order, then case order. Cases that never ran land in neither
    /// bucket.
    pub fn classified_results(&self) -> (Vec<CaseResult>, Vec<CaseResult>) {
        let mut passed = vec![];
        let mut failed = vec![];

        for suite in &self.suites {
            for result in suite.cases() {
                match result.status {
                    Status::Passed => passed.push(result),
                    Status::Failed => failed.push(result),
                    Status::NotRun => {}
                }
            }
        }

        (passed, failed)
    }

    fn setup(&self, reporter: &mut Reporter) -> Result<(), String> {
        reporter.on_global_setup()
    }

    fn teardown(&self, reporter: &mut Reporter) -> Result<(), String> {
        reporter.on_global_teardown()
    }
}
