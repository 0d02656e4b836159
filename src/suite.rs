use crate::{
    case::{Case, CaseResult},
    reporter::Reporter,
    stopwatch::StopWatch,
};

/// Named ordered collection of test cases, run together and reporting its own
/// success.
#[derive(Debug, Clone, PartialEq)]
pub struct Suite {
    name: String,
    cases: Vec<Case>,
}

impl Suite {
    pub fn new<S: Into<String>>(name: S, cases: Vec<Case>) -> Self {
        Self {
            name: name.into(),
            cases,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Snapshot of the current case results, in case order, with names
    /// qualified as `"<suite>.<case>"`.
    pub fn cases(&self) -> Vec<CaseResult> {
        self.cases
            .iter()
            .map(|case| CaseResult {
                name: format!("{}.{}", self.name, case.name()),
                status: case.status(),
            })
            .collect()
    }

    /// Runs every case in order, never aborting early. Returns `Ok(true)` iff
    /// all cases passed; `Err` only when the reporter's sink rejects a write.
    pub fn run(&mut self, reporter: &mut Reporter) -> Result<bool, String> {
        let mut time = StopWatch::new();
        let mut success = true;

        reporter.on_suite_start(&self.name, self.cases.len())?;

        time.start();
        for case in &mut self.cases {
            if !case.run(&self.name, reporter)? {
                success = false;
            }
        }
        time.stop();

        reporter.on_suite_end(&self.name, self.cases.len(), &time)?;

        Ok(success)
    }
}
