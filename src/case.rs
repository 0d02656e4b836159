use std::{
    any::Any,
    fmt::{self, Debug},
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use crate::{reporter::Reporter, stopwatch::StopWatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NotRun,
    Passed,
    Failed,
}

/// Readable record of one executed (or not-yet-executed) test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    pub name: String,
    pub status: Status,
}

type TestFn = dyn Fn() + Send + Sync;

/// A named test body together with its execution state. The body is behind an
/// `Arc` so cases keep value semantics when suites are copied.
#[derive(Clone)]
pub struct Case {
    name: String,
    test: Arc<TestFn>,
    status: Status,
    failure: Option<String>,
}

impl Case {
    pub fn new<S, F>(name: S, test: F) -> Self
    where
        S: Into<String>,
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            test: Arc::new(test),
            status: Status::NotRun,
            failure: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Message of the most recent failure, if the last run failed.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Executes the test body, converting a panic into a `Failed` status and a
    /// captured failure message. Nothing propagates past the case boundary.
    pub(crate) fn run(
        &mut self,
        suite_name: &str,
        reporter: &mut Reporter,
    ) -> Result<bool, String> {
        let full_name = format!("{}.{}", suite_name, self.name);
        let mut time = StopWatch::new();

        self.failure = None;

        reporter.on_case_start(&full_name)?;

        // The default panic hook writes to stderr; failures must reach the
        // reporter only. Swap in a silent hook for the duration of the body.
        let previous_hook = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));

        time.start();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| (self.test)()));
        time.stop();

        panic::set_hook(previous_hook);

        match outcome {
            Ok(()) => {
                self.status = Status::Passed;
                reporter.on_case_passed(&full_name, &time)?;
                Ok(true)
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                self.status = Status::Failed;
                reporter.on_case_failed(&full_name, &time, &message)?;
                self.failure = Some(message);
                Ok(false)
            }
        }
    }
}

impl Debug for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("name", &self.name)
            .field("status", &self.status)
            .field("failure", &self.failure)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Case {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.status == other.status && self.failure == other.failure
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "test panicked".to_string()
    }
}
