use std::io::Write;

use crate::{case::CaseResult, stopwatch::StopWatch, utility::numbered};

pub enum Color {
    Red,
    Green,
    Reset,
}

impl Color {
    pub fn to_ansi(&self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Reset => "\x1b[0m",
        }
    }
}

pub struct ColorMarker {
    use_color: bool,
}

impl ColorMarker {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn wrap<S: AsRef<str>>(&self, color: Color, s: S) -> String {
        if self.use_color {
            format!(
                "{}{}{}",
                color.to_ansi(),
                s.as_ref(),
                Color::Reset.to_ansi()
            )
        } else {
            s.as_ref().to_string()
        }
    }

    pub fn red<S: AsRef<str>>(&self, s: S) -> String {
        self.wrap(Color::Red, s)
    }

    pub fn green<S: AsRef<str>>(&self, s: S) -> String {
        self.wrap(Color::Green, s)
    }
}

/// Produces the linear text report of a run. The sink is optional; when it is
/// absent every reporting call is a no-op, so a run without a sink executes
/// all suites but writes nothing.
pub struct Reporter<'a> {
    sink: Option<&'a mut dyn Write>,
    cm: ColorMarker,
}

impl<'a> Reporter<'a> {
    pub fn new(sink: Option<&'a mut dyn Write>, use_color: bool) -> Self {
        Self {
            sink,
            cm: ColorMarker::new(use_color),
        }
    }

    fn write_line(&mut self, line: String) -> Result<(), String> {
        if let Some(w) = self.sink.as_mut() {
            writeln!(w, "{}", line).map_err(|err| err.to_string())?;
        }
        Ok(())
    }

    pub fn separator(&mut self) -> Result<(), String> {
        self.write_line(String::new())
    }

    pub fn on_run_start(&mut self, tests: usize, cases: usize) -> Result<(), String> {
        self.write_line(format!(
            "{} Running {} from {}.",
            self.cm.green("[==========]"),
            numbered("test", tests, None),
            numbered("case", cases, None)
        ))
    }

    pub fn on_global_setup(&mut self) -> Result<(), String> {
        self.write_line(format!(
            "{} Global test environment set-up.",
            self.cm.green("[----------]")
        ))
    }

    pub fn on_suite_start(&mut self, name: &str, tests: usize) -> Result<(), String> {
        self.write_line(format!(
            "{} {} from {}",
            self.cm.green("[----------]"),
            numbered("test", tests, None),
            name
        ))
    }

    pub fn on_case_start(&mut self, name: &str) -> Result<(), String> {
        self.write_line(format!("{} {}", self.cm.green("[ RUN      ]"), name))
    }

    pub fn on_case_passed(&mut self, name: &str, time: &StopWatch) -> Result<(), String> {
        self.write_line(format!(
            "{} {} ({})",
            self.cm.green("[       OK ]"),
            name,
            time.display()
        ))
    }

    pub fn on_case_failed(
        &mut self,
        name: &str,
        time: &StopWatch,
        message: &str,
    ) -> Result<(), String> {
        self.write_line(format!(
            "{} {} ({})",
            self.cm.red("[  FAILED  ]"),
            name,
            time.display()
        ))?;
        for message_line in message.lines() {
            self.write_line(format!("  {}", message_line))?;
        }
        Ok(())
    }

    pub fn on_suite_end(
        &mut self,
        name: &str,
        tests: usize,
        time: &StopWatch,
    ) -> Result<(), String> {
        self.write_line(format!(
            "{} {} from {} ({} total)",
            self.cm.green("[----------]"),
            numbered("test", tests, None),
            name,
            time.display()
        ))?;
        self.separator()
    }

    pub fn on_global_teardown(&mut self) -> Result<(), String> {
        self.write_line(format!(
            "{} Global test environment tear-down.",
            self.cm.green("[----------]")
        ))
    }

    pub fn on_run_end(
        &mut self,
        tests: usize,
        cases: usize,
        time: &StopWatch,
    ) -> Result<(), String> {
        self.write_line(format!(
            "{} {} from {} ran. ({} total)",
            self.cm.green("[==========]"),
            numbered("test", tests, None),
            numbered("case", cases, None),
            time.display()
        ))
    }

    pub fn on_summary(
        &mut self,
        passed: &[CaseResult],
        failed: &[CaseResult],
    ) -> Result<(), String> {
        self.write_line(format!(
            "{} {}.",
            self.cm.green("[  PASSED  ]"),
            numbered("test", passed.len(), None)
        ))?;

        if failed.is_empty() {
            return Ok(());
        }

        self.write_line(format!(
            "{} {}, listed below:",
            self.cm.red("[  FAILED  ]"),
            numbered("test", failed.len(), None)
        ))?;

        for result in failed {
            self.write_line(format!("{} {}", self.cm.red("[  FAILED  ]"), result.name))?;
        }

        self.separator()?;
        self.write_line(numbered("FAILED TEST", failed.len(), Some("FAILED TESTS")))
    }
}
