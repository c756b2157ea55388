use crate::domain::constants::{FIRST_PAIR, GREETING_QUESTION, SECOND_PAIR};
use crate::domain::models::{RunReport, Step};
use crate::services::printer::{PrintError, Printer};
use std::io::Write;

/// Ordered list of print steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Hello, then the printer's three calls.
    pub fn greeting() -> Self {
        Self::new(vec![
            Step::Hello,
            Step::print(GREETING_QUESTION),
            Step::print_multiple(FIRST_PAIR.0, FIRST_PAIR.1),
            Step::print_multiple(SECOND_PAIR.0, SECOND_PAIR.1),
        ])
    }

    pub fn single(step: Step) -> Self {
        Self::new(vec![step])
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn render(&self) -> RunReport {
        RunReport {
            lines: self.steps.iter().map(Step::render).collect(),
        }
    }

    /// Emits every step in order; the first failed write stops the run.
    pub fn run<W: Write>(&self, printer: &mut Printer<W>) -> Result<RunReport, PrintError> {
        log::debug!("running script with {} steps", self.steps.len());
        let mut report = RunReport::default();
        for step in &self.steps {
            report.lines.push(printer.emit(step)?);
        }
        Ok(report)
    }
}
