use tracing::error;

use crate::{
    core::generator::ReportGenerator,
    error::{CompassError, Result},
    types::{ReportData, UserInputs},
};

/// The single user-facing message every generation failure maps to.
pub const GENERATION_ERROR_MSG: &str =
    "Energy link interrupted. Check your network connection and try again.";

/// Wizard step currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Input,
    Loading,
    Report,
}

/// Application state: three steps, the form inputs, the last successful
/// result, and an optional error banner for the input step.
#[derive(Debug, Default)]
pub struct App {
    step: Step,
    inputs: UserInputs,
    result: Option<ReportData>,
    error: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn inputs(&self) -> &UserInputs {
        &self.inputs
    }

    /// Form edits mutate in place while on the input step.
    pub fn inputs_mut(&mut self) -> &mut UserInputs {
        &mut self.inputs
    }

    pub fn result(&self) -> Option<&ReportData> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// `input` -> `loading`, only when every required field is present.
    /// Ignored while a request is already in flight (the submit control is
    /// disabled during loading).
    pub fn submit(&mut self) -> Result<()> {
        if self.step == Step::Loading {
            return Ok(());
        }
        if let Err(err) = self.inputs.validate() {
            self.error = Some(err.to_string());
            return Err(err);
        }
        self.error = None;
        self.step = Step::Loading;
        Ok(())
    }

    /// `loading` -> `report` on success; replaces any prior result.
    pub fn finish(&mut self, report: ReportData) {
        self.result = Some(report);
        self.step = Step::Report;
    }

    /// `loading` -> `input` on failure. Inputs survive untouched.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.step = Step::Input;
    }

    /// `report` -> `input`; drops the result and the error banner, keeps the
    /// form values.
    pub fn reset(&mut self) {
        self.result = None;
        self.error = None;
        self.step = Step::Input;
    }

    /// Full submit/generate cycle. Any generator error becomes the one
    /// generic user-facing message; validation failures never leave the
    /// input step.
    pub async fn run_generation(&mut self, generator: &ReportGenerator) -> Result<()> {
        self.submit()?;

        match generator.generate(&self.inputs).await {
            Ok(report) => {
                self.finish(report);
                Ok(())
            }
            Err(err) => {
                error!(code = err.error_code(), "report generation failed: {err}");
                self.fail(GENERATION_ERROR_MSG);
                Err(err)
            }
        }
    }
}
