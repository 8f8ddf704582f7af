use std::time::Duration;

use chrono::Local;
use tracing::{debug, info};

use crate::{
    core::prompt::build_prompt,
    error::{CompassError, Result},
    schemas::{parse_report, report_schema},
    services::gemini::GeminiClient,
    types::{ReportData, UserInputs},
};

/// Report generator client: validated inputs in, typed report out. One
/// outbound call per invocation.
#[derive(Clone, Debug)]
pub struct ReportGenerator {
    client: GeminiClient,
    timeout: Duration,
}

impl ReportGenerator {
    pub fn new(api_key: String) -> Self {
        Self {
            client: GeminiClient::new(api_key),
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.client.set_model(model);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client.set_base_url(base_url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .map_err(|_| {
                CompassError::Config(
                    "GEMINI_API_KEY environment variable must be set before creating a ReportGenerator"
                        .to_string(),
                )
            })?;
        let mut generator = Self::new(api_key);
        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
            generator.client.set_base_url(base_url);
        }
        Ok(generator)
    }

    /// Validate inputs, build the prompt and run one generation round-trip.
    pub async fn generate(&self, inputs: &UserInputs) -> Result<ReportData> {
        inputs.validate()?;

        let prompt = build_prompt(inputs, Local::now().date_naive());
        debug!(city = %inputs.target_city, "requesting report generation");

        let text = self
            .client
            .generate_content(&prompt, report_schema(), self.timeout)
            .await?;

        let report = parse_report(&text)?;
        info!(
            city = %inputs.target_city,
            dimensions = report.dest_analysis.dimensions.len(),
            "report generated"
        );
        Ok(report)
    }
}
