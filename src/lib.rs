//! juyou-compass: destination energy compatibility reports from
//! schema-constrained Gemini output.
//!
//! The crate collects birth and travel-intent data, sends one
//! `generateContent` request constrained to a fixed JSON schema, parses the
//! result into a typed [`ReportData`], and renders it behind a client-side
//! unlock gate.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use juyou_compass::{ReportGenerator, UserInputs};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = ReportGenerator::from_env()?;
//!
//!     let mut inputs = UserInputs::default();
//!     inputs.target_city = "Dali".to_string();
//!     inputs.birth_date = chrono::NaiveDate::from_ymd_opt(1994, 2, 2);
//!     inputs.birth_place = "Xi'an".to_string();
//!
//!     let report = generator.generate(&inputs).await?;
//!     println!("{}", report.social_badge.title);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod gate;
pub mod render;
pub mod schemas;
pub(crate) mod services;
pub mod types;

pub use crate::core::{
    App, LoadingCarousel, ReportGenerator, Step, GENERATION_ERROR_MSG, LOADING_MESSAGES,
};
pub use error::{CompassError, Result};
pub use gate::{code_is_valid, purchase_url, AccessGate};
pub use render::render_report;
pub use schemas::{parse_report, report_schema, validate_report_payload};
pub use types::{ReportData, Severity, TripPurpose, UserInputs};

#[cfg(feature = "cli")]
pub mod cli;
