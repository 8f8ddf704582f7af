pub mod app;
pub mod generator;
pub mod loading;
pub mod prompt;

pub use app::{App, Step, GENERATION_ERROR_MSG};
pub use generator::ReportGenerator;
pub use loading::{LoadingCarousel, LOADING_MESSAGES};
pub use prompt::build_prompt;
