use std::io::{self, BufRead, Write as _};
use std::pin::pin;
use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use clap::{Arg, Command};
use tokio::time::interval;
use tracing::{error, info};

use crate::{
    core::{App, LoadingCarousel, ReportGenerator, GENERATION_ERROR_MSG},
    gate::{purchase_url, AccessGate},
    render::render_report,
    types::TripPurpose,
};

/// How often the decorative loading message rotates. Independent of actual
/// request progress.
const CAROUSEL_PERIOD: Duration = Duration::from_millis(1500);

/// CLI entry point for the juyou binary
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("juyou")
        .version("0.1.0")
        .about("Destination energy compatibility reports, generated via Gemini")
        .arg(
            Arg::new("city")
                .help("Target city or country")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("purpose")
                .short('p')
                .long("purpose")
                .value_name("PURPOSE")
                .help("Core purpose of the stay: explore, healing, career, social, inspiration")
                .default_value("explore"),
        )
        .arg(
            Arg::new("birth-date")
                .short('d')
                .long("birth-date")
                .value_name("YYYY-MM-DD")
                .help("Birth date"),
        )
        .arg(
            Arg::new("birth-time")
                .long("birth-time")
                .value_name("HH:MM")
                .help("Birth time (optional)"),
        )
        .arg(
            Arg::new("birth-place")
                .short('b')
                .long("birth-place")
                .value_name("PLACE")
                .help("Birth place"),
        )
        .arg(
            Arg::new("mbti")
                .long("mbti")
                .value_name("TYPE")
                .help("MBTI type, e.g. INFJ (optional)"),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("The Gemini model to use")
                .default_value("gemini-3-flash-preview"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Gemini API key (or set GEMINI_API_KEY / API_KEY env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Generation endpoint base URL (or set GEMINI_BASE_URL env var)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds")
                .default_value("120"),
        )
        .get_matches();

    // Get API key from argument or environment
    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| std::env::var("GEMINI_API_KEY").ok())
        .or_else(|| std::env::var("API_KEY").ok())
        .ok_or("Gemini API key is required. Set GEMINI_API_KEY environment variable or use --api-key")?;

    let timeout_seconds: u64 = matches.get_one::<String>("timeout").unwrap().parse()?;
    let mut generator = ReportGenerator::new(api_key)
        .with_model(matches.get_one::<String>("model").unwrap().as_str())
        .with_timeout(Duration::from_secs(timeout_seconds));
    if let Some(base_url) = matches
        .get_one::<String>("base-url")
        .cloned()
        .or_else(|| std::env::var("GEMINI_BASE_URL").ok())
    {
        generator = generator.with_base_url(base_url);
    }

    // Fill the form from the arguments
    let mut app = App::new();
    {
        let inputs = app.inputs_mut();
        if let Some(city) = matches.get_one::<String>("city") {
            inputs.target_city = city.clone();
        }
        let purpose_raw = matches.get_one::<String>("purpose").unwrap();
        inputs.trip_purpose = TripPurpose::parse(purpose_raw)
            .ok_or_else(|| format!("unknown purpose `{purpose_raw}`"))?;
        if let Some(date) = matches.get_one::<String>("birth-date") {
            inputs.birth_date = Some(NaiveDate::parse_from_str(date, "%Y-%m-%d")?);
        }
        if let Some(time) = matches.get_one::<String>("birth-time") {
            inputs.birth_time = Some(NaiveTime::parse_from_str(time, "%H:%M")?);
        }
        if let Some(place) = matches.get_one::<String>("birth-place") {
            inputs.birth_place = place.clone();
        }
        inputs.mbti = matches.get_one::<String>("mbti").cloned();
    }

    // Validation happens in the state machine; a blocked submit stays on the
    // input step with the error surfaced.
    if let Err(err) = app.submit() {
        eprintln!("{}", err);
        std::process::exit(2);
    }

    info!(model = generator.model(), "starting report generation");

    // Race the generation against the decorative message carousel.
    let inputs = app.inputs().clone();
    let mut carousel = LoadingCarousel::new();
    let mut ticker = interval(CAROUSEL_PERIOD);
    ticker.tick().await; // first tick fires immediately
    println!("{}", carousel.current());

    let outcome = {
        let mut generation = pin!(generator.generate(&inputs));
        loop {
            tokio::select! {
                result = &mut generation => break result,
                _ = ticker.tick() => {
                    println!("{}", carousel.advance());
                }
            }
        }
    };

    match outcome {
        Ok(report) => app.finish(report),
        Err(err) => {
            error!(code = err.error_code(), "generation failed: {err}");
            app.fail(GENERATION_ERROR_MSG);
        }
    }

    let report = match app.result() {
        Some(report) => report,
        None => {
            eprintln!("ERROR: {}", app.error().unwrap_or(GENERATION_ERROR_MSG));
            std::process::exit(1);
        }
    };

    let mut gate = AccessGate::new();
    println!("\n{}", render_report(report, app.inputs(), gate.is_unlocked()));

    // Unlock loop: enter a code, `buy` for the purchase page, `quit` to exit.
    let stdin = io::stdin();
    loop {
        print!("unlock code (or `buy` / `quit`): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let entry = line.trim();

        match entry {
            "" => continue,
            "quit" => break,
            "buy" => {
                println!("purchase a key at: {}", purchase_url());
            }
            code => {
                if gate.unlock(code) {
                    println!("\n{}", render_report(report, app.inputs(), true));
                    break;
                }
                println!("invalid code, try again ({} rejected)", gate.rejected_attempts());
            }
        }
    }

    Ok(())
}
