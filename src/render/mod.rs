//! Plain-text report rendering. Purely presentational: no derived
//! computation beyond formatting, and the `scores` field of the contract is
//! deliberately never shown.

use std::fmt::Write;

use crate::{
    gate::purchase_url,
    types::{Dimension, ReportData, Severity, UserInputs},
};

const RULE: &str = "────────────────────────────────────────────";
const BAR_WIDTH: usize = 20;

/// Render the full report. Premium sections are redacted until `unlocked`.
pub fn render_report(report: &ReportData, inputs: &UserInputs, unlocked: bool) -> String {
    let mut out = String::new();

    render_header(&mut out, inputs);
    render_badge(&mut out, report);
    render_profile(&mut out, report);
    render_dimensions(&mut out, &report.dest_analysis.dimensions);

    if unlocked {
        render_premium(&mut out, report);
    } else {
        render_locked_notice(&mut out);
    }

    out
}

fn render_header(out: &mut String, inputs: &UserInputs) {
    let _ = writeln!(out, "JUYOU LAB · TRAVEL ENERGY COMPASS");
    let _ = writeln!(
        out,
        "DEST: {}   MODE: {}",
        inputs.target_city.trim().to_uppercase(),
        inputs.trip_purpose.label().to_uppercase()
    );
    let _ = writeln!(out, "{}", RULE);
}

fn render_badge(out: &mut String, report: &ReportData) {
    let badge = &report.social_badge;
    let _ = writeln!(out, "\n[ ENERGY IDENTITY ]");
    let _ = writeln!(out, "  {}", badge.title);
    let keywords: Vec<String> = badge.keywords.iter().map(|k| format!("#{}", k)).collect();
    let _ = writeln!(out, "  {}", keywords.join("  "));
    let _ = writeln!(
        out,
        "  auspicious direction: {}   lucky color: {}",
        badge.auspicious_direction, badge.lucky_color
    );
}

fn render_profile(out: &mut String, report: &ReportData) {
    let profile = &report.user_profile;
    let _ = writeln!(out, "\n[ PROFILE ]");
    let _ = writeln!(
        out,
        "  energy type: {}   match score: {:.0}/100",
        profile.energy_type, profile.match_score
    );
    let _ = writeln!(out, "  {}", profile.match_comment);
    let _ = writeln!(out, "\n  five-element intensity");
    for (name, value) in profile.wuxing.axes() {
        let _ = writeln!(out, "  {:<5} {} {:>3.0}", name, bar(value, 100.0), value);
    }
}

/// Dimension cards, two per row. The generator is instructed to send four,
/// but any count renders correctly.
fn render_dimensions(out: &mut String, dimensions: &[Dimension]) {
    let _ = writeln!(out, "\n[ FIELD DIMENSIONS ]");
    if dimensions.is_empty() {
        let _ = writeln!(out, "  (no dimension data)");
        return;
    }
    for row in dimensions.chunks(2) {
        let cells: Vec<String> = row
            .iter()
            .map(|d| format!("{} {:.1}/10", d.name, d.val))
            .collect();
        let _ = writeln!(out, "  {}", cells.join("  |  "));
        for d in row {
            let _ = writeln!(out, "    - {}: {}", d.name, d.desc);
        }
    }
}

fn render_premium(out: &mut String, report: &ReportData) {
    let paid = &report.paid_content;

    let _ = writeln!(out, "\n[ PITFALL WARNING · {} ]", severity_tag(paid.pitfalls.severity));
    let _ = writeln!(out, "  {}", paid.pitfalls.title);
    let _ = writeln!(out, "  risk: {}", paid.pitfalls.risk_analysis);
    let _ = writeln!(out, "  hedge: {}", paid.pitfalls.mitigation_strategy);

    let _ = writeln!(out, "\n[ ROADMAP ]");
    for (idx, stage) in paid.roadmap.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} — {}", idx + 1, stage.stage_name, stage.action_title);
        let _ = writeln!(out, "     {}", stage.description);
    }

    let _ = writeln!(out, "\n[ CHEAT CODE ]");
    let _ = writeln!(out, "  {}", paid.cheat_code.title);
    let _ = writeln!(out, "  {}", paid.cheat_code.content);

    let _ = writeln!(out, "\n[ {} ]", paid.lucky_spots.title.to_uppercase());
    for spot in &paid.lucky_spots.spots {
        let _ = writeln!(out, "  * {}", spot);
    }
}

fn render_locked_notice(out: &mut String) {
    let _ = writeln!(out, "\n[ PREMIUM CONTENT · LOCKED ]");
    let _ = writeln!(out, "  ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓");
    let _ = writeln!(out, "  ▓▓ pitfall warning          ▓▓▓▓");
    let _ = writeln!(out, "  ▓▓ three-stage roadmap      ▓▓▓▓");
    let _ = writeln!(out, "  ▓▓ insider cheat code       ▓▓▓▓");
    let _ = writeln!(out, "  ▓▓ high-energy spots        ▓▓▓▓");
    let _ = writeln!(out, "  ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓");
    let _ = writeln!(out, "  enter an unlock code, or get one at {}", purchase_url());
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "HIGH RISK",
        Severity::Medium => "MEDIUM RISK",
        Severity::Low => "LOW RISK",
    }
}

fn bar(value: f64, max: f64) -> String {
    let clamped = value.clamp(0.0, max);
    let filled = ((clamped / max) * BAR_WIDTH as f64).round() as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(BAR_WIDTH - filled));
    bar
}
