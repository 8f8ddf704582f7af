use chrono::NaiveDate;

use crate::types::UserInputs;

/// Build the generation instruction embedding every collected field plus the
/// current date. The structural requirements (four dimensions, three roadmap
/// stages) back the fixed report layout.
pub fn build_prompt(inputs: &UserInputs, today: NaiveDate) -> String {
    let birth_date = inputs
        .birth_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let birth_time = inputs
        .birth_time
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let mbti = inputs
        .mbti_display()
        .unwrap_or_else(|| "unknown".to_string());

    format!(
        "Act as a senior consultant fluent in traditional Chinese destiny reading \
(Bazi five elements and Zi Wei Dou Shu), modern environmental psychology, and the \
digital-nomad lifestyle.\n\
\n\
User profile:\n\
- Target city: {target_city}\n\
- Core purpose of the stay: {purpose}\n\
- Birth date: {birth_date}\n\
- Birth time: {birth_time}\n\
- Birth place: {birth_place}\n\
- MBTI: {mbti}\n\
- Current date: {today}\n\
\n\
Task: produce a high-value destination energy strategy report. The paid content \
must deliver deep strategic analysis and actionable advice.\n\
\n\
Hard requirements:\n\
1. dest_analysis: output exactly FOUR dimensions (for example openness, pace of \
life, startup friendliness, natural healing power) so the card grid lays out as a \
symmetric 2x2.\n\
2. Paid content:\n\
   - pitfalls: a deep risk hedge combining the user's destiny weak points with \
the city's character.\n\
   - roadmap: a concrete three-stage timeline.\n\
   - cheat_code: one counter-intuitive, insider-perspective piece of city living \
advice.\n\
\n\
Tone: rational, sharp, straight to the point, like a mission briefing handed to a \
field agent.",
        target_city = inputs.target_city.trim(),
        purpose = inputs.trip_purpose.label(),
        birth_date = birth_date,
        birth_time = birth_time,
        birth_place = inputs.birth_place.trim(),
        mbti = mbti,
        today = today.format("%Y-%m-%d"),
    )
}
