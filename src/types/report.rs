use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full report returned by the generation endpoint. Doc comments double as
/// schema descriptions sent with the request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReportData {
    pub user_profile: UserProfile,
    pub social_badge: SocialBadge,
    pub dest_analysis: DestAnalysis,
    /// Requested in the contract but not rendered anywhere yet.
    pub scores: Scores,
    pub paid_content: PaidContent,
}

/// The user's personal energy reading against the target city.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UserProfile {
    /// Destiny energy type derived from the birth data, e.g. "Furnace Fire"
    pub energy_type: String,
    /// Person-to-city compatibility, 0-100
    pub match_score: f64,
    /// Short read on the person/place relationship
    pub match_comment: String,
    pub wuxing: WuXing,
}

/// Five-element intensity profile, each axis 0-100.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WuXing {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl WuXing {
    /// Axes in canonical order, for iteration-based rendering.
    pub fn axes(&self) -> [(&'static str, f64); 5] {
        [
            ("Wood", self.wood),
            ("Fire", self.fire),
            ("Earth", self.earth),
            ("Metal", self.metal),
            ("Water", self.water),
        ]
    }
}

/// Shareable identity summary for the result.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SocialBadge {
    /// Catchy title in the form "[City] - [Adjective][Noun]"
    pub title: String,
    /// Exactly three keywords
    pub keywords: Vec<String>,
    /// Auspicious direction, e.g. "northeast of the old town"
    pub auspicious_direction: String,
    pub lucky_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DestAnalysis {
    /// Exactly four dimensions so the card grid lays out 2x2. Instructed to
    /// the generator, not enforced locally.
    pub dimensions: Vec<Dimension>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Dimension {
    /// Dimension name, five words at most
    pub name: String,
    /// Score, 0-10
    pub val: f64,
    /// One-line verdict
    pub desc: String,
}

/// Horizon scores. Present in the response contract, currently unused by the
/// renderer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Scores {
    pub short_term: f64,
    pub mid_term: f64,
    pub long_term: f64,
    pub comment: String,
}

/// Premium strategy content, hidden behind the access gate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PaidContent {
    pub pitfalls: Pitfalls,
    /// Three-stage settling-in roadmap
    pub roadmap: Vec<RoadmapStage>,
    pub cheat_code: CheatCode,
    pub lucky_spots: LuckySpots,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Pitfalls {
    /// Warning headline
    pub title: String,
    /// Why this is a risk for this specific user
    pub risk_analysis: String,
    /// Concrete, actionable hedge
    pub mitigation_strategy: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RoadmapStage {
    /// Stage name, e.g. "Week 1: landing"
    pub stage_name: String,
    /// Core action theme
    pub action_title: String,
    /// Detailed advice
    pub description: String,
}

/// One counter-intuitive insider tip about the city. Unrelated to the unlock
/// code used by the access gate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CheatCode {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LuckySpots {
    pub title: String,
    /// Names of high-energy locations
    pub spots: Vec<String>,
}
