pub mod inputs;
pub mod report;

pub use inputs::{TripPurpose, UserInputs};
pub use report::{
    CheatCode, DestAnalysis, Dimension, LuckySpots, PaidContent, Pitfalls, ReportData,
    RoadmapStage, Scores, Severity, SocialBadge, UserProfile, WuXing,
};
