use juyou_compass::types::{
    CheatCode, DestAnalysis, Dimension, LuckySpots, PaidContent, Pitfalls, ReportData,
    RoadmapStage, Scores, Severity, SocialBadge, UserProfile, WuXing,
};

/// A fully populated report with a configurable dimension count.
pub fn sample_report(dimension_count: usize) -> ReportData {
    ReportData {
        user_profile: UserProfile {
            energy_type: "Furnace Fire".to_string(),
            match_score: 88.0,
            match_comment: "The city feeds your weak fire element.".to_string(),
            wuxing: WuXing {
                wood: 62.0,
                fire: 35.0,
                earth: 70.0,
                metal: 48.0,
                water: 81.0,
            },
        },
        social_badge: SocialBadge {
            title: "Dali - Carefree Wanderer".to_string(),
            keywords: vec!["wind".to_string(), "water".to_string(), "ease".to_string()],
            auspicious_direction: "northeast of the old town".to_string(),
            lucky_color: "indigo".to_string(),
        },
        dest_analysis: DestAnalysis {
            dimensions: (0..dimension_count)
                .map(|i| Dimension {
                    name: format!("dimension-{}", i + 1),
                    val: (i as f64) + 5.0,
                    desc: format!("verdict {}", i + 1),
                })
                .collect(),
        },
        scores: Scores {
            short_term: 8.0,
            mid_term: 7.0,
            long_term: 9.0,
            comment: "horizon-scores-unrendered".to_string(),
        },
        paid_content: PaidContent {
            pitfalls: Pitfalls {
                title: "Beware the slow drain".to_string(),
                risk_analysis: "Your earth excess meets a damp climate.".to_string(),
                mitigation_strategy: "Keep a strict morning routine the first month.".to_string(),
                severity: Severity::Medium,
            },
            roadmap: vec![
                RoadmapStage {
                    stage_name: "Week 1: landing".to_string(),
                    action_title: "Establish the safe house".to_string(),
                    description: "Settle logistics before anything social.".to_string(),
                },
                RoadmapStage {
                    stage_name: "Month 1: roots".to_string(),
                    action_title: "Find the third place".to_string(),
                    description: "One cafe, one market, one walking loop.".to_string(),
                },
                RoadmapStage {
                    stage_name: "Month 3: expansion".to_string(),
                    action_title: "Go visible".to_string(),
                    description: "Host one small gathering.".to_string(),
                },
            ],
            cheat_code: CheatCode {
                title: "Think like a local landlord".to_string(),
                content: "Rent in the off-season by the west gate.".to_string(),
            },
            lucky_spots: LuckySpots {
                title: "High-energy spots".to_string(),
                spots: vec!["Erhai west bank".to_string(), "Three Pagodas".to_string()],
            },
        },
    }
}
