use super::QualityReport;
use serde::{Deserialize, Serialize};

/// Advice bucket selected purely from a report's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceTier {
    Urgent,
    Moderate,
    Good,
    Excellent,
}

impl AdviceTier {
    pub fn for_score(score: u8) -> Self {
        match score {
            0..=49 => AdviceTier::Urgent,
            50..=69 => AdviceTier::Moderate,
            70..=84 => AdviceTier::Good,
            _ => AdviceTier::Excellent,
        }
    }

    /// Headline first, then the individual recommendations.
    pub fn lines(self) -> &'static [&'static str] {
        match self {
            AdviceTier::Urgent => &[
                "URGENT IMPROVEMENT NEEDED",
                "Rewrite the prompt from scratch",
                "Add a specific goal and context",
                "Provide examples",
                "State a clear action",
            ],
            AdviceTier::Moderate => &[
                "MODERATE IMPROVEMENT",
                "Add more specific details",
                "Strengthen the context",
                "Specify the output format",
            ],
            AdviceTier::Good => &[
                "GOOD - MINOR IMPROVEMENTS",
                "Consider adding numeric targets",
                "Consider adding more examples",
            ],
            AdviceTier::Excellent => &[
                "EXCELLENT PROMPT",
                "Great work",
                "This prompt can serve as a template",
            ],
        }
    }
}

/// Improvement advice for a scored prompt.
pub fn advise(report: &QualityReport) -> Vec<String> {
    AdviceTier::for_score(report.score)
        .lines()
        .iter()
        .map(|line| line.to_string())
        .collect()
}
