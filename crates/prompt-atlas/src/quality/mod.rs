//! Heuristic prompt quality scoring.
//!
//! A prompt is run through a fixed sequence of independent signal checks
//! (length, vagueness, context, examples, constraints, action verbs,
//! technical detail, audience, numbers, capitalization). Each check may
//! deduct points, record a strength, an issue, a suggestion, or feed the
//! `clarity`/`specificity` sub-scores. Nothing is carried between calls.

mod advisor;
mod grade;
pub mod router;
mod rules;
mod showcase;
pub mod vocabulary;

pub use advisor::{advise, AdviceTier};
pub use grade::Grade;
pub use router::quality_router;
pub use showcase::{showcase, ShowcaseExample, ShowcaseTier};
pub use vocabulary::{SignalCheck, SignalVocabulary};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::sync::OnceLock;

/// Sub-measurements collected while scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualityMetrics {
    pub length: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub has_context: bool,
    pub has_examples: bool,
    pub has_constraints: bool,
    pub has_format_specs: bool,
    pub clarity: u8,
    pub specificity: u8,
}

/// Outcome of scoring one prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityReport {
    pub score: u8,
    pub grade: Grade,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    #[serde(serialize_with = "metrics_or_empty")]
    pub metrics: Option<QualityMetrics>,
}

impl QualityReport {
    fn degenerate() -> Self {
        Self {
            score: 0,
            grade: Grade::F,
            issues: vec!["Prompt is too short or empty".to_string()],
            suggestions: vec!["Write a descriptive prompt of at least 20-30 words".to_string()],
            strengths: Vec::new(),
            metrics: None,
        }
    }
}

fn metrics_or_empty<S>(metrics: &Option<QualityMetrics>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match metrics {
        Some(metrics) => metrics.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// Stateless scorer over a configurable vocabulary.
#[derive(Debug, Clone, Default)]
pub struct PromptScorer {
    vocabulary: SignalVocabulary,
}

impl PromptScorer {
    pub fn new(vocabulary: SignalVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &SignalVocabulary {
        &self.vocabulary
    }

    pub fn score(&self, text: &str) -> QualityReport {
        if rules::is_degenerate(text) {
            return QualityReport::degenerate();
        }

        let findings = rules::evaluate(text, &self.vocabulary);
        // evaluate() clamps to 0..=100
        let score = findings.score as u8;

        QualityReport {
            score,
            grade: Grade::from_score(score),
            issues: findings.issues,
            suggestions: findings.suggestions,
            strengths: findings.strengths,
            metrics: Some(findings.metrics),
        }
    }
}

/// Score `text` with the standard vocabulary.
pub fn score(text: &str) -> QualityReport {
    static STANDARD: OnceLock<PromptScorer> = OnceLock::new();
    STANDARD.get_or_init(PromptScorer::default).score(text)
}
