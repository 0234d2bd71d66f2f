use super::vocabulary::{SignalCheck, SignalVocabulary};
use super::QualityMetrics;
use regex::Regex;
use std::sync::OnceLock;

const MINIMUM_MEANINGFUL_CHARS: usize = 10;
const SHORT_PROMPT_WORDS: usize = 10;
const LONG_PROMPT_WORDS: usize = 200;
const VAGUE_TOLERANCE: usize = 2;
const SUB_SCORE_CAP: u8 = 50;

/// Running tally for one scoring pass.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    pub score: i32,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub metrics: QualityMetrics,
}

impl Findings {
    fn penalize(&mut self, points: i32) {
        self.score -= points;
    }

    fn issue(&mut self, message: &str) {
        self.issues.push(message.to_string());
    }

    fn suggest(&mut self, message: &str) {
        self.suggestions.push(message.to_string());
    }

    fn strength(&mut self, message: &str) {
        self.strengths.push(message.to_string());
    }
}

pub(crate) fn is_degenerate(text: &str) -> bool {
    text.chars().filter(|c| !c.is_whitespace()).count() < MINIMUM_MEANINGFUL_CHARS
}

/// Runs every signal check in order. Callers handle degenerate input first.
pub(crate) fn evaluate(text: &str, vocabulary: &SignalVocabulary) -> Findings {
    let lowered = text.to_lowercase();
    let word_count = text.split_whitespace().count();

    let mut findings = Findings {
        score: 100,
        metrics: QualityMetrics {
            length: text.chars().count(),
            word_count,
            sentence_count: text
                .split('.')
                .filter(|sentence| !sentence.trim().is_empty())
                .count(),
            ..QualityMetrics::default()
        },
        ..Findings::default()
    };

    check_length(word_count, &mut findings);
    check_vagueness(&lowered, vocabulary, &mut findings);
    check_context(&lowered, vocabulary, &mut findings);
    check_examples(&lowered, vocabulary, &mut findings);
    check_constraints(&lowered, vocabulary, &mut findings);
    check_action(&lowered, vocabulary, &mut findings);
    check_technical(&lowered, vocabulary, &mut findings);
    check_audience(&lowered, vocabulary, &mut findings);
    check_numbers(text, &mut findings);
    check_shouting(text, &mut findings);

    findings.metrics.clarity = findings.metrics.clarity.min(SUB_SCORE_CAP);
    findings.metrics.specificity = findings.metrics.specificity.min(SUB_SCORE_CAP);
    findings.score = findings.score.clamp(0, 100);
    findings
}

fn check_length(word_count: usize, findings: &mut Findings) {
    if word_count < SHORT_PROMPT_WORDS {
        findings.penalize(30);
        findings.issue("Prompt is too short");
        findings.suggest("Be more detailed and descriptive (at least 10-15 words)");
    } else if word_count > LONG_PROMPT_WORDS {
        findings.penalize(10);
        findings.issue("Prompt may be too long");
        findings.suggest("Summarize the key points to make it shorter");
    } else {
        findings.strength("Appropriate length");
    }
}

fn check_vagueness(lowered: &str, vocabulary: &SignalVocabulary, findings: &mut Findings) {
    if vocabulary.distinct_hits(SignalCheck::Vague, lowered) > VAGUE_TOLERANCE {
        findings.penalize(15);
        findings.issue("Vague wording detected");
        findings.suggest("Replace vague words with specific terms");
    }
}

fn check_context(lowered: &str, vocabulary: &SignalVocabulary, findings: &mut Findings) {
    let present = vocabulary.mentions(SignalCheck::Context, lowered);
    findings.metrics.has_context = present;
    if present {
        findings.strength("Context provided");
        findings.metrics.clarity += 25;
    } else {
        findings.penalize(20);
        findings.issue("Missing context");
        findings.suggest("State who the output is for and what it will be used for");
    }
}

// Missing examples cost points but are reported as a suggestion only.
fn check_examples(lowered: &str, vocabulary: &SignalVocabulary, findings: &mut Findings) {
    let present = vocabulary.mentions(SignalCheck::Example, lowered);
    findings.metrics.has_examples = present;
    if present {
        findings.strength("Includes examples");
        findings.metrics.clarity += 25;
    } else {
        findings.penalize(15);
        findings.suggest("Add concrete examples");
    }
}

fn check_constraints(lowered: &str, vocabulary: &SignalVocabulary, findings: &mut Findings) {
    let present = vocabulary.mentions(SignalCheck::Constraint, lowered);
    findings.metrics.has_constraints = present;
    findings.metrics.has_format_specs = present;
    if present {
        findings.strength("Output format or constraints specified");
        findings.metrics.specificity += 25;
    } else {
        findings.suggest("Specify the output format (list, paragraph, table, etc.)");
    }
}

fn check_action(lowered: &str, vocabulary: &SignalVocabulary, findings: &mut Findings) {
    if vocabulary.mentions(SignalCheck::Action, lowered) {
        findings.strength("Clear action requested");
        findings.metrics.specificity += 25;
    } else {
        findings.penalize(15);
        findings.issue("No clear action");
        findings.suggest("State exactly what should be done (write, analyze, create, etc.)");
    }
}

fn check_technical(lowered: &str, vocabulary: &SignalVocabulary, findings: &mut Findings) {
    if vocabulary.mentions(SignalCheck::Technical, lowered) {
        findings.strength("Includes technical detail");
        findings.metrics.specificity += 15;
    }
}

fn check_audience(lowered: &str, vocabulary: &SignalVocabulary, findings: &mut Findings) {
    if vocabulary.mentions(SignalCheck::Audience, lowered) {
        findings.strength("Target audience specified");
        findings.metrics.specificity += 20;
    }
}

fn check_numbers(text: &str, findings: &mut Findings) {
    if digit_run().is_match(text) {
        findings.strength("Uses numeric values");
        findings.metrics.specificity += 15;
    } else {
        findings.suggest("Add numeric targets where possible (amounts, percentages, dates)");
    }
}

fn check_shouting(text: &str, findings: &mut Findings) {
    if is_all_uppercase(text) {
        findings.penalize(10);
        findings.issue("Written entirely in uppercase");
        findings.suggest("Use normal capitalization");
    }
}

fn digit_run() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+").expect("digit pattern compiles"))
}

/// True when the text has at least one cased character and none are lowercase.
fn is_all_uppercase(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}
