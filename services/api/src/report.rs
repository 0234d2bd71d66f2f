use prompt_atlas::catalog::PromptPage;
use prompt_atlas::error::AppError;
use prompt_atlas::quality::QualityReport;
use serde::Serialize;

pub(crate) fn quality_report_lines(report: &QualityReport, advice: &[String]) -> Vec<String> {
    let mut lines = vec![format!(
        "Quality score: {}/100 (grade {})",
        report.score, report.grade
    )];

    if let Some(metrics) = &report.metrics {
        lines.push(format!(
            "Words: {} | Sentences: {} | Characters: {}",
            metrics.word_count, metrics.sentence_count, metrics.length
        ));
        lines.push(format!(
            "Clarity: {}/50 | Specificity: {}/50",
            metrics.clarity, metrics.specificity
        ));
    }

    push_section(&mut lines, "Strengths", &report.strengths);
    push_section(&mut lines, "Issues", &report.issues);
    push_section(&mut lines, "Suggestions", &report.suggestions);

    if !advice.is_empty() {
        lines.push(String::new());
        lines.extend(advice.iter().cloned());
    }

    lines
}

pub(crate) fn prompt_page_lines(page: &PromptPage) -> Vec<String> {
    if page.total_matches == 0 {
        return vec!["No prompts matched the current filters.".to_string()];
    }

    let mut lines = vec![format!(
        "Showing page {}/{} ({} matching prompts)",
        page.page, page.total_pages, page.total_matches
    )];
    for item in &page.items {
        lines.push(format!("#{} {}", item.index, item.role));
        lines.push(format!("    {}", item.preview));
    }
    lines
}

/// Pretty JSON for `--json` output; serialization failures become io errors.
pub(crate) fn pretty_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|err| AppError::Io(err.into()))
}

fn push_section(lines: &mut Vec<String>, title: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    lines.push(format!("{title}:"));
    lines.extend(entries.iter().map(|entry| format!("  - {entry}")));
}
