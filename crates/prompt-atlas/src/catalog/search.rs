use super::PromptEntry;
use serde::{Deserialize, Serialize};

/// Characters shown before a long prompt is cut off in listings.
pub const PREVIEW_CHARS: usize = 200;

/// Sentinel role filter meaning "no role filter".
const ALL_ROLES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PromptQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

impl PromptQuery {
    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    fn role_needle(&self) -> Option<String> {
        self.role
            .as_deref()
            .map(str::trim)
            .filter(|role| !role.is_empty() && !role.eq_ignore_ascii_case(ALL_ROLES))
            .map(str::to_lowercase)
    }
}

/// Display projection of a catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptView {
    pub index: usize,
    pub role: String,
    pub prompt: String,
    pub preview: String,
}

impl PromptView {
    pub fn from_entry(entry: &PromptEntry) -> Self {
        let prompt = entry.prompt.replace('"', "").trim().to_string();
        let preview = if prompt.chars().count() > PREVIEW_CHARS {
            let cut: String = prompt.chars().take(PREVIEW_CHARS).collect();
            format!("{cut}...")
        } else {
            prompt.clone()
        };

        Self {
            index: entry.index,
            role: entry.act.clone(),
            prompt,
            preview,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptPage {
    pub total_matches: usize,
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub items: Vec<PromptView>,
}

pub(crate) fn search(entries: &[PromptEntry], query: &PromptQuery, page_size: usize) -> PromptPage {
    let page_size = page_size.max(1);
    let search_needle = query.search_needle();
    let role_needle = query.role_needle();

    let matches = entries
        .iter()
        .filter(|entry| {
            search_needle.as_deref().map_or(true, |needle| {
                contains_folded(&entry.act, needle) || contains_folded(&entry.prompt, needle)
            })
        })
        .filter(|entry| {
            role_needle
                .as_deref()
                .map_or(true, |needle| contains_folded(&entry.act, needle))
        })
        .collect::<Vec<_>>();

    let total_matches = matches.len();
    let total_pages = total_matches.div_ceil(page_size).max(1);
    let page = query.page.unwrap_or(1).clamp(1, total_pages);

    let items = matches
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .map(PromptView::from_entry)
        .collect();

    PromptPage {
        total_matches,
        page,
        total_pages,
        page_size,
        items,
    }
}

fn contains_folded(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(index: usize, act: &str, prompt: &str) -> PromptEntry {
        PromptEntry {
            index,
            act: act.to_string(),
            prompt: prompt.to_string(),
        }
    }

    fn sample() -> Vec<PromptEntry> {
        vec![
            entry(0, "Marketing Expert", "Plan a product launch."),
            entry(1, "Travel Guide", "Suggest places to visit for marketing teams."),
            entry(2, "Email Marketing Specialist", "Draft a newsletter."),
            entry(3, "Poet", "Write a poem about the sea."),
        ]
    }

    #[test]
    fn search_matches_role_or_prompt_case_insensitively() {
        let query = PromptQuery {
            search: Some("  MARKETING ".to_string()),
            ..PromptQuery::default()
        };
        let page = search(&sample(), &query, 5);

        assert_eq!(page.total_matches, 3);
        let indexes: Vec<_> = page.items.iter().map(|item| item.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }

    #[test]
    fn role_filter_applies_to_role_name_only() {
        let query = PromptQuery {
            search: Some("marketing".to_string()),
            role: Some("marketing expert".to_string()),
            page: None,
        };
        let page = search(&sample(), &query, 5);

        assert_eq!(page.total_matches, 1);
        assert_eq!(page.items[0].role, "Marketing Expert");
    }

    #[test]
    fn all_role_sentinel_disables_filter() {
        let query = PromptQuery {
            role: Some("All".to_string()),
            ..PromptQuery::default()
        };
        assert_eq!(search(&sample(), &query, 5).total_matches, 4);
    }

    #[test]
    fn pages_are_clamped_into_range() {
        let query = PromptQuery {
            page: Some(9),
            ..PromptQuery::default()
        };
        let page = search(&sample(), &query, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].index, 3);

        let query = PromptQuery {
            page: Some(0),
            ..PromptQuery::default()
        };
        assert_eq!(search(&sample(), &query, 3).page, 1);
    }

    #[test]
    fn no_matches_still_reports_one_page() {
        let query = PromptQuery {
            search: Some("astronomy".to_string()),
            ..PromptQuery::default()
        };
        let page = search(&sample(), &query, 5);
        assert_eq!(page.total_matches, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn view_strips_quotes_and_truncates_preview() {
        let long = format!("\"{}\"", "ç".repeat(250));
        let view = PromptView::from_entry(&entry(7, "Linguist", &long));

        assert_eq!(view.prompt.chars().count(), 250);
        assert!(!view.prompt.contains('"'));
        assert_eq!(view.preview.chars().count(), PREVIEW_CHARS + 3);
        assert!(view.preview.ends_with("..."));

        let short = PromptView::from_entry(&entry(8, "Poet", " \"Write a poem.\" "));
        assert_eq!(short.prompt, "Write a poem.");
        assert_eq!(short.preview, short.prompt);
    }
}
