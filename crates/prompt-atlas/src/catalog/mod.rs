//! Crowdsourced prompt catalog: CSV parsing, an injected source, a
//! time-boxed cache, and search with paging.

mod cache;
mod parser;
pub mod router;
mod search;
mod source;

pub use cache::{CatalogCache, CatalogSnapshot};
pub use router::catalog_router;
pub use search::{PromptPage, PromptQuery, PromptView, PREVIEW_CHARS};
pub use source::{
    ConfiguredSource, FilePromptSource, HttpPromptSource, PromptSource, SourceError,
};

use serde::Serialize;
use std::io::Read;

/// Role filters offered alongside free-text search.
pub const FEATURED_ROLES: &[&str] = &[
    "Business Analyst",
    "Marketing Expert",
    "Content Creator",
    "Sales Representative",
    "Project Manager",
    "Software Developer",
    "Customer Service Representative",
    "Data Scientist",
    "Social Media Manager",
    "Email Marketing Specialist",
    "Copywriter",
    "Technical Writer",
];

/// One (role, prompt) row of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptEntry {
    pub index: usize,
    pub act: String,
    pub prompt: String,
}

#[derive(Debug, Clone, Default)]
pub struct PromptCatalog {
    entries: Vec<PromptEntry>,
}

impl PromptCatalog {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let entries = parser::parse_entries(reader)?;
        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<PromptEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PromptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn search(&self, query: &PromptQuery, page_size: usize) -> PromptPage {
        search::search(&self.entries, query, page_size)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("invalid prompt CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("prompt CSV must contain 'act' and 'prompt' columns (found: {})", found.join(", "))]
    MissingColumns { found: Vec<String> },
    #[error("prompt CSV contains no rows")]
    Empty,
}
