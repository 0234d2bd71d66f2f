use super::{CatalogError, PromptEntry};
use serde::Deserialize;
use std::io::Read;

const ROLE_COLUMN: &str = "act";
const PROMPT_COLUMN: &str = "prompt";

#[derive(Debug, Deserialize)]
struct PromptRow {
    act: String,
    prompt: String,
}

/// Parses a prompt CSV export. Only the `act` and `prompt` columns are read.
pub(crate) fn parse_entries<R: Read>(reader: R) -> Result<Vec<PromptEntry>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect::<Vec<_>>();
    if !headers.iter().any(|header| header == ROLE_COLUMN)
        || !headers.iter().any(|header| header == PROMPT_COLUMN)
    {
        return Err(CatalogError::MissingColumns { found: headers });
    }
    csv_reader.set_headers(csv::StringRecord::from(headers));

    let mut entries = Vec::new();
    for (index, row) in csv_reader.deserialize::<PromptRow>().enumerate() {
        let row = row?;
        entries.push(PromptEntry {
            index,
            act: row.act.trim().to_string(),
            prompt: row.prompt,
        });
    }

    if entries.is_empty() {
        return Err(CatalogError::Empty);
    }

    Ok(entries)
}

fn normalize_header(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "").trim().to_string()
}
