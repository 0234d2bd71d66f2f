use serde::{Deserialize, Serialize};

/// Hedge and filler words. More than two distinct hits marks a prompt as vague.
pub const VAGUE_TERMS: &[&str] = &[
    "şey",
    "bir şeyler",
    "biraz",
    "gibi",
    "falan",
    "filan",
    "vs",
    "vb",
];

/// Purpose, audience and business terms that show the prompt carries context.
pub const CONTEXT_TERMS: &[&str] = &[
    "için",
    "amacıyla",
    "hedefi",
    "sektör",
    "şirket",
    "proje",
    "müşteri",
    "kullanıcı",
    "target",
    "audience",
    "company",
    "business",
];

pub const EXAMPLE_TERMS: &[&str] = &["örnek", "example", "mesela", "gibi", "örnektir", "sample"];

/// Length and output-format terms.
pub const CONSTRAINT_TERMS: &[&str] = &[
    "kelime",
    "karakter",
    "paragraf",
    "madde",
    "liste",
    "tablo",
    "format",
    "word",
    "character",
    "bullet",
    "number",
    "json",
    "csv",
    "markdown",
];

/// Imperative task verbs.
pub const ACTION_TERMS: &[&str] = &[
    "yaz",
    "oluştur",
    "analiz et",
    "öner",
    "listele",
    "karşılaştır",
    "değerlendir",
    "hesapla",
    "tasarla",
    "planla",
    "write",
    "create",
    "analyze",
    "compare",
    "evaluate",
    "design",
    "plan",
];

pub const TECHNICAL_TERMS: &[&str] = &[
    "api",
    "kod",
    "algoritma",
    "database",
    "sql",
    "python",
    "javascript",
    "machine learning",
    "data science",
    "analytics",
    "metrics",
    "kpi",
];

/// Demographic and market terms.
pub const AUDIENCE_TERMS: &[&str] = &[
    "yaş",
    "demographic",
    "target",
    "audience",
    "müşteri profil",
    "user persona",
    "segment",
    "market",
    "b2b",
    "b2c",
    "enterprise",
    "startup",
];

/// Keyword-driven signal checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCheck {
    Vague,
    Context,
    Example,
    Constraint,
    Action,
    Technical,
    Audience,
}

/// Term lists consulted by the scorer, one per [`SignalCheck`].
///
/// All terms are stored lower-cased and matched as substrings of the
/// lower-cased prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalVocabulary {
    vague: Vec<String>,
    context: Vec<String>,
    example: Vec<String>,
    constraint: Vec<String>,
    action: Vec<String>,
    technical: Vec<String>,
    audience: Vec<String>,
}

impl SignalVocabulary {
    pub fn standard() -> Self {
        Self {
            vague: owned(VAGUE_TERMS),
            context: owned(CONTEXT_TERMS),
            example: owned(EXAMPLE_TERMS),
            constraint: owned(CONSTRAINT_TERMS),
            action: owned(ACTION_TERMS),
            technical: owned(TECHNICAL_TERMS),
            audience: owned(AUDIENCE_TERMS),
        }
    }

    pub fn terms(&self, check: SignalCheck) -> &[String] {
        match check {
            SignalCheck::Vague => &self.vague,
            SignalCheck::Context => &self.context,
            SignalCheck::Example => &self.example,
            SignalCheck::Constraint => &self.constraint,
            SignalCheck::Action => &self.action,
            SignalCheck::Technical => &self.technical,
            SignalCheck::Audience => &self.audience,
        }
    }

    pub fn extend<I, T>(&mut self, check: SignalCheck, terms: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let list = self.terms_mut(check);
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !list.contains(&term) {
                list.push(term);
            }
        }
    }

    pub fn with_terms<I, T>(mut self, check: SignalCheck, terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.extend(check, terms);
        self
    }

    /// `lowered` must already be lower-cased.
    pub(crate) fn mentions(&self, check: SignalCheck, lowered: &str) -> bool {
        self.terms(check)
            .iter()
            .any(|term| lowered.contains(term.as_str()))
    }

    /// Number of distinct terms of `check` present in `lowered`.
    pub(crate) fn distinct_hits(&self, check: SignalCheck, lowered: &str) -> usize {
        self.terms(check)
            .iter()
            .filter(|term| lowered.contains(term.as_str()))
            .count()
    }

    fn terms_mut(&mut self, check: SignalCheck) -> &mut Vec<String> {
        match check {
            SignalCheck::Vague => &mut self.vague,
            SignalCheck::Context => &mut self.context,
            SignalCheck::Example => &mut self.example,
            SignalCheck::Constraint => &mut self.constraint,
            SignalCheck::Action => &mut self.action,
            SignalCheck::Technical => &mut self.technical,
            SignalCheck::Audience => &mut self.audience,
        }
    }
}

impl Default for SignalVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|term| term.to_string()).collect()
}
