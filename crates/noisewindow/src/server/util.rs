//! Small helpers shared by the endpoints.

use serde::Deserialize;

use crate::locale::Language;
use crate::types::AppState;

/// Optional `?lang=` query accepted by the display endpoints.
#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    pub lang: Option<String>,
}

/// Resolves the language for a request: an explicit valid `?lang=` wins,
/// otherwise the persisted choice (which itself defaults to English).
pub fn resolve_language(state: &AppState, query: &LocaleQuery) -> Language {
    query
        .lang
        .as_deref()
        .and_then(Language::parse)
        .unwrap_or_else(|| state.store.load_language())
}
