//! Multi-language text substitution. Each language has a nested lookup
//! table addressed by dotted keys; resolution falls back from the
//! current language to the default language, then to the caller's
//! literal default. Missing keys are never an error.
//!
//! Table loads are asynchronous from the caller's point of view, so
//! installs are sequenced with generation tickets: only the most
//! recently issued ticket may install its result, and completions of
//! abandoned loads are dropped. A load that never completes simply
//! leaves the fallback chain in place, which is acceptable degraded
//! behavior rather than an error.

use std::collections::HashMap;

use serde_json::Value;

/// Language code of the built-in fallback table.
pub const DEFAULT_LANG: &str = "default";

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("malformed translation table: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Per-language table of dotted keys to display strings, backed by the
/// locale file's nested JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationTable(Value);

impl TranslationTable {
    pub fn from_json(text: &str) -> Result<Self, I18nError> {
        Ok(TranslationTable(serde_json::from_str(text)?))
    }

    /// Walk a dotted key through the nested table. Empty strings count
    /// as missing so they fall through the fallback chain.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut node = &self.0;
        for part in key.split('.') {
            node = node.as_object()?.get(part)?;
        }
        node.as_str().filter(|s| !s.is_empty())
    }
}

/// Ticket for an in-flight table load. Stale tickets (issued before a
/// newer load began) cannot install their result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    lang: String,
    generation: u64,
}

impl LoadTicket {
    pub fn lang(&self) -> &str {
        &self.lang
    }
}

pub struct I18n {
    current: String,
    tables: HashMap<String, TranslationTable>,
    generation: u64,
}

impl I18n {
    pub fn new() -> Self {
        I18n {
            current: DEFAULT_LANG.to_string(),
            tables: HashMap::new(),
            generation: 0,
        }
    }

    pub fn current_language(&self) -> &str {
        &self.current
    }

    pub fn set_language(&mut self, lang: impl Into<String>) {
        self.current = lang.into();
    }

    pub fn has_table(&self, lang: &str) -> bool {
        self.tables.contains_key(lang)
    }

    /// Install a table directly, bypassing load sequencing. Used for
    /// tables bundled with the application.
    pub fn insert_table(&mut self, lang: impl Into<String>, table: TranslationTable) {
        self.tables.insert(lang.into(), table);
    }

    /// Start a load for `lang`. Any ticket issued earlier becomes
    /// stale, whether or not its load has completed.
    pub fn begin_load(&mut self, lang: &str) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            lang: lang.to_string(),
            generation: self.generation,
        }
    }

    /// Install the result of a load. Returns false (dropping the
    /// table) when the ticket is stale.
    pub fn install(&mut self, ticket: &LoadTicket, table: TranslationTable) -> bool {
        if ticket.generation != self.generation {
            log::info!("dropping stale translation load for {:?}", ticket.lang);
            return false;
        }
        self.tables.insert(ticket.lang.clone(), table);
        true
    }

    /// Resolve a dotted key: current language table, then the default
    /// language table, then the literal default.
    pub fn translate(&self, key: &str, default: &str) -> String {
        if let Some(table) = self.tables.get(&self.current)
            && let Some(value) = table.lookup(key)
        {
            return value.to_string();
        }
        if self.current != DEFAULT_LANG
            && let Some(table) = self.tables.get(DEFAULT_LANG)
            && let Some(value) = table.lookup(key)
        {
            return value.to_string();
        }
        default.to_string()
    }
}

impl Default for I18n {
    fn default() -> Self {
        I18n::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(json: &str) -> TranslationTable {
        TranslationTable::from_json(json).unwrap()
    }

    fn i18n_with_default() -> I18n {
        let mut i18n = I18n::new();
        i18n.insert_table(
            DEFAULT_LANG,
            table(r#"{"page_title": "Self-Introduction", "x": {"y": "default y"}}"#),
        );
        i18n
    }

    #[test]
    fn dotted_keys_walk_nested_tables() {
        let t = table(r#"{"panel": {"buttons": {"save": "Save"}}}"#);
        assert_eq!(t.lookup("panel.buttons.save"), Some("Save"));
        assert_eq!(t.lookup("panel.buttons.load"), None);
        assert_eq!(t.lookup("panel"), None);
    }

    #[test]
    fn malformed_table_is_rejected() {
        assert!(TranslationTable::from_json("{not json").is_err());
    }

    #[test]
    fn current_language_wins_over_default() {
        let mut i18n = i18n_with_default();
        i18n.insert_table("en", table(r#"{"x": {"y": "english y"}}"#));
        i18n.set_language("en");
        assert_eq!(i18n.translate("x.y", "literal"), "english y");
    }

    #[test]
    fn missing_key_falls_back_to_default_language() {
        let mut i18n = i18n_with_default();
        i18n.insert_table("en", table(r#"{"other": "value"}"#));
        i18n.set_language("en");
        assert_eq!(i18n.translate("x.y", "literal"), "default y");
    }

    #[test]
    fn key_missing_everywhere_returns_the_literal_default() {
        let mut i18n = i18n_with_default();
        i18n.set_language("en");
        assert_eq!(i18n.translate("nope.nope", "D"), "D");
    }

    #[test]
    fn empty_strings_resolve_like_missing_keys() {
        let mut i18n = i18n_with_default();
        i18n.insert_table("en", table(r#"{"x": {"y": ""}}"#));
        i18n.set_language("en");
        assert_eq!(i18n.translate("x.y", "literal"), "default y");
    }

    #[test]
    fn stale_ticket_cannot_install() {
        let mut i18n = I18n::new();
        let first = i18n.begin_load("ja");
        let second = i18n.begin_load("en");

        // The older load completes last; its result is dropped.
        assert!(i18n.install(&second, table(r#"{"k": "en"}"#)));
        assert!(!i18n.install(&first, table(r#"{"k": "ja"}"#)));

        assert!(i18n.has_table("en"));
        assert!(!i18n.has_table("ja"));
    }
}
