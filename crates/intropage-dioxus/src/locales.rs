//! Translation tables bundled with the desktop build. Loading goes
//! through the engine's generation-ticketed install path so a slow or
//! abandoned load can never clobber a newer language choice.

use intropage_engine::TranslationTable;

/// Languages offered by the switcher: code and native display name.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("default", "Default"),
    ("en", "English"),
    ("ja", "日本語"),
    ("zh-CN", "简体中文"),
];

fn bundled(lang: &str) -> Option<&'static str> {
    match lang {
        "default" => Some(include_str!("assets/locales/default.json")),
        "en" => Some(include_str!("assets/locales/en.json")),
        "ja" => Some(include_str!("assets/locales/ja.json")),
        "zh-CN" => Some(include_str!("assets/locales/zh-CN.json")),
        _ => None,
    }
}

/// Parse the bundled table for `lang`. `None` for unknown languages or
/// an unparseable table; either way the caller keeps the fallback
/// chain in place.
pub fn table(lang: &str) -> Option<TranslationTable> {
    let text = bundled(lang)?;
    match TranslationTable::from_json(text) {
        Ok(table) => Some(table),
        Err(e) => {
            log::error!("bundled locale {lang:?} is broken: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_offered_language_has_a_wellformed_table() {
        for (code, _) in LANGUAGES {
            assert!(table(code).is_some(), "broken or missing table for {code}");
        }
    }

    #[test]
    fn unknown_languages_have_no_table() {
        assert!(table("tlh").is_none());
    }

    #[test]
    fn default_table_carries_the_page_title() {
        let table = table("default").unwrap();
        assert!(table.lookup("page_title").is_some());
    }
}
