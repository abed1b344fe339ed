//! Client-side localization for UI text
//!
//! A static mapping from language code to a key→string dictionary. Lookup
//! falls back to the key itself when a string is missing, so an untranslated
//! key degrades to something readable instead of failing. The active
//! language is the only state; it is carried in an explicitly passed
//! [`Localizer`] rather than a global, and written only by the
//! language-switch action.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Languages the client UI itself is available in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiLanguage {
    /// Croatian, the original interface language
    #[default]
    Croatian,
    English,
}

impl UiLanguage {
    /// Two-letter code stored in the configuration file
    pub fn code(self) -> &'static str {
        match self {
            Self::Croatian => "hr",
            Self::English => "en",
        }
    }

    /// Parse a stored code; unknown codes fall back to Croatian
    pub fn from_code(code: &str) -> Self {
        match code {
            "en" => Self::English,
            _ => Self::Croatian,
        }
    }
}

static CATALOG_HR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("app.title", "PO Prevoditelj"),
        ("app.subtitle", "WPML automatsko prevođenje"),
        ("upload.prompt", "Odaberite PO datoteku za prijevod"),
        ("upload.invalid_type", "Molimo uploadajte samo .po datoteke"),
        ("upload.no_file", "Molimo odaberite datoteku"),
        ("translate.failed", "Greška prilikom prevođenja"),
        ("translate.running", "Prevođenje u tijeku..."),
        ("translate.current", "Trenutno"),
        ("progress.label", "Napredak"),
        ("progress.total", "Ukupno"),
        ("progress.translated", "Prevedeno"),
        ("progress.skipped", "Preskočeno"),
        ("progress.errors", "Greške"),
        ("progress.pending", "Za prevesti"),
        ("progress.eta", "Preostalo vrijeme"),
        ("results.title", "Rezultati prijevoda"),
        ("results.saved", "Prevedena datoteka spremljena u"),
        ("history.title", "Povijest prijevoda"),
        ("history.empty", "Nema prethodnih prijevoda"),
        ("history.translated_of", "prevedeno"),
        ("download.failed", "Greška prilikom preuzimanja"),
        ("languages.title", "Podržani jezici"),
        ("languages.failed", "Greška prilikom dohvaćanja jezika"),
        ("time.min", "min"),
        ("time.sec", "sek"),
    ])
});

static CATALOG_EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("app.title", "PO Translator"),
        ("app.subtitle", "Automatic WPML translation"),
        ("upload.prompt", "Choose a PO file to translate"),
        ("upload.invalid_type", "Please upload .po files only"),
        ("upload.no_file", "Please choose a file"),
        ("translate.failed", "Translation failed"),
        ("translate.running", "Translation in progress..."),
        ("translate.current", "Currently"),
        ("progress.label", "Progress"),
        ("progress.total", "Total"),
        ("progress.translated", "Translated"),
        ("progress.skipped", "Skipped"),
        ("progress.errors", "Errors"),
        ("progress.pending", "To translate"),
        ("progress.eta", "Time remaining"),
        ("results.title", "Translation results"),
        ("results.saved", "Translated file saved to"),
        ("history.title", "Translation history"),
        ("history.empty", "No previous translations"),
        ("history.translated_of", "translated"),
        ("download.failed", "Download failed"),
        ("languages.title", "Supported languages"),
        ("languages.failed", "Failed to fetch languages"),
        ("time.min", "min"),
        ("time.sec", "sec"),
    ])
});

/// Localization context, created at startup and passed to every
/// presentational unit that renders text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Localizer {
    language: UiLanguage,
}

impl Localizer {
    pub fn new(language: UiLanguage) -> Self {
        Self { language }
    }

    /// Build from the persisted configuration code
    pub fn from_code(code: &str) -> Self {
        Self::new(UiLanguage::from_code(code))
    }

    pub fn language(&self) -> UiLanguage {
        self.language
    }

    /// The language-switch action; the only write path for UI language
    pub fn switch(&mut self, language: UiLanguage) {
        self.language = language;
    }

    /// Look up a UI string; returns the key itself when missing
    pub fn text<'a>(&self, key: &'a str) -> &'a str {
        let catalog = match self.language {
            UiLanguage::Croatian => &CATALOG_HR,
            UiLanguage::English => &CATALOG_EN,
        };
        catalog.get(key).copied().unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_localized_string() {
        let hr = Localizer::new(UiLanguage::Croatian);
        assert_eq!(hr.text("upload.invalid_type"), "Molimo uploadajte samo .po datoteke");

        let en = Localizer::new(UiLanguage::English);
        assert_eq!(en.text("upload.invalid_type"), "Please upload .po files only");
    }

    #[test]
    fn missing_key_falls_back_to_the_key_itself() {
        let localizer = Localizer::default();
        assert_eq!(localizer.text("no.such.key"), "no.such.key");
    }

    #[test]
    fn both_catalogs_cover_the_same_keys() {
        let mut hr_keys: Vec<_> = CATALOG_HR.keys().collect();
        let mut en_keys: Vec<_> = CATALOG_EN.keys().collect();
        hr_keys.sort();
        en_keys.sort();
        assert_eq!(hr_keys, en_keys);
    }

    #[test]
    fn unknown_config_code_defaults_to_croatian() {
        assert_eq!(UiLanguage::from_code("de"), UiLanguage::Croatian);
        assert_eq!(UiLanguage::from_code("en"), UiLanguage::English);
    }

    #[test]
    fn switch_changes_active_catalog() {
        let mut localizer = Localizer::new(UiLanguage::Croatian);
        localizer.switch(UiLanguage::English);
        assert_eq!(localizer.text("progress.label"), "Progress");
    }
}
