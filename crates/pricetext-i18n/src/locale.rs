#![forbid(unsafe_code)]

//! Locale identifiers and decimal separator lookup.
//!
//! A [`Locale`] is a language plus optional region, parsed from either
//! BCP-47 (`de-CH`) or POSIX (`de_CH.UTF-8@euro`) spellings. Number symbols
//! resolve through a fallback chain: `de-CH` → `de` → root. The root locale
//! uses `.` as its decimal separator.
//!
//! Locales are passed explicitly; nothing in this crate reads process-wide
//! state except [`Locale::from_env`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Decimal separator of the root locale.
pub const ROOT_DECIMAL_SEPARATOR: char = '.';

/// Arabic decimal separator (U+066B).
const ARABIC_DECIMAL_SEPARATOR: char = '\u{066B}';

/// Languages whose default decimal separator is a comma.
const COMMA_LANGUAGES: &[&str] = &[
    "af", "az", "be", "bg", "bs", "ca", "cs", "da", "de", "el", "es", "et", "eu", "fi", "fo", "fr",
    "gl", "hr", "hu", "hy", "id", "is", "it", "ka", "kk", "ky", "lt", "lv", "mk", "mn", "nb", "nl",
    "nn", "no", "pl", "pt", "ro", "ru", "sk", "sl", "sq", "sr", "sv", "tr", "uk", "uz", "vi",
];

/// Languages using the Arabic decimal separator.
const ARABIC_SEPARATOR_LANGUAGES: &[&str] = &["ar", "fa", "ps", "ur"];

/// Region-specific separators that differ from the language default.
const REGION_OVERRIDES: &[(&str, &str, char)] = &[
    ("de", "CH", '.'),
    ("de", "LI", '.'),
    ("it", "CH", '.'),
    ("es", "MX", '.'),
    ("es", "US", '.'),
    ("es", "PR", '.'),
    ("en", "ZA", ','),
    ("ar", "DZ", ','),
    ("ar", "MA", ','),
    ("ar", "TN", ','),
    ("ur", "PK", '.'),
];

/// Error returned when a locale tag cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale tag is empty")]
    Empty,

    #[error("invalid language subtag {subtag:?} in locale tag {tag:?}")]
    InvalidLanguage { tag: String, subtag: String },

    #[error("invalid region subtag {subtag:?} in locale tag {tag:?}")]
    InvalidRegion { tag: String, subtag: String },
}

/// A language/region pair with an optional separator override.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Locale {
    /// Lowercase ISO 639 code; empty for the root locale.
    language: String,
    /// Uppercase ISO 3166 alpha-2 code or UN M.49 numeric code.
    region: Option<String>,
    decimal_override: Option<char>,
}

impl Locale {
    /// The root locale (`und`), which uses `.` as decimal separator.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a BCP-47 or POSIX locale tag.
    ///
    /// `C` and `POSIX` map to the root locale. Encoding (`.UTF-8`) and
    /// modifier (`@euro`) suffixes are dropped. A four-letter script subtag
    /// is accepted and ignored; variant subtags after the region are ignored.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let trimmed = tag.trim();
        let core = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();
        if core.is_empty() {
            return Err(LocaleError::Empty);
        }
        if core == "C" || core == "POSIX" || core.eq_ignore_ascii_case("und") {
            return Ok(Self::root());
        }

        let mut subtags = core.split(['-', '_']);
        let language = subtags.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(LocaleError::InvalidLanguage {
                tag: trimmed.to_owned(),
                subtag: language.to_owned(),
            });
        }

        let mut region = None;
        for subtag in subtags {
            let is_script = subtag.len() == 4 && subtag.chars().all(|c| c.is_ascii_alphabetic());
            if is_script {
                continue;
            }
            let is_alpha_region =
                subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic());
            let is_numeric_region = subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit());
            if is_alpha_region || is_numeric_region {
                region = Some(subtag.to_ascii_uppercase());
                break;
            }
            return Err(LocaleError::InvalidRegion {
                tag: trimmed.to_owned(),
                subtag: subtag.to_owned(),
            });
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            region,
            decimal_override: None,
        })
    }

    /// Resolve the locale the way POSIX does for numeric formatting:
    /// `LC_ALL` wins over `LC_NUMERIC`, which wins over `LANG`.
    ///
    /// Empty values are skipped. An unparsable winner yields the root locale.
    #[must_use]
    pub fn detect_from_env(
        lc_all: Option<&str>,
        lc_numeric: Option<&str>,
        lang: Option<&str>,
    ) -> Self {
        [lc_all, lc_numeric, lang]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty())
            .and_then(|value| Self::parse(value).ok())
            .unwrap_or_default()
    }

    /// [`detect_from_env`](Self::detect_from_env) over the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let lc_all = std::env::var("LC_ALL").ok();
        let lc_numeric = std::env::var("LC_NUMERIC").ok();
        let lang = std::env::var("LANG").ok();
        Self::detect_from_env(lc_all.as_deref(), lc_numeric.as_deref(), lang.as_deref())
    }

    /// Force a decimal separator regardless of the language/region tables.
    #[must_use]
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_override = Some(separator);
        self
    }

    #[must_use]
    pub fn language(&self) -> Option<&str> {
        (!self.language.is_empty()).then_some(self.language.as_str())
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.language.is_empty()
    }

    /// Canonical BCP-47 tag, `und` for the root locale.
    #[must_use]
    pub fn tag(&self) -> String {
        match (self.language(), self.region()) {
            (None, _) => "und".to_owned(),
            (Some(language), None) => language.to_owned(),
            (Some(language), Some(region)) => format!("{language}-{region}"),
        }
    }

    /// Locales consulted for symbol lookup, most specific first, ending at root.
    #[must_use]
    pub fn fallback_chain(&self) -> Vec<Locale> {
        let mut chain = Vec::with_capacity(3);
        let bare = |language: &str| Locale {
            language: language.to_owned(),
            region: None,
            decimal_override: None,
        };
        if let Some(language) = self.language() {
            if self.region.is_some() {
                chain.push(Locale {
                    decimal_override: None,
                    ..self.clone()
                });
            }
            chain.push(bare(language));
        }
        chain.push(Locale::root());
        chain
    }

    /// The character placed between integer and fraction digits.
    #[must_use]
    pub fn decimal_separator(&self) -> char {
        if let Some(separator) = self.decimal_override {
            return separator;
        }
        let Some(language) = self.language() else {
            return ROOT_DECIMAL_SEPARATOR;
        };
        let regional = self.region().and_then(|region| {
            REGION_OVERRIDES
                .iter()
                .find(|(lang, reg, _)| *lang == language && *reg == region)
        });
        if let Some(&(_, _, separator)) = regional {
            return separator;
        }
        if COMMA_LANGUAGES.contains(&language) {
            ','
        } else if ARABIC_SEPARATOR_LANGUAGES.contains(&language) {
            ARABIC_DECIMAL_SEPARATOR
        } else {
            ROOT_DECIMAL_SEPARATOR
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(tag: &str) -> Locale {
        Locale::parse(tag).unwrap()
    }

    #[test]
    fn parses_bcp47_and_posix_spellings() {
        assert_eq!(locale("de-CH"), locale("de_CH.UTF-8"));
        assert_eq!(locale("DE_ch@euro").tag(), "de-CH");
        assert_eq!(locale("sr-Latn-RS").tag(), "sr-RS");
        assert_eq!(locale("es-419").region(), Some("419"));
        assert_eq!(locale("fr").region(), None);
    }

    #[test]
    fn c_and_posix_are_root() {
        assert!(locale("C").is_root());
        assert!(locale("POSIX").is_root());
        assert!(locale("C.UTF-8").is_root());
        assert_eq!(locale("und").tag(), "und");
    }

    #[test]
    fn rejects_malformed_tags() {
        assert_eq!(Locale::parse("  "), Err(LocaleError::Empty));
        assert_eq!(Locale::parse(".UTF-8"), Err(LocaleError::Empty));
        assert!(matches!(
            Locale::parse("english"),
            Err(LocaleError::InvalidLanguage { .. })
        ));
        assert!(matches!(
            Locale::parse("en-GBR1"),
            Err(LocaleError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn fallback_chain_ends_at_root() {
        let chain: Vec<String> = locale("de-CH")
            .fallback_chain()
            .iter()
            .map(Locale::tag)
            .collect();
        assert_eq!(chain, ["de-CH", "de", "und"]);
        assert_eq!(Locale::root().fallback_chain(), [Locale::root()]);
    }

    #[test]
    fn separator_follows_language_then_region() {
        assert_eq!(Locale::root().decimal_separator(), '.');
        assert_eq!(locale("en-US").decimal_separator(), '.');
        assert_eq!(locale("de").decimal_separator(), ',');
        assert_eq!(locale("de-DE").decimal_separator(), ',');
        assert_eq!(locale("de-CH").decimal_separator(), '.');
        assert_eq!(locale("en-ZA").decimal_separator(), ',');
        assert_eq!(locale("ar-EG").decimal_separator(), '\u{066B}');
        assert_eq!(locale("ar-MA").decimal_separator(), ',');
        assert_eq!(locale("ja-JP").decimal_separator(), '.');
    }

    #[test]
    fn override_beats_tables() {
        let l = locale("de-DE").with_decimal_separator(' ');
        assert_eq!(l.decimal_separator(), ' ');
        assert_eq!(l.tag(), "de-DE");
    }

    #[test]
    fn env_precedence_is_lc_all_then_numeric_then_lang() {
        let l = Locale::detect_from_env(Some("fr_FR.UTF-8"), Some("de_DE"), Some("en_US"));
        assert_eq!(l.tag(), "fr-FR");

        let l = Locale::detect_from_env(Some(""), Some("de_DE"), Some("en_US"));
        assert_eq!(l.tag(), "de-DE");

        let l = Locale::detect_from_env(None, None, Some("pt_BR.UTF-8"));
        assert_eq!(l.decimal_separator(), ',');

        assert!(Locale::detect_from_env(None, None, None).is_root());
        assert!(Locale::detect_from_env(Some("!!"), None, Some("de")).is_root());
    }
}
