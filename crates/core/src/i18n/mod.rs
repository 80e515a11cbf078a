//! Static translation table.
//!
//! Lookups are keyed by a camelCase string id and a [`Language`]. A key with
//! no entry, or an entry with no text for the language, translates to the
//! key itself so a missing string is visible but never breaks a page.

mod table;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::types::{Category, Language};

static TABLE: LazyLock<HashMap<&'static str, [&'static str; 3]>> =
    LazyLock::new(|| table::ENTRIES.iter().copied().collect());

/// Craft options offered at artisan registration besides the categories.
pub const EXTRA_ART_TYPES: [&str; 6] = [
    "pottery",
    "weaving",
    "jewelry",
    "woodCarving",
    "metalWork",
    "terracotta",
];

const fn slot(language: Language) -> usize {
    match language {
        Language::En => 0,
        Language::Hi => 1,
        Language::Mr => 2,
    }
}

/// Translate `key` into `language`, falling back to the key.
#[must_use]
pub fn translate(key: &str, language: Language) -> &str {
    TABLE
        .get(key)
        .map(|texts| texts[slot(language)])
        .filter(|text| !text.is_empty())
        .unwrap_or(key)
}

/// Whether the table has any entry for `key`.
#[must_use]
pub fn has_key(key: &str) -> bool {
    TABLE.contains_key(key)
}

/// Every key, in table order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    table::ENTRIES.iter().map(|(key, _)| *key)
}

/// Keys with no text for `language`.
#[must_use]
pub fn missing_keys(language: Language) -> Vec<&'static str> {
    table::ENTRIES
        .iter()
        .filter(|(_, texts)| texts[slot(language)].is_empty())
        .map(|(key, _)| *key)
        .collect()
}

/// Translator bound to one language, handed to templates as `t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Translate `key`, falling back to the key.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(key, self.language)
    }

    /// Localized category label.
    #[must_use]
    pub fn category(&self, category: Category) -> &'static str {
        translate(category.as_str(), self.language)
    }

    /// Localized craft labels for the registration form: every category
    /// followed by the extra craft options.
    #[must_use]
    pub fn art_type_options(&self) -> Vec<&'static str> {
        Category::ALL
            .iter()
            .map(|c| c.as_str())
            .chain(EXTRA_ART_TYPES)
            .map(|key| translate(key, self.language))
            .collect()
    }

    /// Draft a product description from its title and category.
    ///
    /// Returns an empty string for a blank title.
    #[must_use]
    pub fn draft_description(&self, title: &str, category: Category) -> String {
        let title = title.trim();
        if title.is_empty() {
            return String::new();
        }
        let label = self.category(category);
        match self.language {
            Language::En => format!(
                "{title} is a handcrafted piece from our {label} collection, made by tribal \
                 artisans using techniques passed down through generations. Each piece is \
                 made by hand, so small variations in colour and form make yours one of a kind."
            ),
            Language::Hi => format!(
                "{title} हमारे {label} संग्रह की एक हस्तनिर्मित कृति है, जिसे आदिवासी कारीगरों ने \
                 पीढ़ियों से चली आ रही तकनीकों से बनाया है। हर कृति हाथ से बनी है, इसलिए रंग और \
                 आकार में हल्का अंतर इसे अनोखा बनाता है।"
            ),
            Language::Mr => format!(
                "{title} ही आमच्या {label} संग्रहातील हस्तनिर्मित कलाकृती आहे, जी आदिवासी \
                 कारागिरांनी पिढ्यानपिढ्या चालत आलेल्या तंत्रांनी बनवली आहे. प्रत्येक कलाकृती \
                 हाताने बनवलेली असल्याने रंग आणि आकारातील थोडा फरक तिला अद्वितीय बनवतो."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_language() {
        assert_eq!(translate("cart", Language::En), "Cart");
        assert_eq!(translate("pottery", Language::Hi), "मिट्टी के बर्तन");
        assert_eq!(translate("pottery", Language::Mr), "कुंभारकाम");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(translate("noSuchKey", Language::Mr), "noSuchKey");
        assert!(!has_key("noSuchKey"));
    }

    #[test]
    fn test_keys_are_unique() {
        assert_eq!(keys().count(), TABLE.len());
    }

    #[test]
    fn test_every_category_and_error_has_label() {
        for category in Category::ALL {
            assert!(has_key(category.as_str()), "{category}");
        }
        for key in [
            "loginRequired",
            "forbidden",
            "accountPending",
            "invalidCredentials",
            "notRegistered",
            "contactTaken",
            "invalidIfsc",
        ] {
            assert!(has_key(key), "{key}");
        }
    }

    #[test]
    fn test_no_missing_translations() {
        for language in Language::ALL {
            assert!(missing_keys(language).is_empty(), "{language}");
        }
    }

    #[test]
    fn test_art_type_options() {
        let options = Translator::new(Language::En).art_type_options();
        assert_eq!(options.len(), Category::ALL.len() + EXTRA_ART_TYPES.len());
        assert_eq!(options.last(), Some(&"Terracotta"));
    }

    #[test]
    fn test_draft_description_is_localized() {
        let en = Translator::new(Language::En).draft_description("Dhokra Owl", Category::Statues);
        assert!(en.starts_with("Dhokra Owl"));
        assert!(en.contains("Statues"));

        let hi = Translator::new(Language::Hi).draft_description("Dhokra Owl", Category::Statues);
        assert!(hi.contains("मूर्तियाँ"));

        assert!(
            Translator::default()
                .draft_description("  ", Category::Statues)
                .is_empty()
        );
    }
}
