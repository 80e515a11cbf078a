//! Translation table inspection.
//!
//! # Usage
//!
//! ```bash
//! # Keys with no Marathi text
//! hub-cli i18n missing --lang mr
//!
//! # One key in every language
//! hub-cli i18n lookup heroTitle
//! ```

use std::io::Write;

use tribal_hub_core::Language;
use tribal_hub_core::i18n;

use super::CommandError;

/// List keys without a translation, for one language or all of them.
///
/// # Errors
///
/// Returns an error for an unknown language code or if writing fails.
pub fn missing(out: &mut impl Write, lang: Option<&str>) -> Result<(), CommandError> {
    let languages = match lang {
        Some(code) => vec![
            code.parse::<Language>()
                .map_err(|_| CommandError::InvalidArgument(format!("unknown language: {code}")))?,
        ],
        None => Language::ALL.to_vec(),
    };

    for language in languages {
        let missing = i18n::missing_keys(language);
        writeln!(out, "{} ({}): {} missing", language.native_name(), language.code(), missing.len())?;
        for key in missing {
            writeln!(out, "  {key}")?;
        }
    }
    Ok(())
}

/// Show a key in every language.
///
/// # Errors
///
/// Returns an error for a key with no entry or if writing fails.
pub fn lookup(out: &mut impl Write, key: &str) -> Result<(), CommandError> {
    if !i18n::has_key(key) {
        return Err(CommandError::InvalidArgument(format!("no translation key: {key}")));
    }
    for language in Language::ALL {
        writeln!(out, "{}: {}", language.code(), i18n::translate(key, language))?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_prints_every_language() {
        let mut out = Vec::new();
        lookup(&mut out, "cart").unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), Language::ALL.len());
        assert!(output.starts_with("en: "));
    }

    #[test]
    fn test_lookup_unknown_key() {
        let mut out = Vec::new();
        assert!(lookup(&mut out, "noSuchKey").is_err());
    }

    #[test]
    fn test_missing_for_one_language() {
        let mut out = Vec::new();
        missing(&mut out, Some("hi")).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().next().map(|l| l.contains("(hi)")), Some(true));
    }

    #[test]
    fn test_missing_rejects_unknown_language() {
        let mut out = Vec::new();
        assert!(missing(&mut out, Some("fr")).is_err());
    }
}
