//! Locale identifiers and the environment's preferred locales.
//!
//! Accepts the spellings found in catalogs and POSIX environments
//! (`nl_NL`, `nl-NL`, `vi_VN.UTF-8`, `sr_RS@latin`) and normalizes them to
//! `language[_TERRITORY]`.

use std::fmt;

use crate::core::{error::CatalogError, plural::PluralRule};

/// A parsed locale identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    /// Lowercase ISO 639 language code.
    pub language: String,
    /// Titlecase ISO 15924 script code, if present.
    pub script: Option<String>,
    /// Uppercase ISO 3166 territory or UN M.49 region code, if present.
    pub territory: Option<String>,
}

impl Locale {
    pub fn parse(input: &str) -> Result<Self, CatalogError> {
        let invalid = || CatalogError::InvalidLocale(input.to_string());

        // Drop the encoding (".UTF-8") and modifier ("@euro") parts.
        let base = input
            .trim()
            .split(['.', '@'])
            .next()
            .unwrap_or_default();

        let mut parts = base.split(['_', '-']);
        let language = parts.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let mut locale = Locale {
            language: language.to_ascii_lowercase(),
            script: None,
            territory: None,
        };

        for part in parts {
            if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                if locale.script.is_some() || locale.territory.is_some() {
                    return Err(invalid());
                }
                let mut script = part.to_ascii_lowercase();
                script[..1].make_ascii_uppercase();
                locale.script = Some(script);
            } else if (part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
                || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()))
            {
                if locale.territory.is_some() {
                    return Err(invalid());
                }
                locale.territory = Some(part.to_ascii_uppercase());
            } else {
                return Err(invalid());
            }
        }

        Ok(locale)
    }

    /// Canonical name: `language` or `language_TERRITORY`.
    pub fn name(&self) -> String {
        match &self.territory {
            Some(territory) => format!("{}_{}", self.language, territory),
            None => self.language.clone(),
        }
    }

    /// Names to try when looking for a catalog, most specific first.
    pub fn fallback_chain(&self) -> Vec<String> {
        let mut chain = Vec::with_capacity(2);
        if self.territory.is_some() {
            chain.push(self.name());
        }
        chain.push(self.language.clone());
        chain
    }

    /// True when a plural rule exists for this language.
    pub fn is_known(&self) -> bool {
        PluralRule::for_locale(self).is_some()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl std::str::FromStr for Locale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s)
    }
}

/// Environment variables consulted for the preferred locales, highest priority first.
const LOCALE_VARS: &[&str] = &["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Preferred locales of the current process environment.
pub fn system_locales() -> Vec<Locale> {
    locales_from_env(|name| std::env::var(name).ok())
}

/// Preferred locales from an environment lookup function.
///
/// `LANGUAGE` may hold a colon separated list; `C` and `POSIX` are ignored.
pub fn locales_from_env(lookup: impl Fn(&str) -> Option<String>) -> Vec<Locale> {
    let mut locales: Vec<Locale> = Vec::new();
    for var in LOCALE_VARS {
        let Some(value) = lookup(var) else {
            continue;
        };
        for entry in value.split(':') {
            let entry = entry.trim();
            if entry.is_empty() || entry == "C" || entry == "POSIX" || entry.starts_with("C.") {
                continue;
            }
            match Locale::parse(entry) {
                Ok(locale) if !locales.contains(&locale) => locales.push(locale),
                Ok(_) => {}
                Err(_) => tracing::debug!(var, entry, "ignoring malformed locale"),
            }
        }
    }
    locales
}
