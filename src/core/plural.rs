//! Plural (numerus) rules.
//!
//! Each rule family matches the numerus rules Qt Linguist applies when it
//! creates `<numerusform>` slots: the number of forms a catalog must carry,
//! and which form a quantity selects at runtime.

use std::fmt;

use crate::core::locale::Locale;

/// A plural rule family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralRule {
    /// A single form for every quantity (Vietnamese, Chinese, Japanese, ...).
    OneForm,
    /// `n == 1` vs. everything else (English, Dutch, German, ...).
    English,
    /// `n <= 1` vs. everything else (French, Brazilian Portuguese).
    French,
    /// `n % 10 == 1 && n % 100 != 11`, `n != 0`, zero.
    Latvian,
    /// One, two, other.
    Irish,
    /// One, `n == 0 || n % 100 in 1..=19`, other.
    Romanian,
    /// `n % 10 == 1` outside the teens, `n % 10 != 0` outside the teens, other.
    Lithuanian,
    /// Russian-style one / few / many.
    Slavic,
    /// One, `2..=4`, other (Czech, Slovak).
    Czech,
    /// One, `n % 10 in 2..=4` outside the teens, other.
    Polish,
    /// `n % 100` is 1, 2, 3..=4, other.
    Slovenian,
    /// `n % 10` is 1, 2, other.
    Macedonian,
    /// `n % 10 == 1 && n % 100 != 11` vs. everything else.
    Icelandic,
    /// Zero, one, two, few, many, other.
    Arabic,
}

const ONE_FORM_LANGUAGES: &[&str] = &[
    "bo", "dz", "fa", "fj", "gn", "hu", "id", "ja", "jv", "km", "ko", "lo", "ms", "my", "na",
    "om", "su", "th", "tr", "tt", "vi", "yo", "za", "zh",
];

const ENGLISH_LANGUAGES: &[&str] = &[
    "af", "as", "ast", "az", "bg", "bn", "ca", "da", "de", "el", "en", "eo", "es", "et", "eu",
    "fi", "fo", "fy", "gl", "gu", "ha", "he", "hi", "it", "ka", "kk", "kn", "ku", "ky", "la",
    "lb", "ml", "mn", "mr", "nb", "ne", "nl", "nn", "no", "or", "pa", "ps", "pt", "rm", "sd",
    "si", "so", "sq", "sv", "sw", "ta", "te", "tk", "ur", "uz", "xh", "zu",
];

const FRENCH_LANGUAGES: &[&str] = &["ak", "br", "fr", "hy", "ln", "oc", "ti", "wa"];

const SLAVIC_LANGUAGES: &[&str] = &["be", "bs", "hr", "ru", "sh", "sr", "uk"];

impl PluralRule {
    /// Rule for a locale, `None` when the language is not known.
    pub fn for_locale(locale: &Locale) -> Option<Self> {
        let language = locale.language.as_str();

        // Brazilian Portuguese counts zero as singular.
        if language == "pt" && locale.territory.as_deref() == Some("BR") {
            return Some(PluralRule::French);
        }

        let rule = match language {
            l if ONE_FORM_LANGUAGES.contains(&l) => PluralRule::OneForm,
            l if ENGLISH_LANGUAGES.contains(&l) => PluralRule::English,
            l if FRENCH_LANGUAGES.contains(&l) => PluralRule::French,
            l if SLAVIC_LANGUAGES.contains(&l) => PluralRule::Slavic,
            "lv" => PluralRule::Latvian,
            "ga" => PluralRule::Irish,
            "ro" | "mo" => PluralRule::Romanian,
            "lt" => PluralRule::Lithuanian,
            "cs" | "sk" => PluralRule::Czech,
            "pl" => PluralRule::Polish,
            "sl" => PluralRule::Slovenian,
            "mk" => PluralRule::Macedonian,
            "is" => PluralRule::Icelandic,
            "ar" => PluralRule::Arabic,
            _ => return None,
        };
        Some(rule)
    }

    /// Number of `<numerusform>` entries a message needs in this language.
    pub fn form_count(self) -> usize {
        match self {
            PluralRule::OneForm => 1,
            PluralRule::English | PluralRule::French | PluralRule::Icelandic => 2,
            PluralRule::Latvian
            | PluralRule::Irish
            | PluralRule::Romanian
            | PluralRule::Lithuanian
            | PluralRule::Slavic
            | PluralRule::Czech
            | PluralRule::Polish
            | PluralRule::Macedonian => 3,
            PluralRule::Slovenian => 4,
            PluralRule::Arabic => 6,
        }
    }

    /// Index of the form used for quantity `n`, always `< form_count()`.
    pub fn select(self, n: i64) -> usize {
        let n = n.unsigned_abs();
        let n10 = n % 10;
        let n100 = n % 100;
        let teens = (10..=19).contains(&n100);

        match self {
            PluralRule::OneForm => 0,
            PluralRule::English => usize::from(n != 1),
            PluralRule::French => usize::from(n > 1),
            PluralRule::Icelandic => usize::from(!(n10 == 1 && n100 != 11)),
            PluralRule::Latvian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n != 0 {
                    1
                } else {
                    2
                }
            }
            PluralRule::Irish => match n {
                1 => 0,
                2 => 1,
                _ => 2,
            },
            PluralRule::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (1..=19).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Lithuanian => {
                if n10 == 1 && !teens {
                    0
                } else if n10 != 0 && !teens {
                    1
                } else {
                    2
                }
            }
            PluralRule::Slavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !teens {
                    1
                } else {
                    2
                }
            }
            PluralRule::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !teens {
                    1
                } else {
                    2
                }
            }
            PluralRule::Slovenian => match n100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            PluralRule::Macedonian => match n10 {
                1 => 0,
                2 => 1,
                _ => 2,
            },
            PluralRule::Arabic => match n {
                0 => 0,
                1 => 1,
                2 => 2,
                _ if (3..=10).contains(&n100) => 3,
                _ if n100 >= 11 => 4,
                _ => 5,
            },
        }
    }
}

impl fmt::Display for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PluralRule::OneForm => "one-form",
            PluralRule::English => "english",
            PluralRule::French => "french",
            PluralRule::Latvian => "latvian",
            PluralRule::Irish => "irish",
            PluralRule::Romanian => "romanian",
            PluralRule::Lithuanian => "lithuanian",
            PluralRule::Slavic => "slavic",
            PluralRule::Czech => "czech",
            PluralRule::Polish => "polish",
            PluralRule::Slovenian => "slovenian",
            PluralRule::Macedonian => "macedonian",
            PluralRule::Icelandic => "icelandic",
            PluralRule::Arabic => "arabic",
        };
        f.write_str(name)
    }
}
