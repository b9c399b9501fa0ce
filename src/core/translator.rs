//! Runtime lookup: catalog selection by locale and translation with source fallback.
//!
//! Lookup never fails. Whenever a usable translation is missing (no catalog,
//! unknown message, unfinished or empty entry) the source text is returned,
//! the same way a Qt application shows its built-in English strings.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    path::Path,
    sync::Arc,
};

use crate::core::{
    Catalog, CatalogError, Message, Translation, locale::Locale, parsers::ts::parse_ts_file,
    plural::PluralRule,
};

/// Parse a catalog for runtime use, refusing ones whose language is unknown.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let catalog = parse_ts_file(path)?;
    ensure_known_language(&catalog)?;
    Ok(catalog)
}

fn ensure_known_language(catalog: &Catalog) -> Result<Locale, CatalogError> {
    catalog
        .locale()
        .filter(Locale::is_known)
        .ok_or_else(|| CatalogError::UnknownLanguage {
            path: catalog.display_path().to_string(),
            language: catalog.language.clone().unwrap_or_default(),
        })
}

/// Catalogs available to an application, keyed by locale name.
#[derive(Debug, Default, Clone)]
pub struct CatalogSet {
    catalogs: BTreeMap<String, Arc<Catalog>>,
}

impl CatalogSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a catalog; a later catalog for the same locale replaces the earlier one.
    pub fn insert(&mut self, catalog: Catalog) -> Result<(), CatalogError> {
        let locale = ensure_known_language(&catalog)?;
        tracing::debug!(locale = %locale, path = catalog.display_path(), "registered catalog");
        self.catalogs.insert(locale.name(), Arc::new(catalog));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<Catalog>> {
        self.catalogs.get(name).cloned()
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Pick the catalog best matching the preferred locales.
    ///
    /// Each preferred locale is tried along its fallback chain (`nl_BE`, then
    /// `nl`). If nothing matches exactly, a catalog for the same language in
    /// another territory is accepted (`nl_BE` finds `nl_NL`).
    pub fn negotiate(&self, preferred: &[Locale]) -> Option<Arc<Catalog>> {
        for locale in preferred {
            for name in locale.fallback_chain() {
                if let Some(catalog) = self.catalogs.get(&name) {
                    tracing::debug!(requested = %locale, matched = %name, "negotiated catalog");
                    return Some(catalog.clone());
                }
            }
        }

        for locale in preferred {
            let same_language = self.catalogs.iter().find(|(name, _)| {
                Locale::parse(name).is_ok_and(|candidate| candidate.language == locale.language)
            });
            if let Some((name, catalog)) = same_language {
                tracing::debug!(requested = %locale, matched = %name, "negotiated catalog by language");
                return Some(catalog.clone());
            }
        }

        tracing::debug!(?preferred, "no catalog matches the preferred locales");
        None
    }
}

/// Position of a message inside the active catalog.
type MessageIndex = HashMap<String, HashMap<String, HashMap<String, (usize, usize)>>>;

/// Resolves source strings against the active catalog.
///
/// The catalog is immutable; switching locale replaces it wholesale.
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: Option<Arc<Catalog>>,
    rule: PluralRule,
    index: MessageIndex,
}

impl Default for Translator {
    fn default() -> Self {
        Self::empty()
    }
}

impl Translator {
    /// A translator without a catalog: every lookup returns the source text.
    pub fn empty() -> Self {
        Self {
            catalog: None,
            rule: PluralRule::English,
            index: HashMap::new(),
        }
    }

    pub fn new(catalog: Arc<Catalog>) -> Result<Self, CatalogError> {
        let mut translator = Self::empty();
        translator.replace(catalog)?;
        Ok(translator)
    }

    /// Switch to another catalog, dropping the previous one.
    pub fn replace(&mut self, catalog: Arc<Catalog>) -> Result<(), CatalogError> {
        let locale = ensure_known_language(&catalog)?;
        self.rule = PluralRule::for_locale(&locale).unwrap_or(PluralRule::English);
        self.index = build_index(&catalog);
        self.catalog = Some(catalog);
        Ok(())
    }

    /// Drop the active catalog and fall back to source strings.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    pub fn catalog(&self) -> Option<&Arc<Catalog>> {
        self.catalog.as_ref()
    }

    /// Language of the active catalog.
    pub fn language(&self) -> Option<&str> {
        self.catalog.as_ref().and_then(|c| c.language.as_deref())
    }

    pub fn plural_rule(&self) -> PluralRule {
        self.rule
    }

    /// Translate a plain string without comment or quantity.
    pub fn tr<'a>(&'a self, context: &str, source: &'a str) -> Cow<'a, str> {
        self.translate(context, source, None, None)
    }

    /// Translate `source` within `context`.
    ///
    /// `comment` disambiguates identical source texts; when no message carries
    /// that comment, the comment-less message is used. For plural messages,
    /// `n` selects the form and replaces `%n`.
    pub fn translate<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        comment: Option<&str>,
        n: Option<i64>,
    ) -> Cow<'a, str> {
        let text = match self.find(context, source, comment) {
            Some(message) => self.resolve(message, n).unwrap_or_else(|| {
                tracing::trace!(context, source, status = %message.status, "falling back to source");
                source
            }),
            None => source,
        };

        match n {
            Some(n) if text.contains("%n") => Cow::Owned(text.replace("%n", &n.to_string())),
            _ => Cow::Borrowed(text),
        }
    }

    fn find(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&Message> {
        let by_comment = self.index.get(context)?.get(source)?;
        let comment = comment.unwrap_or("");
        let (ctx, msg) = by_comment
            .get(comment)
            .or_else(|| by_comment.get(""))
            .copied()?;
        self.catalog
            .as_ref()
            .map(|catalog| &catalog.contexts[ctx].messages[msg])
    }

    /// Translated text of a message, `None` when the source must be used.
    fn resolve<'a>(&self, message: &'a Message, n: Option<i64>) -> Option<&'a str> {
        if !message.is_finished() {
            return None;
        }
        let text = match &message.translation {
            Translation::Singular(text) => text.as_str(),
            Translation::Plural(forms) => {
                let index = self.rule.select(n.unwrap_or(0));
                let form = forms.get(index).or_else(|| forms.last())?;
                form.as_str()
            }
        };
        (!text.is_empty()).then_some(text)
    }
}

fn build_index(catalog: &Catalog) -> MessageIndex {
    let mut index = MessageIndex::new();
    for (ctx, context) in catalog.contexts.iter().enumerate() {
        for (msg, message) in context.messages.iter().enumerate() {
            if message.status.is_retired() {
                continue;
            }
            // The first occurrence of a duplicated key wins.
            index
                .entry(context.name.clone())
                .or_default()
                .entry(message.source.clone())
                .or_default()
                .entry(message.comment_or_empty().to_string())
                .or_insert((ctx, msg));
        }
    }
    index
}
