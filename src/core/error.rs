use thiserror::Error;

/// Errors raised while loading or resolving translation catalogs.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed XML.
    #[error("{path}:{line}: malformed XML: {message}")]
    Xml {
        path: String,
        line: usize,
        message: String,
    },

    /// Well-formed XML that does not follow the TS layout.
    #[error("{path}:{line}: {message}")]
    Format {
        path: String,
        line: usize,
        message: String,
    },

    #[error("{path}: catalog language '{language}' is not recognized")]
    UnknownLanguage { path: String, language: String },

    #[error("invalid locale identifier '{0}'")]
    InvalidLocale(String),
}
