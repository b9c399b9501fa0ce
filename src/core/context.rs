use std::{cell::OnceCell, path::PathBuf};

use anyhow::Result;

use crate::{
    cli::args::CommonArgs,
    config::{Config, ConfigLoadResult, load_config},
    core::{
        Catalog, CatalogSet,
        scan::{LoadedCatalogs, load_catalogs, scan_catalog_files},
    },
    issues::ParseErrorIssue,
};

/// Loaded state shared by all commands.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--root translations`)
/// 2. `.tscatrc.json` config file
/// 3. Built-in defaults
///
/// Catalogs are parsed lazily on first access so that commands which only
/// need the file list stay cheap.
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project directory that roots are resolved against.
    pub root_dir: PathBuf,

    /// All catalog files found under the configured roots.
    pub files: Vec<PathBuf>,

    /// Whether the config came from a file rather than defaults.
    pub config_from_file: bool,

    pub verbose: bool,

    loaded: OnceCell<LoadedCatalogs>,
}

impl CheckContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let root_dir = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
        let ConfigLoadResult {
            mut config,
            from_file,
        } = load_config(&root_dir)?;

        if !args.roots.is_empty() {
            config.roots = args
                .roots
                .iter()
                .map(|root| root.to_string_lossy().to_string())
                .collect();
        }

        let ignores = config.ignore_patterns()?;
        let files = scan_catalog_files(&root_dir, &config.roots, &ignores);
        tracing::debug!(
            root = %root_dir.display(),
            config_from_file = from_file,
            files = files.len(),
            "scanned catalog files"
        );

        Ok(Self {
            config,
            root_dir,
            files,
            config_from_file: from_file,
            verbose: args.verbose,
            loaded: OnceCell::new(),
        })
    }

    fn loaded(&self) -> &LoadedCatalogs {
        self.loaded.get_or_init(|| load_catalogs(&self.files))
    }

    /// Successfully parsed catalogs, in file path order.
    pub fn catalogs(&self) -> &[Catalog] {
        &self.loaded().catalogs
    }

    /// Files that could not be parsed.
    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.loaded().errors
    }

    /// Catalogs usable at runtime, indexed by locale.
    ///
    /// Catalogs without a recognized language are skipped.
    pub fn catalog_set(&self) -> CatalogSet {
        let mut set = CatalogSet::new();
        for catalog in self.catalogs() {
            if let Err(err) = set.insert(catalog.clone()) {
                tracing::warn!(error = %err, "skipping catalog");
            }
        }
        set
    }
}
