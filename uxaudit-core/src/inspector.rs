//! Component source loading.

use std::path::{Path, PathBuf};

use tokei::{Config, LanguageType};

use crate::domain::SourceStats;
use crate::error::Result;
use crate::fs::{FileSystem, read_optional};

/// Source text of a component together with its line statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Raw file contents.
    pub text: String,
    /// Line counts, when `tokei` recognises the language.
    pub stats: Option<SourceStats>,
}

/// Loads component sources relative to a project root.
pub struct SourceInspector<F: FileSystem> {
    fs: F,
    root: PathBuf,
    config: Config,
}

impl<F: FileSystem> SourceInspector<F> {
    /// Create a new inspector with default `tokei` configuration.
    pub fn new(fs: F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
            config: Config::default(),
        }
    }

    /// Project root the manifest paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a manifest path against the project root.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Load a component source. A missing file yields `Ok(None)`.
    pub fn load(&self, path: &str) -> Result<Option<SourceFile>> {
        let resolved = self.resolve(path);
        let Some(text) = read_optional(&self.fs, &resolved)? else {
            log::debug!("no source at {}", resolved.display());
            return Ok(None);
        };
        let stats = self.stats_for(&resolved, &text);
        Ok(Some(SourceFile { text, stats }))
    }

    /// Load a component source, treating any failure as "no source".
    pub fn load_lenient(&self, path: &str) -> Option<SourceFile> {
        match self.load(path) {
            Ok(source) => source,
            Err(err) => {
                log::warn!("source inspection unavailable for {path}: {err}");
                None
            }
        }
    }

    fn stats_for(&self, path: &Path, text: &str) -> Option<SourceStats> {
        let language = LanguageType::from_path(path, &self.config)?;
        let stats = language.parse_from_str(text, &self.config).summarise();
        Some(SourceStats {
            language: language.to_string(),
            code: stats.code,
            comments: stats.comments,
            blanks: stats.blanks,
        })
    }
}
