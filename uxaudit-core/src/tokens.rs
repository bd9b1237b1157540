//! Design-token sources.

use std::path::{Path, PathBuf};

use crate::domain::{ColorPalette, DesignTokens, SemanticColors, Typography};
use crate::fs::FileSystem;

/// Provides the design tokens of a project.
#[cfg_attr(test, mockall::automock)]
pub trait DesignTokenSource {
    /// Return a well-formed token set for the project. Must not fail.
    fn extract_design_tokens(&self, project_root: &Path) -> DesignTokens;
}

impl<T: DesignTokenSource + ?Sized> DesignTokenSource for Box<T> {
    fn extract_design_tokens(&self, project_root: &Path) -> DesignTokens {
        (**self).extract_design_tokens(project_root)
    }
}

/// The built-in snapshot of the site's design-system constants.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticDesignTokens;

impl DesignTokenSource for StaticDesignTokens {
    fn extract_design_tokens(&self, _project_root: &Path) -> DesignTokens {
        default_design_tokens()
    }
}

/// Reads tokens from a JSON file, falling back to the built-in snapshot.
pub struct JsonDesignTokens<F: FileSystem> {
    fs: F,
    path: PathBuf,
}

impl<F: FileSystem> JsonDesignTokens<F> {
    /// `path` is resolved against the project root when relative.
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }
}

impl<F: FileSystem> DesignTokenSource for JsonDesignTokens<F> {
    fn extract_design_tokens(&self, project_root: &Path) -> DesignTokens {
        let path = project_root.join(&self.path);
        let parsed = self
            .fs
            .read_to_string(&path)
            .and_then(|text| Ok(serde_json::from_str::<DesignTokens>(&text)?));
        match parsed {
            Ok(tokens) => tokens,
            Err(err) => {
                log::warn!(
                    "design tokens unavailable at {}, using built-in snapshot: {err}",
                    path.display()
                );
                default_design_tokens()
            }
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// The built-in token snapshot.
pub fn default_design_tokens() -> DesignTokens {
    DesignTokens {
        colors: ColorPalette {
            primary: strings(&["#F97316", "#EA580C", "#C2410C"]),
            secondary: strings(&["#0EA5E9", "#0284C7"]),
            neutral: strings(&[
                "#FFFFFF", "#F9FAFB", "#E5E7EB", "#9CA3AF", "#4B5563", "#111827",
            ]),
            semantic: SemanticColors {
                success: "#16A34A".to_string(),
                error: "#DC2626".to_string(),
                warning: "#F59E0B".to_string(),
                info: "#2563EB".to_string(),
            },
        },
        typography: Typography {
            font_families: strings(&["Inter, system-ui, sans-serif", "Poppins, sans-serif"]),
            font_sizes: strings(&[
                "0.75rem", "0.875rem", "1rem", "1.125rem", "1.25rem", "1.5rem", "2rem",
            ]),
            line_heights: strings(&["1.25", "1.5", "1.75"]),
        },
        spacing: strings(&["0.25rem", "0.5rem", "1rem", "1.5rem", "2rem", "3rem"]),
        border_radius: strings(&["0.25rem", "0.5rem", "0.75rem", "1rem", "9999px"]),
        shadows: strings(&[
            "0 1px 2px 0 rgb(0 0 0 / 0.05)",
            "0 4px 6px -1px rgb(0 0 0 / 0.1)",
            "0 10px 15px -3px rgb(0 0 0 / 0.1)",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UxAuditError;
    use crate::fs::MockFileSystem;

    #[test]
    fn static_tokens_are_complete_and_root_independent() {
        let a = StaticDesignTokens.extract_design_tokens(Path::new("/site"));
        let b = StaticDesignTokens.extract_design_tokens(Path::new("/does/not/exist"));
        assert_eq!(a, b);
        assert!(!a.colors.primary.is_empty());
        assert!(!a.colors.neutral.is_empty());
        assert!(!a.typography.font_families.is_empty());
        assert!(!a.typography.font_sizes.is_empty());
        assert!(!a.spacing.is_empty());
        assert!(!a.border_radius.is_empty());
        assert!(!a.shadows.is_empty());
    }

    #[test]
    fn json_tokens_are_read_relative_to_root() {
        let mut custom = default_design_tokens();
        custom.colors.primary = vec!["#123456".to_string()];
        let payload = serde_json::to_string(&custom).expect("serialize tokens");

        let mut fs = MockFileSystem::new();
        fs.expect_read_to_string()
            .withf(|path| path == Path::new("/site/theme/tokens.json"))
            .returning(move |_| Ok(payload.clone()));

        let source = JsonDesignTokens::new(fs, "theme/tokens.json");
        let tokens = source.extract_design_tokens(Path::new("/site"));
        assert_eq!(tokens.colors.primary, vec!["#123456".to_string()]);
    }

    #[test]
    fn json_tokens_fall_back_on_invalid_or_missing_files() {
        let mut fs = MockFileSystem::new();
        fs.expect_read_to_string()
            .returning(|_| Ok("{ not json".to_string()));
        let invalid = JsonDesignTokens::new(fs, "tokens.json");
        assert_eq!(
            invalid.extract_design_tokens(Path::new("/site")),
            default_design_tokens()
        );

        let mut fs = MockFileSystem::new();
        fs.expect_read_to_string()
            .returning(|_| Err(UxAuditError::Other("missing".to_string())));
        let missing = JsonDesignTokens::new(fs, "tokens.json");
        assert_eq!(
            missing.extract_design_tokens(Path::new("/site")),
            default_design_tokens()
        );
    }
}
