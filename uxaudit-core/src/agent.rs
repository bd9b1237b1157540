//! The UI/UX agent: one explicitly constructed value wiring the analysis steps.

use std::path::{Path, PathBuf};

use crate::accessibility::AccessibilityValidator;
use crate::advisor;
use crate::classifier;
use crate::design_system::DesignSystemAnalyzer;
use crate::domain::{SourceStats, UiAnalysisResult, UiComponent, UiIssue};
use crate::error::Result;
use crate::fs::{FileSystem, StdFileSystem};
use crate::inspector::SourceInspector;
use crate::tokens::{DesignTokenSource, StaticDesignTokens};

/// The analysis steps the report driver calls, in the order it calls them.
pub trait UxAgent {
    /// Classify a manifest path into a fresh component.
    fn analyze_component(&self, path: &str) -> UiComponent;
    /// Accessibility findings for a component.
    fn validate_accessibility(&self, component: &UiComponent) -> Result<Vec<UiIssue>>;
    /// Category-specific suggestions for a component.
    fn suggest_improvements(&self, component: &UiComponent) -> Vec<String>;
    /// Line statistics for a component source, when available.
    fn source_stats(&self, path: &str) -> Option<SourceStats>;
    /// Project-wide design-system analysis.
    fn analyze_design_system(&self, project_root: &Path) -> Result<UiAnalysisResult>;
}

/// Default agent reading sources through `F` and tokens through `T`.
pub struct UiUxAgent<F: FileSystem, T: DesignTokenSource> {
    validator: AccessibilityValidator<F>,
    design_system: DesignSystemAnalyzer<T>,
}

impl UiUxAgent<StdFileSystem, StaticDesignTokens> {
    /// Agent over the real filesystem with the built-in token snapshot.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self::new(StdFileSystem::new(), root, StaticDesignTokens)
    }
}

impl<F: FileSystem, T: DesignTokenSource> UiUxAgent<F, T> {
    /// Create an agent resolving manifest paths against `root`.
    pub fn new(fs: F, root: impl Into<PathBuf>, tokens: T) -> Self {
        Self {
            validator: AccessibilityValidator::new(SourceInspector::new(fs, root)),
            design_system: DesignSystemAnalyzer::new(tokens),
        }
    }

    /// Project root used to resolve manifest paths.
    pub fn root(&self) -> &Path {
        self.validator.inspector().root()
    }
}

impl<F: FileSystem, T: DesignTokenSource> UxAgent for UiUxAgent<F, T> {
    fn analyze_component(&self, path: &str) -> UiComponent {
        classifier::analyze_component(path)
    }

    fn validate_accessibility(&self, component: &UiComponent) -> Result<Vec<UiIssue>> {
        Ok(self.validator.validate_accessibility(component))
    }

    fn suggest_improvements(&self, component: &UiComponent) -> Vec<String> {
        advisor::suggest_improvements(component)
    }

    fn source_stats(&self, path: &str) -> Option<SourceStats> {
        self.validator
            .inspector()
            .load_lenient(path)
            .and_then(|source| source.stats)
    }

    fn analyze_design_system(&self, project_root: &Path) -> Result<UiAnalysisResult> {
        Ok(self.design_system.analyze_design_system(project_root))
    }
}

#[cfg(test)]
mod tests {
    use super::{UiUxAgent, UxAgent};
    use crate::domain::ComponentCategory;
    use crate::fs::MockFileSystem;
    use crate::tokens::StaticDesignTokens;
    use std::path::Path;

    #[test]
    fn agent_runs_the_full_item_pipeline() {
        let mut fs = MockFileSystem::new();
        fs.expect_read_to_string()
            .withf(|path| path == Path::new("/site/src/components/AdoptionForm.tsx"))
            .returning(|_| Ok("<form><input name=\"nombre\" /></form>\n".to_string()));

        let agent = UiUxAgent::new(fs, "/site", StaticDesignTokens);
        let component = agent.analyze_component("src/components/AdoptionForm.tsx");
        assert_eq!(component.category, ComponentCategory::Form);

        let issues = agent.validate_accessibility(&component).expect("validate");
        assert_eq!(issues.len(), 1);
        assert!(
            agent
                .suggest_improvements(&component)
                .iter()
                .any(|s| s.contains("validación"))
        );
        assert_eq!(agent.source_stats(&component.path).map(|s| s.code), Some(1));
    }

    #[test]
    fn design_system_analysis_is_idempotent() {
        let agent = UiUxAgent::for_root("/nowhere");
        assert_eq!(agent.root(), Path::new("/nowhere"));
        let first = agent.analyze_design_system(Path::new("/nowhere")).expect("first");
        let second = agent.analyze_design_system(Path::new("/nowhere")).expect("second");
        assert_eq!(first, second);
    }
}
