//! Project-wide design-system analysis.

use std::path::Path;

use crate::domain::{IssueType, Severity, SubAnalysis, UiAnalysisResult, UiIssue};
use crate::planner::plan;
use crate::tokens::DesignTokenSource;

/// Baseline accessibility score.
pub const ACCESSIBILITY_BASELINE: u8 = 85;
/// Baseline usability score.
pub const USABILITY_BASELINE: u8 = 90;
/// Baseline consistency score.
pub const CONSISTENCY_BASELINE: u8 = 88;

/// Weight of the accessibility score in the overall score.
pub const ACCESSIBILITY_WEIGHT: f64 = 0.40;
/// Weight of the usability score in the overall score.
pub const USABILITY_WEIGHT: f64 = 0.35;
/// Weight of the consistency score in the overall score.
pub const CONSISTENCY_WEIGHT: f64 = 0.25;

/// Combines token snapshots and the three sub-analyses into one result.
pub struct DesignSystemAnalyzer<T: DesignTokenSource> {
    tokens: T,
}

impl<T: DesignTokenSource> DesignSystemAnalyzer<T> {
    /// Create an analyzer reading tokens from `tokens`.
    pub fn new(tokens: T) -> Self {
        Self { tokens }
    }

    /// Analyse the project rooted at `project_root`.
    ///
    /// An unreadable root is not an error; the baselines apply regardless.
    pub fn analyze_design_system(&self, project_root: &Path) -> UiAnalysisResult {
        let design_tokens = self.tokens.extract_design_tokens(project_root);
        let accessibility = analyze_accessibility();
        let usability = analyze_usability();
        let consistency = analyze_consistency();
        let score = weighted_score(accessibility.score, usability.score, consistency.score);
        let recommendations = plan(&accessibility, &usability, &consistency);
        log::debug!("design system score for {}: {score}", project_root.display());

        UiAnalysisResult {
            score,
            components: Vec::new(),
            design_tokens,
            accessibility,
            usability,
            consistency,
            recommendations,
        }
    }
}

/// `round(0.40 * accessibility + 0.35 * usability + 0.25 * consistency)`.
pub fn weighted_score(accessibility: u8, usability: u8, consistency: u8) -> u8 {
    let score = f64::from(accessibility) * ACCESSIBILITY_WEIGHT
        + f64::from(usability) * USABILITY_WEIGHT
        + f64::from(consistency) * CONSISTENCY_WEIGHT;
    score.round().clamp(0.0, 100.0) as u8
}

fn analyze_accessibility() -> SubAnalysis {
    SubAnalysis {
        score: ACCESSIBILITY_BASELINE,
        issues: vec![
            UiIssue::new(
                Severity::Medium,
                IssueType::Accessibility,
                "Algunos componentes podrían beneficiarse de mejores atributos ARIA",
            )
            .with_solution("Agregar aria-label y aria-describedby a los elementos interactivos"),
        ],
    }
}

fn analyze_usability() -> SubAnalysis {
    SubAnalysis {
        score: USABILITY_BASELINE,
        issues: Vec::new(),
    }
}

fn analyze_consistency() -> SubAnalysis {
    SubAnalysis {
        score: CONSISTENCY_BASELINE,
        issues: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{MockDesignTokenSource, StaticDesignTokens, default_design_tokens};

    #[test]
    fn baseline_analysis_scores_88() {
        let analyzer = DesignSystemAnalyzer::new(StaticDesignTokens);
        let result = analyzer.analyze_design_system(Path::new("."));

        assert_eq!(result.accessibility.score, 85);
        assert_eq!(result.accessibility.issues.len(), 1);
        assert!(result.accessibility.issues[0].description.contains("ARIA"));
        assert_eq!(result.usability.score, 90);
        assert!(result.usability.issues.is_empty());
        assert_eq!(result.consistency.score, 88);
        assert!(result.consistency.issues.is_empty());
        assert_eq!(result.score, 88);
        assert!(result.components.is_empty());
        assert_eq!(result.recommendations.immediate.len(), 2);
    }

    #[test]
    fn weighted_score_matches_formula() {
        assert_eq!(weighted_score(100, 100, 100), 100);
        assert_eq!(weighted_score(0, 0, 0), 0);
        assert_eq!(weighted_score(85, 90, 88), 88);
        assert_eq!(weighted_score(50, 60, 70), 59);
    }

    #[test]
    fn tokens_come_from_injected_source() {
        let mut tokens = MockDesignTokenSource::new();
        tokens
            .expect_extract_design_tokens()
            .withf(|root| root == Path::new("/site"))
            .times(1)
            .returning(|_| default_design_tokens());

        let analyzer = DesignSystemAnalyzer::new(tokens);
        let result = analyzer.analyze_design_system(Path::new("/site"));
        assert_eq!(result.design_tokens, default_design_tokens());
    }

    #[test]
    fn missing_root_is_not_an_error() {
        let analyzer = DesignSystemAnalyzer::new(StaticDesignTokens);
        let first = analyzer.analyze_design_system(Path::new("/definitely/not/here"));
        let second = analyzer.analyze_design_system(Path::new("/definitely/not/here"));
        assert_eq!(first, second);
    }
}
