//! Domain entities for uxaudit.
//!
//! Every type here is an immutable value produced by the analysis pipeline.
//! Nothing is persisted; a run builds these, renders them, and drops them.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Semantic UI archetype used to key the heuristic tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    /// Clickable action element.
    Button,
    /// Data-entry form.
    Form,
    /// Content card.
    Card,
    /// Dialog or overlay.
    Modal,
    /// Menus, navbars, breadcrumbs.
    Navigation,
    /// Page shells and containers.
    Layout,
    /// Single input or field.
    Input,
    /// Anything the classifier does not recognise.
    Other,
}

impl ComponentCategory {
    /// Stable lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Form => "form",
            Self::Card => "card",
            Self::Modal => "modal",
            Self::Navigation => "navigation",
            Self::Layout => "layout",
            Self::Input => "input",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue criticality tier. Used for filtering and counting, never for weighting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Cosmetic.
    Low,
    /// Degrades the experience for some users.
    Medium,
    /// Blocks some users.
    High,
    /// Blocks most users.
    Critical,
}

impl Severity {
    /// Stable lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Label used in the Spanish reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Baja",
            Self::Medium => "Media",
            Self::High => "Alta",
            Self::Critical => "Crítica",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dimension an issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    /// WCAG-style accessibility problems.
    Accessibility,
    /// Friction in task completion.
    Usability,
    /// Divergence from the design system.
    Consistency,
    /// Rendering or loading cost.
    Performance,
    /// Layout problems on small viewports.
    Responsive,
}

impl IssueType {
    /// Stable lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accessibility => "accessibility",
            Self::Usability => "usability",
            Self::Consistency => "consistency",
            Self::Performance => "performance",
            Self::Responsive => "responsive",
        }
    }
}

/// A single finding. Lists of issues are concatenated, never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UiIssue {
    /// Criticality tier.
    pub severity: Severity,
    /// Dimension of the finding.
    #[serde(rename = "type")]
    pub kind: IssueType,
    /// Human-readable description.
    pub description: String,
    /// Suggested fix, when one is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

impl UiIssue {
    /// Create an issue without a suggested fix.
    pub fn new(severity: Severity, kind: IssueType, description: impl Into<String>) -> Self {
        Self {
            severity,
            kind,
            description: description.into(),
            solution: None,
        }
    }

    /// Attach a suggested fix.
    pub fn with_solution(mut self, solution: impl Into<String>) -> Self {
        self.solution = Some(solution.into());
        self
    }
}

/// A classified UI component. Identity is its `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UiComponent {
    /// File name without its script extension.
    pub name: String,
    /// Category chosen by the classifier.
    #[serde(rename = "type")]
    pub category: ComponentCategory,
    /// Path as given in the manifest.
    pub path: String,
    /// Findings attached by callers; empty at construction.
    pub issues: Vec<UiIssue>,
    /// Suggestions attached by callers; empty at construction.
    pub recommendations: Vec<String>,
}

/// Brand and semantic colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ColorPalette {
    /// Primary brand colours.
    pub primary: Vec<String>,
    /// Secondary brand colours.
    pub secondary: Vec<String>,
    /// Greys used for text, borders and surfaces.
    pub neutral: Vec<String>,
    /// Status colours.
    pub semantic: SemanticColors,
}

/// Status colours of the palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SemanticColors {
    /// Positive confirmation.
    pub success: String,
    /// Errors and destructive actions.
    pub error: String,
    /// Cautionary states.
    pub warning: String,
    /// Neutral notices.
    pub info: String,
}

/// Font stacks and scales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Font stacks in order of preference.
    pub font_families: Vec<String>,
    /// Size scale.
    pub font_sizes: Vec<String>,
    /// Line-height scale.
    pub line_heights: Vec<String>,
}

/// The project's visual language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    /// Colour palette.
    pub colors: ColorPalette,
    /// Font stacks and scales.
    pub typography: Typography,
    /// Spacing scale.
    pub spacing: Vec<String>,
    /// Corner radius scale.
    pub border_radius: Vec<String>,
    /// Elevation scale.
    pub shadows: Vec<String>,
}

/// One scored dimension of the design-system analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubAnalysis {
    /// Score in `0..=100`.
    pub score: u8,
    /// Findings behind the score.
    pub issues: Vec<UiIssue>,
}

/// Three-tier action plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    /// Actions to take now.
    pub immediate: Vec<String>,
    /// Actions for the next iterations.
    pub short_term: Vec<String>,
    /// Structural work.
    pub long_term: Vec<String>,
}

impl Recommendations {
    /// Number of actions across all tiers.
    pub fn len(&self) -> usize {
        self.immediate.len() + self.short_term.len() + self.long_term.len()
    }

    /// Whether every tier is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Aggregate result of a design-system analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UiAnalysisResult {
    /// Weighted score in `0..=100`.
    pub score: u8,
    /// Components considered by the analysis (may be empty).
    pub components: Vec<UiComponent>,
    /// Token snapshot used for the consistency dimension.
    pub design_tokens: DesignTokens,
    /// Accessibility dimension.
    pub accessibility: SubAnalysis,
    /// Usability dimension.
    pub usability: SubAnalysis,
    /// Visual consistency dimension.
    pub consistency: SubAnalysis,
    /// Three-tier plan for the design system.
    pub recommendations: Recommendations,
}

/// Line counts for an inspected source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceStats {
    /// Language name as reported by `tokei`.
    pub language: String,
    /// Lines of code.
    pub code: usize,
    /// Comment lines.
    pub comments: usize,
    /// Blank lines.
    pub blanks: usize,
}

/// Findings for one page or component of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemAnalysis {
    /// Display label from the manifest.
    pub name: String,
    /// Path from the manifest.
    pub path: String,
    /// Category assigned by the classifier.
    pub category: ComponentCategory,
    /// Page score; components are evaluated qualitatively and carry `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    /// Accessibility findings.
    pub issues: Vec<UiIssue>,
    /// Category suggestions.
    pub recommendations: Vec<String>,
    /// Source statistics, when the file could be read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceStats>,
}

/// Mobile-experience section of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MobileAnalysis {
    /// Fixed placeholder score.
    pub score: u8,
    /// Findings across the mobile paths.
    pub issues: Vec<UiIssue>,
    /// Fixed mobile advice.
    pub recommendations: Vec<String>,
}

/// An item the driver attempted but could not analyse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemFailure {
    /// Display label of the item, or `design-system`.
    pub name: String,
    /// Error message.
    pub message: String,
}
