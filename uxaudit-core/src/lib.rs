#![deny(missing_docs)]
//! uxaudit core library.
//!
//! Classification, accessibility checks, design-system scoring and report
//! rendering behind the `uxaudit` command-line tool.

pub mod accessibility;
pub mod advisor;
pub mod agent;
pub mod classifier;
pub mod design_system;
pub mod domain;
pub mod driver;
pub mod error;
pub mod fs;
pub mod inspector;
pub mod jsx;
pub mod manifest;
pub mod planner;
pub mod report;
pub mod schema;
pub mod style_guide;
pub mod tokens;

pub use accessibility::{AccessibilityValidator, validate_source};
pub use advisor::suggest_improvements;
pub use agent::{UiUxAgent, UxAgent};
pub use classifier::{analyze_component, classify};
pub use design_system::{DesignSystemAnalyzer, weighted_score};
pub use domain::{
    ColorPalette, ComponentCategory, DesignTokens, IssueType, ItemAnalysis, ItemFailure,
    MobileAnalysis, Recommendations, SemanticColors, Severity, SourceStats, SubAnalysis,
    Typography, UiAnalysisResult, UiComponent, UiIssue,
};
pub use driver::{
    MOBILE_SCORE, analyze_critical_component, analyze_mobile, analyze_page, overall_score,
    page_score,
};
pub use error::{Result, UxAuditError};
pub use fs::{FileSystem, StdFileSystem};
pub use inspector::{SourceFile, SourceInspector};
pub use jsx::JsxDocument;
pub use manifest::{Manifest, ManifestEntry};
pub use planner::plan;
pub use report::{REPORT_FILE_NAME, UxReport, conclusion, render_json, render_report_markdown};
pub use schema::{ReportSchema, report_schema_json};
pub use style_guide::generate_style_guide;
pub use tokens::{DesignTokenSource, JsonDesignTokens, StaticDesignTokens, default_design_tokens};
