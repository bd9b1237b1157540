//! OpenAPI component schemas for the JSON report payload.

use utoipa::OpenApi;

use crate::domain::{
    ColorPalette, ComponentCategory, DesignTokens, IssueType, ItemAnalysis, ItemFailure,
    MobileAnalysis, Recommendations, SemanticColors, Severity, SourceStats, SubAnalysis,
    Typography, UiAnalysisResult, UiComponent, UiIssue,
};
use crate::manifest::{Manifest, ManifestEntry};
use crate::report::UxReport;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "uxaudit report",
        description = "JSON payloads written by `uxaudit --format json`"
    ),
    components(
        schemas(
            UxReport,
            ItemAnalysis,
            ItemFailure,
            MobileAnalysis,
            UiAnalysisResult,
            UiComponent,
            UiIssue,
            SubAnalysis,
            Recommendations,
            DesignTokens,
            ColorPalette,
            SemanticColors,
            Typography,
            SourceStats,
            ComponentCategory,
            Severity,
            IssueType,
            Manifest,
            ManifestEntry
        )
    )
)]
/// Schema document for report and manifest payloads.
pub struct ReportSchema;

/// Pretty-printed schema document.
pub fn report_schema_json() -> Result<String, serde_json::Error> {
    ReportSchema::openapi().to_pretty_json()
}
