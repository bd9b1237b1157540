//! Report assembly and formatting for uxaudit runs.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    DesignTokens, ItemAnalysis, ItemFailure, MobileAnalysis, Recommendations, UiAnalysisResult,
    UiIssue,
};
use crate::driver::{average_page_score, count_critical, improvement_plan, overall_score};

/// Default report file name, written to the working directory.
pub const REPORT_FILE_NAME: &str = "UI_UX_ANALYSIS_REPORT.md";

/// Fixed next-steps checklist closing every report.
pub const NEXT_STEPS: &[&str] = &[
    "Revisar y priorizar los problemas críticos identificados",
    "Asignar responsables para cada mejora inmediata",
    "Implementar las correcciones de accesibilidad",
    "Realizar pruebas con usuarios reales",
    "Programar una nueva auditoría en 30 días",
];

/// Everything a report run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UxReport {
    /// When the run finished assembling the report.
    pub generated_at: DateTime<Utc>,
    /// Project root the manifest was resolved against.
    pub project_root: String,
    /// Successfully analysed pages, in manifest order.
    pub pages: Vec<ItemAnalysis>,
    /// Successfully analysed components, in manifest order.
    pub components: Vec<ItemAnalysis>,
    /// Design-system analysis; `None` when it failed.
    pub design_system: Option<UiAnalysisResult>,
    /// Mobile-experience section.
    pub mobile: MobileAnalysis,
    /// Weighted overall score.
    pub overall_score: u8,
    /// Report-level three-tier plan.
    pub improvement_plan: Recommendations,
    /// Items that were attempted but skipped.
    pub failures: Vec<ItemFailure>,
}

impl UxReport {
    /// Assemble a report and compute its aggregate fields.
    pub fn assemble(
        project_root: impl Into<String>,
        pages: Vec<ItemAnalysis>,
        components: Vec<ItemAnalysis>,
        design_system: Option<UiAnalysisResult>,
        mobile: MobileAnalysis,
        failures: Vec<ItemFailure>,
    ) -> Self {
        let overall_score = overall_score(
            average_page_score(&pages),
            design_system.as_ref().map(|analysis| analysis.score),
            mobile.score,
        );
        let improvement_plan = improvement_plan(&pages, &components, design_system.as_ref());
        Self {
            generated_at: Utc::now(),
            project_root: project_root.into(),
            pages,
            components,
            design_system,
            mobile,
            overall_score,
            improvement_plan,
            failures,
        }
    }

    /// Mean page score (unrounded).
    pub fn average_page_score(&self) -> f64 {
        average_page_score(&self.pages)
    }

    /// Critical issues across pages, components, mobile and design system.
    pub fn critical_issue_count(&self) -> usize {
        let items = self
            .pages
            .iter()
            .chain(&self.components)
            .map(|item| count_critical(&item.issues))
            .sum::<usize>();
        let design = self
            .design_system
            .as_ref()
            .map(|analysis| {
                count_critical(&analysis.accessibility.issues)
                    + count_critical(&analysis.usability.issues)
                    + count_critical(&analysis.consistency.issues)
            })
            .unwrap_or(0);
        items + design + count_critical(&self.mobile.issues)
    }

    /// Recommendations across items, mobile and the design-system plan.
    pub fn total_recommendations(&self) -> usize {
        let items = self
            .pages
            .iter()
            .chain(&self.components)
            .map(|item| item.recommendations.len())
            .sum::<usize>();
        let design = self
            .design_system
            .as_ref()
            .map(|analysis| analysis.recommendations.len())
            .unwrap_or(0);
        items + design + self.mobile.recommendations.len()
    }
}

/// Narrative verdict for an overall score.
pub fn conclusion(score: u8) -> &'static str {
    match score {
        90.. => {
            "La experiencia de usuario del sitio es excelente. Mantener las buenas prácticas actuales y atender los detalles pendientes."
        }
        80..=89 => {
            "La experiencia de usuario del sitio es muy buena. Con las mejoras inmediatas propuestas puede alcanzar un nivel excelente."
        }
        70..=79 => {
            "La experiencia de usuario del sitio es buena, aunque existen áreas claras de mejora en accesibilidad y consistencia."
        }
        _ => {
            "La experiencia de usuario del sitio necesita mejoras significativas. Se recomienda priorizar el plan inmediato."
        }
    }
}

/// Render the full report as Markdown.
pub fn render_report_markdown(report: &UxReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Reporte de Análisis UI/UX\n");
    let _ = writeln!(
        output,
        "- Fecha: {}",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(output, "- Proyecto: `{}`\n", report.project_root);

    append_summary(&mut output, report);

    let _ = writeln!(output, "## Análisis por Página\n");
    if report.pages.is_empty() {
        let _ = writeln!(output, "No se analizaron páginas.\n");
    }
    for page in &report.pages {
        append_item(&mut output, page);
    }

    let _ = writeln!(output, "## Análisis de Componentes\n");
    if report.components.is_empty() {
        let _ = writeln!(output, "No se analizaron componentes.\n");
    }
    for component in &report.components {
        append_item(&mut output, component);
    }

    append_design_system(&mut output, report.design_system.as_ref());
    append_mobile(&mut output, &report.mobile);

    let _ = writeln!(output, "## Plan de Mejoras\n");
    let plan = &report.improvement_plan;
    append_list(&mut output, "### Inmediato", &plan.immediate, "Sin acciones inmediatas.");
    append_list(&mut output, "### Corto Plazo", &plan.short_term, "Sin acciones.");
    append_list(&mut output, "### Largo Plazo", &plan.long_term, "Sin acciones.");

    if !report.failures.is_empty() {
        let _ = writeln!(output, "## Elementos Omitidos\n");
        for failure in &report.failures {
            let _ = writeln!(output, "- {}: {}", failure.name, failure.message);
        }
        let _ = writeln!(output);
    }

    let _ = writeln!(output, "## Conclusión\n");
    let _ = writeln!(
        output,
        "Puntuación general: **{}/100**. {}\n",
        report.overall_score,
        conclusion(report.overall_score)
    );

    let _ = writeln!(output, "## Próximos Pasos\n");
    for step in NEXT_STEPS {
        let _ = writeln!(output, "- [ ] {step}");
    }
    output
}

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

fn append_summary(output: &mut String, report: &UxReport) {
    let _ = writeln!(output, "## Resumen Ejecutivo\n");
    let _ = writeln!(output, "| Métrica | Valor |");
    let _ = writeln!(output, "|---------|-------|");
    let _ = writeln!(output, "| Puntuación general | {}/100 |", report.overall_score);
    let _ = writeln!(
        output,
        "| Promedio de páginas | {:.1}/100 |",
        report.average_page_score()
    );
    let design = report
        .design_system
        .as_ref()
        .map(|analysis| format!("{}/100", analysis.score))
        .unwrap_or_else(|| "No disponible".to_string());
    let _ = writeln!(output, "| Sistema de diseño | {design} |");
    let _ = writeln!(output, "| Experiencia móvil | {}/100 |", report.mobile.score);
    let _ = writeln!(output, "| Páginas analizadas | {} |", report.pages.len());
    let _ = writeln!(
        output,
        "| Componentes analizados | {} |",
        report.components.len()
    );
    let _ = writeln!(
        output,
        "| Problemas críticos | {} |",
        report.critical_issue_count()
    );
    let _ = writeln!(
        output,
        "| Recomendaciones | {} |\n",
        report.total_recommendations()
    );
}

fn append_item(output: &mut String, item: &ItemAnalysis) {
    let _ = writeln!(output, "### {}\n", item.name);
    let _ = writeln!(output, "- Ruta: `{}`", item.path);
    let _ = writeln!(output, "- Tipo: {}", item.category);
    if let Some(score) = item.score {
        let _ = writeln!(output, "- Puntuación: {score}/100");
    }
    match &item.source {
        Some(stats) => {
            let _ = writeln!(
                output,
                "- Código fuente: {} líneas de código, {} de comentarios ({})",
                stats.code, stats.comments, stats.language
            );
        }
        None => {
            let _ = writeln!(output, "- Código fuente: no disponible");
        }
    }
    let _ = writeln!(output);
    append_issues(output, "#### Problemas", &item.issues);
    append_list(
        output,
        "#### Recomendaciones",
        &item.recommendations,
        "Sin recomendaciones específicas.",
    );
}

fn append_design_system(output: &mut String, analysis: Option<&UiAnalysisResult>) {
    let _ = writeln!(output, "## Sistema de Diseño\n");
    let Some(analysis) = analysis else {
        let _ = writeln!(
            output,
            "No se pudo completar el análisis del sistema de diseño.\n"
        );
        return;
    };
    let _ = writeln!(output, "- Puntuación: {}/100", analysis.score);
    let _ = writeln!(
        output,
        "- Accesibilidad: {}/100",
        analysis.accessibility.score
    );
    let _ = writeln!(output, "- Usabilidad: {}/100", analysis.usability.score);
    let _ = writeln!(
        output,
        "- Consistencia: {}/100\n",
        analysis.consistency.score
    );
    append_token_dump(output, &analysis.design_tokens);

    let issues: Vec<UiIssue> = analysis
        .accessibility
        .issues
        .iter()
        .chain(&analysis.usability.issues)
        .chain(&analysis.consistency.issues)
        .cloned()
        .collect();
    append_issues(output, "### Hallazgos", &issues);
}

fn append_token_dump(output: &mut String, tokens: &DesignTokens) {
    let _ = writeln!(output, "### Tokens de Diseño\n");
    let colors = &tokens.colors;
    let _ = writeln!(output, "- Colores primarios: {}", colors.primary.join(", "));
    let _ = writeln!(
        output,
        "- Colores secundarios: {}",
        colors.secondary.join(", ")
    );
    let _ = writeln!(output, "- Neutros: {}", colors.neutral.join(", "));
    let _ = writeln!(
        output,
        "- Semánticos: éxito {}, error {}, advertencia {}, información {}",
        colors.semantic.success,
        colors.semantic.error,
        colors.semantic.warning,
        colors.semantic.info
    );
    let typography = &tokens.typography;
    let _ = writeln!(
        output,
        "- Tipografías: {}",
        typography.font_families.join(" | ")
    );
    let _ = writeln!(
        output,
        "- Tamaños de fuente: {}",
        typography.font_sizes.join(", ")
    );
    let _ = writeln!(
        output,
        "- Interlineado: {}",
        typography.line_heights.join(", ")
    );
    let _ = writeln!(output, "- Espaciado: {}", tokens.spacing.join(", "));
    let _ = writeln!(output, "- Bordes: {}", tokens.border_radius.join(", "));
    let _ = writeln!(output, "- Sombras: {}\n", tokens.shadows.join(" ; "));
}

fn append_mobile(output: &mut String, mobile: &MobileAnalysis) {
    let _ = writeln!(output, "## Experiencia Móvil\n");
    let _ = writeln!(
        output,
        "- Puntuación: {}/100 (valor de referencia, no medido)\n",
        mobile.score
    );
    append_issues(output, "### Problemas", &mobile.issues);
    append_list(output, "### Recomendaciones", &mobile.recommendations, "Sin recomendaciones.");
}

fn append_issues(output: &mut String, title: &str, issues: &[UiIssue]) {
    let _ = writeln!(output, "{title}");
    if issues.is_empty() {
        let _ = writeln!(output, "Sin problemas detectados.\n");
        return;
    }
    for issue in issues {
        let _ = writeln!(
            output,
            "- **[{}]** {} ({})",
            issue.severity.label(),
            issue.description,
            issue.kind.as_str()
        );
        if let Some(solution) = &issue.solution {
            let _ = writeln!(output, "  - Solución: {solution}");
        }
    }
    let _ = writeln!(output);
}

fn append_list(output: &mut String, title: &str, items: &[String], empty_message: &str) {
    let _ = writeln!(output, "{title}");
    if items.is_empty() {
        let _ = writeln!(output, "{empty_message}\n");
        return;
    }
    for item in items {
        let _ = writeln!(output, "- {item}");
    }
    let _ = writeln!(output);
}
