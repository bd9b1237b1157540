//! Markdown style guide rendering.

use std::fmt::Write;

use crate::domain::{DesignTokens, SubAnalysis, UiAnalysisResult, UiIssue};

/// Render an analysis result as a Markdown style guide.
pub fn generate_style_guide(analysis: &UiAnalysisResult) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Guía de Estilo UI/UX\n");
    let _ = writeln!(output, "## Puntuación General: {}/100\n", analysis.score);
    append_tokens(&mut output, &analysis.design_tokens);
    append_sub_analysis(&mut output, "Accesibilidad", &analysis.accessibility);
    append_sub_analysis(&mut output, "Usabilidad", &analysis.usability);
    append_sub_analysis(&mut output, "Consistencia", &analysis.consistency);

    let _ = writeln!(output, "## Recomendaciones\n");
    let plan = &analysis.recommendations;
    append_list(&mut output, "Inmediatas (Immediate)", &plan.immediate);
    append_list(&mut output, "Corto Plazo (Short Term)", &plan.short_term);
    append_list(&mut output, "Largo Plazo (Long Term)", &plan.long_term);
    output
}

fn append_tokens(output: &mut String, tokens: &DesignTokens) {
    let _ = writeln!(output, "## Tokens de Diseño\n");
    let _ = writeln!(output, "### Colores Primarios");
    for color in &tokens.colors.primary {
        let _ = writeln!(output, "- `{color}`");
    }
    let _ = writeln!(output, "\n### Tipografía");
    let _ = writeln!(
        output,
        "- Familias: {}",
        tokens.typography.font_families.join(" | ")
    );
    let _ = writeln!(output, "- Tamaños: {}", tokens.typography.font_sizes.join(", "));
    let _ = writeln!(output, "\n### Espaciado");
    let _ = writeln!(output, "- {}\n", tokens.spacing.join(", "));
}

fn append_sub_analysis(output: &mut String, title: &str, analysis: &SubAnalysis) {
    let _ = writeln!(output, "## {title} ({}/100)\n", analysis.score);
    append_issues(output, &analysis.issues);
}

fn append_issues(output: &mut String, issues: &[UiIssue]) {
    if issues.is_empty() {
        let _ = writeln!(output, "Sin problemas detectados.\n");
        return;
    }
    for issue in issues {
        let _ = writeln!(output, "- **[{}]** {}", issue.severity.label(), issue.description);
        if let Some(solution) = &issue.solution {
            let _ = writeln!(output, "  - Solución: {solution}");
        }
    }
    let _ = writeln!(output);
}

fn append_list(output: &mut String, title: &str, items: &[String]) {
    let _ = writeln!(output, "### {title}");
    if items.is_empty() {
        let _ = writeln!(output, "Ninguna.\n");
        return;
    }
    for item in items {
        let _ = writeln!(output, "- {item}");
    }
    let _ = writeln!(output);
}

#[cfg(test)]
mod tests {
    use super::generate_style_guide;
    use crate::design_system::DesignSystemAnalyzer;
    use crate::domain::{
        IssueType, Recommendations, Severity, SubAnalysis, UiAnalysisResult, UiIssue,
    };
    use crate::tokens::{StaticDesignTokens, default_design_tokens};
    use std::path::Path;

    #[test]
    fn includes_required_sections_and_score() {
        let analysis =
            DesignSystemAnalyzer::new(StaticDesignTokens).analyze_design_system(Path::new("."));
        let guide = generate_style_guide(&analysis);

        for header in [
            "Guía de Estilo UI/UX",
            "Puntuación General",
            "Tokens de Diseño",
            "Accesibilidad",
            "Usabilidad",
            "Consistencia",
            "Recomendaciones",
            "Immediate",
            "Short Term",
            "Long Term",
        ] {
            assert!(guide.contains(header), "missing {header}");
        }
        assert!(guide.contains("88"));
        assert!(guide.contains("#F97316"));
        assert!(guide.contains("mejores atributos ARIA"));
        assert!(guide.contains("Crear una librería de componentes reutilizables"));
    }

    #[test]
    fn renders_arbitrary_analyses() {
        let analysis = UiAnalysisResult {
            score: 42,
            components: Vec::new(),
            design_tokens: default_design_tokens(),
            accessibility: SubAnalysis {
                score: 40,
                issues: Vec::new(),
            },
            usability: SubAnalysis {
                score: 45,
                issues: vec![UiIssue::new(
                    Severity::High,
                    IssueType::Usability,
                    "Flujo de adopción demasiado largo",
                )],
            },
            consistency: SubAnalysis {
                score: 41,
                issues: Vec::new(),
            },
            recommendations: Recommendations {
                immediate: vec!["Reducir pasos del formulario".to_string()],
                short_term: Vec::new(),
                long_term: Vec::new(),
            },
        };

        let guide = generate_style_guide(&analysis);
        assert!(guide.contains("Puntuación General: 42/100"));
        assert!(guide.contains("**[Alta]** Flujo de adopción demasiado largo"));
        assert!(guide.contains("- Reducir pasos del formulario"));
        assert!(guide.contains("Ninguna."));
    }
}
