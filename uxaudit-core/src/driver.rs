//! Per-item analysis steps and score aggregation used by report runs.

use crate::agent::UxAgent;
use crate::domain::{
    ItemAnalysis, MobileAnalysis, Recommendations, Severity, UiAnalysisResult, UiIssue,
};
use crate::error::Result;
use crate::manifest::ManifestEntry;

/// Points a page loses per issue.
pub const PAGE_ISSUE_PENALTY: usize = 5;

/// Mobile score placeholder; not derived from any measurement.
pub const MOBILE_SCORE: u8 = 85;

/// Weight of the average page score in the overall score.
pub const PAGE_WEIGHT: f64 = 0.4;
/// Weight of the design-system score in the overall score.
pub const DESIGN_SYSTEM_WEIGHT: f64 = 0.4;
/// Weight of the mobile score in the overall score.
pub const MOBILE_WEIGHT: f64 = 0.2;

/// Fixed mobile-experience recommendations.
pub const MOBILE_RECOMMENDATIONS: &[&str] = &[
    "Asegurar que los elementos táctiles midan al menos 44x44 píxeles",
    "Optimizar las imágenes de los perritos para conexiones móviles",
    "Usar un menú de navegación colapsable en pantallas pequeñas",
    "Verificar que los formularios usen tipos de input adecuados (email, tel)",
    "Evitar el desplazamiento horizontal en todas las páginas",
];

/// `max(0, 100 - 5 * issues)`.
pub fn page_score(issue_count: usize) -> u8 {
    100usize.saturating_sub(issue_count.saturating_mul(PAGE_ISSUE_PENALTY)) as u8
}

/// Analyse one page: classify, validate, suggest, and score.
pub fn analyze_page<A: UxAgent + ?Sized>(
    agent: &A,
    entry: &ManifestEntry,
) -> Result<ItemAnalysis> {
    let mut analysis = analyze_item(agent, entry)?;
    analysis.score = Some(page_score(analysis.issues.len()));
    Ok(analysis)
}

/// Analyse one critical component. Components carry no score.
pub fn analyze_critical_component<A: UxAgent + ?Sized>(
    agent: &A,
    entry: &ManifestEntry,
) -> Result<ItemAnalysis> {
    analyze_item(agent, entry)
}

fn analyze_item<A: UxAgent + ?Sized>(agent: &A, entry: &ManifestEntry) -> Result<ItemAnalysis> {
    let component = agent.analyze_component(&entry.path);
    let issues = agent.validate_accessibility(&component)?;
    let recommendations = agent.suggest_improvements(&component);
    Ok(ItemAnalysis {
        name: entry.name.clone(),
        path: entry.path.clone(),
        category: component.category,
        score: None,
        issues,
        recommendations,
        source: agent.source_stats(&entry.path),
    })
}

/// Mobile pseudo-analysis: validation over `paths`, fixed advice, fixed score.
///
/// A path whose validation fails contributes no issues.
pub fn analyze_mobile<A: UxAgent + ?Sized>(agent: &A, paths: &[String]) -> MobileAnalysis {
    let mut issues = Vec::new();
    for path in paths {
        let component = agent.analyze_component(path);
        match agent.validate_accessibility(&component) {
            Ok(mut found) => issues.append(&mut found),
            Err(err) => log::error!("mobile validation failed for {path}: {err}"),
        }
    }
    MobileAnalysis {
        score: MOBILE_SCORE,
        issues,
        recommendations: MOBILE_RECOMMENDATIONS
            .iter()
            .map(|recommendation| recommendation.to_string())
            .collect(),
    }
}

/// Mean page score, or `0.0` when no page was analysed.
pub fn average_page_score(pages: &[ItemAnalysis]) -> f64 {
    let scores: Vec<f64> = pages
        .iter()
        .filter_map(|page| page.score)
        .map(f64::from)
        .collect();
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// `round(pages * 0.4 + design_system * 0.4 + mobile * 0.2)`; a missing design system counts as 0.
pub fn overall_score(
    average_page_score: f64,
    design_system_score: Option<u8>,
    mobile_score: u8,
) -> u8 {
    let score = average_page_score * PAGE_WEIGHT
        + f64::from(design_system_score.unwrap_or(0)) * DESIGN_SYSTEM_WEIGHT
        + f64::from(mobile_score) * MOBILE_WEIGHT;
    score.round().clamp(0.0, 100.0) as u8
}

/// Report-level plan: design-system actions plus item-derived actions.
pub fn improvement_plan(
    pages: &[ItemAnalysis],
    components: &[ItemAnalysis],
    design_system: Option<&UiAnalysisResult>,
) -> Recommendations {
    let mut plan = design_system
        .map(|analysis| analysis.recommendations.clone())
        .unwrap_or_default();

    for item in pages.iter().chain(components) {
        let severe = item
            .issues
            .iter()
            .filter(|issue| issue.severity >= Severity::High)
            .count();
        if severe > 0 {
            plan.immediate.push(format!(
                "Corregir {severe} problema(s) de severidad alta o crítica en {}",
                item.name
            ));
        }
    }

    let pending: Vec<&str> = components
        .iter()
        .filter(|component| !component.recommendations.is_empty())
        .map(|component| component.name.as_str())
        .collect();
    if !pending.is_empty() {
        plan.short_term.push(format!(
            "Aplicar las mejoras sugeridas en: {}",
            pending.join(", ")
        ));
    }
    plan.long_term
        .push("Repetir este análisis en cada versión del sitio".to_string());
    plan
}

/// Issues of `Critical` severity in a list.
pub fn count_critical(issues: &[UiIssue]) -> usize {
    issues
        .iter()
        .filter(|issue| issue.severity == Severity::Critical)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ComponentCategory, IssueType, SourceStats, UiComponent};
    use crate::{Manifest, UxAuditError};
    use mockall::mock;
    use std::path::Path;

    mock! {
        Agent {}
        impl UxAgent for Agent {
            fn analyze_component(&self, path: &str) -> UiComponent;
            fn validate_accessibility(&self, component: &UiComponent) -> Result<Vec<UiIssue>>;
            fn suggest_improvements(&self, component: &UiComponent) -> Vec<String>;
            fn source_stats(&self, path: &str) -> Option<SourceStats>;
            fn analyze_design_system(&self, project_root: &Path) -> Result<UiAnalysisResult>;
        }
    }

    fn component(path: &str) -> UiComponent {
        crate::classifier::analyze_component(path)
    }

    fn issue(severity: Severity) -> UiIssue {
        UiIssue::new(severity, IssueType::Accessibility, "problema")
    }

    fn agent_with_issues(count: usize) -> MockAgent {
        let mut agent = MockAgent::new();
        agent.expect_analyze_component().returning(|path| component(path));
        agent
            .expect_validate_accessibility()
            .returning(move |_| Ok(vec![issue(Severity::Medium); count]));
        agent.expect_suggest_improvements().returning(|_| Vec::new());
        agent.expect_source_stats().returning(|_| None);
        agent
    }

    #[test]
    fn page_score_loses_five_points_per_issue() {
        assert_eq!(page_score(0), 100);
        assert_eq!(page_score(3), 85);
        assert_eq!(page_score(20), 0);
        assert_eq!(page_score(1000), 0);
    }

    #[test]
    fn analyze_page_scores_and_labels() {
        let agent = agent_with_issues(2);
        let entry = ManifestEntry::new("Contacto", "src/app/contacto/page.tsx");
        let page = analyze_page(&agent, &entry).expect("page");
        assert_eq!(page.name, "Contacto");
        assert_eq!(page.category, ComponentCategory::Other);
        assert_eq!(page.score, Some(90));
        assert_eq!(page.issues.len(), 2);

        let component = analyze_critical_component(&agent, &entry).expect("component");
        assert_eq!(component.score, None);
    }

    #[test]
    fn analyze_page_propagates_validation_failures() {
        let mut agent = MockAgent::new();
        agent.expect_analyze_component().returning(|path| component(path));
        agent
            .expect_validate_accessibility()
            .returning(|_| Err(UxAuditError::Other("boom".to_string())));
        let entry = ManifestEntry::new("Inicio", "src/app/page.tsx");
        assert!(analyze_page(&agent, &entry).is_err());
    }

    #[test]
    fn mobile_analysis_is_fixed_and_concatenates_issues() {
        let agent = agent_with_issues(1);
        let mobile = analyze_mobile(&agent, &Manifest::default().mobile_paths);
        assert_eq!(mobile.score, 85);
        assert_eq!(mobile.issues.len(), 2);
        assert_eq!(mobile.recommendations.len(), 5);
    }

    #[test]
    fn mobile_analysis_skips_paths_that_fail_validation() {
        let mut agent = MockAgent::new();
        agent.expect_analyze_component().returning(|path| component(path));
        agent.expect_validate_accessibility().returning(|component| {
            if component.path == "src/app/layout.tsx" {
                Err(UxAuditError::Other("layout unreadable".to_string()))
            } else {
                Ok(vec![issue(Severity::High), issue(Severity::Low)])
            }
        });

        let mobile = analyze_mobile(&agent, &Manifest::default().mobile_paths);
        assert_eq!(mobile.score, MOBILE_SCORE);
        assert_eq!(mobile.issues.len(), 2);
        assert_eq!(mobile.issues[0].severity, Severity::High);
        assert_eq!(mobile.recommendations.len(), MOBILE_RECOMMENDATIONS.len());
    }

    #[test]
    fn overall_score_combines_pages_design_system_and_mobile() {
        assert_eq!(overall_score(100.0, Some(85), MOBILE_SCORE), 91);
        assert_eq!(overall_score(100.0, None, MOBILE_SCORE), 57);
        assert_eq!(overall_score(0.0, None, 0), 0);
    }

    #[test]
    fn average_page_score_handles_empty_lists() {
        assert_eq!(average_page_score(&[]), 0.0);
    }

    #[test]
    fn improvement_plan_adds_item_actions() {
        let agent = agent_with_issues(0);
        let mut page = analyze_page(&agent, &ManifestEntry::new("Inicio", "src/app/page.tsx"))
            .expect("page");
        page.issues = vec![issue(Severity::High), issue(Severity::Low)];
        let mut form = analyze_critical_component(
            &agent,
            &ManifestEntry::new("Formulario", "src/components/AdoptionForm.tsx"),
        )
        .expect("component");
        form.recommendations = vec!["Implementar validación en tiempo real".to_string()];

        let plan = improvement_plan(&[page], &[form], None);
        assert_eq!(plan.immediate.len(), 1);
        assert!(plan.immediate[0].contains("Inicio"));
        assert!(plan.short_term[0].contains("Formulario"));
        assert_eq!(plan.long_term.len(), 1);
    }

    #[test]
    fn count_critical_only_counts_critical() {
        let issues = vec![
            issue(Severity::Critical),
            issue(Severity::High),
            issue(Severity::Critical),
        ];
        assert_eq!(count_critical(&issues), 2);
    }
}
