//! Three-tier action planning.

use crate::domain::{Recommendations, SubAnalysis};

/// Accessibility scores below this trigger immediate actions.
pub const IMMEDIATE_ACTION_THRESHOLD: u8 = 90;

/// Actions added when accessibility is below the threshold.
pub const IMMEDIATE_ACTIONS: &[&str] = &[
    "Mejorar el contraste de colores en componentes críticos",
    "Agregar texto alternativo a todas las imágenes",
];

/// Actions always planned for the short term.
pub const SHORT_TERM_ACTIONS: &[&str] = &[
    "Implementar un sistema de diseño consistente",
    "Documentar los componentes de UI",
];

/// Actions always planned for the long term.
pub const LONG_TERM_ACTIONS: &[&str] = &[
    "Crear una librería de componentes reutilizables",
    "Implementar pruebas automatizadas de accesibilidad",
];

/// Turn the three sub-analyses into an action plan.
///
/// Usability and consistency do not influence the plan yet; they are part of
/// the signature so callers do not change when they start to.
pub fn plan(
    accessibility: &SubAnalysis,
    _usability: &SubAnalysis,
    _consistency: &SubAnalysis,
) -> Recommendations {
    let mut recommendations = Recommendations::default();
    if accessibility.score < IMMEDIATE_ACTION_THRESHOLD {
        recommendations.immediate.extend(owned(IMMEDIATE_ACTIONS));
    }
    recommendations.short_term.extend(owned(SHORT_TERM_ACTIONS));
    recommendations.long_term.extend(owned(LONG_TERM_ACTIONS));
    recommendations
}

fn owned(actions: &[&str]) -> impl Iterator<Item = String> {
    actions.iter().map(|action| action.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(score: u8) -> SubAnalysis {
        SubAnalysis {
            score,
            issues: Vec::new(),
        }
    }

    #[test]
    fn low_accessibility_adds_immediate_actions() {
        let plan = plan(&sub(85), &sub(90), &sub(88));
        assert_eq!(plan.immediate.len(), 2);
        assert!(plan.immediate[0].contains("contraste"));
        assert!(plan.immediate[1].contains("texto alternativo"));
        assert_eq!(plan.short_term.len(), 2);
        assert_eq!(plan.long_term.len(), 2);
    }

    #[test]
    fn scores_at_threshold_skip_immediate_actions() {
        assert!(plan(&sub(90), &sub(0), &sub(0)).immediate.is_empty());
        assert_eq!(plan(&sub(89), &sub(100), &sub(100)).immediate.len(), 2);
    }

    #[test]
    fn short_and_long_term_are_never_empty() {
        for score in [0, 50, 89, 90, 100] {
            let plan = plan(&sub(score), &sub(score), &sub(score));
            assert!(!plan.short_term.is_empty());
            assert!(!plan.long_term.is_empty());
            assert_eq!(plan.immediate.is_empty(), score >= 90);
        }
    }
}
