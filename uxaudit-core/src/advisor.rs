//! Category-keyed improvement suggestions.

use crate::domain::{ComponentCategory, UiComponent};

/// Suggestions per category, in the order they are reported.
pub const IMPROVEMENT_TABLE: &[(ComponentCategory, &[&str])] = &[
    (
        ComponentCategory::Form,
        &[
            "Implementar validación en tiempo real",
            "Agregar etiquetas descriptivas a todos los campos",
            "Mostrar mensajes de error claros y específicos",
        ],
    ),
    (
        ComponentCategory::Button,
        &[
            "Agregar estados hover, active y disabled",
            "Usar etiquetas descriptivas en lugar de textos genéricos",
            "Implementar estados de carga para acciones asíncronas",
        ],
    ),
    (
        ComponentCategory::Navigation,
        &[
            "Implementar breadcrumbs para navegación profunda",
            "Asegurar que la navegación sea accesible por teclado",
            "Indicar claramente la sección activa",
        ],
    ),
];

/// Static suggestions for a component's category; empty when the category has none.
pub fn suggest_improvements(component: &UiComponent) -> Vec<String> {
    suggestions_for(component.category)
        .iter()
        .map(|suggestion| suggestion.to_string())
        .collect()
}

/// Table entry for a category.
pub fn suggestions_for(category: ComponentCategory) -> &'static [&'static str] {
    IMPROVEMENT_TABLE
        .iter()
        .find(|(entry, _)| *entry == category)
        .map(|(_, suggestions)| *suggestions)
        .unwrap_or(&[])
}
