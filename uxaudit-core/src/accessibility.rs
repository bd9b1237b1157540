//! Accessibility checks over component sources.
//!
//! Sources are parsed with OXC and the battery always runs in
//! [`ACCESSIBILITY_CHECKS`] order. A component whose source cannot be read or
//! parsed yields no findings.

use std::collections::BTreeSet;
use std::path::Path;

use crate::domain::{IssueType, Severity, UiComponent, UiIssue};
use crate::fs::FileSystem;
use crate::inspector::SourceInspector;
use crate::jsx::{JsxDocument, JsxElement};

/// A single accessibility check over a parsed component.
pub type AccessibilityCheck = fn(&JsxDocument) -> Vec<UiIssue>;

/// The fixed, ordered check battery.
pub const ACCESSIBILITY_CHECKS: &[(&str, AccessibilityCheck)] = &[
    ("color-contrast", check_color_contrast),
    ("alt-text", check_alt_text),
    ("aria-labels", check_aria_labels),
    ("keyboard-navigation", check_keyboard_navigation),
    ("semantic-html", check_semantic_html),
];

/// Utility classes whose text colour fails WCAG AA on a light surface.
pub const LOW_CONTRAST_TEXT_CLASSES: &[&str] = &[
    "text-gray-100",
    "text-gray-200",
    "text-gray-300",
    "text-slate-200",
    "text-slate-300",
    "text-zinc-300",
    "text-neutral-300",
    "text-stone-300",
    "text-yellow-200",
    "text-yellow-300",
    "text-amber-200",
    "text-lime-300",
];

const LANDMARK_ELEMENTS: &[&str] = &[
    "main", "nav", "header", "footer", "section", "article", "aside",
];
const KEYBOARD_SUPPORT_ATTRS: &[&str] = &["onKeyDown", "onKeyUp", "onKeyPress", "role", "tabIndex"];
const MIN_DIVS_FOR_SEMANTIC_CHECK: usize = 10;

/// Runs the check battery against components resolved through a [`SourceInspector`].
pub struct AccessibilityValidator<F: FileSystem> {
    inspector: SourceInspector<F>,
}

impl<F: FileSystem> AccessibilityValidator<F> {
    /// Create a validator reading sources through the given inspector.
    pub fn new(inspector: SourceInspector<F>) -> Self {
        Self { inspector }
    }

    /// Inspector used to load sources.
    pub fn inspector(&self) -> &SourceInspector<F> {
        &self.inspector
    }

    /// Validate a component. Never fails; unreadable sources produce no findings.
    pub fn validate_accessibility(&self, component: &UiComponent) -> Vec<UiIssue> {
        match self.inspector.load_lenient(&component.path) {
            Some(source) => validate_source(&source.text, Path::new(&component.path)),
            None => Vec::new(),
        }
    }
}

/// Parse source text and run every check. Unparsable sources yield nothing.
pub fn validate_source(source: &str, path: &Path) -> Vec<UiIssue> {
    match JsxDocument::parse(source, path) {
        Ok(document) => run_checks(&document),
        Err(err) => {
            log::warn!("skipping accessibility checks: {err}");
            Vec::new()
        }
    }
}

/// Run every check against a parsed document and concatenate the findings.
pub fn run_checks(document: &JsxDocument) -> Vec<UiIssue> {
    let mut issues = Vec::new();
    for (name, check) in ACCESSIBILITY_CHECKS {
        let found = check(document);
        log::debug!("{name}: {} finding(s)", found.len());
        issues.extend(found);
    }
    issues
}

/// Flags low-contrast text utility classes in `className` values.
pub fn check_color_contrast(document: &JsxDocument) -> Vec<UiIssue> {
    let mut seen = BTreeSet::new();
    let mut issues = Vec::new();
    for class_list in &document.class_lists {
        for token in class_list
            .text
            .split(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '/')))
        {
            let base = token.rsplit(':').next().unwrap_or(token);
            if !LOW_CONTRAST_TEXT_CLASSES.contains(&base) || !seen.insert(base.to_string()) {
                continue;
            }
            issues.push(
                accessibility_issue(
                    Severity::Medium,
                    format!(
                        "Contraste de color insuficiente: `{base}` (línea {})",
                        class_list.line
                    ),
                )
                .with_solution(
                    "Usar un tono más oscuro (600 o superior) para alcanzar una relación de contraste de 4.5:1",
                ),
            );
        }
    }
    issues
}

/// Flags images without alternative text.
pub fn check_alt_text(document: &JsxDocument) -> Vec<UiIssue> {
    document
        .elements
        .iter()
        .filter(|element| matches!(element.name.as_str(), "img" | "Image"))
        .filter(|element| !element.has_attr("alt"))
        .map(|element| {
            accessibility_issue(
                Severity::High,
                format!("Imagen sin texto alternativo (línea {})", element.line),
            )
            .with_solution("Agregar un atributo `alt` descriptivo, o `alt=\"\"` si es decorativa")
        })
        .collect()
}

/// Flags unlabelled form controls and icon-only buttons.
pub fn check_aria_labels(document: &JsxDocument) -> Vec<UiIssue> {
    let mut issues = Vec::new();
    for element in &document.elements {
        let line = element.line;
        if is_form_control(element)
            && !element.has_any_attr(&["aria-label", "aria-labelledby", "id"])
        {
            issues.push(
                accessibility_issue(
                    Severity::Medium,
                    format!(
                        "Control de formulario `{}` sin etiqueta accesible (línea {line})",
                        element.name
                    ),
                )
                .with_solution("Asociar un `<label htmlFor>` o agregar `aria-label`"),
            );
        } else if element.name == "button"
            && element.icon_only
            && !element.has_any_attr(&["aria-label", "aria-labelledby", "title"])
        {
            issues.push(
                accessibility_issue(
                    Severity::Medium,
                    format!("Botón con solo un ícono sin `aria-label` (línea {line})"),
                )
                .with_solution("Agregar `aria-label` que describa la acción del botón"),
            );
        }
    }
    issues
}

/// Flags click handlers on non-interactive elements without keyboard support.
pub fn check_keyboard_navigation(document: &JsxDocument) -> Vec<UiIssue> {
    document
        .elements
        .iter()
        .filter(|element| matches!(element.name.as_str(), "div" | "span"))
        .filter(|element| element.has_attr("onClick"))
        .filter(|element| !element.has_any_attr(KEYBOARD_SUPPORT_ATTRS))
        .map(|element| {
            accessibility_issue(
                Severity::High,
                format!(
                    "Elemento `<{}>` con `onClick` no es accesible por teclado (línea {})",
                    element.name, element.line
                ),
            )
            .with_solution("Usar un `<button>` o agregar `role`, `tabIndex={0}` y `onKeyDown`")
        })
        .collect()
}

/// Flags div-heavy markup without any landmark element.
pub fn check_semantic_html(document: &JsxDocument) -> Vec<UiIssue> {
    let divs = document.named("div").count();
    let has_landmark = document
        .elements
        .iter()
        .any(|element| LANDMARK_ELEMENTS.contains(&element.name.as_str()));
    if divs < MIN_DIVS_FOR_SEMANTIC_CHECK || has_landmark {
        return Vec::new();
    }
    vec![
        accessibility_issue(
            Severity::Low,
            format!("Estructura basada en {divs} `<div>` sin elementos semánticos"),
        )
        .with_solution(
            "Usar `<main>`, `<nav>`, `<header>`, `<section>` o `<footer>` según corresponda",
        ),
    ]
}

fn accessibility_issue(severity: Severity, description: String) -> UiIssue {
    UiIssue::new(severity, IssueType::Accessibility, description)
}

fn is_form_control(element: &JsxElement) -> bool {
    matches!(element.name.as_str(), "input" | "select" | "textarea")
        && element.literal("type") != Some("hidden")
}
