//! Component classification by name.

use crate::domain::{ComponentCategory, UiComponent};

/// Substring rules checked in order; the first match wins.
pub const CLASSIFICATION_RULES: &[(&[&str], ComponentCategory)] = &[
    (&["button"], ComponentCategory::Button),
    (&["form"], ComponentCategory::Form),
    (&["card"], ComponentCategory::Card),
    (&["modal"], ComponentCategory::Modal),
    (&["nav", "menu"], ComponentCategory::Navigation),
    (&["layout", "container"], ComponentCategory::Layout),
    (&["input", "field"], ComponentCategory::Input),
];

const SCRIPT_EXTENSIONS: &[&str] = &[".tsx", ".ts", ".jsx", ".js"];

/// Map a component name to its category. Unmatched names are `Other`.
pub fn classify(name: &str) -> ComponentCategory {
    let name = name.to_lowercase();
    CLASSIFICATION_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| name.contains(needle)))
        .map(|(_, category)| *category)
        .unwrap_or(ComponentCategory::Other)
}

/// Build a fresh component value from a manifest path.
pub fn analyze_component(path: &str) -> UiComponent {
    let name = component_name(path);
    UiComponent {
        category: classify(&name),
        name,
        path: path.to_string(),
        issues: Vec::new(),
        recommendations: Vec::new(),
    }
}

/// Last path segment with a script extension stripped.
pub fn component_name(path: &str) -> String {
    let segment = path
        .trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    SCRIPT_EXTENSIONS
        .iter()
        .find_map(|ext| segment.strip_suffix(ext))
        .unwrap_or(segment)
        .to_string()
}
