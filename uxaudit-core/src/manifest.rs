//! The list of pages and components a report run walks.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Result, UxAuditError};

/// One page or component to analyse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ManifestEntry {
    /// Display label used in the report.
    pub name: String,
    /// Source path, relative to the project root.
    pub path: String,
}

impl ManifestEntry {
    /// Create an entry.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Pages, critical components and mobile-relevant paths, processed in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Public pages; each receives a score.
    pub pages: Vec<ManifestEntry>,
    /// Critical UI components; evaluated qualitatively.
    pub components: Vec<ManifestEntry>,
    /// Paths validated for the mobile-experience section.
    #[serde(default)]
    pub mobile_paths: Vec<String>,
}

const PUBLIC_PAGES: &[(&str, &str)] = &[
    ("Página Principal", "src/app/page.tsx"),
    ("Adopción", "src/app/adopcion/page.tsx"),
    ("Perritos en Adopción", "src/app/perritos/page.tsx"),
    ("Perfil de Perrito", "src/app/perritos/[id]/page.tsx"),
    ("Comercios Pet Friendly", "src/app/comercios/page.tsx"),
    ("Contacto", "src/app/contacto/page.tsx"),
];

const CRITICAL_COMPONENTS: &[(&str, &str)] = &[
    ("Navegación Principal", "src/components/Navbar.tsx"),
    ("Formulario de Adopción", "src/components/AdoptionForm.tsx"),
    ("Tarjeta de Perrito", "src/components/PerritoCard.tsx"),
    ("Botón", "src/components/ui/button.tsx"),
    ("Modal de Código QR", "src/components/QRModal.tsx"),
    ("Layout de Administración", "src/components/AdminLayout.tsx"),
    ("Campo de Texto", "src/components/ui/input.tsx"),
];

const MOBILE_PATHS: &[&str] = &["src/components/Navbar.tsx", "src/app/layout.tsx"];

impl Default for Manifest {
    fn default() -> Self {
        Self {
            pages: entries(PUBLIC_PAGES),
            components: entries(CRITICAL_COMPONENTS),
            mobile_paths: MOBILE_PATHS.iter().map(|path| path.to_string()).collect(),
        }
    }
}

fn entries(table: &[(&str, &str)]) -> Vec<ManifestEntry> {
    table
        .iter()
        .map(|(name, path)| ManifestEntry::new(*name, *path))
        .collect()
}

impl Manifest {
    /// Parse and validate a JSON manifest.
    pub fn from_json(text: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(text)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reject entries with blank names or paths.
    pub fn validate(&self) -> Result<()> {
        let entries = self.pages.iter().chain(self.components.iter());
        for entry in entries {
            if entry.name.trim().is_empty() || entry.path.trim().is_empty() {
                return Err(UxAuditError::Other(format!(
                    "manifest entry has a blank name or path: {entry:?}"
                )));
            }
        }
        if self.mobile_paths.iter().any(|path| path.trim().is_empty()) {
            return Err(UxAuditError::Other(
                "manifest contains a blank mobile path".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use crate::UxAuditError;

    #[test]
    fn default_manifest_is_fixed_and_valid() {
        let manifest = Manifest::default();
        assert_eq!(manifest.pages.len(), 6);
        assert_eq!(manifest.components.len(), 7);
        assert_eq!(manifest.mobile_paths.len(), 2);
        assert_eq!(manifest.pages[0].path, "src/app/page.tsx");
        manifest.validate().expect("default manifest valid");
    }

    #[test]
    fn parses_json_without_mobile_paths() {
        let manifest = Manifest::from_json(
            r#"{"pages":[{"name":"Inicio","path":"app/page.tsx"}],"components":[]}"#,
        )
        .expect("parse manifest");
        assert_eq!(manifest.pages.len(), 1);
        assert!(manifest.mobile_paths.is_empty());
    }

    #[test]
    fn rejects_blank_entries_and_bad_json() {
        let blank =
            Manifest::from_json(r#"{"pages":[{"name":" ","path":"x.tsx"}],"components":[]}"#);
        assert!(matches!(blank, Err(UxAuditError::Other(_))));

        let broken = Manifest::from_json("{");
        assert!(matches!(broken, Err(UxAuditError::Json(_))));
    }
}
