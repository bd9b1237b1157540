//! JSX element summaries built from the OXC AST.
//!
//! A component source is parsed once; the accessibility checks then run over
//! the owned [`JsxDocument`] instead of the arena-backed tree.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    JSXAttributeItem, JSXAttributeValue, JSXChild, JSXElement, JSXExpression, JSXOpeningElement,
};
use oxc_ast_visit::{Visit, walk};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType, Span};

use crate::error::{Result, UxAuditError};

const CLASS_ATTRIBUTES: &[&str] = &["className", "class"];

/// An attribute on a JSX opening element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxAttribute {
    /// Attribute name as written (`alt`, `aria-label`, `onClick`).
    pub name: String,
    /// Value when it is a plain string literal.
    pub literal: Option<String>,
}

/// A JSX element, described by its opening tag and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxElement {
    /// Element or component name as written (`img`, `Image`, `motion.div`).
    pub name: String,
    /// Named attributes in source order.
    pub attributes: Vec<JsxAttribute>,
    /// Whether a `{...props}` spread may supply further attributes.
    pub has_spread: bool,
    /// 1-based line of the opening `<`.
    pub line: usize,
    /// Children render only nested elements and no text or expressions.
    pub icon_only: bool,
}

impl JsxElement {
    /// Whether the attribute is present. A spread counts as present.
    pub fn has_attr(&self, name: &str) -> bool {
        self.has_spread || self.attributes.iter().any(|attr| attr.name == name)
    }

    /// Whether any of the attributes is present.
    pub fn has_any_attr(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.has_attr(name))
    }

    /// String literal value of an attribute.
    pub fn literal(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .and_then(|attr| attr.literal.as_deref())
    }
}

/// Text of a `className` or `class` attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassList {
    /// Literal value, or the raw expression source for `{...}` values.
    pub text: String,
    /// 1-based line of the attribute.
    pub line: usize,
}

/// Every JSX element of a source file, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsxDocument {
    /// Elements in pre-order.
    pub elements: Vec<JsxElement>,
    /// Class attribute values in source order.
    pub class_lists: Vec<ClassList>,
}

impl JsxDocument {
    /// Parse a component source. The path selects the TypeScript/JSX dialect.
    pub fn parse(source: &str, path: &Path) -> Result<Self> {
        let allocator = Allocator::default();
        let parsed = Parser::new(&allocator, source, source_type_for(path)).parse();
        if !parsed.errors.is_empty() {
            return Err(UxAuditError::Other(format!(
                "{} has {} syntax error(s)",
                path.display(),
                parsed.errors.len()
            )));
        }

        let mut collector = JsxCollector {
            source,
            document: JsxDocument::default(),
        };
        collector.visit_program(&parsed.program);
        Ok(collector.document)
    }

    /// Elements with the given name.
    pub fn named<'d>(&'d self, name: &'d str) -> impl Iterator<Item = &'d JsxElement> + 'd {
        self.elements.iter().filter(move |element| element.name == name)
    }
}

fn source_type_for(path: &Path) -> SourceType {
    let ext = path.extension().and_then(|ext| ext.to_str()).unwrap_or("tsx");
    SourceType::from_path(path)
        .unwrap_or_default()
        .with_typescript(true)
        .with_jsx(matches!(ext, "tsx" | "jsx" | "js"))
}

struct JsxCollector<'s> {
    source: &'s str,
    document: JsxDocument,
}

impl JsxCollector<'_> {
    fn text(&self, span: Span) -> &str {
        self.source
            .get(span.start as usize..span.end as usize)
            .unwrap_or_default()
    }

    fn line(&self, span: Span) -> usize {
        let offset = (span.start as usize).min(self.source.len());
        self.source.as_bytes()[..offset]
            .iter()
            .filter(|byte| **byte == b'\n')
            .count()
            + 1
    }

    fn record(&mut self, opening: &JSXOpeningElement<'_>, icon_only: bool) {
        let mut attributes = Vec::new();
        let mut has_spread = false;

        for item in opening.attributes.iter() {
            let JSXAttributeItem::Attribute(attribute) = item else {
                has_spread = true;
                continue;
            };
            let name = self.text(attribute.name.span()).to_string();
            let literal = match &attribute.value {
                Some(JSXAttributeValue::StringLiteral(literal)) => Some(literal.value.to_string()),
                _ => None,
            };
            if CLASS_ATTRIBUTES.contains(&name.as_str()) {
                let text = match (&literal, &attribute.value) {
                    (Some(literal), _) => Some(literal.clone()),
                    (None, Some(JSXAttributeValue::ExpressionContainer(container))) => {
                        Some(self.text(container.span).to_string())
                    }
                    _ => None,
                };
                if let Some(text) = text {
                    let line = self.line(attribute.span);
                    self.document.class_lists.push(ClassList { text, line });
                }
            }
            attributes.push(JsxAttribute { name, literal });
        }

        let element = JsxElement {
            name: self.text(opening.name.span()).to_string(),
            attributes,
            has_spread,
            line: self.line(opening.span),
            icon_only,
        };
        self.document.elements.push(element);
    }
}

impl<'a> Visit<'a> for JsxCollector<'_> {
    fn visit_jsx_element(&mut self, element: &JSXElement<'a>) {
        let icon_only = has_nested_element(&element.children) && !renders_text(&element.children);
        self.record(&element.opening_element, icon_only);
        walk::walk_jsx_element(self, element);
    }
}

fn has_nested_element(children: &[JSXChild<'_>]) -> bool {
    children
        .iter()
        .any(|child| matches!(child, JSXChild::Element(_) | JSXChild::Fragment(_)))
}

/// Whether any child could put text on screen. Expressions count as text.
fn renders_text(children: &[JSXChild<'_>]) -> bool {
    children.iter().any(|child| match child {
        JSXChild::Text(text) => text.value.chars().any(char::is_alphanumeric),
        JSXChild::Element(element) => renders_text(&element.children),
        JSXChild::Fragment(fragment) => renders_text(&fragment.children),
        JSXChild::ExpressionContainer(container) => {
            !matches!(container.expression, JSXExpression::EmptyExpression(_))
        }
        _ => true,
    })
}
