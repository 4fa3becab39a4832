use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{errors::ParseError, types::Scalar};

/// Marks a string argument as a reference to another component
pub const REFERENCE_MARKER: char = '@';

/// A constructor argument of a component
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Literal(Scalar),
    /// Name of another component in the graph
    Reference(String),
}

impl Argument {
    /// Classifies a scalar: strings starting with `@` are references.
    ///
    /// Surrounding markers are trimmed, so `@mailer` and `@mailer@` both point at `mailer`.
    pub fn classify(value: Scalar) -> Argument {
        match value {
            Scalar::String(s) if s.starts_with(REFERENCE_MARKER) => {
                Argument::Reference(s.trim_matches(REFERENCE_MARKER).to_string())
            }
            other => Argument::Literal(other),
        }
    }

    pub fn reference(&self) -> Option<&str> {
        match self {
            Argument::Reference(target) => Some(target),
            Argument::Literal(_) => None,
        }
    }
}

/// Declarative description of one component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSpec {
    pub name: String,
    pub type_id: String,
    pub arguments: Vec<Argument>,
}

impl ComponentSpec {
    pub fn new(name: impl Into<String>, type_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_id: type_id.into(),
            arguments: Vec::new(),
        }
    }

    pub fn arg(mut self, value: impl Into<Scalar>) -> Self {
        self.arguments.push(Argument::classify(value.into()));
        self
    }

    /// Names of referenced components, in argument order
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.arguments.iter().filter_map(Argument::reference)
    }
}

/// All components of an application keyed by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentGraph {
    components: BTreeMap<String, ComponentSpec>,
}

#[derive(Deserialize)]
struct RawComponent {
    class: String,
    #[serde(default)]
    inject: Vec<serde_json::Value>,
}

impl ComponentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the dependency description
    ///
    /// ```json
    /// { "app": { "class": "App", "inject": ["@router", "%environment%", 3] } }
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ParseError> {
        let raw: BTreeMap<String, RawComponent> = serde_json::from_str(text)?;

        let mut graph = Self::new();
        for (name, component) in raw {
            let mut spec = ComponentSpec::new(name, component.class);
            for (index, value) in component.inject.iter().enumerate() {
                let scalar =
                    Scalar::from_json(value).ok_or_else(|| ParseError::NonScalarArgument {
                        component: spec.name.clone(),
                        index,
                    })?;
                spec.arguments.push(Argument::classify(scalar));
            }
            graph.insert(spec);
        }

        tracing::debug!("Parsed dependency description with {} components", graph.len());
        Ok(graph)
    }

    /// Adds a component, replacing one with the same name
    pub fn insert(&mut self, spec: ComponentSpec) -> Option<ComponentSpec> {
        self.components.insert(spec.name.clone(), spec)
    }

    pub fn with(mut self, spec: ComponentSpec) -> Self {
        self.insert(spec);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ComponentSpec> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> impl Iterator<Item = &ComponentSpec> {
        self.components.values()
    }
}

impl FromIterator<ComponentSpec> for ComponentGraph {
    fn from_iter<I: IntoIterator<Item = ComponentSpec>>(iter: I) -> Self {
        let mut graph = Self::new();
        for spec in iter {
            graph.insert(spec);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_references_and_literals() {
        assert_eq!(
            Argument::classify("@mailer".into()),
            Argument::Reference("mailer".into())
        );
        assert_eq!(
            Argument::classify("@HomeController@".into()),
            Argument::Reference("HomeController".into())
        );
        assert_eq!(
            Argument::classify("mail@example.com".into()),
            Argument::Literal("mail@example.com".into())
        );
        assert_eq!(Argument::classify(7.into()), Argument::Literal(Scalar::Int(7)));
    }

    #[test]
    fn parses_description() {
        let graph = ComponentGraph::from_json(
            r#"{
                "app": { "class": "App", "inject": ["@router", 3, true, 1.5] },
                "router": { "class": "Router" }
            }"#,
        )
        .unwrap();

        let app = graph.get("app").unwrap();
        assert_eq!(app.type_id, "App");
        assert_eq!(
            app.arguments,
            vec![
                Argument::Reference("router".into()),
                Argument::Literal(Scalar::Int(3)),
                Argument::Literal(Scalar::Bool(true)),
                Argument::Literal(Scalar::Float(1.5)),
            ]
        );
        assert!(graph.get("router").unwrap().arguments.is_empty());
    }

    #[test]
    fn rejects_nested_arguments() {
        let err = ComponentGraph::from_json(r#"{ "app": { "class": "App", "inject": [[1]] } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::NonScalarArgument { ref component, index: 0 } if component == "app"
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ComponentGraph::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }
}
