use crate::enums::EnumCase;
use crate::error::{EnumLookupError, InstantiateError};
use crate::shape::DtoShape;
use std::collections::HashSet;
use std::fmt;

/// Base type every exported DTO must (transitively) extend
pub const DEFAULT_BASE_CLASS: &str = "FriendsOfHyperf\\ValidatedDTO\\SimpleDTO";

/// Strip the leading namespace separator of a fully qualified class name
pub fn normalize_class_name(name: &str) -> &str {
    name.trim().trim_start_matches('\\')
}

/// A property declared on the class itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    pub name: String,
    /// Cast named by the property's cast annotation, if any
    pub cast: Option<String>,
}

impl PropertyDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cast: None,
        }
    }

    pub fn with_cast(name: impl Into<String>, cast: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cast: Some(cast.into()),
        }
    }
}

/// Static facts about a class known to the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    pub name: String,
    pub parent: Option<String>,
    pub is_abstract: bool,
    pub properties: Vec<PropertyDecl>,
}

impl ClassInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: normalize_class_name(&name.into()).to_string(),
            parent: None,
            is_abstract: false,
            properties: Vec::new(),
        }
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(normalize_class_name(&parent.into()).to_string());
        self
    }

    pub fn abstract_class(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn property(mut self, property: PropertyDecl) -> Self {
        self.properties.push(property);
        self
    }

    /// Unqualified class name
    pub fn short_name(&self) -> &str {
        self.name.rsplit('\\').next().unwrap_or(&self.name)
    }
}

/// Instantiation strategy used to obtain an instance for introspection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construction {
    /// Run the normal constructor with an empty input
    EmptyInput,
    /// Bypass user-defined initialization entirely
    WithoutConstructor,
}

impl fmt::Display for Construction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construction::EmptyInput => f.write_str("with empty input"),
            Construction::WithoutConstructor => f.write_str("without its constructor"),
        }
    }
}

/// Host environment lookups the exporter depends on
pub trait ClassResolver {
    /// Facts about a class, `None` if the class cannot be resolved
    fn class_info(&self, name: &str) -> Option<&ClassInfo>;

    /// Produce an instance exposing the class's shape
    fn instantiate(
        &self,
        name: &str,
        construction: Construction,
    ) -> Result<Box<dyn DtoShape>, InstantiateError>;

    /// Cases of an enum type, in declaration order
    fn enum_cases(&self, name: &str) -> Result<Vec<EnumCase>, EnumLookupError>;

    /// Every class the resolver knows, sorted by name
    fn class_names(&self) -> Vec<String>;

    fn class_exists(&self, name: &str) -> bool {
        self.class_info(name).is_some()
    }

    /// True if `name` extends `base` through any number of parents.
    /// A class is not its own subclass; inheritance cycles end the walk.
    fn is_subclass_of(&self, name: &str, base: &str) -> bool {
        let base = normalize_class_name(base);
        let mut seen = HashSet::new();
        let mut current = self.class_info(name).and_then(|info| info.parent.clone());

        while let Some(parent) = current {
            if parent == base {
                return true;
            }
            if !seen.insert(parent.clone()) {
                return false;
            }
            current = self.class_info(&parent).and_then(|info| info.parent.clone());
        }

        false
    }

    /// A property declared directly on the class
    fn declared_property(&self, class: &str, property: &str) -> Option<&PropertyDecl> {
        self.class_info(class)?
            .properties
            .iter()
            .find(|p| p.name == property)
    }
}
