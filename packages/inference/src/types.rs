use std::collections::HashSet;

/// TypeScript type inferred for a DTO property
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Open type; the fallback when nothing is known
    Any,

    String,

    Number,

    Boolean,

    /// Open object (`object`)
    Object,

    /// Array of the inner type
    Array(Box<Type>),

    /// Named reference to another generated interface
    Reference(String),

    /// Exact literal type
    Literal(LiteralType),

    /// Union of multiple types
    Union(Vec<Type>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralType {
    String(String),
    Number(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyType {
    pub type_: Type,
    pub optional: bool,
}

impl PropertyType {
    pub fn required(type_: Type) -> Self {
        Self {
            type_,
            optional: false,
        }
    }

    pub fn optional(type_: Type) -> Self {
        Self {
            type_,
            optional: true,
        }
    }
}

/// One interface to render: derived name plus properties in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceBlock {
    pub name: String,
    pub properties: Vec<(String, PropertyType)>,
}

impl InterfaceBlock {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Type {
    /// `any[]`
    pub fn any_array() -> Type {
        Type::Array(Box::new(Type::Any))
    }

    /// Build a union from members, simplified
    pub fn union(types: impl IntoIterator<Item = Type>) -> Type {
        Type::Union(types.into_iter().collect()).simplify()
    }

    /// Simplify a type by removing duplicates and flattening unions.
    /// An empty union collapses to `Any`.
    pub fn simplify(self) -> Type {
        match self {
            Type::Union(types) => {
                let mut simplified = Vec::new();
                let mut seen = HashSet::new();

                for t in types {
                    let t = t.simplify();

                    // Flatten nested unions
                    if let Type::Union(inner_types) = t {
                        for inner in inner_types {
                            if seen.insert(inner.clone()) {
                                simplified.push(inner);
                            }
                        }
                    } else if seen.insert(t.clone()) {
                        simplified.push(t);
                    }
                }

                match simplified.len() {
                    0 => Type::Any,
                    1 => simplified.remove(0),
                    _ => Type::Union(simplified),
                }
            }
            other => other,
        }
    }
}
