use crate::naming::interface_name;
use crate::types::{InterfaceBlock, LiteralType, PropertyType, Type};
use dtogen_schema::{CastDescriptor, CastKind, ClassResolver, EnumValue, RuleSpec, ShapeMaps};
use tracing::debug;

/// Resolves property types and optionality for one DTO at a time.
///
/// Resolution never fails: missing information degrades to an open type.
pub struct InferenceEngine<'r> {
    resolver: &'r dyn ClassResolver,
}

impl<'r> InferenceEngine<'r> {
    pub fn new(resolver: &'r dyn ClassResolver) -> Self {
        Self { resolver }
    }

    /// Main entry point: resolve every property of `class` from its shape
    pub fn infer_interface(&self, class: &str, shape: &ShapeMaps) -> InterfaceBlock {
        let properties = shape
            .property_names()
            .into_iter()
            .map(|name| {
                let property = PropertyType {
                    type_: self.resolve_type(class, &name, shape),
                    optional: is_optional(&name, shape),
                };
                (name, property)
            })
            .collect();

        InterfaceBlock {
            name: interface_name(class),
            properties,
        }
    }

    /// Type of one property; the first available signal wins
    pub fn resolve_type(&self, class: &str, property: &str, shape: &ShapeMaps) -> Type {
        if let Some(cast) = shape.casts.get(property) {
            return self.cast_type(cast);
        }

        if let Some(rules) = shape.rules.get(property) {
            return rule_type(rules);
        }

        self.declared_type(class, property)
    }

    fn cast_type(&self, cast: &CastDescriptor) -> Type {
        match cast {
            CastDescriptor::Primitive(kind) => primitive_type(*kind),
            // Forward reference; the target block may come later or not at all
            CastDescriptor::Dto { class } => Type::Reference(interface_name(class)),
            CastDescriptor::Enum { enum_type } => self.enum_type(enum_type),
            CastDescriptor::Custom(name) => {
                debug!(cast = %name, "Unknown cast, using any");
                Type::Any
            }
        }
    }

    /// Union of the enum's case literals, or `string` if the enum cannot be
    /// introspected or has no cases
    fn enum_type(&self, enum_type: &str) -> Type {
        let cases = match self.resolver.enum_cases(enum_type) {
            Ok(cases) => cases,
            Err(e) => {
                debug!(enum_type, error = %e, "Enum lookup failed, using string");
                return Type::String;
            }
        };

        if cases.is_empty() {
            return Type::String;
        }

        Type::union(cases.into_iter().map(|case| match case.value {
            Some(EnumValue::String(value)) => Type::Literal(LiteralType::String(value)),
            Some(EnumValue::Integer(value)) => Type::Literal(LiteralType::Number(value)),
            None => Type::Literal(LiteralType::String(case.name)),
        }))
    }

    /// Type from the property's cast annotation, `any` if there is none
    fn declared_type(&self, class: &str, property: &str) -> Type {
        self.resolver
            .declared_property(class, property)
            .and_then(|decl| decl.cast.as_deref())
            .and_then(CastKind::from_name)
            .map(primitive_type)
            .unwrap_or(Type::Any)
    }
}

/// Fixed cast-kind lookup table
pub fn primitive_type(kind: CastKind) -> Type {
    match kind {
        CastKind::String => Type::String,
        CastKind::Integer | CastKind::Long | CastKind::Float | CastKind::Double => Type::Number,
        CastKind::Boolean => Type::Boolean,
        CastKind::Array | CastKind::Collection => Type::any_array(),
        CastKind::Object | CastKind::Model => Type::Object,
        // Enum cast without a known enum type
        CastKind::Enum => Type::String,
        // ISO date string
        CastKind::Carbon | CastKind::CarbonImmutable => Type::String,
    }
}

/// Coarse type hint from validation rules; any rule set defaults to `string`
pub fn rule_type(rules: &RuleSpec) -> Type {
    let joined = rules.joined();

    if joined.contains("integer") || joined.contains("numeric") {
        Type::Number
    } else if joined.contains("boolean") {
        Type::Boolean
    } else if joined.contains("array") {
        Type::any_array()
    } else {
        // "date" and everything else
        Type::String
    }
}

/// A default makes a property optional; otherwise rules decide, and no
/// signal at all is permissive
pub fn is_optional(property: &str, shape: &ShapeMaps) -> bool {
    if shape.defaults.contains_key(property) {
        return true;
    }

    match shape.rules.get(property) {
        Some(rules) => !rules.mentions("required"),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtogen_schema::{
        CastMap, ClassEntry, ClassInfo, DefaultMap, EnumCase, PropertyDecl, Registry, RuleMap,
    };
    use serde_json::json;

    const USER: &str = "App\\DTO\\UserDTO";

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register_class(ClassEntry::new(
                ClassInfo::new(USER)
                    .property(PropertyDecl::with_cast("nickname", "StringCast"))
                    .property(PropertyDecl::with_cast("score", "float"))
                    .property(PropertyDecl::with_cast("money", "App\\Casts\\MoneyCast"))
                    .property(PropertyDecl::new("bio")),
            ))
            .register_enum(
                "App\\Enum\\Status",
                vec![EnumCase::backed("Active", "A"), EnumCase::backed("Inactive", "B")],
            )
            .register_enum(
                "App\\Enum\\Color",
                vec![EnumCase::unit("Red"), EnumCase::unit("Green")],
            )
            .register_enum(
                "App\\Enum\\Level",
                vec![EnumCase::backed("Low", 1i64), EnumCase::backed("High", 10i64)],
            )
            .register_enum("App\\Enum\\Empty", Vec::new());
        registry
    }

    fn resolve(shape: &ShapeMaps, property: &str) -> Type {
        let registry = registry();
        InferenceEngine::new(&registry).resolve_type(USER, property, shape)
    }

    fn cast_shape(cast: CastDescriptor) -> ShapeMaps {
        ShapeMaps {
            casts: CastMap::new().with("field", cast),
            ..Default::default()
        }
    }

    fn lit(s: &str) -> Type {
        Type::Literal(LiteralType::String(s.to_string()))
    }

    #[test]
    fn test_primitive_table() {
        assert_eq!(primitive_type(CastKind::Long), Type::Number);
        assert_eq!(primitive_type(CastKind::Double), Type::Number);
        assert_eq!(primitive_type(CastKind::Collection), Type::any_array());
        assert_eq!(primitive_type(CastKind::Model), Type::Object);
        assert_eq!(primitive_type(CastKind::CarbonImmutable), Type::String);
        assert_eq!(primitive_type(CastKind::Enum), Type::String);
    }

    #[test]
    fn test_backed_enum_union() {
        let shape = cast_shape(CastDescriptor::enumeration("App\\Enum\\Status"));
        assert_eq!(resolve(&shape, "field"), Type::Union(vec![lit("A"), lit("B")]));
    }

    #[test]
    fn test_unit_enum_uses_case_names() {
        let shape = cast_shape(CastDescriptor::enumeration("App\\Enum\\Color"));
        assert_eq!(resolve(&shape, "field"), Type::Union(vec![lit("Red"), lit("Green")]));
    }

    #[test]
    fn test_integer_backed_enum() {
        let shape = cast_shape(CastDescriptor::enumeration("App\\Enum\\Level"));
        assert_eq!(
            resolve(&shape, "field"),
            Type::Union(vec![
                Type::Literal(LiteralType::Number(1)),
                Type::Literal(LiteralType::Number(10)),
            ])
        );
    }

    #[test]
    fn test_enum_failures_degrade_to_string() {
        for enum_type in ["App\\Enum\\Missing", "App\\Enum\\Empty", USER] {
            let shape = cast_shape(CastDescriptor::enumeration(enum_type));
            assert_eq!(resolve(&shape, "field"), Type::String, "{}", enum_type);
        }
    }

    #[test]
    fn test_nested_dto_reference() {
        let shape = cast_shape(CastDescriptor::dto("App\\DTO\\Address"));
        assert_eq!(
            resolve(&shape, "field"),
            Type::Reference("AddressInterface".to_string())
        );
    }

    #[test]
    fn test_custom_cast_is_any() {
        let shape = cast_shape(CastDescriptor::Custom("App\\Casts\\Money".to_string()));
        assert_eq!(resolve(&shape, "field"), Type::Any);
    }

    #[test]
    fn test_cast_beats_rules() {
        let shape = ShapeMaps {
            casts: CastMap::new().with("age", CastKind::String),
            rules: RuleMap::new().with("age", "required|integer"),
            ..Default::default()
        };
        assert_eq!(resolve(&shape, "age"), Type::String);
    }

    #[test]
    fn test_rule_type_priority() {
        assert_eq!(rule_type(&RuleSpec::parse("required|numeric|boolean")), Type::Number);
        assert_eq!(rule_type(&RuleSpec::parse("boolean|array")), Type::Boolean);
        assert_eq!(rule_type(&RuleSpec::parse("array|min:1")), Type::any_array());
        assert_eq!(rule_type(&RuleSpec::parse("date|after:today")), Type::String);
        assert_eq!(rule_type(&RuleSpec::parse("email")), Type::String);
        assert_eq!(rule_type(&RuleSpec::default()), Type::String);
    }

    #[test]
    fn test_declared_attribute_fallback() {
        let shape = ShapeMaps {
            defaults: DefaultMap::new()
                .with("nickname", json!(""))
                .with("score", json!(0))
                .with("money", json!(null))
                .with("bio", json!(null))
                .with("undeclared", json!(null)),
            ..Default::default()
        };

        assert_eq!(resolve(&shape, "nickname"), Type::String);
        assert_eq!(resolve(&shape, "score"), Type::Number);
        assert_eq!(resolve(&shape, "money"), Type::Any);
        assert_eq!(resolve(&shape, "bio"), Type::Any);
        assert_eq!(resolve(&shape, "undeclared"), Type::Any);
    }

    #[test]
    fn test_optionality() {
        let shape = ShapeMaps {
            casts: CastMap::new().with("cast_only", CastKind::String),
            rules: RuleMap::new()
                .with("name", "required|string")
                .with("title", "string|max:80")
                .with("role", "required")
                .with("conditional", "required_if:type,company"),
            defaults: DefaultMap::new().with("role", json!("member")),
        };

        assert!(!is_optional("name", &shape));
        assert!(is_optional("title", &shape));
        assert!(is_optional("role", &shape), "a default always wins");
        assert!(is_optional("cast_only", &shape));
        assert!(!is_optional("conditional", &shape));
        assert!(is_optional("unknown", &shape));
    }

    #[test]
    fn test_infer_interface_order_and_name() {
        let registry = registry();
        let shape = ShapeMaps {
            casts: CastMap::new()
                .with("age", CastKind::Integer)
                .with("status", CastDescriptor::enumeration("App\\Enum\\Status")),
            rules: RuleMap::new()
                .with("email", "required|email")
                .with("age", "required|integer"),
            defaults: DefaultMap::new().with("nickname", json!("anon")),
        };

        let block = InferenceEngine::new(&registry).infer_interface(USER, &shape);

        assert_eq!(block.name, "UserInterface");
        let names: Vec<&str> = block.properties.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["age", "status", "email", "nickname"]);
        assert_eq!(block.properties[0].1, PropertyType::required(Type::Number));
        assert_eq!(block.properties[2].1, PropertyType::required(Type::String));
        assert_eq!(block.properties[3].1, PropertyType::optional(Type::String));
    }

    #[test]
    fn test_empty_shape_yields_empty_block() {
        let registry = registry();
        let block = InferenceEngine::new(&registry).infer_interface(USER, &ShapeMaps::default());
        assert!(block.is_empty());
    }
}
