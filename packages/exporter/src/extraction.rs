use crate::error::ExtractError;
use dtogen_schema::{ClassResolver, Construction, DtoShape, ShapeMaps, ShapeResult};
use tracing::debug;

/// Read casts, rules and defaults from an instance of `class`.
///
/// Construction with empty input is tried first, then construction that
/// skips initialization. Individual accessor failures yield empty maps.
pub fn extract_shape(resolver: &dyn ClassResolver, class: &str) -> Result<ShapeMaps, ExtractError> {
    let instance = match resolver.instantiate(class, Construction::EmptyInput) {
        Ok(instance) => instance,
        Err(first) => {
            debug!(class, error = %first, "Empty-input construction failed, bypassing constructor");
            resolver
                .instantiate(class, Construction::WithoutConstructor)
                .map_err(|second| ExtractError::Instantiate { first, second })?
        }
    };

    Ok(read_shape(class, instance.as_ref()))
}

fn read_shape(class: &str, instance: &dyn DtoShape) -> ShapeMaps {
    ShapeMaps {
        casts: or_empty(class, instance.casts()),
        rules: or_empty(class, instance.rules()),
        defaults: or_empty(class, instance.defaults()),
    }
}

fn or_empty<T: Default>(class: &str, result: ShapeResult<T>) -> T {
    result.unwrap_or_else(|e| {
        debug!(class, error = %e, "Accessor unavailable, using empty map");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtogen_schema::{
        CastKind, CastMap, ClassEntry, ClassInfo, InstantiateError, Registry, RuleMap,
        ShapeError, StaticShape,
    };

    struct FailingRules;

    impl DtoShape for FailingRules {
        fn casts(&self) -> ShapeResult<CastMap> {
            Ok(CastMap::new().with("id", CastKind::Integer))
        }

        fn rules(&self) -> ShapeResult<RuleMap> {
            Err(ShapeError::Failed {
                accessor: "rules",
                message: "container not booted".to_string(),
            })
        }
    }

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register_class(
                ClassEntry::new(ClassInfo::new("App\\DTO\\PartialDTO"))
                    .with_constructor(|_| Ok(Box::new(FailingRules))),
            )
            .register_class(
                ClassEntry::new(ClassInfo::new("App\\DTO\\StrictDTO"))
                    .with_constructor(|_| Err("name is required".to_string()))
                    .with_bare_constructor(|| {
                        Ok(Box::new(StaticShape {
                            rules: Some(RuleMap::new().with("name", "required")),
                            ..Default::default()
                        }))
                    }),
            )
            .register_class(
                ClassEntry::new(ClassInfo::new("App\\DTO\\BrokenDTO"))
                    .with_constructor(|_| Err("boom".to_string())),
            );
        registry
    }

    #[test]
    fn test_accessor_failure_yields_empty_map() {
        let shape = extract_shape(&registry(), "App\\DTO\\PartialDTO").unwrap();

        assert_eq!(shape.casts.len(), 1);
        assert!(shape.rules.is_empty());
        assert!(shape.defaults.is_empty());
    }

    #[test]
    fn test_falls_back_to_bypassing_constructor() {
        let shape = extract_shape(&registry(), "App\\DTO\\StrictDTO").unwrap();
        assert!(shape.rules.contains_key("name"));
    }

    #[test]
    fn test_both_strategies_failing() {
        let err = extract_shape(&registry(), "App\\DTO\\BrokenDTO").unwrap_err();

        match &err {
            ExtractError::Instantiate { first, second } => {
                assert_eq!(first, &InstantiateError::Failed("boom".to_string()));
                assert!(matches!(second, InstantiateError::Unsupported { .. }));
            }
        }
        assert!(err.to_string().starts_with("could not instantiate (boom; "));
    }
}
