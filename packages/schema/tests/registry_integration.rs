use dtogen_common::RealFileSystem;
use dtogen_schema::{
    CastDescriptor, CastKind, CastMap, ClassResolver, Construction, DtoClass, DtoShape, EnumCase,
    EnumLookupError, EnumType, InputData, InstantiateError, Manifest, PropertyDecl, Registry,
    RuleMap, ShapeResult, DEFAULT_BASE_CLASS,
};

struct Currency;

impl EnumType for Currency {
    const NAME: &'static str = "App\\Enum\\Currency";

    fn cases() -> Vec<EnumCase> {
        vec![EnumCase::backed("Euro", "EUR"), EnumCase::backed("Dollar", "USD")]
    }
}

struct MoneyDto {
    strict: bool,
}

impl DtoShape for MoneyDto {
    fn casts(&self) -> ShapeResult<CastMap> {
        Ok(CastMap::new()
            .with("amount", CastKind::Float)
            .with("currency", CastDescriptor::enumeration(Currency::NAME)))
    }

    fn rules(&self) -> ShapeResult<RuleMap> {
        let rules = RuleMap::new().with("amount", "required|numeric");
        if self.strict {
            Ok(rules.with("currency", "required"))
        } else {
            Ok(rules)
        }
    }
}

impl DtoClass for MoneyDto {
    const NAME: &'static str = "\\App\\DTO\\MoneyDTO";
    const PARENT: Option<&'static str> = Some("App\\DTO\\BaseDTO");

    fn properties() -> Vec<PropertyDecl> {
        vec![PropertyDecl::with_cast("amount", "FloatCast")]
    }

    fn from_input(input: &InputData) -> Result<Self, String> {
        if input.is_empty() {
            return Err("amount is required".to_string());
        }
        Ok(MoneyDto { strict: true })
    }

    fn without_constructor() -> Option<Self> {
        Some(MoneyDto { strict: false })
    }
}

const MANIFEST: &str = r#"{
    "classes": {
        "App\\DTO\\BaseDTO": {
            "extends": "FriendsOfHyperf\\ValidatedDTO\\SimpleDTO",
            "abstract": true
        }
    }
}"#;

fn registry() -> Registry {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dtogen.manifest.json");
    std::fs::write(&path, MANIFEST).unwrap();

    let mut registry = Registry::from_manifest(Manifest::load(&RealFileSystem, &path).unwrap());
    registry.register::<MoneyDto>().register_enum_type::<Currency>();
    registry
}

#[test]
fn test_rust_and_manifest_classes_share_a_hierarchy() {
    let registry = registry();

    assert_eq!(
        registry.class_names(),
        vec!["App\\DTO\\BaseDTO".to_string(), "App\\DTO\\MoneyDTO".to_string()]
    );
    assert!(registry.is_subclass_of("App\\DTO\\MoneyDTO", DEFAULT_BASE_CLASS));
    assert!(registry.is_subclass_of("\\App\\DTO\\MoneyDTO", "\\App\\DTO\\BaseDTO"));
    assert!(!registry.is_subclass_of("App\\DTO\\MoneyDTO", "App\\DTO\\MoneyDTO"));
}

#[test]
fn test_rust_constructor_strategies() {
    let registry = registry();

    let err = registry
        .instantiate("App\\DTO\\MoneyDTO", Construction::EmptyInput)
        .err()
        .unwrap();
    assert_eq!(err, InstantiateError::Failed("amount is required".to_string()));

    let bare = registry
        .instantiate("App\\DTO\\MoneyDTO", Construction::WithoutConstructor)
        .unwrap();
    assert!(!bare.rules().unwrap().contains_key("currency"));
    assert_eq!(bare.defaults().ok(), None);
}

#[test]
fn test_declared_property_lookup() {
    let registry = registry();

    let decl = registry
        .declared_property("App\\DTO\\MoneyDTO", "amount")
        .unwrap();
    assert_eq!(decl.cast.as_deref(), Some("FloatCast"));
    assert!(registry.declared_property("App\\DTO\\MoneyDTO", "currency").is_none());
}

#[test]
fn test_enum_lookup_errors() {
    let registry = registry();

    assert_eq!(registry.enum_cases(Currency::NAME).unwrap().len(), 2);
    assert_eq!(
        registry.enum_cases("App\\DTO\\BaseDTO"),
        Err(EnumLookupError::NotAnEnum("App\\DTO\\BaseDTO".to_string()))
    );
    assert!(matches!(
        registry.enum_cases("App\\Enum\\Missing"),
        Err(EnumLookupError::NotFound(_))
    ));
}
