use crate::class::{
    normalize_class_name, ClassInfo, ClassResolver, Construction, PropertyDecl, DEFAULT_BASE_CLASS,
};
use crate::enums::{EnumCase, EnumType};
use crate::error::{EnumLookupError, InstantiateError};
use crate::shape::DtoShape;
use std::collections::BTreeMap;
use tracing::debug;

/// Raw input a DTO is constructed from
pub type InputData = serde_json::Map<String, serde_json::Value>;

type Constructor = Box<dyn Fn(&InputData) -> Result<Box<dyn DtoShape>, String>>;
type BareConstructor = Box<dyn Fn() -> Result<Box<dyn DtoShape>, String>>;

/// A DTO type defined in Rust.
///
/// ```rust
/// use dtogen_schema::{CastKind, CastMap, DtoClass, DtoShape, InputData, ShapeResult};
///
/// struct AddressDto;
///
/// impl DtoShape for AddressDto {
///     fn casts(&self) -> ShapeResult<CastMap> {
///         Ok(CastMap::new().with("street", CastKind::String))
///     }
/// }
///
/// impl DtoClass for AddressDto {
///     const NAME: &'static str = "App\\DTO\\AddressDTO";
///
///     fn from_input(_input: &InputData) -> Result<Self, String> {
///         Ok(AddressDto)
///     }
/// }
/// ```
pub trait DtoClass: DtoShape + Sized + 'static {
    const NAME: &'static str;
    const PARENT: Option<&'static str> = Some(DEFAULT_BASE_CLASS);
    const ABSTRACT: bool = false;

    /// Declared properties and their cast annotations
    fn properties() -> Vec<PropertyDecl> {
        Vec::new()
    }

    /// Regular construction path
    fn from_input(input: &InputData) -> Result<Self, String>;

    /// Construction that skips initialization, if the type supports it
    fn without_constructor() -> Option<Self> {
        None
    }
}

/// A class known to the registry
pub struct ClassEntry {
    pub info: ClassInfo,
    construct: Option<Constructor>,
    construct_bare: Option<BareConstructor>,
}

impl ClassEntry {
    pub fn new(info: ClassInfo) -> Self {
        Self {
            info,
            construct: None,
            construct_bare: None,
        }
    }

    pub fn with_constructor(
        mut self,
        f: impl Fn(&InputData) -> Result<Box<dyn DtoShape>, String> + 'static,
    ) -> Self {
        self.construct = Some(Box::new(f));
        self
    }

    pub fn with_bare_constructor(
        mut self,
        f: impl Fn() -> Result<Box<dyn DtoShape>, String> + 'static,
    ) -> Self {
        self.construct_bare = Some(Box::new(f));
        self
    }
}

/// In-process class table; the stock [`ClassResolver`]
#[derive(Default)]
pub struct Registry {
    classes: BTreeMap<String, ClassEntry>,
    enums: BTreeMap<String, Vec<EnumCase>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class; an existing entry with the same name is replaced
    pub fn register_class(&mut self, entry: ClassEntry) -> &mut Self {
        debug!(class = %entry.info.name, "Registering class");
        self.classes.insert(entry.info.name.clone(), entry);
        self
    }

    /// Register a Rust DTO type
    pub fn register<T: DtoClass>(&mut self) -> &mut Self {
        let mut info = ClassInfo::new(T::NAME);
        info.parent = T::PARENT.map(|p| normalize_class_name(p).to_string());
        info.is_abstract = T::ABSTRACT;
        info.properties = T::properties();

        let entry = ClassEntry::new(info)
            .with_constructor(|input| {
                T::from_input(input).map(|dto| Box::new(dto) as Box<dyn DtoShape>)
            })
            .with_bare_constructor(|| {
                T::without_constructor()
                    .map(|dto| Box::new(dto) as Box<dyn DtoShape>)
                    .ok_or_else(|| "construction without constructor is not supported".to_string())
            });

        self.register_class(entry)
    }

    pub fn register_enum(&mut self, name: &str, cases: Vec<EnumCase>) -> &mut Self {
        debug!(enum_name = name, cases = cases.len(), "Registering enum");
        self.enums
            .insert(normalize_class_name(name).to_string(), cases);
        self
    }

    /// Register a Rust enum type
    pub fn register_enum_type<E: EnumType>(&mut self) -> &mut Self {
        self.register_enum(E::NAME, E::cases())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassResolver for Registry {
    fn class_info(&self, name: &str) -> Option<&ClassInfo> {
        self.classes
            .get(normalize_class_name(name))
            .map(|entry| &entry.info)
    }

    fn instantiate(
        &self,
        name: &str,
        construction: Construction,
    ) -> Result<Box<dyn DtoShape>, InstantiateError> {
        let entry = self
            .classes
            .get(normalize_class_name(name))
            .ok_or_else(|| InstantiateError::ClassNotFound(name.to_string()))?;

        let unsupported = || InstantiateError::Unsupported {
            class: entry.info.name.clone(),
            construction,
        };

        let result = match construction {
            Construction::EmptyInput => {
                let construct = entry.construct.as_ref().ok_or_else(unsupported)?;
                construct(&InputData::new())
            }
            Construction::WithoutConstructor => {
                let construct = entry.construct_bare.as_ref().ok_or_else(unsupported)?;
                construct()
            }
        };

        result.map_err(InstantiateError::Failed)
    }

    fn enum_cases(&self, name: &str) -> Result<Vec<EnumCase>, EnumLookupError> {
        let name = normalize_class_name(name);
        if let Some(cases) = self.enums.get(name) {
            return Ok(cases.clone());
        }
        if self.classes.contains_key(name) {
            return Err(EnumLookupError::NotAnEnum(name.to_string()));
        }
        Err(EnumLookupError::NotFound(name.to_string()))
    }

    fn class_names(&self) -> Vec<String> {
        self.classes.keys().cloned().collect()
    }
}
