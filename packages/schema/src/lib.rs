//! # dtogen schema
//!
//! The shape model the TypeScript exporter reads: cast descriptors, rule
//! specs and defaults exposed by each DTO through [`DtoShape`], plus the
//! [`ClassResolver`] that answers class and enum lookups.
//!
//! A [`Registry`] is the stock resolver. Rust types register through
//! [`DtoClass`] and [`EnumType`]; everything else is loaded from a JSON
//! [`Manifest`].
//!
//! ```rust
//! use dtogen_schema::{CastDescriptor, CastKind, ClassResolver, DtoShape, Manifest, Registry};
//!
//! let manifest = Manifest::from_json(r#"{
//!     "classes": {
//!         "App\\DTO\\UserDTO": {
//!             "extends": "FriendsOfHyperf\\ValidatedDTO\\SimpleDTO",
//!             "casts": { "age": "integer" },
//!             "rules": { "name": "required|string" }
//!         }
//!     }
//! }"#).unwrap();
//!
//! let registry = Registry::from_manifest(manifest);
//! let shape = registry
//!     .instantiate("App\\DTO\\UserDTO", dtogen_schema::Construction::EmptyInput)
//!     .unwrap();
//! let casts = shape.casts().unwrap();
//! assert_eq!(casts.get("age"), Some(&CastDescriptor::Primitive(CastKind::Integer)));
//! ```

pub mod cast;
pub mod class;
pub mod enums;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod rules;
pub mod shape;

pub use cast::{CastDescriptor, CastKind};
pub use class::{
    normalize_class_name, ClassInfo, ClassResolver, Construction, PropertyDecl,
    DEFAULT_BASE_CLASS,
};
pub use enums::{EnumCase, EnumType, EnumValue};
pub use error::{
    EnumLookupError, InstantiateError, SchemaError, SchemaResult, ShapeError, ShapeResult,
};
pub use manifest::{ClassManifest, ConstructionMode, Manifest};
pub use registry::{ClassEntry, DtoClass, InputData, Registry};
pub use rules::RuleSpec;
pub use shape::{CastMap, DefaultMap, DtoShape, RuleMap, ShapeMap, ShapeMaps, StaticShape};
