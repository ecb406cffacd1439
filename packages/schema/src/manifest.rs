//! JSON class manifest.
//!
//! Describes classes and enums for hosts that cannot register Rust types,
//! e.g. a build step that dumps the DTO table of another application:
//!
//! ```json
//! {
//!   "classes": {
//!     "App\\DTO\\UserDTO": {
//!       "extends": "FriendsOfHyperf\\ValidatedDTO\\SimpleDTO",
//!       "casts": { "status": { "kind": "enum", "enum": "App\\Enum\\Status" } },
//!       "rules": { "name": "required|string" },
//!       "defaults": { "role": "member" },
//!       "properties": { "nickname": { "cast": "StringCast" } }
//!     }
//!   },
//!   "enums": {
//!     "App\\Enum\\Status": [{ "name": "Active", "value": "A" }]
//!   }
//! }
//! ```

use crate::cast::CastDescriptor;
use crate::class::{ClassInfo, PropertyDecl};
use crate::enums::EnumCase;
use crate::error::SchemaResult;
use crate::registry::{ClassEntry, Registry};
use crate::rules::RuleSpec;
use crate::shape::{DtoShape, ShapeMap, StaticShape};
use dtogen_common::FileSystem;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// How a manifest class behaves when the exporter instantiates it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstructionMode {
    /// Constructs with an empty input
    #[default]
    Standard,
    /// Rejects empty input but can be created without its constructor
    Bypass,
    /// Cannot be instantiated at all
    Unavailable,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyManifest {
    #[serde(default)]
    pub cast: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassManifest {
    #[serde(default)]
    pub extends: Option<String>,

    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    #[serde(default)]
    pub construction: ConstructionMode,

    /// Message reported when construction fails
    #[serde(default)]
    pub construction_error: Option<String>,

    /// Absent maps behave like a missing accessor
    #[serde(default)]
    pub casts: Option<ShapeMap<CastDescriptor>>,

    #[serde(default)]
    pub rules: Option<ShapeMap<RuleSpec>>,

    #[serde(default)]
    pub defaults: Option<ShapeMap<serde_json::Value>>,

    #[serde(default)]
    pub properties: ShapeMap<PropertyManifest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub classes: ShapeMap<ClassManifest>,

    #[serde(default)]
    pub enums: ShapeMap<Vec<EnumCase>>,
}

impl Manifest {
    pub fn from_json(source: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load(fs: &dyn FileSystem, path: &Path) -> SchemaResult<Self> {
        let source = fs.read_to_string(path)?;
        let manifest = Self::from_json(&source)?;
        info!(
            path = %path.display(),
            classes = manifest.classes.len(),
            enums = manifest.enums.len(),
            "Loaded class manifest"
        );
        Ok(manifest)
    }
}

impl ClassManifest {
    fn into_entry(self, name: &str) -> ClassEntry {
        let mut info = ClassInfo::new(name);
        if let Some(parent) = &self.extends {
            info = info.extends(parent.as_str());
        }
        info.is_abstract = self.is_abstract;
        info.properties = self
            .properties
            .iter()
            .map(|(prop, decl)| PropertyDecl {
                name: prop.to_string(),
                cast: decl.cast.clone(),
            })
            .collect();

        let shape = StaticShape {
            casts: self.casts,
            rules: self.rules,
            defaults: self.defaults,
        };
        let error = self
            .construction_error
            .unwrap_or_else(|| "constructor rejected empty input".to_string());

        let entry = ClassEntry::new(info);
        match self.construction {
            ConstructionMode::Standard => {
                let bare = shape.clone();
                entry
                    .with_constructor(move |_| Ok(Box::new(shape.clone()) as Box<dyn DtoShape>))
                    .with_bare_constructor(move || Ok(Box::new(bare.clone()) as Box<dyn DtoShape>))
            }
            ConstructionMode::Bypass => entry
                .with_constructor(move |_| Err(error.clone()))
                .with_bare_constructor(move || Ok(Box::new(shape.clone()) as Box<dyn DtoShape>)),
            ConstructionMode::Unavailable => {
                let bare_error = error.clone();
                entry
                    .with_constructor(move |_| Err(error.clone()))
                    .with_bare_constructor(move || Err(bare_error.clone()))
            }
        }
    }
}

impl Registry {
    /// Build a registry holding every class and enum of the manifest
    pub fn from_manifest(manifest: Manifest) -> Self {
        let mut registry = Registry::new();
        registry.extend_from_manifest(manifest);
        registry
    }

    pub fn extend_from_manifest(&mut self, manifest: Manifest) -> &mut Self {
        let Manifest { classes, enums } = manifest;

        for (name, class) in classes.into_iter() {
            let entry = class.into_entry(&name);
            self.register_class(entry);
        }
        for (name, cases) in enums.into_iter() {
            self.register_enum(&name, cases);
        }
        self
    }
}
