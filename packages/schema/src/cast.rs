use crate::class::normalize_class_name;
use serde::Deserialize;
use std::fmt;

/// Built-in cast kinds understood by the exporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastKind {
    String,
    Integer,
    /// Deprecated alias of `Integer`
    Long,
    Float,
    /// Deprecated alias of `Float`
    Double,
    Boolean,
    Array,
    Collection,
    Object,
    Model,
    /// Enum cast without a resolvable enum type
    Enum,
    Carbon,
    CarbonImmutable,
}

impl CastKind {
    pub const ALL: [CastKind; 13] = [
        CastKind::String,
        CastKind::Integer,
        CastKind::Long,
        CastKind::Float,
        CastKind::Double,
        CastKind::Boolean,
        CastKind::Array,
        CastKind::Collection,
        CastKind::Object,
        CastKind::Model,
        CastKind::Enum,
        CastKind::Carbon,
        CastKind::CarbonImmutable,
    ];

    /// Lowercase name used in manifests (`"integer"`)
    pub fn name(&self) -> &'static str {
        match self {
            CastKind::String => "string",
            CastKind::Integer => "integer",
            CastKind::Long => "long",
            CastKind::Float => "float",
            CastKind::Double => "double",
            CastKind::Boolean => "boolean",
            CastKind::Array => "array",
            CastKind::Collection => "collection",
            CastKind::Object => "object",
            CastKind::Model => "model",
            CastKind::Enum => "enum",
            CastKind::Carbon => "carbon",
            CastKind::CarbonImmutable => "carbon_immutable",
        }
    }

    /// Short name of the cast class (`"IntegerCast"`)
    pub fn class_name(&self) -> &'static str {
        match self {
            CastKind::String => "StringCast",
            CastKind::Integer => "IntegerCast",
            CastKind::Long => "LongCast",
            CastKind::Float => "FloatCast",
            CastKind::Double => "DoubleCast",
            CastKind::Boolean => "BooleanCast",
            CastKind::Array => "ArrayCast",
            CastKind::Collection => "CollectionCast",
            CastKind::Object => "ObjectCast",
            CastKind::Model => "ModelCast",
            CastKind::Enum => "EnumCast",
            CastKind::Carbon => "CarbonCast",
            CastKind::CarbonImmutable => "CarbonImmutableCast",
        }
    }

    /// Look a kind up by manifest name or cast class name. A namespace
    /// prefix on the class name is ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let short = normalize_class_name(name)
            .rsplit('\\')
            .next()
            .unwrap_or_default();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == short || kind.class_name() == short)
    }
}

impl fmt::Display for CastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a raw input value is coerced for one property
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCast")]
pub enum CastDescriptor {
    /// One of the built-in casts
    Primitive(CastKind),
    /// Nested DTO, referenced by fully qualified class name
    Dto { class: String },
    /// Enum cast, referenced by fully qualified enum name
    Enum { enum_type: String },
    /// Any cast the exporter does not know about
    Custom(String),
}

impl CastDescriptor {
    pub fn dto(class: impl Into<String>) -> Self {
        CastDescriptor::Dto {
            class: class.into(),
        }
    }

    pub fn enumeration(enum_type: impl Into<String>) -> Self {
        CastDescriptor::Enum {
            enum_type: enum_type.into(),
        }
    }

    /// Build a descriptor from a bare cast name; unknown names become `Custom`
    pub fn named(name: &str) -> Self {
        match CastKind::from_name(name) {
            Some(kind) => CastDescriptor::Primitive(kind),
            None => CastDescriptor::Custom(name.to_string()),
        }
    }
}

impl From<CastKind> for CastDescriptor {
    fn from(kind: CastKind) -> Self {
        CastDescriptor::Primitive(kind)
    }
}

/// Manifest form of a cast: either a bare name or a tagged object
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCast {
    Name(String),
    Tagged {
        kind: String,
        #[serde(default)]
        class: Option<String>,
        #[serde(default, rename = "enum")]
        enum_type: Option<String>,
    },
}

fn is_dto_kind(kind: &str) -> bool {
    matches!(
        normalize_class_name(kind).rsplit('\\').next(),
        Some("dto" | "DTOCast")
    )
}

impl TryFrom<RawCast> for CastDescriptor {
    type Error = String;

    fn try_from(raw: RawCast) -> Result<Self, Self::Error> {
        match raw {
            RawCast::Name(name) => Ok(CastDescriptor::named(&name)),
            RawCast::Tagged {
                kind,
                class,
                enum_type,
            } => {
                if is_dto_kind(&kind) {
                    return class
                        .map(CastDescriptor::dto)
                        .ok_or_else(|| format!("cast '{}' requires a \"class\"", kind));
                }

                match (CastKind::from_name(&kind), enum_type) {
                    (Some(CastKind::Enum), Some(enum_type)) => {
                        Ok(CastDescriptor::enumeration(enum_type))
                    }
                    (Some(kind), _) => Ok(CastDescriptor::Primitive(kind)),
                    (None, _) => Ok(CastDescriptor::Custom(kind)),
                }
            }
        }
    }
}
