use serde::Deserialize;

/// Backing value of an enum case
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    Integer(i64),
    String(String),
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        EnumValue::String(value.to_string())
    }
}

impl From<String> for EnumValue {
    fn from(value: String) -> Self {
        EnumValue::String(value)
    }
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        EnumValue::Integer(value)
    }
}

/// One enum case; `value` is `None` for unit (non-backed) enums
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumCase {
    pub name: String,
    #[serde(default)]
    pub value: Option<EnumValue>,
}

impl EnumCase {
    pub fn unit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn backed(name: impl Into<String>, value: impl Into<EnumValue>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// Enum type registered from Rust code
pub trait EnumType {
    /// Fully qualified name casts refer to
    const NAME: &'static str;

    fn cases() -> Vec<EnumCase>;
}
