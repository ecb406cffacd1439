pub mod typescript;

use crate::types::{PropertyType, Type};

/// Renders inferred interfaces in a target language
pub trait CodeGenerator {
    fn generate_type(&self, type_: &Type) -> String;

    /// `name: type`, with the target's optional marker when needed
    fn generate_property(&self, name: &str, prop: &PropertyType) -> String;

    /// A complete interface declaration, properties in the given order
    fn generate_interface(&self, name: &str, props: &[(String, PropertyType)]) -> String;
}
