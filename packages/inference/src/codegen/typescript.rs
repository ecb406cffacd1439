use crate::codegen::CodeGenerator;
use crate::types::{LiteralType, PropertyType, Type};

/// TypeScript code generator for inferred DTO types
pub struct TypeScriptGenerator {
    indent: String,
}

impl TypeScriptGenerator {
    pub fn new() -> Self {
        Self {
            indent: "  ".to_string(),
        }
    }

    /// Quote a string literal with single quotes
    fn quote(value: &str) -> String {
        format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
    }

    /// Element types that need wrapping before a `[]` suffix
    fn needs_parens(type_: &Type) -> bool {
        matches!(type_, Type::Union(types) if types.len() > 1)
    }
}

impl Default for TypeScriptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for TypeScriptGenerator {
    fn generate_type(&self, type_: &Type) -> String {
        match type_ {
            Type::Any => "any".to_string(),
            Type::String => "string".to_string(),
            Type::Number => "number".to_string(),
            Type::Boolean => "boolean".to_string(),
            Type::Object => "object".to_string(),

            Type::Array(inner) => {
                let inner_str = self.generate_type(inner);
                if Self::needs_parens(inner) {
                    format!("({})[]", inner_str)
                } else {
                    format!("{}[]", inner_str)
                }
            }

            Type::Reference(name) => name.clone(),

            Type::Literal(lit) => match lit {
                LiteralType::String(s) => Self::quote(s),
                LiteralType::Number(n) => n.to_string(),
            },

            Type::Union(types) => {
                let type_strs: Vec<String> = types.iter().map(|t| self.generate_type(t)).collect();
                type_strs.join(" | ")
            }
        }
    }

    fn generate_property(&self, name: &str, prop: &PropertyType) -> String {
        let optional_marker = if prop.optional { "?" } else { "" };
        format!("{}{}: {}", name, optional_marker, self.generate_type(&prop.type_))
    }

    fn generate_interface(&self, name: &str, props: &[(String, PropertyType)]) -> String {
        let mut lines = vec![format!("export interface {} {{", name)];

        for (prop_name, prop_type) in props {
            lines.push(format!(
                "{}{};",
                self.indent,
                self.generate_property(prop_name, prop_type)
            ));
        }

        lines.push("}".to_string());
        lines.join("\n")
    }
}
