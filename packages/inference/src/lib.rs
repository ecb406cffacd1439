//! # dtogen inference
//!
//! Derives TypeScript interface shapes from DTO metadata.
//!
//! ## Resolution order
//!
//! - **Type**: cast descriptor → validation rules → declared property cast
//!   annotation → `any`
//! - **Optional**: default value → rules without `required` → no signal at all
//!
//! ## Example
//!
//! ```rust
//! use dtogen_inference::{CodeGenerator, InferenceEngine, TypeScriptGenerator};
//! use dtogen_schema::{CastKind, CastMap, Registry, RuleMap, ShapeMaps};
//!
//! let registry = Registry::new();
//! let shape = ShapeMaps {
//!     casts: CastMap::new().with("age", CastKind::Integer),
//!     rules: RuleMap::new().with("name", "required|string"),
//!     ..Default::default()
//! };
//!
//! let engine = InferenceEngine::new(&registry);
//! let block = engine.infer_interface("App\\DTO\\UserDTO", &shape);
//!
//! let ts = TypeScriptGenerator::new().generate_interface(&block.name, &block.properties);
//! assert_eq!(
//!     ts,
//!     "export interface UserInterface {\n  age?: number;\n  name: string;\n}"
//! );
//! ```

pub mod codegen;
pub mod inference;
pub mod naming;
pub mod types;

// Re-export main types for convenience
pub use codegen::{typescript::TypeScriptGenerator, CodeGenerator};
pub use inference::{is_optional, primitive_type, rule_type, InferenceEngine};
pub use naming::{interface_name, short_name};
pub use types::{InterfaceBlock, LiteralType, PropertyType, Type};
