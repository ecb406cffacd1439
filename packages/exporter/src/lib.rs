//! # dtogen exporter
//!
//! Runs the export pipeline: discover DTO classes under a directory, read
//! each one's shape, infer and render interface blocks, and write them to a
//! single TypeScript file.
//!
//! ```rust
//! use dtogen_common::{FileSystem, MockFileSystem};
//! use dtogen_exporter::{ExportOptions, TypescriptExporter};
//! use dtogen_schema::{Manifest, Registry};
//! use std::path::Path;
//!
//! let mut fs = MockFileSystem::new();
//! fs.add_file(
//!     "/app/DTO/UserDTO.php",
//!     "<?php\nnamespace App\\DTO;\nclass UserDTO extends SimpleDTO {}\n",
//! );
//!
//! let registry = Registry::from_manifest(Manifest::from_json(r#"{
//!     "classes": {
//!         "App\\DTO\\UserDTO": {
//!             "extends": "FriendsOfHyperf\\ValidatedDTO\\SimpleDTO",
//!             "rules": { "name": "required|string" }
//!         }
//!     }
//! }"#).unwrap());
//!
//! let report = TypescriptExporter::new(&fs, &registry)
//!     .with_options(ExportOptions {
//!         generated_at: Some("2024-01-01 00:00:00".to_string()),
//!         ..Default::default()
//!     })
//!     .export(Path::new("/app/DTO"), Path::new("/out"), "dtos.ts")
//!     .unwrap();
//!
//! assert_eq!(report.count, 1);
//! let written = fs.read_to_string(Path::new("/out/dtos.ts")).unwrap();
//! assert!(written.ends_with("export interface UserInterface {\n  name: string;\n}\n"));
//! ```

pub mod discovery;
pub mod emit;
pub mod error;
pub mod exporter;
pub mod extraction;

pub use discovery::{
    discover_dto_classes, extract_class_name, is_exportable, ClassDiscovery, RegistryDiscovery,
    SourceScanner,
};
pub use emit::{emit, render_file, timestamp};
pub use error::{ExportError, ExportResult, ExtractError};
pub use exporter::{
    ExportOptions, ExportReport, SkippedClass, TypescriptExporter, DEFAULT_FILENAME,
};
pub use extraction::extract_shape;
