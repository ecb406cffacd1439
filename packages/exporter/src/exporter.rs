use crate::discovery::{discover_dto_classes, ClassDiscovery, SourceScanner};
use crate::emit::{emit, render_file, timestamp};
use crate::error::{ExportResult, ExtractError};
use crate::extraction::extract_shape;
use dtogen_common::FileSystem;
use dtogen_inference::{CodeGenerator, InferenceEngine, TypeScriptGenerator};
use dtogen_schema::{ClassResolver, DEFAULT_BASE_CLASS};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

pub const DEFAULT_FILENAME: &str = "dtos.ts";

#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Classes must (transitively) extend this one to be exported
    pub base_class: String,
    /// Fixed header timestamp; the local clock is used when unset
    pub generated_at: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            base_class: DEFAULT_BASE_CLASS.to_string(),
            generated_at: None,
        }
    }
}

/// A class left out of the output because it could not be introspected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedClass {
    pub class: String,
    pub reason: String,
}

impl fmt::Display for SkippedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.class, self.reason)
    }
}

/// Outcome of one export run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Number of interface blocks written
    pub count: usize,
    /// Written file; `None` when there was nothing to write
    pub file: Option<PathBuf>,
    pub skipped: Vec<SkippedClass>,
}

impl ExportReport {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Generates one TypeScript file from every DTO class under a directory
pub struct TypescriptExporter<'a> {
    fs: &'a dyn FileSystem,
    resolver: &'a dyn ClassResolver,
    discovery: Box<dyn ClassDiscovery + 'a>,
    generator: TypeScriptGenerator,
    options: ExportOptions,
    processed: HashSet<String>,
}

impl<'a> TypescriptExporter<'a> {
    pub fn new(fs: &'a dyn FileSystem, resolver: &'a dyn ClassResolver) -> Self {
        Self {
            fs,
            resolver,
            discovery: Box::new(SourceScanner::default()),
            generator: TypeScriptGenerator::new(),
            options: ExportOptions::default(),
            processed: HashSet::new(),
        }
    }

    pub fn with_discovery(mut self, discovery: impl ClassDiscovery + 'a) -> Self {
        self.discovery = Box::new(discovery);
        self
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the whole pipeline. Per-class failures end up in the report's
    /// skip list; only emission failures are returned as errors.
    #[instrument(skip(self, dto_path, output_path), fields(dto_path = %dto_path.display(), output = %output_path.display()))]
    pub fn export(
        &mut self,
        dto_path: &Path,
        output_path: &Path,
        filename: &str,
    ) -> ExportResult<ExportReport> {
        info!("Starting TypeScript export");
        self.processed.clear();

        let classes = discover_dto_classes(
            self.discovery.as_ref(),
            dto_path,
            self.fs,
            self.resolver,
            &self.options.base_class,
        );
        debug!(classes = classes.len(), "Discovered DTO classes");

        let mut blocks = Vec::new();
        let mut skipped = Vec::new();

        for class in classes {
            match self.generate_interface(&class) {
                Ok(Some(block)) => blocks.push(block),
                Ok(None) => {}
                Err(e) => {
                    warn!(class = %class, error = %e, "Skipping class");
                    skipped.push(SkippedClass {
                        class,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if blocks.is_empty() {
            info!(skipped = skipped.len(), "No interfaces to export");
            return Ok(ExportReport {
                count: 0,
                file: None,
                skipped,
            });
        }

        let generated_at = self.options.generated_at.clone().unwrap_or_else(timestamp);
        let content = render_file(&blocks, &generated_at);
        let file = emit(self.fs, output_path, filename, &content)?;

        info!(count = blocks.len(), skipped = skipped.len(), file = %file.display(), "Export complete");
        Ok(ExportReport {
            count: blocks.len(),
            file: Some(file),
            skipped,
        })
    }

    /// Rendered interface block for one class. `None` if the class was
    /// already processed this run or has no properties.
    pub fn generate_interface(&mut self, class: &str) -> Result<Option<String>, ExtractError> {
        if !self.processed.insert(class.to_string()) {
            debug!(class, "Already processed");
            return Ok(None);
        }

        let shape = extract_shape(self.resolver, class)?;
        let block = InferenceEngine::new(self.resolver).infer_interface(class, &shape);

        if block.is_empty() {
            debug!(class, "No properties, no interface");
            return Ok(None);
        }

        Ok(Some(
            self.generator
                .generate_interface(&block.name, &block.properties),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtogen_common::MockFileSystem;
    use dtogen_schema::{CastKind, CastMap, ClassEntry, ClassInfo, Registry, StaticShape};

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.register_class(
            ClassEntry::new(ClassInfo::new("App\\DTO\\TagDTO").extends(DEFAULT_BASE_CLASS))
                .with_constructor(|_| {
                    Ok(Box::new(StaticShape {
                        casts: Some(CastMap::new().with("label", CastKind::String)),
                        ..Default::default()
                    }))
                }),
        );
        registry
    }

    #[test]
    fn test_generate_interface_once_per_run() {
        let fs = MockFileSystem::new();
        let registry = registry();
        let mut exporter = TypescriptExporter::new(&fs, &registry);

        assert_eq!(
            exporter.generate_interface("App\\DTO\\TagDTO").unwrap().as_deref(),
            Some("export interface TagInterface {\n  label?: string;\n}")
        );
        assert_eq!(exporter.generate_interface("App\\DTO\\TagDTO").unwrap(), None);
    }

    #[test]
    fn test_skipped_class_display() {
        let skipped = SkippedClass {
            class: "App\\DTO\\BrokenDTO".to_string(),
            reason: "boom".to_string(),
        };
        assert_eq!(skipped.to_string(), "App\\DTO\\BrokenDTO: boom");
    }

    #[test]
    fn test_processed_set_resets_between_runs() {
        let mut fs = MockFileSystem::new();
        fs.add_file(
            "/app/DTO/TagDTO.php",
            "<?php\nnamespace App\\DTO;\nclass TagDTO extends SimpleDTO {}\n",
        );
        let registry = registry();
        let mut exporter = TypescriptExporter::new(&fs, &registry);

        for _ in 0..2 {
            let report = exporter
                .export(Path::new("/app/DTO"), Path::new("/out"), DEFAULT_FILENAME)
                .unwrap();
            assert_eq!(report.count, 1);
        }
    }
}
