//! Class discovery
//!
//! Finds candidate class names under a scan root, then keeps only classes
//! the resolver knows that are concrete subclasses of the base DTO class.

use dtogen_common::FileSystem;
use dtogen_schema::{normalize_class_name, ClassResolver};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// Strategy that yields candidate class names under a root
pub trait ClassDiscovery {
    fn candidates(&self, root: &Path, fs: &dyn FileSystem, resolver: &dyn ClassResolver)
        -> Vec<String>;
}

fn namespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"namespace\s+([^;]+);").expect("valid namespace pattern"))
}

fn class_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"class\s+(\w+)").expect("valid class pattern"))
}

/// Best-effort textual match of the first namespace and class declaration
pub fn extract_class_name(source: &str) -> Option<String> {
    let namespace = namespace_pattern().captures(source)?.get(1)?.as_str().trim();
    let class = class_pattern().captures(source)?.get(1)?.as_str().trim();
    Some(format!("{}\\{}", normalize_class_name(namespace), class))
}

/// Scans source files with a given extension for their declared class
pub struct SourceScanner {
    extension: String,
}

impl SourceScanner {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}

impl Default for SourceScanner {
    fn default() -> Self {
        Self::new("php")
    }
}

impl ClassDiscovery for SourceScanner {
    fn candidates(
        &self,
        root: &Path,
        fs: &dyn FileSystem,
        _resolver: &dyn ClassResolver,
    ) -> Vec<String> {
        let mut classes = Vec::new();

        for file in fs.walk_files(root, &self.extension) {
            let source = match fs.read_to_string(&file) {
                Ok(source) => source,
                Err(e) => {
                    debug!(file = %file.display(), error = %e, "Skipping unreadable file");
                    continue;
                }
            };

            match extract_class_name(&source) {
                Some(class) => {
                    debug!(file = %file.display(), class = %class, "Found class declaration");
                    classes.push(class);
                }
                None => debug!(file = %file.display(), "No namespace/class declaration"),
            }
        }

        classes
    }
}

/// Lists every class the resolver knows, ignoring the scan root.
///
/// For hosts that keep a registry of DTO types instead of source files.
#[derive(Debug, Default)]
pub struct RegistryDiscovery;

impl ClassDiscovery for RegistryDiscovery {
    fn candidates(
        &self,
        _root: &Path,
        _fs: &dyn FileSystem,
        resolver: &dyn ClassResolver,
    ) -> Vec<String> {
        resolver.class_names()
    }
}

/// Resolvable, concrete, strict subclass of `base_class`
pub fn is_exportable(resolver: &dyn ClassResolver, class: &str, base_class: &str) -> bool {
    match resolver.class_info(class) {
        None => {
            debug!(class, "Class cannot be resolved");
            false
        }
        Some(info) if info.is_abstract => {
            debug!(class, "Skipping abstract class");
            false
        }
        Some(_) if !resolver.is_subclass_of(class, base_class) => {
            debug!(class, base_class, "Class is not a DTO");
            false
        }
        Some(_) => true,
    }
}

/// Run a discovery strategy and keep the exportable classes, in discovery
/// order
pub fn discover_dto_classes(
    discovery: &dyn ClassDiscovery,
    root: &Path,
    fs: &dyn FileSystem,
    resolver: &dyn ClassResolver,
    base_class: &str,
) -> Vec<String> {
    discovery
        .candidates(root, fs, resolver)
        .into_iter()
        .map(|class| normalize_class_name(&class).to_string())
        .filter(|class| is_exportable(resolver, class, base_class))
        .collect()
}
