use dtogen_exporter::DEFAULT_FILENAME;
use dtogen_schema::DEFAULT_BASE_CLASS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "dtogen.config.json";

/// dtogen configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Namespace of the DTO classes; also decides the default scan path
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Classes must extend this base to be exported
    #[serde(default = "default_base_class")]
    pub base_class: String,

    /// Class manifest, relative to the project directory
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub typescript: TypescriptConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanConfig {
    /// Extension of the source files holding class declarations
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypescriptConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,

    #[serde(default = "default_filename")]
    pub filename: String,
}

fn default_namespace() -> String {
    "App\\DTO".to_string()
}

fn default_base_class() -> String {
    DEFAULT_BASE_CLASS.to_string()
}

fn default_manifest() -> String {
    "dtogen.manifest.json".to_string()
}

fn default_extension() -> String {
    "php".to_string()
}

fn default_output_path() -> String {
    "resources/typescript".to_string()
}

fn default_filename() -> String {
    DEFAULT_FILENAME.to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Scan directory derived from the namespace (`App\DTO` → `app/DTO`)
    pub fn get_dto_path(&self, cwd: &str) -> PathBuf {
        let relative = self.namespace.replace('\\', "/").replace("App/", "app/");
        Path::new(cwd).join(relative)
    }

    pub fn get_output_path(&self, cwd: &str) -> PathBuf {
        Path::new(cwd).join(&self.typescript.output_path)
    }

    pub fn get_manifest_path(&self, cwd: &str) -> PathBuf {
        Path::new(cwd).join(&self.manifest)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            base_class: default_base_class(),
            manifest: default_manifest(),
            scan: ScanConfig::default(),
            typescript: TypescriptConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

impl Default for TypescriptConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            filename: default_filename(),
        }
    }
}
