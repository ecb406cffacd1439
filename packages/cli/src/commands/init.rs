use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

const EXAMPLE_MANIFEST: &str = r#"{
  "classes": {
    "App\\DTO\\UserDTO": {
      "extends": "FriendsOfHyperf\\ValidatedDTO\\SimpleDTO",
      "casts": {
        "id": "integer",
        "status": { "kind": "enum", "enum": "App\\Enum\\Status" }
      },
      "rules": {
        "id": "required|integer",
        "email": "required|email"
      },
      "defaults": {
        "status": "active"
      }
    }
  },
  "enums": {
    "App\\Enum\\Status": [
      { "name": "Active", "value": "active" },
      { "name": "Inactive", "value": "inactive" }
    ]
  }
}
"#;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Namespace of the DTO classes
    #[arg(short, long, default_value = "App\\DTO")]
    pub namespace: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing dtogen...".bright_blue().bold());

    let config = Config {
        namespace: args.namespace.clone(),
        ..Config::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let manifest_path = config.get_manifest_path(cwd);
    if !manifest_path.exists() || args.force {
        fs::write(&manifest_path, EXAMPLE_MANIFEST)?;
        println!("  {} Created {}", "✓".green(), config.manifest);
    }

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Describe your DTO classes in {}", config.manifest);
    println!("  2. Run: dtogen export:typescript");
    println!(
        "  3. Check output in {}/{}",
        config.typescript.output_path, config.typescript.filename
    );

    Ok(())
}
