use crate::error::{ExportError, ExportResult};
use dtogen_common::FileSystem;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const HEADER_TITLE: &str = "// Generated TypeScript interfaces from DTO classes";
pub const HEADER_NOTICE: &str = "// This file is auto-generated. Do not edit manually.";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local time in the header's format
pub fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Header, then blocks separated by one blank line, then a trailing newline
pub fn render_file(blocks: &[String], generated_at: &str) -> String {
    let mut lines = vec![
        HEADER_TITLE.to_string(),
        format!("// Generated at: {}", generated_at),
        HEADER_NOTICE.to_string(),
        String::new(),
    ];
    lines.push(blocks.join("\n\n"));

    let mut content = lines.join("\n");
    content.push('\n');
    content
}

/// Write `content` to `output_dir/filename`, creating the directory first
pub fn emit(
    fs: &dyn FileSystem,
    output_dir: &Path,
    filename: &str,
    content: &str,
) -> ExportResult<PathBuf> {
    if !fs.is_dir(output_dir) {
        debug!(path = %output_dir.display(), "Creating output directory");
        fs.create_dir_all(output_dir)
            .map_err(|source| ExportError::CreateDirectory {
                path: output_dir.to_path_buf(),
                source,
            })?;
    }

    let path = output_dir.join(filename);
    fs.write(&path, content).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
