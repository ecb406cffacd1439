use crate::error::{CommonError, CommonResult};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File system abstraction for source scanning, emission and testing
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// List every file below `root` whose extension equals `extension`,
    /// sorted by path. Unreadable entries are skipped.
    fn walk_files(&self, root: &Path, extension: &str) -> Vec<PathBuf>;

    /// Read a file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> CommonResult<String>;

    /// Create a directory and all of its parents
    fn create_dir_all(&self, path: &Path) -> CommonResult<()>;

    /// Write a file, replacing any previous contents
    fn write(&self, path: &Path, contents: &str) -> CommonResult<()>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn walk_files(&self, root: &Path, extension: &str) -> Vec<PathBuf> {
        WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some(extension))
            .map(|e| e.into_path())
            .collect()
    }

    fn read_to_string(&self, path: &Path) -> CommonResult<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn create_dir_all(&self, path: &Path) -> CommonResult<()> {
        Ok(std::fs::create_dir_all(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> CommonResult<()> {
        Ok(std::fs::write(path, contents)?)
    }
}

/// In-memory file system for testing
pub struct MockFileSystem {
    pub files: RefCell<BTreeMap<PathBuf, String>>,
    pub directories: RefCell<BTreeSet<PathBuf>>,
    /// Directories that refuse to be created
    pub read_only: BTreeSet<PathBuf>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: RefCell::new(BTreeMap::new()),
            directories: RefCell::new(BTreeSet::new()),
            read_only: BTreeSet::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir_chain(parent);
        }
        self.files.get_mut().insert(path, contents.into());
    }

    pub fn add_dir(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.add_dir_chain(&path);
    }

    pub fn deny_writes(&mut self, path: impl Into<PathBuf>) {
        self.read_only.insert(path.into());
    }

    /// Contents of a previously written (or added) file
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    fn add_dir_chain(&mut self, path: &Path) {
        let dirs = self.directories.get_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.directories.borrow().contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.directories.borrow().contains(path)
    }

    fn walk_files(&self, root: &Path, extension: &str) -> Vec<PathBuf> {
        // BTreeMap keys are already in path order
        self.files
            .borrow()
            .keys()
            .filter(|p| p.starts_with(root))
            .filter(|p| p.extension().and_then(|s| s.to_str()) == Some(extension))
            .cloned()
            .collect()
    }

    fn read_to_string(&self, path: &Path) -> CommonResult<String> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| CommonError::NotFound(path.to_path_buf()))
    }

    fn create_dir_all(&self, path: &Path) -> CommonResult<()> {
        if path.ancestors().any(|a| self.read_only.contains(a)) {
            return Err(CommonError::Generic(format!(
                "Permission denied: {}",
                path.display()
            )));
        }
        let mut dirs = self.directories.borrow_mut();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> CommonResult<()> {
        let parent_exists = path
            .parent()
            .map(|p| p.as_os_str().is_empty() || self.directories.borrow().contains(p))
            .unwrap_or(true);
        if !parent_exists {
            return Err(CommonError::NotFound(path.to_path_buf()));
        }
        if path.ancestors().any(|a| self.read_only.contains(a)) {
            return Err(CommonError::Generic(format!(
                "Permission denied: {}",
                path.display()
            )));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
