use anyhow::{Context, Result};
use log::{debug, trace};
use path_clean::clean;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{parser::ImportExtractor, types::Specifier};

/// Directory holding the sources of `package` under `src_root`.
pub fn package_dir(src_root: &Path, package: &str) -> PathBuf {
    clean(src_root.join(package))
}

/// Resolves a package to the imports declared by its source files.
///
/// Returns `Ok(None)` when the package directory does not exist, which is the
/// case for standard library packages and dependencies that were never fetched.
pub fn resolve(
    src_root: &Path,
    package: &str,
    extractor: &dyn ImportExtractor,
) -> Result<Option<Vec<Specifier>>> {
    let dir = package_dir(src_root, package);
    trace!("Resolving package '{}' at {}", package, dir.display());

    match fs::metadata(&dir) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No directory for package '{}', treating it as a leaf", package);
            return Ok(None);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to stat {}", dir.display()));
        }
    }

    let files = source_files(&dir, extractor.extension())?;
    trace!("Package '{}' has {} source files", package, files.len());

    let mut specs = Vec::new();
    for file in &files {
        specs.extend(extractor.imports_for(file)?);
    }

    debug!("Resolved {} imports for package '{}'", specs.len(), package);
    Ok(Some(specs))
}

/// Lists the non-hidden files in `dir` with the given extension, sorted by name.
pub fn source_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            continue;
        }

        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            trace!("Skipping hidden file: {:?}", name);
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
