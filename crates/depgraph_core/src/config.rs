use anyhow::{Result, anyhow};
use log::{debug, trace};
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::constants::{GOPATH_ENV, SRC_DIR};

/// Computes the source root from a `GOPATH` value.
///
/// `GOPATH` may list several workspaces; the first one is used.
pub fn source_root(gopath: Option<&Path>) -> Result<PathBuf> {
    let gopath = gopath
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| anyhow!("{} must be set", GOPATH_ENV))?;
    trace!("Locating source root from {}={:?}", GOPATH_ENV, gopath);

    let workspace = env::split_paths(gopath)
        .find(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| anyhow!("{} must be set", GOPATH_ENV))?;

    let root = workspace.join(SRC_DIR);
    let root = root.canonicalize().unwrap_or(root);
    debug!("Using source root: {}", root.display());
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_source_root_missing() {
        let err = source_root(None).unwrap_err();
        assert_eq!(err.to_string(), "GOPATH must be set");
    }

    #[test]
    fn test_source_root_empty() {
        assert!(source_root(Some(Path::new(""))).is_err());
    }

    #[test]
    fn test_source_root_appends_src() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("src")).unwrap();

        let root = source_root(Some(temp_dir.path())).unwrap();
        assert_eq!(root, temp_dir.path().join("src").canonicalize().unwrap());
    }

    #[test]
    fn test_source_root_without_src_dir() {
        // A workspace that has no src directory yet still yields a root
        let root = source_root(Some(Path::new("/nonexistent/gopath"))).unwrap();
        assert_eq!(root, PathBuf::from("/nonexistent/gopath/src"));
    }

    #[test]
    fn test_source_root_uses_first_workspace() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let joined = env::join_paths([first.path(), second.path()]).unwrap();

        let root = source_root(Some(Path::new(&joined))).unwrap();
        assert_eq!(root, first.path().join("src"));
    }
}
