//! Constants describing the on-disk layout of a `GOPATH` workspace.

/// Extension of the source files whose imports are read
pub const GO_EXTENSION: &str = "go";

/// Environment variable naming the Go workspace
pub const GOPATH_ENV: &str = "GOPATH";

/// Directory under the workspace holding package sources
pub const SRC_DIR: &str = "src";
