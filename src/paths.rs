#![forbid(unsafe_code)]

use std::env;
use std::fs::create_dir_all;
use std::io;
use std::path::{Path, PathBuf, StripPrefixError};

use crate::error::BatchError;

/// Literal name suffix of convertible source documents.
pub const SOURCE_SUFFIX: &str = ".md";
/// Extension of produced documents.
pub const TARGET_EXT: &str = "html";

/// Express `full` relative to `base`.
///
/// Joining `base` with the result reconstructs `full`.
pub fn relative_to<'a>(full: &'a Path, base: &Path) -> Result<&'a Path, StripPrefixError> {
	full.strip_prefix(base)
}

/// Resolve the output name for a file being processed.
///
/// A trailing `.md` suffix is replaced with `.html`; names without one
/// get `.html` appended instead. Only the final extension is substituted,
/// so `name.backup.md` becomes `name.backup.html`.
pub fn output_name(relative: &Path) -> PathBuf {
	match relative.to_str().and_then(|name| name.strip_suffix(SOURCE_SUFFIX)) {
		Some(stem) => PathBuf::from(format!("{stem}.{TARGET_EXT}")),
		None => {
			let mut name = relative.as_os_str().to_os_string();
			name.push(".");
			name.push(TARGET_EXT);
			PathBuf::from(name)
		}
	}
}

/// Resolve a user-supplied path against the current working directory.
/// Absolute paths are returned unchanged.
pub fn resolve_absolute(path: &Path) -> io::Result<PathBuf> {
	if path.is_absolute() {
		return Ok(path.to_path_buf());
	}
	Ok(env::current_dir()?.join(path))
}

/// Create a directory and all missing ancestors. Calling this on an
/// already-existing directory is not an error.
pub fn ensure_dir(dir: &Path) -> Result<(), BatchError> {
	create_dir_all(dir).map_err(|source| BatchError::DirectoryCreate {
		path: dir.to_path_buf(),
		source,
	})
}
