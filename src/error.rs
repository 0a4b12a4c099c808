use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while running a batch conversion.
///
/// Directory errors are fatal when they concern the source root or the
/// destination root; everything that happens inside a single file's
/// pipeline is recorded in that file's outcome instead of unwinding.
#[derive(Debug, Error)]
pub enum BatchError {
	/// A directory could not be read during discovery.
	#[error("cannot read directory {}: {source}", path.display())]
	DirectoryAccess { path: PathBuf, source: io::Error },

	/// A destination directory could not be created.
	#[error("cannot create directory {}: {source}", path.display())]
	DirectoryCreate { path: PathBuf, source: io::Error },

	/// Converting a single file failed.
	#[error("failed to convert {}: {reason}", path.display())]
	Conversion { path: PathBuf, reason: String },
}
