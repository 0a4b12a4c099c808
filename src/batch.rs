#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use log::warn;

use crate::discover::find_markdown_files;
use crate::error::BatchError;
use crate::pandoc;
use crate::paths::{ensure_dir, output_name, relative_to};

/// A single source document scheduled for conversion.
#[derive(Debug, Clone)]
pub struct MarkdownFile {
	/// Absolute path of the source document.
	pub source: PathBuf,
	/// Absolute path the converted document will be written to.
	pub destination: PathBuf,
	/// Source path relative to the batch's source root.
	pub relative: PathBuf,
}

/// Result of one attempted conversion.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
	pub source: PathBuf,
	/// Written output path; `None` when the attempt failed before a
	/// destination was produced.
	pub destination: Option<PathBuf>,
	pub error: Option<String>,
}

impl ConversionOutcome {
	pub fn success(&self) -> bool {
		self.error.is_none()
	}
}

/// Convert every Markdown file under `source_root` into `dest_root`,
/// mirroring the directory hierarchy below the source root.
///
/// Returns one outcome per discovered file, in discovery order. A failure
/// inside a single file's pipeline is recorded in that file's outcome and
/// the batch moves on to the next file. Only two errors abort the whole
/// run: discovery failing, and the destination root itself not being
/// creatable. If discovery finds nothing, the destination root is left
/// untouched and the outcome list is empty.
pub async fn convert_folder(source_root: &Path, dest_root: &Path) -> Result<Vec<ConversionOutcome>, BatchError> {
	let sources = find_markdown_files(source_root)?;
	if sources.is_empty() {
		return Ok(Vec::new());
	}

	ensure_dir(dest_root)?;

	let mut outcomes = Vec::with_capacity(sources.len());
	for source in sources {
		let outcome = match convert_one(&source, source_root, dest_root).await {
			Ok(file) => ConversionOutcome {
				source,
				destination: Some(file.destination),
				error: None,
			},
			Err(e) => {
				warn!("{e}");
				ConversionOutcome {
					source,
					destination: None,
					error: Some(e.to_string()),
				}
			}
		};
		outcomes.push(outcome);
	}

	Ok(outcomes)
}

/// Plan where one source file lands under the destination root.
pub fn plan_file(source: &Path, source_root: &Path, dest_root: &Path) -> Result<MarkdownFile, BatchError> {
	let relative = relative_to(source, source_root).map_err(|e| BatchError::Conversion {
		path: source.to_path_buf(),
		reason: e.to_string(),
	})?;

	Ok(MarkdownFile {
		source: source.to_path_buf(),
		destination: dest_root.join(output_name(relative)),
		relative: relative.to_path_buf(),
	})
}

async fn convert_one(source: &Path, source_root: &Path, dest_root: &Path) -> Result<MarkdownFile, BatchError> {
	let file = plan_file(source, source_root, dest_root)?;

	if let Some(parent) = file.destination.parent() {
		ensure_dir(parent)?;
	}

	pandoc::convert_file(&file.source, &file.destination).await?;

	Ok(file)
}
