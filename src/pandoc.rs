#![forbid(unsafe_code)]

use std::path::Path;
use std::process::Stdio;

use log::debug;
use tokio::process::Command;

use crate::error::BatchError;

/// Executable looked up on `PATH` for every invocation.
const CONVERTER: &str = "pandoc";
/// Value passed to pandoc's `-t` flag.
const OUTPUT_FORMAT: &str = "html";

/// Convert one Markdown file to HTML by invoking pandoc.
///
/// Waits for the subprocess to exit; no timeout is applied, so a hung
/// pandoc hangs the batch. On failure the output file may be absent,
/// empty, or partially written — callers get no guarantee about it.
pub async fn convert_file(input: &Path, output: &Path) -> Result<(), BatchError> {
	debug!("{CONVERTER} {} -> {}", input.display(), output.display());

	let status = Command::new(CONVERTER)
		.arg(input)
		.args(["-t", OUTPUT_FORMAT, "-o"])
		.arg(output)
		.stdin(Stdio::null())
		.status()
		.await
		.map_err(|e| conversion_error(input, e.to_string()))?;

	if !status.success() {
		return Err(conversion_error(input, format!("{CONVERTER} exited with {status}")));
	}

	Ok(())
}

fn conversion_error(input: &Path, reason: String) -> BatchError {
	BatchError::Conversion {
		path: input.to_path_buf(),
		reason,
	}
}
