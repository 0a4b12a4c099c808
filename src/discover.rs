#![forbid(unsafe_code)]

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::BatchError;
use crate::paths::SOURCE_SUFFIX;

/// Resolve paths of all Markdown files in a directory and its
/// subdirectories, depth-first.
///
/// Any directory the walk cannot read fails the whole call; there is no
/// best-effort partial listing. Directory symlinks are followed, so a
/// link cycle will recurse until the OS refuses the path.
pub fn find_markdown_files(root: &Path) -> Result<Vec<PathBuf>, BatchError> {
	let mut found = Vec::new();
	walk(root, &mut found)?;

	debug!("discovered {} markdown file(s) under {}", found.len(), root.display());

	Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> Result<(), BatchError> {
	let entries = read_dir(dir).map_err(|source| BatchError::DirectoryAccess {
		path: dir.to_path_buf(),
		source,
	})?;

	for entry in entries {
		let entry = entry.map_err(|source| BatchError::DirectoryAccess {
			path: dir.to_path_buf(),
			source,
		})?;

		let path = entry.path();
		if path.is_dir() {
			walk(&path, found)?;
		} else if is_markdown(&path) {
			found.push(path);
		}
	}

	Ok(())
}

/// Literal, case-sensitive suffix match on the file name, so a file named
/// just `.md` counts too.
fn is_markdown(path: &Path) -> bool {
	path.file_name()
		.and_then(|name| name.to_str())
		.is_some_and(|name| name.ends_with(SOURCE_SUFFIX))
}

#[cfg(test)]
mod tests {
	use super::*;
	use sealed_test::prelude::*;
	use std::fs;

	#[sealed_test]
	fn finds_only_markdown_files() {
		fs::create_dir_all("docs/nested/deeper").unwrap();
		fs::write("docs/a.md", "# a").unwrap();
		fs::write("docs/nested/b.md", "# b").unwrap();
		fs::write("docs/nested/deeper/c.md", "# c").unwrap();
		fs::write("docs/readme.txt", "skip").unwrap();
		fs::write("docs/nested/image.png", "skip").unwrap();

		let found = find_markdown_files(Path::new("docs")).unwrap();

		assert_eq!(found.len(), 3);
		assert!(found.iter().all(|p| p.to_string_lossy().ends_with(".md")));
	}

	#[sealed_test]
	fn finds_a_file_named_just_dot_md() {
		fs::create_dir_all("docs").unwrap();
		fs::write("docs/.md", "# bare").unwrap();

		let found = find_markdown_files(Path::new("docs")).unwrap();

		assert_eq!(found, vec![PathBuf::from("docs/.md")]);
	}

	#[sealed_test]
	fn extension_match_is_case_sensitive() {
		fs::create_dir_all("docs").unwrap();
		fs::write("docs/NOTES.MD", "skip").unwrap();
		fs::write("docs/kept.md", "# kept").unwrap();

		let found = find_markdown_files(Path::new("docs")).unwrap();

		assert_eq!(found, vec![PathBuf::from("docs/kept.md")]);
	}

	#[sealed_test]
	fn empty_tree_yields_no_files() {
		fs::create_dir_all("docs/empty").unwrap();
		assert!(find_markdown_files(Path::new("docs")).unwrap().is_empty());
	}

	#[sealed_test]
	fn missing_root_is_an_access_error() {
		let err = find_markdown_files(Path::new("no-such-dir")).unwrap_err();
		assert!(matches!(err, BatchError::DirectoryAccess { .. }));
	}

	#[sealed_test]
	fn file_root_is_an_access_error() {
		fs::write("not-a-dir", "").unwrap();
		let err = find_markdown_files(Path::new("not-a-dir")).unwrap_err();
		assert!(matches!(err, BatchError::DirectoryAccess { .. }));
	}
}
