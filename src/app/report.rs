use crate::app::models::GeneratedFile;
use pathdiff::diff_paths;
use std::path::{Path, PathBuf};

/// Path of `path` relative to `cwd`, or `path` itself when no relative form exists.
fn display_relative(path: &Path, cwd: &Path) -> PathBuf {
    diff_paths(path, cwd).unwrap_or_else(|| path.to_path_buf())
}

pub struct Summary;

impl Summary {
    /// Renders the `Created N files under DIR` header and one indented line
    /// per file, relative to `cwd`.
    pub fn render(files: &[GeneratedFile], out_dir: &Path, cwd: &Path) -> String {
        let mut output = format!("Created {} files under {}", files.len(), out_dir.display());

        for file in files {
            output.push_str(&format!(
                "\n  {}",
                display_relative(&file.path, cwd).display()
            ));
        }

        output
    }
}
