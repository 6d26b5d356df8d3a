use std::fs;
use std::path::{Path, PathBuf};

use crate::normalize::normalize;
use crate::render::{GradesSummary, ReadmeDoc, render_readme};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Output exists: {0} (use --overwrite)")]
    OutputExists(PathBuf),
}

/// Load and deserialize a `readme.toml` record
pub fn load_doc(path: &Path) -> Result<ReadmeDoc, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(IoError::Io)?;
    toml::from_str(&raw).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Find the TOML inputs under a path.
///
/// A file is taken as-is. For a directory, `readme.toml` files win; only
/// when none exist does the scan fall back to every `*.toml`. Results are
/// sorted for stable batch output.
pub fn discover_inputs(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.exists() {
        return Err(IoError::NotFound(root.to_path_buf()));
    }
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut readmes = Vec::new();
    scan_directory_recursive(root, &mut readmes, &|name| name == "readme.toml")?;
    if !readmes.is_empty() {
        readmes.sort();
        return Ok(readmes);
    }

    let mut tomls = Vec::new();
    scan_directory_recursive(root, &mut tomls, &|name| name.ends_with(".toml"))?;
    tomls.sort();
    Ok(tomls)
}

fn scan_directory_recursive(
    dir: &Path,
    files: &mut Vec<PathBuf>,
    matches: &dyn Fn(&str) -> bool,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files, matches)?;
        } else if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && matches(name)
        {
            files.push(path);
        }
    }

    Ok(())
}

/// The README path a TOML input converts to.
///
/// `readme.toml` maps to a sibling `README.md`; any other stem maps to
/// `<stem>_README.md` so batch runs over mixed directories cannot collide.
pub fn default_out_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    if name.eq_ignore_ascii_case("readme.toml") {
        return input.with_file_name("README.md");
    }
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_README.md"))
}

/// Render the normalized README for a TOML input, picking up any
/// `grades_summary.json` near it.
pub fn render_from_path(input: &Path) -> Result<String, IoError> {
    let doc = load_doc(input)?;
    let grades = GradesSummary::load_near(input);
    Ok(normalize(&render_readme(&doc, &grades)))
}

/// Convert one TOML input to a README file.
///
/// Refuses to clobber an existing output unless `overwrite` is set.
pub fn convert_one(input: &Path, output: &Path, overwrite: bool) -> Result<(), IoError> {
    let md = render_from_path(input)?;
    if output.exists() && !overwrite {
        return Err(IoError::OutputExists(output.to_path_buf()));
    }
    fs::write(output, md).map_err(IoError::Io)
}
