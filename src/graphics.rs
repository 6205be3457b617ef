//! Icon graphics files.
//!
//! Every catalog icon has a vector drawing stored as `<id>.svg` in the
//! graphics folder. Anything else in that folder (notes, drafts, files being
//! renamed) is ignored rather than treated as an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::IconId;
use crate::error::IconkitError;
use crate::xml::{parse_document, read_file};

/// Extension of icon graphics files.
pub const SVG_EXTENSION: &str = "svg";

/// Returns the icon ID encoded in a graphics file name.
///
/// Only names made of ASCII digits followed by `.svg` qualify.
pub fn numbered_svg_id(file_name: &str) -> Option<IconId> {
    let stem = file_name.strip_suffix(".svg")?;
    let is_numbered = !stem.is_empty() && stem.bytes().all(|b| b.is_ascii_digit());
    if !is_numbered {
        return None;
    }
    stem.parse::<IconId>().ok()
}

/// Returns true if a path has the SVG extension (case-insensitive).
pub fn has_svg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(SVG_EXTENSION))
        .unwrap_or(false)
}

/// Index the numbered graphics files directly inside `dir`.
pub fn scan_numbered_svgs(dir: &Path) -> Result<BTreeMap<IconId, PathBuf>, IconkitError> {
    let entries = fs::read_dir(dir).map_err(|source| IconkitError::FileRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = BTreeMap::new();
    for entry in entries {
        let entry = entry.map_err(IconkitError::Io)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(id) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(numbered_svg_id)
        else {
            continue;
        };
        files.insert(id, path);
    }

    tracing::debug!(dir = %dir.display(), files = files.len(), "scanned graphics folder");
    Ok(files)
}

/// Drawing data of an SVG file made of a single `<path>`.
pub fn read_single_path(path: &Path) -> Result<String, IconkitError> {
    let xml = read_file(path)?;
    single_path_data(&xml, path)
}

/// Extract the `d` attribute of the only `<path>` element, in any namespace.
pub fn single_path_data(xml: &str, path: &Path) -> Result<String, IconkitError> {
    let document = parse_document(xml, path)?;
    let paths: Vec<_> = document
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "path")
        .collect();

    match paths.as_slice() {
        [only] => only
            .attribute("d")
            .map(ToOwned::to_owned)
            .ok_or_else(|| IconkitError::SvgInvalid {
                path: path.to_path_buf(),
                message: "<path> has no d attribute".to_string(),
            }),
        other => Err(IconkitError::SvgInvalid {
            path: path.to_path_buf(),
            message: format!("expected exactly one <path>, found {}", other.len()),
        }),
    }
}
