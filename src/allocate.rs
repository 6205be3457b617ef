//! Adding new icons to the catalog.
//!
//! New drawings are dropped in a folder, named after their labels
//! (`arrow_left-thin.svg`). Each one receives the lowest free icon ID, is
//! renamed to `<id>.svg`, and gets a catalog entry ready to be pasted into a
//! category. A file named `$<id>.svg` replaces the drawing of an existing
//! icon instead.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::catalog::{Catalog, IconId, LABEL_SEPARATOR};
use crate::error::IconkitError;
use crate::graphics::{has_svg_extension, read_single_path};
use crate::xml::escape_attr;

/// Marks a file replacing the drawing of an existing icon.
pub const REPLACEMENT_PREFIX: char = '$';

/// Lowest non-negative ID not present in `ids`.
pub fn next_free_id(ids: &BTreeSet<IconId>) -> IconId {
    let mut candidate = 0u32;
    for id in ids {
        if id.as_u32() != candidate {
            break;
        }
        candidate += 1;
    }
    IconId::new(candidate)
}

/// Label list derived from a new icon's file name.
///
/// Everything before the first `.` is split on `-` and `_`.
pub fn labels_from_file_name(file_name: &str) -> String {
    let stem = file_name.split('.').next().unwrap_or_default();
    let separator = LABEL_SEPARATOR.to_string();
    stem.split(['-', '_'])
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// Icon ID targeted by a replacement file name such as `$42.svg`.
///
/// Returns `None` for regular new icons and `Some(Err(..))` when the part
/// after the prefix is not a valid ID.
pub fn replacement_id(file_name: &str) -> Option<Result<IconId, String>> {
    let rest = file_name.strip_prefix(REPLACEMENT_PREFIX)?;
    let digits = rest.split('.').next().unwrap_or_default();
    Some(
        digits
            .parse::<IconId>()
            .map_err(|_| format!("'{digits}' is not a valid icon ID")),
    )
}

/// An icon accepted into the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewIcon {
    pub id: IconId,
    /// `None` for replacements, which keep the existing icon's labels.
    pub labels: Option<String>,
    pub path_data: String,
    pub source: PathBuf,
    pub renamed_to: PathBuf,
}

impl NewIcon {
    pub fn is_replacement(&self) -> bool {
        self.labels.is_none()
    }
}

/// A file that could not be added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of an add run.
#[derive(Clone, Debug, Default)]
pub struct AddReport {
    pub added: Vec<NewIcon>,
    pub skipped: Vec<SkippedFile>,
}

impl AddReport {
    /// Catalog entries for the added icons, one per line.
    ///
    /// Replacement entries carry a `(replaced) ` marker and no labels.
    pub fn to_entries_string(&self) -> String {
        let mut out = String::new();
        for icon in &self.added {
            let written = match &icon.labels {
                Some(labels) => writeln!(
                    out,
                    "<icon id=\"{}\" labels=\"{}\" path=\"{}\"/>",
                    icon.id,
                    escape_attr(labels),
                    escape_attr(&icon.path_data)
                ),
                None => writeln!(
                    out,
                    "(replaced) <icon id=\"{}\" path=\"{}\"/>",
                    icon.id,
                    escape_attr(&icon.path_data)
                ),
            };
            written.expect("write to string");
        }
        out
    }
}

/// Assign IDs to every SVG under `new_dir` and rename the files in place.
///
/// Files are visited in sorted path order so IDs are assigned
/// deterministically. A file without exactly one `<path>` is skipped and
/// keeps its name.
pub fn add_new_icons(catalog: &Catalog, new_dir: &Path) -> Result<AddReport, IconkitError> {
    let mut ids: BTreeSet<IconId> = catalog
        .icons()
        .map(|icon| icon.id)
        .chain(catalog.incomplete.iter().filter_map(|icon| icon.id))
        .collect();

    let files = collect_svg_files(new_dir)?;
    let mut report = AddReport::default();

    for source in files {
        let file_name = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (id, labels) = match replacement_id(&file_name) {
            Some(Ok(id)) => {
                if !ids.contains(&id) {
                    tracing::warn!(%id, file = %source.display(), "replacement for an icon not in the catalog");
                }
                (id, None)
            }
            Some(Err(reason)) => {
                skip(&mut report, source, reason);
                continue;
            }
            None => (next_free_id(&ids), Some(labels_from_file_name(&file_name))),
        };

        let path_data = match read_single_path(&source) {
            Ok(data) => data,
            Err(IconkitError::SvgInvalid { message, .. }) => {
                skip(&mut report, source, message);
                continue;
            }
            Err(err) => return Err(err),
        };

        let renamed_to = source.with_file_name(format!("{id}.svg"));
        fs::rename(&source, &renamed_to).map_err(|err| IconkitError::Rename {
            from: source.clone(),
            to: renamed_to.clone(),
            source: err,
        })?;
        tracing::info!(from = %source.display(), to = %renamed_to.display(), "renamed new icon");

        ids.insert(id);
        report.added.push(NewIcon {
            id,
            labels,
            path_data,
            source,
            renamed_to,
        });
    }

    Ok(report)
}

fn skip(report: &mut AddReport, path: PathBuf, reason: String) {
    tracing::warn!(file = %path.display(), %reason, "skipping new icon");
    report.skipped.push(SkippedFile { path, reason });
}

fn collect_svg_files(dir: &Path) -> Result<Vec<PathBuf>, IconkitError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|source| IconkitError::FileRead {
            path: dir.to_path_buf(),
            source: source.into(),
        })?;
        if entry.file_type().is_file() && has_svg_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
