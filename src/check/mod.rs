//! Catalog consistency checking.
//!
//! This module cross-validates an icon catalog with its per-language label
//! files, checking for:
//! - Icon problems (duplicate IDs, missing attributes, empty or repeated labels)
//! - Graphics files without icons and icons without graphics files
//! - Labels that are unused, missing, duplicated or badly quoted
//! - Literal values that could be shared through a reference
//! - References to unknown labels or aliases, and references to references
//!
//! Only semantic consistency is checked. Malformed XML aborts the run.

mod catalog;
mod labels;
mod report;

pub use catalog::{
    check_catalog, compare_graphics, find_duplicate_ids, scan_icon_labels, IconLabelScan,
    Vocabulary,
};
pub use labels::{check_labels, has_unescaped_quote, resolve, same_value_groups, Resolution};
pub use report::{CheckReport, Finding, FindingCode, ReportSection, SectionKind, Severity};

use std::path::PathBuf;

use crate::catalog::{read_catalog, CatalogKind};
use crate::error::IconkitError;
use crate::graphics::scan_numbered_svgs;
use crate::labels::{read_label_file, Language};

/// Where to find the files of one check run.
#[derive(Clone, Debug)]
pub struct CheckConfig {
    /// The icon catalog document.
    pub icons_file: PathBuf,
    /// The catalog's graphics folder. Ignored for extra catalogs.
    pub graphics_dir: Option<PathBuf>,
    /// Primary label directory; secondary languages append their suffix.
    pub labels_dir: PathBuf,
    /// Label file name inside each language directory.
    pub labels_file: String,
    /// Languages to check, primary first.
    pub languages: Vec<Language>,
    /// Set when checking an extra catalog layered on the default icon set.
    pub extra: Option<DefaultLabels>,
}

impl CheckConfig {
    pub fn catalog_kind(&self) -> CatalogKind {
        if self.extra.is_some() {
            CatalogKind::Extra
        } else {
            CatalogKind::Default
        }
    }
}

/// Label files of the default icon set, which an extra catalog may borrow from.
#[derive(Clone, Debug)]
pub struct DefaultLabels {
    pub labels_dir: PathBuf,
    pub labels_file: String,
    /// Languages the default icon set is translated to.
    pub languages: Vec<Language>,
}

/// Run every check, catalog first, then one label file per language.
///
/// `on_section` is called as soon as each section is complete, so callers
/// can print progress before a later file fails to load.
pub fn run_check<F>(config: &CheckConfig, mut on_section: F) -> Result<CheckReport, IconkitError>
where
    F: FnMut(&ReportSection),
{
    let kind = config.catalog_kind();
    let catalog = read_catalog(&config.icons_file, kind)?;

    let graphics = match (&config.graphics_dir, kind) {
        (Some(dir), CatalogKind::Default) => Some(scan_numbered_svgs(dir)?),
        _ => None,
    };

    let mut report = CheckReport::new();
    let (section, vocabulary) = check_catalog(&config.icons_file, &catalog, graphics.as_ref());
    on_section(&section);
    report.sections.push(section);

    for language in &config.languages {
        let borrowable = match &config.extra {
            Some(default) if default.languages.contains(language) => {
                let path = language.label_path(&default.labels_dir, &default.labels_file);
                tracing::debug!(%language, path = %path.display(), "loading default labels");
                Some(read_label_file(&path)?)
            }
            _ => None,
        };

        let path = language.label_path(&config.labels_dir, &config.labels_file);
        let file = read_label_file(&path)?;
        let section = check_labels(&path, &file, &vocabulary, borrowable.as_ref());
        on_section(&section);
        report.sections.push(section);
    }

    tracing::info!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "check complete"
    );

    Ok(report)
}
