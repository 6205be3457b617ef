//! Catalog pass: icon IDs, label lists and graphics files.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use super::report::{FindingCode, ReportSection, SectionKind};
use crate::catalog::{is_private_label, Catalog, IconId};

/// Distinct non-private label names used by at least one icon.
pub type Vocabulary = BTreeSet<String>;

/// Check a parsed catalog and collect its label vocabulary.
///
/// `graphics` is the index of the catalog's graphics folder. Pass `None` for
/// an extra catalog, which does not own one; the file comparison is skipped.
pub fn check_catalog(
    path: &Path,
    catalog: &Catalog,
    graphics: Option<&BTreeMap<IconId, PathBuf>>,
) -> (ReportSection, Vocabulary) {
    let mut section = ReportSection::new(SectionKind::IconFile, path);
    let labels = scan_icon_labels(catalog);

    let ids: Vec<IconId> = catalog.icons().map(|icon| icon.id).collect();
    section.push(FindingCode::DuplicateIconId, find_duplicate_ids(ids));

    if let Some(files) = graphics {
        let known: BTreeSet<IconId> = catalog
            .icons()
            .map(|icon| icon.id)
            .chain(catalog.incomplete.iter().filter_map(|icon| icon.id))
            .collect();
        let (unused, missing) = compare_graphics(&known, files);
        section.push(FindingCode::UnusedSvgFile, unused);
        section.push(FindingCode::MissingSvgFile, missing);
    }

    section.push(
        FindingCode::MissingAttributes,
        catalog.incomplete.iter().map(|icon| icon.locator()),
    );
    section.push(FindingCode::EmptyLabel, &labels.empty_label_icons);
    section.push(FindingCode::DuplicateIconLabel, &labels.duplicate_label_icons);

    tracing::debug!(
        path = %path.display(),
        vocabulary = labels.vocabulary.len(),
        findings = section.findings.len(),
        "checked icon catalog"
    );

    (section, labels.vocabulary)
}

/// Result of splitting every icon's label list.
#[derive(Debug, Default)]
pub struct IconLabelScan {
    pub vocabulary: Vocabulary,
    /// Icons with at least one empty label segment, each listed once.
    pub empty_label_icons: BTreeSet<IconId>,
    /// Icons listing the same label more than once, each listed once.
    pub duplicate_label_icons: BTreeSet<IconId>,
}

pub fn scan_icon_labels(catalog: &Catalog) -> IconLabelScan {
    let mut scan = IconLabelScan::default();

    for icon in catalog.icons() {
        let mut seen: HashSet<&str> = HashSet::new();
        for label in &icon.labels {
            if label.is_empty() {
                scan.empty_label_icons.insert(icon.id);
            } else if !seen.insert(label.as_str()) {
                scan.duplicate_label_icons.insert(icon.id);
            } else if !is_private_label(label) {
                scan.vocabulary.insert(label.clone());
            }
        }
    }

    scan
}

/// IDs appearing at least twice, each reported once, in ascending order.
pub fn find_duplicate_ids<I>(ids: I) -> Vec<IconId>
where
    I: IntoIterator<Item = IconId>,
{
    let mut ids: Vec<IconId> = ids.into_iter().collect();
    ids.sort_unstable();

    let mut duplicates: Vec<IconId> = ids
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| pair[0])
        .collect();
    duplicates.dedup();
    duplicates
}

/// Compare catalog IDs with the graphics folder.
///
/// Returns `(unused, missing)`: files with no icon, and icons with no file,
/// both in ascending order.
pub fn compare_graphics(
    known: &BTreeSet<IconId>,
    files: &BTreeMap<IconId, PathBuf>,
) -> (Vec<IconId>, Vec<IconId>) {
    let unused = files
        .keys()
        .filter(|id| !known.contains(*id))
        .copied()
        .collect();
    let missing = known
        .iter()
        .filter(|id| !files.contains_key(*id))
        .copied()
        .collect();
    (unused, missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{from_catalog_str, CatalogKind};

    fn catalog(xml: &str) -> Catalog {
        from_catalog_str(xml, CatalogKind::Default).expect("parse catalog")
    }

    #[test]
    fn reports_duplicate_icon_id() {
        let catalog = catalog(
            r#"<list><category id="0" name="a">
                <icon id="1" labels="home,_internal" path="M0"/>
                <icon id="1" labels="back" path="M0"/>
            </category></list>"#,
        );
        let (section, vocabulary) = check_catalog(Path::new("icons.xml"), &catalog, None);
        assert_eq!(section.items(FindingCode::DuplicateIconId), ["1"]);
        assert_eq!(
            vocabulary.into_iter().collect::<Vec<_>>(),
            vec!["back".to_string(), "home".to_string()]
        );
    }

    #[test]
    fn empty_label_reported_once_per_icon() {
        let catalog = catalog(
            r#"<list><category id="0" name="a">
                <icon id="4" labels="a,,b," path="M0"/>
                <icon id="2" labels=",c" path="M0"/>
            </category></list>"#,
        );
        let (section, _) = check_catalog(Path::new("icons.xml"), &catalog, None);
        assert_eq!(section.items(FindingCode::EmptyLabel), ["2", "4"]);
    }

    #[test]
    fn duplicate_label_within_icon() {
        let catalog = catalog(
            r#"<list><category id="0" name="a">
                <icon id="3" labels="car,auto,car,car" path="M0"/>
                <icon id="5" labels="car" path="M0"/>
            </category></list>"#,
        );
        let (section, vocabulary) = check_catalog(Path::new("icons.xml"), &catalog, None);
        assert_eq!(section.items(FindingCode::DuplicateIconLabel), ["3"]);
        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn missing_attributes_are_reported_and_skipped() {
        let catalog = catalog(
            r#"<list><category id="0" name="a">
                <icon id="8" labels="x"/>
                <icon id="9" labels="y" path="M0"/>
            </category></list>"#,
        );
        let (section, vocabulary) = check_catalog(Path::new("icons.xml"), &catalog, None);
        assert_eq!(section.items(FindingCode::MissingAttributes), ["8"]);
        assert!(!vocabulary.contains("x"));
    }

    #[test]
    fn graphics_comparison_reports_unused_and_missing() {
        let catalog = catalog(
            r#"<list><category id="0" name="a">
                <icon id="1" labels="a" path="M0"/>
                <icon id="2" labels="b" path="M0"/>
            </category></list>"#,
        );
        let files: BTreeMap<IconId, PathBuf> = [1u32, 7]
            .into_iter()
            .map(|id| (IconId(id), PathBuf::from(format!("{id}.svg"))))
            .collect();

        let (section, _) = check_catalog(Path::new("icons.xml"), &catalog, Some(&files));
        assert_eq!(section.items(FindingCode::UnusedSvgFile), ["7"]);
        assert_eq!(section.items(FindingCode::MissingSvgFile), ["2"]);
    }

    #[test]
    fn find_duplicate_ids_reports_each_value_once() {
        let ids = [5u32, 1, 5, 3, 5, 1].map(IconId);
        assert_eq!(find_duplicate_ids(ids), vec![IconId(1), IconId(5)]);
        assert!(find_duplicate_ids(Vec::new()).is_empty());
    }
}
