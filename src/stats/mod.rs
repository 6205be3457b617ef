//! Label usage statistics.
//!
//! Shows which labels are rarely used (candidates for removal) and which
//! icons have few labels (hard to find through search).

mod report;

pub use report::{IconCountGroup, LabelUseGroup, StatsReport};

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{Catalog, IconId};

/// Compute label usage statistics for a catalog. Private labels are ignored.
pub fn label_stats(catalog: &Catalog) -> StatsReport {
    let mut uses: BTreeMap<&str, usize> = BTreeMap::new();
    let mut icons_by_count: BTreeMap<usize, BTreeSet<IconId>> = BTreeMap::new();

    for icon in catalog.icons() {
        let mut count = 0;
        for label in icon.public_labels() {
            *uses.entry(label).or_insert(0) += 1;
            count += 1;
        }
        icons_by_count.entry(count).or_default().insert(icon.id);
    }

    let mut labels_by_uses: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (label, count) in uses {
        labels_by_uses
            .entry(count)
            .or_default()
            .push(label.to_string());
    }

    StatsReport {
        labels_by_uses: labels_by_uses
            .into_iter()
            .map(|(uses, labels)| LabelUseGroup { uses, labels })
            .collect(),
        icons_by_label_count: icons_by_count
            .into_iter()
            .map(|(label_count, icons)| IconCountGroup {
                label_count,
                icons: icons.into_iter().collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{from_catalog_str, CatalogKind};

    #[test]
    fn groups_labels_and_icons() {
        let catalog = from_catalog_str(
            r#"<list><category id="0" name="a">
                <icon id="3" labels="cat,pet,_feline" path="M"/>
                <icon id="1" labels="dog,pet" path="M"/>
                <icon id="2" labels="bird" path="M"/>
                <icon id="0" labels="_hidden" path="M"/>
            </category></list>"#,
            CatalogKind::Default,
        )
        .expect("parse catalog");

        let report = label_stats(&catalog);

        assert_eq!(report.labels_by_uses.len(), 2);
        assert_eq!(report.labels_by_uses[0].uses, 1);
        assert_eq!(report.labels_by_uses[0].labels, vec!["bird", "cat", "dog"]);
        assert_eq!(report.labels_by_uses[1].uses, 2);
        assert_eq!(report.labels_by_uses[1].labels, vec!["pet"]);

        let counts: Vec<(usize, Vec<u32>)> = report
            .icons_by_label_count
            .iter()
            .map(|g| (g.label_count, g.icons.iter().map(|i| i.as_u32()).collect()))
            .collect();
        assert_eq!(counts, vec![(0, vec![0]), (1, vec![2]), (2, vec![1, 3])]);
    }

    #[test]
    fn empty_catalog_has_no_groups() {
        let report = label_stats(&Catalog::default());
        assert!(report.labels_by_uses.is_empty());
        assert!(report.icons_by_label_count.is_empty());
        assert_eq!(report.to_string(), "Labels by uses:\n\nIcons by number of labels:\n");
    }
}
