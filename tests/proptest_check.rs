use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use iconkit::allocate::next_free_id;
use iconkit::catalog::{from_catalog_str, to_catalog_xml_string, Category, CatalogKind, Icon, IconId};
use iconkit::check::{check_labels, find_duplicate_ids, FindingCode};
use iconkit::labels::{from_label_str, to_label_xml_string, Label, LabelFile};
use iconkit::regen::regenerate;
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

fn arb_label() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

/// Categories with distinct IDs holding icons with distinct IDs.
fn arb_categories() -> impl Strategy<Value = Vec<Category>> {
    prop::collection::btree_set(0u32..200, 0..30)
        .prop_flat_map(|ids| {
            let ids: Vec<u32> = ids.into_iter().collect();
            let n = ids.len();
            (
                Just(ids),
                prop::collection::vec(0u32..4, n),
                prop::collection::vec(prop::collection::vec(arb_label(), 1..4), n),
            )
        })
        .prop_map(|(ids, categories, labels)| {
            let mut grouped: BTreeMap<u32, Vec<Icon>> = BTreeMap::new();
            for ((id, category), labels) in ids.into_iter().zip(categories).zip(labels) {
                grouped.entry(category).or_default().push(Icon::new(
                    id,
                    category,
                    &labels.join(","),
                    format!("M{id}"),
                ));
            }
            grouped
                .into_iter()
                .map(|(id, icons)| {
                    let mut category = Category::new(id, format!("c{id}"));
                    category.icons = icons;
                    category
                })
                .collect()
        })
}

/// Literals (some with quotes), local and cross-catalog references, and
/// malformed references, over a small name space so they often resolve.
fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-C][a-c']{0,3}",
        "[a-h]".prop_map(|target| format!("@label/{target}")),
        ("[a-h]", 0usize..3).prop_map(|(target, alias)| format!("@label/{target}${alias}")),
        "[a-h]".prop_map(|target| format!("@icdlabel/{target}")),
        Just("@unknown/a".to_string()),
    ]
}

fn arb_label_def() -> impl Strategy<Value = Label> {
    prop_oneof![
        ("[a-h]", arb_value()).prop_map(|(name, value)| Label::with_value(name, &value)),
        ("[a-h]", prop::collection::vec(arb_value(), 1..3)).prop_map(|(name, values)| {
            let aliases: Vec<&str> = values.iter().map(String::as_str).collect();
            Label::with_aliases(name, &aliases)
        }),
    ]
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn duplicate_ids_are_order_independent_and_unique(
        ids in prop::collection::vec(0u32..50, 0..60),
        seed in any::<u64>(),
    ) {
        let forward = find_duplicate_ids(ids.iter().copied().map(IconId));

        let mut shuffled = ids.clone();
        let len = shuffled.len();
        if len > 1 {
            shuffled.rotate_left((seed % len as u64) as usize);
            shuffled.reverse();
        }
        let reordered = find_duplicate_ids(shuffled.into_iter().map(IconId));
        prop_assert_eq!(&forward, &reordered);

        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        for id in &ids {
            *counts.entry(*id).or_insert(0) += 1;
        }
        let expected: Vec<IconId> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(id, _)| IconId(id))
            .collect();
        prop_assert_eq!(forward, expected);
    }

    #[test]
    fn next_free_id_is_lowest_unused(ids in prop::collection::btree_set(0u32..40, 0..40)) {
        let set: BTreeSet<IconId> = ids.iter().copied().map(IconId).collect();
        let next = next_free_id(&set);

        prop_assert!(!set.contains(&next));
        for lower in 0..next.as_u32() {
            prop_assert!(set.contains(&IconId(lower)));
        }
    }

    #[test]
    fn regenerated_ids_are_dense_and_stable(categories in arb_categories()) {
        let xml = to_catalog_xml_string(&categories);
        let catalog = from_catalog_str(&xml, CatalogKind::Default).expect("parse generated catalog");
        let path = std::path::Path::new("icons.xml");

        let first = regenerate(&catalog, path).expect("regenerate");
        let new_ids: Vec<u32> = first
            .categories
            .iter()
            .flat_map(|c| c.icons.iter().map(|i| i.id.as_u32()))
            .collect();
        let expected: Vec<u32> = (0..new_ids.len() as u32).collect();
        prop_assert_eq!(new_ids, expected);

        // Regenerating a regenerated catalog changes nothing.
        let reparsed = from_catalog_str(&to_catalog_xml_string(&first.categories), CatalogKind::Default)
            .expect("parse regenerated catalog");
        let second = regenerate(&reparsed, path).expect("regenerate twice");
        prop_assert!(second.renumbered.iter().all(|(old, new)| old == new));
        prop_assert_eq!(
            to_catalog_xml_string(&first.categories),
            to_catalog_xml_string(&second.categories)
        );
    }

    #[test]
    fn label_report_sets_are_disjoint_and_stable(
        vocabulary in prop::collection::btree_set("[a-h]", 0..8),
        labels in prop::collection::vec(arb_label_def(), 0..12),
        default_labels in prop::option::of(prop::collection::vec(arb_label_def(), 0..4)),
    ) {
        let file = LabelFile::new(labels);
        let borrowable = default_labels.map(LabelFile::new);
        let path = Path::new("labels.xml");

        let section = check_labels(path, &file, &vocabulary, borrowable.as_ref());

        let defined: BTreeSet<&str> = file.labels.iter().map(|l| l.name.as_str()).collect();
        let borrowed: BTreeSet<&str> = borrowable
            .iter()
            .flat_map(|default| default.labels.iter().map(|l| l.name.as_str()))
            .collect();

        for name in section.items(FindingCode::UnusedLabel) {
            prop_assert!(!vocabulary.contains(name), "unused label {} is used", name);
            prop_assert!(defined.contains(name.as_str()));
        }
        for name in section.items(FindingCode::MissingLabel) {
            prop_assert!(vocabulary.contains(name));
            prop_assert!(!defined.contains(name.as_str()), "missing label {} is defined", name);
            prop_assert!(!borrowed.contains(name.as_str()));
        }

        // The same input, in memory or written and read back, gives the same text.
        let again = check_labels(path, &file, &vocabulary, borrowable.as_ref());
        prop_assert_eq!(section.to_string(), again.to_string());

        let reparsed = from_label_str(&to_label_xml_string(&file)).expect("parse written labels");
        let from_disk = check_labels(path, &reparsed, &vocabulary, borrowable.as_ref());
        prop_assert_eq!(section.to_string(), from_disk.to_string());
    }
}
