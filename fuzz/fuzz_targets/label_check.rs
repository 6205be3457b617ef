//! Fuzz target for the label checks, including reference resolution.
//!
//! The input is split at the first NUL byte into a catalog and a label file.

#![no_main]

use std::path::Path;

use iconkit::catalog::{from_catalog_str, CatalogKind};
use iconkit::check::{check_catalog, check_labels};
use iconkit::labels::from_label_str;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (catalog_xml, labels_xml) = text.split_once('\0').unwrap_or((text, "<list/>"));

    let (Ok(catalog), Ok(labels)) = (
        from_catalog_str(catalog_xml, CatalogKind::Default),
        from_label_str(labels_xml),
    ) else {
        return;
    };

    let path = Path::new("fuzz.xml");
    let (_, vocabulary) = check_catalog(path, &catalog, None);
    let _ = check_labels(path, &labels, &vocabulary, Some(&labels)).to_string();
});
