//! Fuzz target for icon catalog parsing.
//!
//! Arbitrary text is parsed as both a default and an extra catalog; the
//! parser must return an error rather than panic.

#![no_main]

use iconkit::catalog::{from_catalog_str, CatalogKind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }
    let Ok(xml) = std::str::from_utf8(data) else {
        return;
    };

    let _ = from_catalog_str(xml, CatalogKind::Default);
    let _ = from_catalog_str(xml, CatalogKind::Extra);
});
