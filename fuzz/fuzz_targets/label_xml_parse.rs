//! Fuzz target for label file parsing and the sorted writer.

#![no_main]

use iconkit::labels::{from_label_str, to_label_xml_string};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }
    let Ok(xml) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(mut file) = from_label_str(xml) {
        file.sort_by_name();
        let written = to_label_xml_string(&file);
        // The canonical layout must always parse back.
        assert!(from_label_str(&written).is_ok());
    }
});
