//! Label file XML reader and writer.
//!
//! ```xml
//! <list>
//!     <label name="home">Home</label>
//!     <label name="car">
//!         <alias>Car</alias>
//!         <alias>@label/automobile</alias>
//!     </label>
//! </list>
//! ```

use std::fmt::Write as _;
use std::path::Path;

use super::model::{Label, LabelBody, LabelFile, LabelValue};
use crate::error::IconkitError;
use crate::xml::{child_elements, element_text, escape_attr, escape_text, parse_document, read_file};

/// Read one language's label file from disk.
pub fn read_label_file(path: &Path) -> Result<LabelFile, IconkitError> {
    let xml = read_file(path)?;
    parse_label_str(&xml, path)
}

/// Parse a label file held in memory.
pub fn from_label_str(xml: &str) -> Result<LabelFile, IconkitError> {
    parse_label_str(xml, Path::new("<memory>"))
}

fn parse_label_str(xml: &str, path: &Path) -> Result<LabelFile, IconkitError> {
    let document = parse_document(xml, path)?;

    let mut labels = Vec::new();
    for (position, node) in child_elements(document.root_element(), "label").enumerate() {
        let name = node
            .attribute("name")
            .ok_or_else(|| IconkitError::LabelsInvalid {
                path: path.to_path_buf(),
                message: format!("<label> #{position} has no name attribute"),
            })?;

        let aliases: Vec<LabelValue> = child_elements(node, "alias")
            .map(|alias| LabelValue::parse(&element_text(alias)))
            .collect();

        let body = if aliases.is_empty() {
            LabelBody::Value(LabelValue::parse(&element_text(node)))
        } else {
            LabelBody::Aliases(aliases)
        };

        labels.push(Label {
            name: name.to_string(),
            body,
        });
    }

    tracing::debug!(path = %path.display(), labels = labels.len(), "parsed label file");
    Ok(LabelFile::new(labels))
}

/// Render a label file in the canonical layout used by the repository.
pub fn to_label_xml_string(file: &LabelFile) -> String {
    let mut xml = String::new();
    writeln!(xml, "<?xml version=\"1.0\" encoding=\"utf-8\"?>").expect("write to string");
    writeln!(xml, "<list>").expect("write to string");
    writeln!(xml).expect("write to string");

    for label in &file.labels {
        write!(xml, "    <label name=\"{}\">", escape_attr(&label.name)).expect("write to string");
        match &label.body {
            LabelBody::Value(value) => {
                write!(xml, "{}", escape_text(value.text())).expect("write to string");
            }
            LabelBody::Aliases(aliases) => {
                writeln!(xml).expect("write to string");
                for alias in aliases {
                    writeln!(xml, "        <alias>{}</alias>", escape_text(alias.text()))
                        .expect("write to string");
                }
                write!(xml, "    ").expect("write to string");
            }
        }
        writeln!(xml, "</label>").expect("write to string");
    }

    writeln!(xml).expect("write to string");
    writeln!(xml, "</list>").expect("write to string");
    xml
}
