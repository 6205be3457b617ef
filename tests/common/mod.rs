#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub fn iconkit() -> Command {
    Command::cargo_bin("iconkit").expect("iconkit binary")
}

pub fn svg(path_data: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="{path_data}"/></svg>"#
    )
}

/// A repository layout in a temp dir: `icons.xml`, `svg/`, and `xml[-lang]/labels.xml`.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(dir.path().join("svg")).expect("create svg dir");
        Self { dir }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("read output")
    }

    pub fn catalog(&self, contents: &str) -> PathBuf {
        self.write("icons.xml", contents)
    }

    /// `suffix` is `""` for the primary language or `"-fr"` style.
    pub fn labels(&self, suffix: &str, contents: &str) -> PathBuf {
        self.write(&format!("xml{suffix}/labels.xml"), contents)
    }

    pub fn graphics(&self, ids: &[u32]) {
        for id in ids {
            self.write(&format!("svg/{id}.svg"), &svg("M0 0h24v24H0z"));
        }
    }

    /// A `check` command pointed at this workspace, primary language only.
    pub fn check(&self) -> Command {
        let mut cmd = iconkit();
        cmd.arg("check")
            .arg("--icons")
            .arg(self.path("icons.xml"))
            .arg("--svg-dir")
            .arg(self.path("svg"))
            .arg("--labels-dir")
            .arg(self.path("xml"))
            .args(["--labels-file", "labels.xml", "--langs", ""]);
        cmd
    }
}
