use std::path::{Path, PathBuf};

use crate::domain::{AreaKind, DataFormat, DatasetKind};

/// On-disk layout of the data lake.
///
/// One directory per area under a single root; a dataset is stored as
/// `{root}/{area}/{kind}.{ext}` with its reject sibling at
/// `{root}/{area}/{kind}_rejected.{ext}`. Graph outputs live at the root.
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn area_dir(&self, area: AreaKind) -> PathBuf {
        self.root.join(area.as_str())
    }

    pub fn dataset_path(&self, area: AreaKind, kind: DatasetKind, format: DataFormat) -> PathBuf {
        self.area_dir(area)
            .join(format!("{}.{}", kind.as_str(), format.extension()))
    }

    pub fn rejected_path(&self, area: AreaKind, kind: DatasetKind, format: DataFormat) -> PathBuf {
        self.area_dir(area)
            .join(format!("{}_rejected.{}", kind.as_str(), format.extension()))
    }

    pub fn flat_json_path(&self) -> PathBuf {
        self.root.join("flat_result.json")
    }

    pub fn dot_path(&self) -> PathBuf {
        self.root.join("graph.dot")
    }
}
