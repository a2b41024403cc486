use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pipeline layer in the medallion architecture.
///
/// Data moves raw -> refined -> optimized -> business, gaining structure and
/// quality guarantees at each step. The lowercase form names directories in
/// the store; the uppercase form prefixes technical ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaKind {
    Raw,
    Refined,
    Optimized,
    Business,
}

impl AreaKind {
    /// Directory name under the store root.
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaKind::Raw => "raw",
            AreaKind::Refined => "refined",
            AreaKind::Optimized => "optimized",
            AreaKind::Business => "business",
        }
    }

    /// Uppercase form used in technical ids (`REFINED.DRUGS_0`).
    pub fn code(&self) -> &'static str {
        match self {
            AreaKind::Raw => "RAW",
            AreaKind::Refined => "REFINED",
            AreaKind::Optimized => "OPTIMIZED",
            AreaKind::Business => "BUSINESS",
        }
    }
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AreaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Ok(AreaKind::Raw),
            "refined" => Ok(AreaKind::Refined),
            "optimized" => Ok(AreaKind::Optimized),
            "business" => Ok(AreaKind::Business),
            _ => Err(format!("Unknown area: {}", s)),
        }
    }
}

/// Dataset name within an area.
///
/// The same kind can exist in several areas (drugs has a refined and an
/// optimized edition); `DatasetId` pairs the kind with its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    ClinicalTrial,
    Drugs,
    Pubmed,
    Journal,
    Publication,
    Mention,
}

impl DatasetKind {
    /// File-name form (`clinical_trial.csv`, `mention.ipc`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::ClinicalTrial => "clinical_trial",
            DatasetKind::Drugs => "drugs",
            DatasetKind::Pubmed => "pubmed",
            DatasetKind::Journal => "journal",
            DatasetKind::Publication => "publication",
            DatasetKind::Mention => "mention",
        }
    }

    /// Uppercase form used in technical ids (`OPTIMIZED.PUBLICATION_4`).
    pub fn code(&self) -> &'static str {
        match self {
            DatasetKind::ClinicalTrial => "CLINICAL_TRIAL",
            DatasetKind::Drugs => "DRUGS",
            DatasetKind::Pubmed => "PUBMED",
            DatasetKind::Journal => "JOURNAL",
            DatasetKind::Publication => "PUBLICATION",
            DatasetKind::Mention => "MENTION",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of one dataset in the lake: an area plus a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DatasetId {
    pub area: AreaKind,
    pub kind: DatasetKind,
}

impl DatasetId {
    pub fn new(area: AreaKind, kind: DatasetKind) -> Self {
        Self { area, kind }
    }

    /// Technical-id prefix for rows of this dataset (`BUSINESS.MENTION`).
    pub fn id_prefix(&self) -> String {
        format!("{}.{}", self.area.code(), self.kind.code())
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.area, self.kind)
    }
}

/// Physical encoding of a dataset on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataFormat {
    Csv,
    Json,
    /// Arrow IPC, the binary table representation.
    Ipc,
}

impl DataFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DataFormat::Csv => "csv",
            DataFormat::Json => "json",
            DataFormat::Ipc => "ipc",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}
