use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Where an export currently is. Reported by the export engine and only
/// displayed by the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportStage {
    #[default]
    Init,
    Migration,
    Starting,
    ExportingFiles,
    TrashingDeletedFiles,
    RenamingCollectionFolders,
    TrashingDeletedCollections,
    Finished,
}

impl Display for ExportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportStage::Init => "INIT",
            ExportStage::Migration => "MIGRATION",
            ExportStage::Starting => "STARTING",
            ExportStage::ExportingFiles => "EXPORTING_FILES",
            ExportStage::TrashingDeletedFiles => "TRASHING_DELETED_FILES",
            ExportStage::RenamingCollectionFolders => "RENAMING_COLLECTION_FOLDERS",
            ExportStage::TrashingDeletedCollections => "TRASHING_DELETED_COLLECTIONS",
            ExportStage::Finished => "FINISHED",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ExportStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INIT" => Ok(ExportStage::Init),
            "MIGRATION" => Ok(ExportStage::Migration),
            "STARTING" => Ok(ExportStage::Starting),
            "EXPORTING_FILES" => Ok(ExportStage::ExportingFiles),
            "TRASHING_DELETED_FILES" => Ok(ExportStage::TrashingDeletedFiles),
            "RENAMING_COLLECTION_FOLDERS" => Ok(ExportStage::RenamingCollectionFolders),
            "TRASHING_DELETED_COLLECTIONS" => Ok(ExportStage::TrashingDeletedCollections),
            "FINISHED" => Ok(ExportStage::Finished),
            _ => Err(format!("Unknown export stage: {}", s)),
        }
    }
}

/// Files exported so far out of the total planned for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportProgress {
    pub current: u64,
    pub total: u64,
}

impl ExportProgress {
    pub fn new(current: u64, total: u64) -> Self {
        Self { current, total }
    }

    /// Rounded completion in `0..=100`. An empty export reads as 0%, and
    /// overshooting counters are held at 100%.
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        // round-half-up of current * 100 / total
        let current = self.current as u128;
        let total = self.total as u128;
        let rounded = (current * 200 + total) / (total * 2);
        rounded.min(100) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.current >= self.total
    }
}
