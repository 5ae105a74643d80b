use serde::{Deserialize, Serialize};

/// One row of the file listing. `size` is human-readable ("12.34 KB"),
/// `type` is the extension after the last dot, empty when there is none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub kind: String,
}
