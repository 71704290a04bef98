use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Content of the hands-on walk-through page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalkthroughInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub walkthroughs: Vec<WalkthroughCard>,
}

/// One hands-on session, linking out to its own material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkthroughCard {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Image path relative to the site root, or an absolute URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub link: String,
}

/// Read a walk-through data file.
///
/// A file that does not exist yet is `Ok(None)`; the page then renders with
/// placeholder text and no cards. Malformed JSON is an error.
pub fn load_walkthrough<P: AsRef<Path>>(path: P) -> Result<Option<WalkthroughInfo>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| Error::InvalidData(format!("walkthrough {}: {}", path.display(), e)))
}
