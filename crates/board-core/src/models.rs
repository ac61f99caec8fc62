//! Board Models
//!
//! Records persisted to the key-value store. Field names follow the stored
//! JSON layout, so they double as the wire format.

use serde::{Deserialize, Serialize};

/// Priority a fresh details editor starts with
pub const DEFAULT_PRIORITY: &str = "1";

/// Priority options offered by the details editor (value, label)
pub const PRIORITY_LEVELS: &[(&str, &str)] = &[("1", "Low"), ("2", "Medium"), ("3", "High")];

/// A file attached to a project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub name: String,
    /// Full data URL, `data:<media-type>;base64,<payload>`
    pub base64: String,
}

impl ProjectFile {
    pub fn new(name: impl Into<String>, data_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base64: data_url.into(),
        }
    }

    /// Content identity of the attachment, hex blake3 of the data URL
    pub fn fingerprint(&self) -> String {
        blake3::hash(self.base64.as_bytes()).to_hex().to_string()
    }
}

/// A project card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub task: String,
    /// Attachments in upload order
    #[serde(default)]
    pub files: Vec<ProjectFile>,
}

impl Project {
    pub fn new(id: u32, name: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            task: task.into(),
            files: Vec::new(),
        }
    }

    /// Label shown on the card and in the details editor.
    /// Falls back to "Project <id>" while the name is blank.
    pub fn title(&self) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            format!("Project {}", self.id)
        } else {
            name.to_string()
        }
    }
}

/// Auxiliary per-project metadata edited in the details view.
///
/// Stored under its own key, parallel to the board snapshot. Every field
/// defaults individually so partial objects still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalData {
    pub description: String,
    pub comment: String,
    pub priority: String,
    /// `YYYY-MM-DD`, empty when unset
    pub deadline: String,
}

impl Default for ModalData {
    fn default() -> Self {
        Self {
            description: String::new(),
            comment: String::new(),
            priority: DEFAULT_PRIORITY.to_string(),
            deadline: String::new(),
        }
    }
}

impl ModalData {
    /// An empty stored priority reads back as the default one
    pub(crate) fn normalized(mut self) -> Self {
        if self.priority.trim().is_empty() {
            self.priority = DEFAULT_PRIORITY.to_string();
        }
        self
    }
}
