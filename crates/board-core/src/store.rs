//! Persistence Store
//!
//! The board snapshot and per-project modal data live in a flat, synchronous
//! key-value namespace. `KeyValueStore` abstracts that namespace so the
//! browser's `localStorage` and the in-memory fake are interchangeable.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::StoreError;
use crate::models::{ModalData, Project};

/// Synchronous string key-value storage
pub trait KeyValueStore {
    /// Read a key, `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a key, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&self, key: &str);
}

/// Key layout of the persisted state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Key holding the full board snapshot
    pub board: String,
    /// Prefix of the per-project modal data keys
    pub modal_prefix: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            board: "projects".to_string(),
            modal_prefix: "modalData_".to_string(),
        }
    }
}

impl StorageKeys {
    pub fn modal_data(&self, project_id: u32) -> String {
        format!("{}{}", self.modal_prefix, project_id)
    }
}

/// Typed access to the board state on top of a `KeyValueStore`
#[derive(Debug, Clone)]
pub struct BoardStore<S> {
    backend: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> BoardStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_keys(backend, StorageKeys::default())
    }

    pub fn with_keys(backend: S, keys: StorageKeys) -> Self {
        Self { backend, keys }
    }

    /// Replace the stored snapshot with `projects`, in display order
    pub fn save_board(&self, projects: &[Project]) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(projects).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.backend.set(&self.keys.board, &json)?;
        log::debug!("[STORE] Saved {} projects", projects.len());
        Ok(())
    }

    /// Load the snapshot. Absent or unparsable data reads as an empty board.
    pub fn load_board(&self) -> Vec<Project> {
        let Some(raw) = self.backend.get(&self.keys.board) else {
            return Vec::new();
        };
        match serde_json::from_str::<Option<Vec<Project>>>(&raw) {
            Ok(projects) => projects.unwrap_or_default(),
            Err(e) => {
                log::warn!("[STORE] Ignoring unreadable board snapshot: {}", e);
                Vec::new()
            }
        }
    }

    pub fn save_modal_data(&self, project_id: u32, data: &ModalData) -> Result<(), StoreError> {
        let json = serde_json::to_string(data).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.backend.set(&self.keys.modal_data(project_id), &json)?;
        log::debug!("[STORE] Saved modal data for project {}", project_id);
        Ok(())
    }

    /// Load modal data for a project, defaults when absent or unparsable
    pub fn load_modal_data(&self, project_id: u32) -> ModalData {
        let key = self.keys.modal_data(project_id);
        let Some(raw) = self.backend.get(&key) else {
            return ModalData::default();
        };
        match serde_json::from_str::<Option<ModalData>>(&raw) {
            Ok(data) => data.unwrap_or_default().normalized(),
            Err(e) => {
                log::warn!("[STORE] Ignoring unreadable '{}': {}", key, e);
                ModalData::default()
            }
        }
    }

    pub fn delete_modal_data(&self, project_id: u32) {
        self.backend.remove(&self.keys.modal_data(project_id));
    }
}

// ========================
// In-memory backend
// ========================

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    writes: usize,
    read_only: bool,
}

/// In-memory `KeyValueStore`.
///
/// Clones share the same entries, so a caller can keep a handle while a
/// `BoardStore` owns another one. Counts successful writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryInner> {
        // A poisoned map is still a consistent map
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of successful `set` calls so far
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().entries.contains_key(key)
    }

    /// Reject every following write, as a full browser storage would
    pub fn set_read_only(&self, read_only: bool) {
        self.lock().read_only = read_only;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if inner.read_only {
            return Err(StoreError::WriteRejected {
                key: key.to_string(),
                message: "store is read-only".to_string(),
            });
        }
        inner.entries.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.lock().entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectFile;
    use proptest::prelude::*;

    fn setup_store() -> (MemoryStore, BoardStore<MemoryStore>) {
        let memory = MemoryStore::new();
        (memory.clone(), BoardStore::new(memory))
    }

    #[test]
    fn test_load_board_absent_is_empty() {
        let (_, store) = setup_store();
        assert!(store.load_board().is_empty());
    }

    #[test]
    fn test_load_board_garbage_is_empty() {
        let (memory, store) = setup_store();
        memory.set("projects", "{not json").unwrap();
        assert!(store.load_board().is_empty());

        memory.set("projects", "null").unwrap();
        assert!(store.load_board().is_empty());
    }

    #[test]
    fn test_save_board_replaces_snapshot() {
        let (memory, store) = setup_store();
        store
            .save_board(&[Project::new(1, "a", ""), Project::new(2, "b", "")])
            .unwrap();
        store.save_board(&[Project::new(3, "c", "")]).unwrap();

        let loaded = store.load_board();
        assert_eq!(loaded, vec![Project::new(3, "c", "")]);
        assert_eq!(memory.writes(), 2);
    }

    #[test]
    fn test_save_board_reads_existing_layout() {
        let (memory, store) = setup_store();
        memory
            .set(
                "projects",
                r#"[{"id":2,"name":"Site","task":"Ship it","files":[{"name":"a.txt","base64":"data:text/plain;base64,aGk="}]}]"#,
            )
            .unwrap();

        let loaded = store.load_board();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 2);
        assert_eq!(loaded[0].files[0].name, "a.txt");
    }

    #[test]
    fn test_modal_data_key_layout() {
        let (memory, store) = setup_store();
        let data = ModalData {
            description: "desc".to_string(),
            comment: "note".to_string(),
            priority: "3".to_string(),
            deadline: "2026-12-01".to_string(),
        };
        store.save_modal_data(5, &data).unwrap();

        assert!(memory.contains("modalData_5"));
        assert_eq!(store.load_modal_data(5), data);

        store.delete_modal_data(5);
        assert!(!memory.contains("modalData_5"));
        assert_eq!(store.load_modal_data(5), ModalData::default());
    }

    #[test]
    fn test_modal_data_garbage_is_default() {
        let (memory, store) = setup_store();
        memory.set("modalData_1", "[1, 2").unwrap();
        assert_eq!(store.load_modal_data(1), ModalData::default());
    }

    #[test]
    fn test_custom_keys() {
        let memory = MemoryStore::new();
        let keys = StorageKeys {
            board: "board_v2".to_string(),
            modal_prefix: "details:".to_string(),
        };
        let store = BoardStore::with_keys(memory.clone(), keys);

        store.save_board(&[]).unwrap();
        store.save_modal_data(9, &ModalData::default()).unwrap();
        assert!(memory.contains("board_v2"));
        assert!(memory.contains("details:9"));
        assert!(!memory.contains("projects"));
    }

    #[test]
    fn test_read_only_backend_surfaces_error() {
        let (memory, store) = setup_store();
        memory.set_read_only(true);
        let result = store.save_board(&[Project::new(1, "", "")]);
        assert!(matches!(result, Err(StoreError::WriteRejected { .. })));
        assert_eq!(memory.writes(), 0);
    }

    fn arb_board() -> impl Strategy<Value = Vec<Project>> {
        let file = ("[a-z]{1,8}\\.[a-z]{2,4}", proptest::collection::vec(any::<u8>(), 0..64))
            .prop_map(|(name, bytes)| {
                ProjectFile::new(name, crate::codec::encode("application/octet-stream", &bytes))
            });
        let project = (".{0,16}", ".{0,32}", proptest::collection::vec(file, 0..3));
        proptest::collection::vec(project, 0..6).prop_map(|projects| {
            projects
                .into_iter()
                .enumerate()
                .map(|(i, (name, task, files))| Project {
                    id: (i as u32 + 1) * 3,
                    name,
                    task,
                    files,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_board_round_trip(board in arb_board()) {
            let (_, store) = setup_store();
            store.save_board(&board).unwrap();
            prop_assert_eq!(store.load_board(), board);
        }
    }
}
