//! Modal Controller
//!
//! One details editor for the whole board. Fields are edited on a draft that
//! is written to the store when the editor closes.

use crate::error::BoardResult;
use crate::models::ModalData;
use crate::store::{BoardStore, KeyValueStore};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalController {
    active: Option<u32>,
    title: String,
    draft: ModalData,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project whose details are shown, if any
    pub fn active(&self) -> Option<u32> {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn draft(&self) -> &ModalData {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ModalData {
        &mut self.draft
    }

    /// Show the details of `project_id`, labelled with the project title.
    ///
    /// An editor already open for another project is closed first and its
    /// draft saved. Reopening the active project keeps the current draft.
    pub fn open<S: KeyValueStore>(
        &mut self,
        project_id: u32,
        project_title: &str,
        store: &BoardStore<S>,
    ) -> BoardResult<()> {
        match self.active {
            Some(active) if active == project_id => return Ok(()),
            Some(_) => {
                self.close(store)?;
            }
            None => {}
        }

        self.draft = store.load_modal_data(project_id);
        self.title = format!("Details: {}", project_title);
        self.active = Some(project_id);
        log::debug!("[MODAL] Opened details of project {}", project_id);
        Ok(())
    }

    /// Save the draft and hide the editor.
    ///
    /// Without an active project this is a no-op returning `Ok(false)`. A
    /// failed write leaves the editor open with the draft intact.
    pub fn close<S: KeyValueStore>(&mut self, store: &BoardStore<S>) -> BoardResult<bool> {
        let Some(project_id) = self.active else {
            return Ok(false);
        };
        store.save_modal_data(project_id, &self.draft)?;
        log::debug!("[MODAL] Closed details of project {}", project_id);
        *self = Self::default();
        Ok(true)
    }

    /// Hide the editor without saving, when its project is being deleted
    pub fn discard(&mut self, project_id: u32) -> bool {
        if self.active != Some(project_id) {
            return false;
        }
        *self = Self::default();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn setup_store() -> (MemoryStore, BoardStore<MemoryStore>) {
        let memory = MemoryStore::new();
        (memory.clone(), BoardStore::new(memory))
    }

    #[test]
    fn test_open_defaults_when_absent() {
        let (_, store) = setup_store();
        let mut modal = ModalController::new();
        modal.open(3, "Project 3", &store).unwrap();

        assert_eq!(modal.active(), Some(3));
        assert_eq!(modal.title(), "Details: Project 3");
        assert_eq!(modal.draft(), &ModalData::default());
        assert_eq!(modal.draft().priority, "1");
    }

    #[test]
    fn test_close_saves_draft() {
        let (memory, store) = setup_store();
        let mut modal = ModalController::new();
        modal.open(1, "Alpha", &store).unwrap();
        modal.draft_mut().description = "Scope".to_string();
        modal.draft_mut().priority = "2".to_string();
        modal.draft_mut().deadline = "2026-11-30".to_string();

        assert!(modal.close(&store).unwrap());
        assert!(!modal.is_open());
        assert!(memory.contains("modalData_1"));

        let saved = store.load_modal_data(1);
        assert_eq!(saved.description, "Scope");
        assert_eq!(saved.priority, "2");
        assert_eq!(saved.deadline, "2026-11-30");

        modal.open(1, "Alpha", &store).unwrap();
        assert_eq!(modal.draft(), &saved);
    }

    #[test]
    fn test_close_without_active_is_noop() {
        let (memory, store) = setup_store();
        let mut modal = ModalController::new();
        assert!(!modal.close(&store).unwrap());
        assert_eq!(memory.writes(), 0);
    }

    #[test]
    fn test_open_second_closes_first() {
        let (_, store) = setup_store();
        let mut modal = ModalController::new();
        modal.open(1, "Alpha", &store).unwrap();
        modal.draft_mut().comment = "first".to_string();

        modal.open(2, "Beta", &store).unwrap();
        assert_eq!(modal.active(), Some(2));
        assert_eq!(modal.title(), "Details: Beta");
        assert_eq!(modal.draft().comment, "");
        assert_eq!(store.load_modal_data(1).comment, "first");
    }

    #[test]
    fn test_reopen_same_keeps_draft() {
        let (memory, store) = setup_store();
        let mut modal = ModalController::new();
        modal.open(1, "Alpha", &store).unwrap();
        modal.draft_mut().comment = "unsaved".to_string();

        modal.open(1, "Alpha", &store).unwrap();
        assert_eq!(modal.draft().comment, "unsaved");
        assert_eq!(memory.writes(), 0);
    }

    #[test]
    fn test_failed_close_keeps_editor_open() {
        let (memory, store) = setup_store();
        let mut modal = ModalController::new();
        modal.open(1, "Alpha", &store).unwrap();
        modal.draft_mut().comment = "keep me".to_string();

        memory.set_read_only(true);
        assert!(modal.close(&store).is_err());
        assert_eq!(modal.active(), Some(1));
        assert_eq!(modal.draft().comment, "keep me");
    }

    #[test]
    fn test_discard() {
        let (memory, store) = setup_store();
        let mut modal = ModalController::new();
        modal.open(1, "Alpha", &store).unwrap();

        assert!(!modal.discard(2));
        assert!(modal.discard(1));
        assert!(!modal.is_open());
        assert_eq!(memory.writes(), 0);
    }
}
