//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The board model
//! is the state of record; components render from it and every mutation
//! goes through the helpers below.

use board_core::{Board, BoardResult, BoardStore, ModalController, ModalData, ProjectFile};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::web_storage::WebStorage;

/// Global application state with field-level reactivity
#[derive(Debug, Store)]
pub struct AppState {
    /// Projects in display order, backed by localStorage
    pub board: Board<WebStorage>,
    /// The details editor
    pub modal: ModalController,
}

impl AppState {
    /// Restore the board from localStorage
    pub fn load() -> Self {
        Self {
            board: Board::load(BoardStore::new(WebStorage)),
            modal: ModalController::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

fn report<T>(action: &str, result: BoardResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("[STORE] {} failed: {}", action, e);
            None
        }
    }
}

// ========================
// Project Helpers
// ========================

pub fn store_create_project(store: &AppStore) {
    if let Some(id) = report("create project", store.board().write().create_project()) {
        log::info!("[STORE] Project {} created", id);
    }
}

/// Delete a project; an open details editor for it is dropped unsaved
pub fn store_delete_project(store: &AppStore, id: u32) {
    store.modal().write().discard(id);
    report("delete project", store.board().write().delete_project(id));
}

pub fn store_set_name(store: &AppStore, id: u32, name: &str) {
    report("rename project", store.board().write().set_name(id, name));
}

pub fn store_set_task(store: &AppStore, id: u32, task: &str) {
    report("edit task", store.board().write().set_task(id, task));
}

pub fn store_add_files(store: &AppStore, id: u32, files: Vec<ProjectFile>) {
    report("attach files", store.board().write().add_files(id, files));
}

pub fn store_remove_file(store: &AppStore, id: u32, index: usize) {
    report("remove file", store.board().write().remove_file(id, index));
}

/// Visual move while dragging, not persisted.
/// Readers are only notified when the order actually changes.
pub fn store_move_project(store: &AppStore, id: u32, before: Option<u32>) {
    store
        .board()
        .maybe_update(|board| board.move_project(id, before));
}

/// Persist the order left by a drag gesture
pub fn store_persist_order(store: &AppStore) {
    report("save order", store.board().read().persist());
}

// ========================
// Details Helpers
// ========================

pub fn store_open_details(store: &AppStore, id: u32) {
    let (title, board_store) = {
        let board = store.board().read();
        match board.project(id) {
            Some(project) => (project.title(), board.store().clone()),
            None => return,
        }
    };
    report("open details", store.modal().write().open(id, &title, &board_store));
}

pub fn store_close_details(store: &AppStore) {
    let board_store = store.board().read().store().clone();
    report("close details", store.modal().write().close(&board_store));
}

/// Edit the open draft
pub fn store_edit_details(store: &AppStore, edit: impl FnOnce(&mut ModalData)) {
    edit(store.modal().write().draft_mut());
}
