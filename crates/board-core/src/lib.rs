//! Board Core
//!
//! Layered architecture, independent of the browser:
//! - models: Project, ProjectFile and ModalData records
//! - codec: data URL encoding of attached files
//! - store: key-value persistence of the board and modal data
//! - board: the in-memory card repository
//! - upload: join barrier for multi-file uploads
//! - reorder: drag-and-drop insertion point
//! - modal: the details editor controller

mod error;
mod models;

pub mod board;
pub mod codec;
pub mod modal;
pub mod reorder;
pub mod store;
pub mod upload;


pub use board::Board;
pub use codec::DataUrl;
pub use error::{BoardError, BoardResult, CodecError, StoreError};
pub use modal::ModalController;
pub use models::{ModalData, Project, ProjectFile, DEFAULT_PRIORITY, PRIORITY_LEVELS};
pub use reorder::{insertion_point, CardBounds, DragState};
pub use store::{BoardStore, KeyValueStore, MemoryStore, StorageKeys};
pub use upload::{BatchProgress, UploadBatch};
