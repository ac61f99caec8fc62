//! File Upload
//!
//! Reads the files picked in one gesture concurrently and attaches them to
//! the project in a single board write once the last read settles.

use std::cell::RefCell;
use std::rc::Rc;

use board_core::{codec, BatchProgress, ProjectFile, UploadBatch};
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::store::{store_add_files, AppStore};

/// Read `file` and encode it as a data URL
async fn read_file(file: &web_sys::File) -> Result<ProjectFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let name = file.name();
    let media_type = codec::media_type_for(&name, &file.type_());
    Ok(ProjectFile::new(name, codec::encode(&media_type, &bytes)))
}

/// Attach `files` to project `project_id`
pub fn upload_files(store: AppStore, project_id: u32, files: Vec<web_sys::File>) {
    if files.is_empty() {
        return;
    }
    log::debug!("[UPLOAD] Reading {} files for project {}", files.len(), project_id);

    let batch = Rc::new(RefCell::new(UploadBatch::new(project_id, files.len())));
    for (index, file) in files.into_iter().enumerate() {
        let batch = Rc::clone(&batch);
        spawn_local(async move {
            let progress = match read_file(&file).await {
                Ok(encoded) => batch.borrow_mut().complete(index, encoded),
                Err(e) => {
                    log::error!("[UPLOAD] Failed to read '{}': {}", file.name(), e);
                    batch.borrow_mut().fail(index)
                }
            };

            if let BatchProgress::Ready(ready) = progress {
                store_add_files(&store, project_id, ready);
            }
        });
    }
}
