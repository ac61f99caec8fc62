//! File List Component
//!
//! Attachments of a project card. Clicking a name opens the file in a new tab.

use leptos::prelude::*;

use crate::object_url::ObjectUrl;
use crate::store::{store_remove_file, use_app_store, AppStateStoreFields};

#[component]
pub fn FileList(project_id: u32) -> impl IntoView {
    let store = use_app_store();

    // Names only; payloads are read when a file is opened
    let files = move || {
        store
            .board()
            .read()
            .project(project_id)
            .map(|p| {
                p.files
                    .iter()
                    .enumerate()
                    .map(|(index, file)| (index, file.name.clone()))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    view! {
        <div class="file-list tasks">
            <For
                each=files
                key=|entry| entry.clone()
                children=move |(index, name)| view! { <FileRow project_id=project_id index=index name=name /> }
            />
        </div>
    }
}

#[component]
fn FileRow(project_id: u32, index: usize, name: String) -> impl IntoView {
    let store = use_app_store();

    // Created on first open, revoked when the row goes away or the content
    // at this position changes
    let object_url = StoredValue::new(None::<(String, ObjectUrl)>);

    let open = move |_| {
        let Some(file) = store
            .board()
            .read_untracked()
            .project(project_id)
            .and_then(|p| p.files.get(index).cloned())
        else {
            return;
        };
        let fingerprint = file.fingerprint();

        object_url.update_value(|slot| {
            if slot.as_ref().map(|(cached, _)| cached) != Some(&fingerprint) {
                *slot = match ObjectUrl::from_data_url(&file.base64) {
                    Ok(url) => Some((fingerprint, url)),
                    Err(e) => {
                        log::error!("[FILES] Cannot open '{}': {}", file.name, e);
                        None
                    }
                };
            }
            if let Some((_, url)) = slot {
                if let Err(e) = url.open_in_new_tab() {
                    log::error!("[FILES] Cannot open {}: {}", url.as_str(), e);
                }
            }
        });
    };

    view! {
        <div class="file-item">
            <span class="file-name" style="cursor: pointer" on:click=open>{name}</span>
            <span class="file-remove" on:click=move |_| store_remove_file(&store, project_id, index)>
                "Remove"
            </span>
        </div>
    }
}
