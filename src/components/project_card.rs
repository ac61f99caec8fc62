//! Project Card Component
//!
//! One draggable column on the dashboard: name, task, attachments and the
//! buttons for details and deletion.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragstart, DndSignals};
use wasm_bindgen::JsCast;

use crate::components::{DeleteConfirmButton, FileList};
use crate::store::{
    store_delete_project, store_open_details, store_set_name, store_set_task, use_app_store,
    AppStateStoreFields,
};
use crate::upload::upload_files;

#[component]
pub fn ProjectCard(id: u32, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();

    // Inputs own their text after the first render
    let (name, task) = store
        .board()
        .read_untracked()
        .project(id)
        .map(|p| (p.name.clone(), p.task.clone()))
        .unwrap_or_default();

    let title = move || {
        store
            .board()
            .read()
            .project(id)
            .map(|p| p.title())
            .unwrap_or_default()
    };

    let on_upload = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let files: Vec<web_sys::File> = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();
        // Let the same file be picked again
        input.set_value("");
        upload_files(store, id, files);
    };

    view! {
        <div
            class="column"
            class:dragging=move || dnd.is_dragging(id)
            data-card-id=id.to_string()
            draggable="true"
            on:dragstart=make_on_dragstart(dnd, id)
        >
            <div class="task-number">{id}</div>
            <div class="project-title">{title}</div>
            <input
                type="text"
                class="project-name"
                placeholder="Project name..."
                prop:value=name
                on:input=move |ev| store_set_name(&store, id, &event_target_value(&ev))
            />
            <div class="task-input">
                <textarea
                    placeholder="Write your task..."
                    rows="5"
                    prop:value=task
                    on:input=move |ev| store_set_task(&store, id, &event_target_value(&ev))
                ></textarea>
            </div>
            <FileList project_id=id />
            <label class="attachments-btn">
                "+ Attachments"
                <input type="file" class="file-upload" style="display:none" multiple on:change=on_upload />
            </label>
            <button class="add-task" on:click=move |_| store_open_details(&store, id)>
                "More info..."
            </button>
            <DeleteConfirmButton
                button_class="delete-project"
                on_confirm=move |_| store_delete_project(&store, id)
            />
        </div>
    }
}
