//! Details Modal
//!
//! Description, comment, priority and deadline of the selected project.
//! Closing the modal (button or backdrop) saves the fields.

use board_core::PRIORITY_LEVELS;
use leptos::prelude::*;

use crate::store::{store_close_details, store_edit_details, use_app_store, AppStateStoreFields};

#[component]
pub fn DetailsModal() -> impl IntoView {
    let store = use_app_store();

    let is_open = move || store.modal().read().is_open();
    let title = move || store.modal().read().title().to_string();
    let description = move || store.modal().read().draft().description.clone();
    let comment = move || store.modal().read().draft().comment.clone();
    let priority = move || store.modal().read().draft().priority.clone();
    let deadline = move || store.modal().read().draft().deadline.clone();

    view! {
        <Show when=is_open>
            <div id="modal" class="modal" on:click=move |_| store_close_details(&store)>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 id="modal-title">{title}</h2>
                        <button class="modal-close" on:click=move |_| store_close_details(&store)>
                            "×"
                        </button>
                    </div>

                    <div class="description-box">
                        <label>"Description"</label>
                        <textarea
                            rows="4"
                            prop:value=description
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                store_edit_details(&store, |d| d.description = value);
                            }
                        ></textarea>
                    </div>

                    <div class="comment-box">
                        <label>"Comment"</label>
                        <textarea
                            rows="3"
                            prop:value=comment
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                store_edit_details(&store, |d| d.comment = value);
                            }
                        ></textarea>
                    </div>

                    <div class="modal-row">
                        <label>"Priority"</label>
                        <select
                            id="priority-select"
                            prop:value=priority
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                store_edit_details(&store, |d| d.priority = value);
                            }
                        >
                            {PRIORITY_LEVELS
                                .iter()
                                .map(|&(value, label)| {
                                    let selected = move || store.modal().read().draft().priority == value;
                                    view! { <option value=value selected=selected>{label}</option> }
                                })
                                .collect_view()}
                        </select>

                        <label>"Deadline"</label>
                        <input
                            type="date"
                            id="deadline"
                            prop:value=deadline
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                store_edit_details(&store, |d| d.deadline = value);
                            }
                        />
                    </div>
                </div>
            </div>
        </Show>
    }
}
