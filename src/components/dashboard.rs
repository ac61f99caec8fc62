//! Dashboard Component
//!
//! The column of project cards, with drag-and-drop reordering.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::ProjectCard;
use crate::store::{store_move_project, store_persist_order, use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let dnd = create_dnd_signals();

    // Cards follow the pointer; the order is saved once the drag ends,
    // even when the card is released outside the dashboard
    let on_dragover = make_on_dragover(
        dnd,
        Callback::new(move |(dragged, before): (u32, Option<u32>)| {
            store_move_project(&store, dragged, before)
        }),
    );
    let on_drop = make_on_drop(dnd);
    let on_dragend = make_on_dragend(
        dnd,
        Callback::new(move |_dragged: u32| store_persist_order(&store)),
    );

    let project_ids = move || store.board().read().ids();

    view! {
        <div
            id="dashboard"
            class="dashboard"
            on:dragover=on_dragover
            on:drop=on_drop
            on:dragend=on_dragend
        >
            <For
                each=project_ids
                key=|id| *id
                children=move |id| view! { <ProjectCard id=id dnd=dnd /> }
            />
        </div>
    }
}
