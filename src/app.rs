//! Project Board App
//!
//! Root component: header, dashboard of project cards and the details modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Dashboard, DetailsModal};
use crate::store::{store_create_project, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::load());
    provide_context(store);

    let project_count = move || {
        let count = store.board().read().projects().len();
        if count == 1 {
            "1 project".to_string()
        } else {
            format!("{} projects", count)
        }
    };

    view! {
        <div class="app-layout">
            <header class="board-header">
                <h1>"Projects"</h1>
                <button class="add-project" on:click=move |_| store_create_project(&store)>
                    "+ New project"
                </button>
            </header>

            <Dashboard />

            <p class="project-count">{project_count}</p>

            <DetailsModal />
        </div>
    }
}
