//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for a vertical list of cards.
//! Cards are marked with `data-card-id`; while a card is dragged over the
//! list, the insertion point is recomputed from the cards' bounding boxes.

use board_core::{insertion_point, CardBounds, DragState};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Attribute carrying the card id on each draggable element
pub const CARD_ID_ATTR: &str = "data-card-id";

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub state_read: ReadSignal<DragState>,
    pub state_write: WriteSignal<DragState>,
}

impl DndSignals {
    pub fn is_dragging(&self, card_id: u32) -> bool {
        self.state_read.get().is_dragging(card_id)
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (state_read, state_write) = signal(DragState::Idle);
    DndSignals {
        state_read,
        state_write,
    }
}

/// Create dragstart handler for a card
pub fn make_on_dragstart(dnd: DndSignals, card_id: u32) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            if let Err(e) = transfer.set_data("text/plain", &card_id.to_string()) {
                log::debug!("[DND] Could not set drag payload for card {}: {:?}", card_id, e);
            }
            transfer.set_effect_allowed("move");
        }
        log::debug!("[DND] Drag start: card={}", card_id);
        dnd.state_write.update(|state| state.start(card_id));
    }
}

/// Create dragover handler for the list container.
///
/// Reports `(dragged, before)` on every pointer move; `before = None` means
/// the end of the list. The move is visual only, `on_move` must not persist.
pub fn make_on_dragover(
    dnd: DndSignals,
    on_move: Callback<(u32, Option<u32>)>,
) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        let Some(source) = dnd.state_read.get_untracked().source() else {
            return;
        };
        // Allow dropping here
        ev.prevent_default();

        let Some(container) = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };

        let candidates = collect_card_bounds(&container, source);
        let before = insertion_point(ev.client_y() as f64, &candidates).map(|card| card.id);
        on_move.run((source, before));
    }
}

/// Create drop handler for the list container; keeps the browser from
/// navigating to the dragged text payload
pub fn make_on_drop(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if dnd.state_read.get_untracked().source().is_some() {
            ev.prevent_default();
        }
    }
}

/// Create dragend handler.
///
/// Fires whether or not the card was released over a valid target; the
/// gesture always returns to idle and `on_end` receives the dragged card.
pub fn make_on_dragend(dnd: DndSignals, on_end: Callback<u32>) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        let mut state = dnd.state_read.get_untracked();
        let ended = state.end();
        dnd.state_write.set(state);

        if let Some(card_id) = ended {
            log::debug!("[DND] Drag end: card={}", card_id);
            on_end.run(card_id);
        }
    }
}

/// Bounding boxes of all cards under `container` except `skip`, in DOM order
fn collect_card_bounds(container: &web_sys::Element, skip: u32) -> Vec<CardBounds> {
    let Ok(nodes) = container.query_selector_all(&format!("[{}]", CARD_ID_ATTR)) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|element| {
            let id = element.get_attribute(CARD_ID_ATTR)?.parse::<u32>().ok()?;
            if id == skip {
                return None;
            }
            let rect = element.get_bounding_client_rect();
            Some(CardBounds::new(id, rect.top(), rect.height()))
        })
        .collect()
}
