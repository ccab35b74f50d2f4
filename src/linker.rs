// src/linker.rs
//! Binds the footnote reference markers inside rendered content to their
//! definition blocks.

use crate::footnotes::FootnoteIndex;
use crate::markup::{FOOTNOTE_ID_ATTR, FOOTNOTE_MARKER_CLASS};
use crate::utils::scroll_to_id;
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Link every marker below `container`.
///
/// Markers whose id has no definition are left untouched. The returned
/// listeners stay active until dropped, so the caller keeps them for as long
/// as the rendered content lives.
pub fn link_footnote_references(container: &Element, index: &FootnoteIndex) -> Vec<EventListener> {
    let selector = format!(".{}[{}]", FOOTNOTE_MARKER_CLASS, FOOTNOTE_ID_ATTR);
    let markers = match container.query_selector_all(&selector) {
        Ok(markers) => markers,
        Err(e) => {
            log::debug!("footnote marker query failed: {:?}", e);
            return Vec::new();
        }
    };

    let mut listeners = Vec::new();
    for i in 0..markers.length() {
        let Some(marker) = markers.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(id) = marker.get_attribute(FOOTNOTE_ID_ATTR) else {
            continue;
        };
        let Some(link) = index.link(id.trim()) else {
            log::debug!("footnote reference {:?} has no definition", id);
            continue;
        };

        if !link.preview.is_empty() {
            if let Err(e) = marker.set_attribute("title", &link.preview) {
                log::debug!("could not set title on footnote marker {:?}: {:?}", id, e);
            }
        }
        if let Err(e) = marker.set_attribute("aria-describedby", &link.target_id) {
            log::debug!("could not set aria-describedby on footnote marker {:?}: {:?}", id, e);
        }

        let target = link.target_id;
        listeners.push(EventListener::new_with_options(
            &marker,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                if !scroll_to_id(&target) {
                    log::debug!("footnote target #{} is not in the document", target);
                }
            },
        ));
    }

    log::debug!("linked {} of {} footnote references", listeners.len(), markers.length());
    listeners
}
