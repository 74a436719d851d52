use std::collections::HashMap;

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;
use crate::outline::Outline;
use crate::scroll::position::AnchorEvent;

#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("no browser window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("IntersectionObserver rejected: {0}")]
    Rejected(String),
}

/// Anchor id → watched element. Registering an id twice is ignored and
/// removing an unknown id is a no-op, so unmount races are harmless.
#[derive(Debug)]
pub struct ObservedAnchors<E> {
    by_id: HashMap<String, E>,
}

impl<E> Default for ObservedAnchors<E> {
    fn default() -> Self {
        Self { by_id: HashMap::new() }
    }
}

impl<E> ObservedAnchors<E> {
    /// Returns false when the id is already watched.
    pub fn insert(&mut self, anchor_id: &str, element: E) -> bool {
        if self.by_id.contains_key(anchor_id) {
            return false;
        }
        self.by_id.insert(anchor_id.to_string(), element);
        true
    }

    pub fn remove(&mut self, anchor_id: &str) -> Option<E> {
        self.by_id.remove(anchor_id)
    }

    pub fn contains(&self, anchor_id: &str) -> bool {
        self.by_id.contains_key(anchor_id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_id.clear();
    }
}

/// One IntersectionObserver watching section anchors. Dropping it disconnects
/// the observer and releases the callback.
pub struct AnchorObserver {
    observer: IntersectionObserver,
    anchors: ObservedAnchors<Element>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl AnchorObserver {
    pub fn new(on_batch: impl Fn(Vec<AnchorEvent>) + 'static) -> Result<Self, ObserverError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let batch: Vec<AnchorEvent> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| AnchorEvent {
                        anchor_id: entry.target().id(),
                        is_intersecting: entry.is_intersecting(),
                        top: entry.bounding_client_rect().top(),
                    })
                    .collect();
                if !batch.is_empty() {
                    on_batch(batch);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(config::ANCHOR_ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(config::ANCHOR_THRESHOLD));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| ObserverError::Rejected(format!("{:?}", e)))?;

        Ok(Self {
            observer,
            anchors: ObservedAnchors::default(),
            _callback: callback,
        })
    }

    pub fn observe(&mut self, anchor_id: &str, element: Element) {
        if self.anchors.insert(anchor_id, element.clone()) {
            self.observer.observe(&element);
        }
    }

    pub fn unobserve(&mut self, anchor_id: &str) {
        if let Some(element) = self.anchors.remove(anchor_id) {
            self.observer.unobserve(&element);
        }
    }

    pub fn is_observing(&self, anchor_id: &str) -> bool {
        self.anchors.contains(anchor_id)
    }

    pub fn observed_count(&self) -> usize {
        self.anchors.len()
    }

    /// Observes every outline anchor currently in the document. Anchors that
    /// are not mounted are skipped; they simply never become active.
    pub fn observe_outline(&mut self, outline: &Outline, document: &Document) -> usize {
        let mut attached = 0;
        for anchor_id in outline.anchor_ids() {
            if self.anchors.contains(anchor_id) {
                continue;
            }
            match document.get_element_by_id(anchor_id) {
                Some(element) => {
                    self.observe(anchor_id, element);
                    attached += 1;
                }
                None => log::debug!("Anchor #{} not mounted, not observed", anchor_id),
            }
        }
        attached
    }

    pub fn disconnect(&mut self) {
        self.observer.disconnect();
        self.anchors.clear();
    }
}

impl Drop for AnchorObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

pub fn document() -> Result<Document, ObserverError> {
    web_sys::window()
        .ok_or(ObserverError::NoWindow)?
        .document()
        .ok_or(ObserverError::NoDocument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_ignores_ids_already_watched() {
        let mut anchors = ObservedAnchors::default();
        assert!(anchors.insert("quality-1", 1));
        assert!(!anchors.insert("quality-1", 2));
        assert_eq!(anchors.remove("quality-1"), Some(1));
    }

    #[test]
    fn removing_unknown_or_twice_is_a_no_op() {
        let mut anchors: ObservedAnchors<u8> = ObservedAnchors::default();
        assert_eq!(anchors.remove("never-seen"), None);

        anchors.insert("intro-1", 7);
        assert_eq!(anchors.remove("intro-1"), Some(7));
        assert_eq!(anchors.remove("intro-1"), None);
        assert!(anchors.is_empty());
    }

    #[test]
    fn clear_forgets_everything() {
        let mut anchors = ObservedAnchors::default();
        anchors.insert("a", ());
        anchors.insert("b", ());
        assert_eq!(anchors.len(), 2);
        anchors.clear();
        assert!(!anchors.contains("a"));
    }
}
