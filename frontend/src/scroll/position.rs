//! Which chapter/subchapter is in view, as a pure fold over anchor
//! intersection events. Nothing here touches the DOM.

use std::rc::Rc;

use yew::prelude::*;

use crate::outline::{Anchor, Outline};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollPosition {
    pub chapter: u32,
    /// Full number ("2.3") of the active subchapter, `None` while the chapter
    /// anchor itself is active.
    pub subchapter: Option<String>,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self { chapter: 1, subchapter: None }
    }
}

/// One intersection report for an observed anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorEvent {
    pub anchor_id: String,
    pub is_intersecting: bool,
    /// Distance of the anchor's top edge from the viewport top, in px.
    pub top: f64,
}

impl AnchorEvent {
    pub fn entering(anchor_id: impl Into<String>, top: f64) -> Self {
        Self { anchor_id: anchor_id.into(), is_intersecting: true, top }
    }

    pub fn leaving(anchor_id: impl Into<String>, top: f64) -> Self {
        Self { anchor_id: anchor_id.into(), is_intersecting: false, top }
    }
}

/// How to pick a winner when several anchors intersect in one batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationPolicy {
    /// The anchor that most recently crossed the viewport top, i.e. the
    /// largest `top <= 0`. If none has crossed yet, the smallest positive
    /// `top`. Equal ranks go to the later entry.
    NearestTop,
    /// The last intersecting entry in delivery order.
    LastProcessed,
}

impl ScrollPosition {
    pub fn at(anchor: Anchor<'_>) -> Self {
        let subchapter = match anchor {
            Anchor::Chapter(_) => None,
            Anchor::Subchapter(_, sub) => Some(sub.full_number.clone()),
        };
        Self { chapter: anchor.chapter().number, subchapter }
    }

    /// Position after a single event. Events that do not intersect or name an
    /// unknown anchor leave the position as it is.
    pub fn apply(&self, outline: &Outline, event: &AnchorEvent) -> ScrollPosition {
        if !event.is_intersecting {
            return self.clone();
        }
        match outline.resolve(&event.anchor_id) {
            Some(anchor) => ScrollPosition::at(anchor),
            None => self.clone(),
        }
    }

    pub fn is_subchapter_active(&self, full_number: &str) -> bool {
        self.subchapter.as_deref() == Some(full_number)
    }

    /// The chapter anchor itself is active, not one of its subchapters.
    pub fn is_chapter_head_active(&self, number: u32) -> bool {
        self.chapter == number && self.subchapter.is_none()
    }
}

pub fn fold_batch(
    current: &ScrollPosition,
    outline: &Outline,
    events: &[AnchorEvent],
    policy: ActivationPolicy,
) -> ScrollPosition {
    let candidates = events
        .iter()
        .filter(|e| e.is_intersecting)
        .filter_map(|e| outline.resolve(&e.anchor_id).map(|anchor| (e, anchor)));

    let winner = match policy {
        ActivationPolicy::LastProcessed => candidates.last(),
        ActivationPolicy::NearestTop => candidates.fold(None, |best: Option<(&AnchorEvent, Anchor<'_>)>, (event, anchor)| match best {
            Some((best_event, _)) if outranks(best_event.top, event.top) => best,
            _ => Some((event, anchor)),
        }),
    };

    match winner {
        Some((_, anchor)) => ScrollPosition::at(anchor),
        None => current.clone(),
    }
}

/// Whether an anchor at `a` beats one at `b`. Anchors whose top edge has
/// crossed the viewport top (`top <= 0`) beat those still below it.
fn outranks(a: f64, b: f64) -> bool {
    match (a <= 0.0, b <= 0.0) {
        (true, true) => a > b,
        (false, false) => a < b,
        (crossed, _) => crossed,
    }
}

/// Reducer state owned by the scroll provider.
#[derive(Clone, Debug)]
pub struct ScrollState {
    pub outline: &'static Outline,
    pub policy: ActivationPolicy,
    pub position: ScrollPosition,
}

impl PartialEq for ScrollState {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.outline, other.outline)
            && self.policy == other.policy
            && self.position == other.position
    }
}

impl ScrollState {
    pub fn new(outline: &'static Outline, policy: ActivationPolicy) -> Self {
        Self { outline, policy, position: ScrollPosition::default() }
    }
}

pub enum ScrollAction {
    Observed(Vec<AnchorEvent>),
}

impl Reducible for ScrollState {
    type Action = ScrollAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ScrollAction::Observed(batch) => {
                let next = fold_batch(&self.position, self.outline, &batch, self.policy);
                if next == self.position {
                    return self;
                }
                log::debug!("Scroll position {:?} -> {:?}", self.position, next);
                Rc::new(ScrollState { position: next, ..(*self).clone() })
            }
        }
    }
}
