use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error, info};
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::outline::Outline;
use crate::scroll::observer::{self, AnchorObserver};
use crate::scroll::position::{ActivationPolicy, ScrollAction, ScrollPosition, ScrollState};
use crate::theme::{section_theme, ThemeAction, ThemeContext};

/// Shared handle to the page's anchor observer. `None` when the browser
/// refused to create one; observing is then a no-op.
#[derive(Clone)]
pub struct Anchors(Rc<RefCell<Option<AnchorObserver>>>);

impl PartialEq for Anchors {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Anchors {
    pub fn observe(&self, anchor_id: &str, element: Element) {
        if let Some(observer) = self.0.borrow_mut().as_mut() {
            observer.observe(anchor_id, element);
        }
    }

    pub fn unobserve(&self, anchor_id: &str) {
        if let Some(observer) = self.0.borrow_mut().as_mut() {
            observer.unobserve(anchor_id);
        }
    }

    pub fn is_observing(&self, anchor_id: &str) -> bool {
        self.0
            .borrow()
            .as_ref()
            .map_or(false, |observer| observer.is_observing(anchor_id))
    }

    /// Zero once the provider has unmounted.
    pub fn observed_count(&self) -> usize {
        self.0.borrow().as_ref().map_or(0, AnchorObserver::observed_count)
    }

    fn release(&self) {
        self.0.borrow_mut().take();
    }
}

#[derive(Clone)]
pub struct ScrollContext {
    pub position: ScrollPosition,
    pub outline: &'static Outline,
    pub anchors: Anchors,
}

impl PartialEq for ScrollContext {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && std::ptr::eq(self.outline, other.outline)
            && self.anchors == other.anchors
    }
}

#[derive(Properties)]
pub struct ScrollProviderProps {
    #[prop_or_else(Outline::whitepaper)]
    pub outline: &'static Outline,
    #[prop_or(config::ACTIVATION_POLICY)]
    pub policy: ActivationPolicy,
    pub children: Children,
}

impl PartialEq for ScrollProviderProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.outline, other.outline)
            && self.policy == other.policy
            && self.children == other.children
    }
}

#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let state = use_reducer({
        let outline = props.outline;
        let policy = props.policy;
        move || ScrollState::new(outline, policy)
    });

    // Created during the first render so sections can register their anchors
    // from their own mount effects.
    let observer = use_mut_ref({
        let dispatcher = state.dispatcher();
        move || match AnchorObserver::new(move |batch| dispatcher.dispatch(ScrollAction::Observed(batch))) {
            Ok(observer) => Some(observer),
            Err(e) => {
                error!("Section tracking disabled: {}", e);
                None
            }
        }
    });
    let anchors = Anchors(observer);

    // Settle delay, then sweep the outline for anchors nobody registered.
    {
        let anchors = anchors.clone();
        let outline = props.outline;
        use_effect_with_deps(
            move |_| {
                let sweep_anchors = anchors.clone();
                let sweep = Timeout::new(config::SETTLE_DELAY_MS, move || {
                    let document = match observer::document() {
                        Ok(document) => document,
                        Err(e) => {
                            error!("Outline sweep skipped: {}", e);
                            return;
                        }
                    };
                    if let Some(observer) = sweep_anchors.0.borrow_mut().as_mut() {
                        let attached = observer.observe_outline(outline, &document);
                        info!(
                            "Tracking {} section anchors ({} attached by sweep)",
                            observer.observed_count(),
                            attached
                        );
                    }
                });

                move || {
                    drop(sweep);
                    anchors.release();
                    debug!("Section tracking stopped");
                }
            },
            (),
        );
    }

    // The chapter in view decides the theme, once, here.
    {
        let theme = use_context::<ThemeContext>();
        let outline = props.outline;
        let position = state.position.clone();
        use_effect_with_deps(
            move |position| {
                if let (Some(theme), Some(forced)) = (theme, section_theme(outline, position)) {
                    theme.dispatch(ThemeAction::SetDarkMode(forced.is_dark()));
                }
                || ()
            },
            position,
        );
    }

    let context = ScrollContext {
        position: state.position.clone(),
        outline: props.outline,
        anchors,
    };

    html! {
        <ContextProvider<ScrollContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ScrollContext>>
    }
}

#[hook]
pub fn use_scroll() -> ScrollContext {
    match use_context::<ScrollContext>() {
        Some(context) => context,
        None => {
            // Outside a provider: behave as a page nobody has scrolled yet.
            ScrollContext {
                position: ScrollPosition::default(),
                outline: Outline::whitepaper(),
                anchors: Anchors(Rc::new(RefCell::new(None))),
            }
        }
    }
}

/// Registers the returned node as the anchor `anchor_id` for as long as the
/// calling component is mounted.
#[hook]
pub fn use_anchor(anchor_id: &'static str) -> NodeRef {
    let node = use_node_ref();
    let anchors = use_scroll().anchors;

    {
        let node = node.clone();
        use_effect_with_deps(
            move |anchor_id| {
                let anchor_id = *anchor_id;
                if let Some(element) = node.cast::<Element>() {
                    anchors.observe(anchor_id, element);
                }
                move || anchors.unobserve(anchor_id)
            },
            anchor_id,
        );
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(anchors: &Anchors, outline: &'static Outline) -> ScrollContext {
        ScrollContext { position: ScrollPosition::default(), outline, anchors: anchors.clone() }
    }

    #[test]
    fn contexts_compare_outline_and_anchors_by_identity() {
        let anchors = Anchors(Rc::new(RefCell::new(None)));
        let whitepaper = Outline::whitepaper();
        assert!(context(&anchors, whitepaper) == context(&anchors, whitepaper));

        let fresh = Anchors(Rc::new(RefCell::new(None)));
        assert!(context(&anchors, whitepaper) != context(&fresh, whitepaper));

        // Equal contents, different outline.
        let copy: &'static Outline = Box::leak(Box::new(whitepaper.clone()));
        assert!(context(&anchors, whitepaper) != context(&anchors, copy));
    }

    #[test]
    fn released_anchors_observe_nothing() {
        let anchors = Anchors(Rc::new(RefCell::new(None)));
        anchors.unobserve("intro-1");
        assert_eq!(anchors.observed_count(), 0);
        assert!(!anchors.is_observing("intro-1"));
    }
}
