//! Browser tests for anchor observation and the scroll provider.
//!
//! Run with: wasm-pack test --headless --chrome frontend

use std::cell::RefCell;

use gloo_timers::future::TimeoutFuture;
use medera_whitepaper::outline::Outline;
use medera_whitepaper::scroll::observer::{document, AnchorObserver};
use medera_whitepaper::scroll::provider::{use_anchor, use_scroll, Anchors, ScrollProvider};
use medera_whitepaper::theme::{use_theme, ThemeProvider};
use wasm_bindgen_test::*;
use web_sys::Element;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

/// An element attached to `<body>` for the length of a test.
struct Mounted(Element);

impl Mounted {
    fn new(tag: &str, id: &str) -> Self {
        let document = document().unwrap();
        let element = document.create_element(tag).unwrap();
        element.set_id(id);
        document.body().unwrap().append_child(&element).unwrap();
        Mounted(element)
    }

    fn element(&self) -> Element {
        self.0.clone()
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.0.remove();
    }
}

#[wasm_bindgen_test]
fn observer_can_be_created() {
    let observer = AnchorObserver::new(|_| {}).unwrap();
    assert_eq!(observer.observed_count(), 0);
}

#[wasm_bindgen_test]
fn observing_the_same_anchor_twice_is_a_noop() {
    let mut observer = AnchorObserver::new(|_| {}).unwrap();
    let section = Mounted::new("section", "web-twice");

    observer.observe("web-twice", section.element());
    observer.observe("web-twice", section.element());
    assert!(observer.is_observing("web-twice"));
    assert_eq!(observer.observed_count(), 1);
}

#[wasm_bindgen_test]
fn unobserve_forgets_the_anchor() {
    let mut observer = AnchorObserver::new(|_| {}).unwrap();
    let section = Mounted::new("section", "web-gone");
    observer.observe("web-gone", section.element());

    observer.unobserve("web-gone");
    assert!(!observer.is_observing("web-gone"));

    // Unknown and repeated removals are ignored.
    observer.unobserve("web-gone");
    observer.unobserve("never-seen");
    assert_eq!(observer.observed_count(), 0);
}

#[wasm_bindgen_test]
fn outline_sweep_only_attaches_mounted_anchors() {
    let mut observer = AnchorObserver::new(|_| {}).unwrap();
    let _chapter = Mounted::new("section", "chapter-1");
    let _intro = Mounted::new("section", "intro-1");

    let document = document().unwrap();
    let attached = observer.observe_outline(Outline::whitepaper(), &document);
    assert_eq!(attached, 2);

    // A second sweep finds nothing new.
    assert_eq!(observer.observe_outline(Outline::whitepaper(), &document), 0);
}

#[wasm_bindgen_test]
fn disconnect_releases_everything() {
    let mut observer = AnchorObserver::new(|_| {}).unwrap();
    let a = Mounted::new("section", "web-a");
    let b = Mounted::new("section", "web-b");
    observer.observe("web-a", a.element());
    observer.observe("web-b", b.element());

    observer.disconnect();
    assert_eq!(observer.observed_count(), 0);
}

thread_local! {
    static ANCHORS: RefCell<Option<Anchors>> = RefCell::new(None);
    static SHOW_LAST: RefCell<Option<Callback<bool>>> = RefCell::new(None);
}

fn anchors() -> Anchors {
    ANCHORS.with(|a| a.borrow().clone()).unwrap()
}

#[derive(Properties, PartialEq)]
struct TallSectionProps {
    anchor_id: &'static str,
}

/// Taller than any test viewport, so at most one section covers the top.
#[function_component(TallSection)]
fn tall_section(props: &TallSectionProps) -> Html {
    let node = use_anchor(props.anchor_id);
    html! { <section id={props.anchor_id} ref={node} style="height: 3000px; margin: 0;" /> }
}

#[function_component(Readout)]
fn readout() -> Html {
    let scroll = use_scroll();
    let dark_mode = use_theme().map(|t| t.dark_mode).unwrap_or(false);
    ANCHORS.with(|a| *a.borrow_mut() = Some(scroll.anchors.clone()));

    html! {
        <p id="scroll-readout">
            {format!(
                "{} {} {}",
                scroll.position.chapter,
                scroll.position.subchapter.as_deref().unwrap_or("-"),
                if dark_mode { "dark" } else { "light" }
            )}
        </p>
    }
}

#[function_component(Page)]
fn page() -> Html {
    let show_last = use_state(|| true);
    {
        let show_last = show_last.clone();
        SHOW_LAST.with(|s| *s.borrow_mut() = Some(Callback::from(move |show| show_last.set(show))));
    }

    html! {
        <ThemeProvider>
            <ScrollProvider>
                <Readout />
                <TallSection anchor_id="chapter-1" />
                <TallSection anchor_id="intro-1" />
                <TallSection anchor_id="chapter-5" />
                if *show_last {
                    <TallSection anchor_id="conclusions-1" />
                }
            </ScrollProvider>
        </ThemeProvider>
    }
}

fn readout_text() -> String {
    document()
        .unwrap()
        .get_element_by_id("scroll-readout")
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn sections_register_their_anchors_and_drive_position_and_theme() {
    let root = Mounted::new("div", "scroll-root");
    let handle = yew::Renderer::<Page>::with_root(root.element()).render();
    TimeoutFuture::new(50).await;

    let registered = anchors();
    assert_eq!(registered.observed_count(), 4);
    assert!(registered.is_observing("conclusions-1"));
    assert_eq!(readout_text(), "1 - light");

    // Bring the chapter 5 subchapter to the viewport top.
    let window = web_sys::window().unwrap();
    document()
        .unwrap()
        .get_element_by_id("conclusions-1")
        .unwrap()
        .scroll_into_view();
    TimeoutFuture::new(300).await;
    assert_eq!(readout_text(), "5 5.1 dark");

    handle.destroy();
    TimeoutFuture::new(20).await;
    assert_eq!(registered.observed_count(), 0);

    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
async fn unmounted_section_stops_being_observed() {
    let root = Mounted::new("div", "unmount-root");
    let handle = yew::Renderer::<Page>::with_root(root.element()).render();
    TimeoutFuture::new(50).await;
    assert!(anchors().is_observing("conclusions-1"));

    SHOW_LAST.with(|s| s.borrow().clone()).unwrap().emit(false);
    TimeoutFuture::new(50).await;

    let registered = anchors();
    assert!(!registered.is_observing("conclusions-1"));
    assert_eq!(registered.observed_count(), 3);

    // Waiting past the settle delay: the sweep must not pick anything up twice.
    TimeoutFuture::new(400).await;
    assert_eq!(registered.observed_count(), 3);

    handle.destroy();
}
