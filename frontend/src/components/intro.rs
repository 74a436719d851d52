use yew::prelude::*;

use crate::components::animation::LottieAnimation;
use crate::scroll::provider::use_scroll;

#[derive(Properties, PartialEq)]
pub struct IntroSectionProps {
    /// Optional Lottie asset shown beside the index.
    #[prop_or_default]
    pub animation: Option<AttrValue>,
}

/// Table of contents: the first chapter's title as heading, the rest dimmed.
#[function_component(IntroSection)]
pub fn intro_section(props: &IntroSectionProps) -> Html {
    let scroll = use_scroll();
    let chapters = scroll.outline.chapters();
    let Some((first, rest)) = chapters.split_first() else {
        return html! {};
    };

    html! {
        <section id="first-section" class="note-summary">
            <div class="note-content-inner">
                <div class="note-index">
                    <h2 class="note-heading-page cc-sticky">{first.title}</h2>
                    {
                        for rest.iter().map(|chapter| html! {
                            <div key={chapter.id} class="note-96-uppercase" style="opacity: 0.15;">
                                {chapter.title}
                            </div>
                        })
                    }
                </div>
                if let Some(src) = props.animation.clone() {
                    <LottieAnimation {src} class="intro-animation" />
                }
            </div>
        </section>
    }
}
