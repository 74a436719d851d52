use yew::prelude::*;

use crate::components::benchmark_chart::BenchmarkChart;
use crate::components::panels::{CardCarousel, ComparisonGrid, PointPanels, Statement};
use crate::content::{self, Body};
use crate::markup;
use crate::scroll::provider::{use_anchor, use_scroll};
use crate::theme::{use_theme, Theme};

const HEAD_HEIGHT_PX: u32 = 1;
/// Room for the scroll to settle between a light chapter and the previous one.
const TRANSITION_HEIGHT_PX: u32 = 250;

#[derive(Properties, PartialEq)]
pub struct ChapterAnchorProps {
    pub number: u32,
}

/// The chapter's own anchor: an empty strip the tracker watches.
#[function_component(ChapterAnchor)]
pub fn chapter_anchor(props: &ChapterAnchorProps) -> Html {
    let scroll = use_scroll();
    let chapter = scroll.outline.chapter(props.number);
    let node = use_anchor(chapter.map(|c| c.id).unwrap_or_default());

    let Some(chapter) = chapter else {
        return html! {};
    };
    let height = if chapter.rail_shows_first_subchapter {
        TRANSITION_HEIGHT_PX
    } else {
        HEAD_HEIGHT_PX
    };

    html! {
        <section
            id={chapter.id}
            ref={node}
            class={classes!("chapter-anchor", scroll.position.is_chapter_head_active(chapter.number).then(|| "is-active"))}
            style={format!("height: {}px; width: 100%; padding: 0; margin: 0; overflow: hidden;", height)}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct SubchapterSectionProps {
    pub anchor_id: &'static str,
}

#[function_component(SubchapterSection)]
pub fn subchapter_section(props: &SubchapterSectionProps) -> Html {
    let scroll = use_scroll();
    let inherited = use_theme().map(|t| t.theme()).unwrap_or(Theme::Light);
    let node = use_anchor(props.anchor_id);

    let Some((chapter, sub)) = scroll.outline.find_subchapter(props.anchor_id) else {
        log::warn!("#{} is not a subchapter anchor", props.anchor_id);
        return html! {};
    };
    let active = scroll.position.is_subchapter_active(&sub.full_number);
    let theme = chapter.theme.unwrap_or(inherited);
    let copy = content::for_anchor(props.anchor_id);

    let body = match copy.map(|c| &c.body) {
        Some(Body::Cards(cards)) => html! { <CardCarousel cards={*cards} {theme} /> },
        Some(Body::Comparison(items)) => html! { <ComparisonGrid items={*items} {theme} /> },
        Some(Body::Points(points)) => html! { <PointPanels points={*points} {theme} /> },
        Some(Body::Benchmark(bars)) => html! { <BenchmarkChart bars={bars.to_vec()} {theme} /> },
        Some(Body::Statement(text)) => html! { <Statement text={*text} {theme} /> },
        Some(Body::None) | None => html! {},
    };

    html! {
        <section
            id={sub.id}
            ref={node}
            class={classes!("subchapter", active.then(|| "is-active"))}
            style={format!(
                "min-height: 100vh; width: 100%; padding: 80px 40px; box-sizing: border-box; background: {}; color: {}; opacity: {}; transition: opacity 0.4s ease, background 0.4s ease;",
                theme.background(),
                theme.foreground(),
                if active { 1.0 } else { 0.0 }
            )}
        >
            <div class="subchapter-inner">
                <div class="subchapter-number" style={format!("color: {};", theme.muted())}>{&sub.full_number}</div>
                <h2 class="subchapter-title">{sub.title}</h2>
                {
                    match copy {
                        Some(copy) => html! { <p class="subchapter-lead">{markup::render(copy.lead)}</p> },
                        None => html! {},
                    }
                }
                { body }
            </div>
        </section>
    }
}

/// Every chapter of the outline: its anchor followed by its subchapters.
#[function_component(Chapters)]
pub fn chapters() -> Html {
    let scroll = use_scroll();

    scroll
        .outline
        .chapters()
        .iter()
        .map(|chapter| {
            html! {
                <div key={chapter.id} class="chapter" data-chapter={chapter.number.to_string()}>
                    <ChapterAnchor number={chapter.number} />
                    {
                        chapter.subchapters.iter().map(|sub| html! {
                            <SubchapterSection key={sub.id} anchor_id={sub.id} />
                        }).collect::<Html>()
                    }
                </div>
            }
        })
        .collect()
}
