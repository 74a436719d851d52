use yew::prelude::*;

use crate::content::{Card, Comparison, Point};
use crate::markup;
use crate::theme::Theme;
use crate::viewport::use_is_mobile;

const CARD_WIDTH_PX: f64 = 360.0;
const CARD_GAP_PX: f64 = 24.0;
const VISIBLE_CARDS: usize = 2;

/// Highest index the carousel may start at so the last page is still full.
pub fn last_start(len: usize, visible: usize) -> usize {
    len.saturating_sub(visible.max(1))
}

/// Moves the carousel start by `step`, staying inside `0..=last_start`.
pub fn step_index(index: usize, step: isize, len: usize, visible: usize) -> usize {
    let last = last_start(len, visible) as isize;
    (index as isize + step).clamp(0, last) as usize
}

pub fn track_offset(index: usize) -> f64 {
    -(index as f64) * (CARD_WIDTH_PX + CARD_GAP_PX)
}

#[derive(Properties, PartialEq)]
pub struct CardCarouselProps {
    pub cards: &'static [Card],
    pub theme: Theme,
}

#[function_component(CardCarousel)]
pub fn card_carousel(props: &CardCarouselProps) -> Html {
    let index = use_state(|| 0usize);
    let expanded = use_state(|| None::<usize>);
    let is_mobile = use_is_mobile();
    let theme = props.theme;
    let len = props.cards.len();

    let step = |delta: isize| {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| {
            index.set(step_index(*index, delta, len, VISIBLE_CARDS));
        })
    };

    let cards = props.cards.iter().enumerate().map(|(i, card)| {
        let open = *expanded == Some(i);
        let toggle = {
            let expanded = expanded.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                expanded.set(if *expanded == Some(i) { None } else { Some(i) });
            })
        };
        let width = if is_mobile { "100%".to_string() } else { format!("{}px", CARD_WIDTH_PX) };

        html! {
            <div
                key={i}
                class={classes!("card", open.then(|| "expanded"))}
                style={format!("flex: 0 0 {}; background: {}; border: 1px solid {}; border-radius: 12px; padding: 24px; box-sizing: border-box;", width, theme.card(), theme.border())}
            >
                <h3>{card.title}</h3>
                <p>{markup::render(card.text)}</p>
                {
                    match &card.detail {
                        Some(detail) => html! {
                            <>
                                <button class="card-toggle" onclick={toggle}>
                                    {if open { "Show less" } else { "Read more" }}
                                </button>
                                if open {
                                    <div class="card-detail">
                                        <p>{markup::render(detail.summary)}</p>
                                        if !detail.factors.is_empty() {
                                            <ul class="card-factors">
                                                { for detail.factors.iter().map(|f| html! { <li>{markup::render(f)}</li> }) }
                                            </ul>
                                        }
                                        if !detail.references.is_empty() {
                                            <ol class="card-references" style={format!("color: {};", theme.muted())}>
                                                { for detail.references.iter().map(|r| html! { <li>{*r}</li> }) }
                                            </ol>
                                        }
                                    </div>
                                }
                            </>
                        },
                        None => html! {},
                    }
                }
            </div>
        }
    });

    if is_mobile {
        return html! {
            <div class="card-stack" style="display: flex; flex-direction: column; gap: 16px;">
                { for cards }
            </div>
        };
    }

    let at_start = *index == 0;
    let at_end = *index >= last_start(len, VISIBLE_CARDS);

    html! {
        <div class="card-carousel">
            <div class="card-viewport" style="overflow: hidden;">
                <div
                    class="card-track"
                    style={format!("display: flex; gap: {}px; transform: translateX({}px); transition: transform 0.4s ease;", CARD_GAP_PX, track_offset(*index))}
                >
                    { for cards }
                </div>
            </div>
            <div class="carousel-controls">
                <button class="carousel-prev" disabled={at_start} onclick={step(-1)}>{"←"}</button>
                <button class="carousel-next" disabled={at_end} onclick={step(1)}>{"→"}</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ComparisonGridProps {
    pub items: &'static [Comparison],
    pub theme: Theme,
}

/// Tabs over the comparisons, with the selected one's table underneath.
#[function_component(ComparisonGrid)]
pub fn comparison_grid(props: &ComparisonGridProps) -> Html {
    let selected = use_state(|| 0usize);
    let theme = props.theme;

    let Some(current) = props.items.get(*selected).or_else(|| props.items.first()) else {
        return html! {};
    };

    html! {
        <div class="comparison-grid">
            if props.items.len() > 1 {
                <div class="comparison-tabs">
                    {
                        for props.items.iter().enumerate().map(|(i, item)| {
                            let onclick = {
                                let selected = selected.clone();
                                Callback::from(move |_: MouseEvent| selected.set(i))
                            };
                            html! {
                                <button
                                    key={i}
                                    class={classes!("comparison-tab", (*selected == i).then(|| "selected"))}
                                    {onclick}
                                >
                                    {item.name}
                                </button>
                            }
                        })
                    }
                </div>
            }
            <p class="comparison-summary">{markup::render(current.summary)}</p>
            <table class="comparison-table" style={format!("border-color: {};", theme.border())}>
                <thead>
                    <tr>
                        <th>{"Approach"}</th>
                        <th>{current.metric_header}</th>
                        <th>{"Improvement"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for current.rows.iter().map(|row| html! {
                            <tr
                                class={classes!(row.is_ours.then(|| "ours"))}
                                style={if row.is_ours { format!("background: {};", theme.card()) } else { String::new() }}
                            >
                                <td>{row.name}</td>
                                <td>{row.metric}</td>
                                <td>{row.improvement}</td>
                            </tr>
                        })
                    }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PointPanelProps {
    point: &'static Point,
    theme: Theme,
}

#[function_component(PointPanel)]
fn point_panel(props: &PointPanelProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div
            class={classes!("point-panel", (*is_open).then(|| "open"))}
            style={format!("border-bottom: 1px solid {};", props.theme.border())}
        >
            <button class="point-title" onclick={toggle}>
                <span>{props.point.title}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="point-text">
                    <p>{markup::render(props.point.text)}</p>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PointPanelsProps {
    pub points: &'static [Point],
    pub theme: Theme,
}

#[function_component(PointPanels)]
pub fn point_panels(props: &PointPanelsProps) -> Html {
    html! {
        <div class="point-panels">
            { for props.points.iter().enumerate().map(|(i, point)| html! {
                <PointPanel key={i} {point} theme={props.theme} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatementProps {
    pub text: &'static str,
    pub theme: Theme,
}

#[function_component(Statement)]
pub fn statement(props: &StatementProps) -> Html {
    html! {
        <blockquote class="statement" style={format!("border-left: 3px solid {}; color: {};", props.theme.foreground(), props.theme.foreground())}>
            {markup::render(props.text)}
        </blockquote>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_stays_inside_the_track() {
        assert_eq!(step_index(0, -1, 5, 2), 0);
        assert_eq!(step_index(0, 1, 5, 2), 1);
        assert_eq!(step_index(3, 1, 5, 2), 3);
        assert_eq!(step_index(2, 1, 5, 2), 3);
    }

    #[test]
    fn short_lists_never_move() {
        assert_eq!(last_start(1, 2), 0);
        assert_eq!(last_start(0, 2), 0);
        assert_eq!(step_index(0, 1, 2, 2), 0);
    }

    #[test]
    fn offset_moves_one_card_per_step() {
        assert_eq!(track_offset(0), 0.0);
        assert_eq!(track_offset(2), -768.0);
    }
}
