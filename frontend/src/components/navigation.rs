use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::outline::Outline;
use crate::scroll::observer;
use crate::scroll::position::ScrollPosition;
use crate::scroll::provider::use_scroll;
use crate::theme::{header_is_dark, use_theme, Theme};

const ACTIVE_OPACITY: f64 = 1.0;
const IDLE_OPACITY: f64 = 0.15;

#[derive(Clone, Debug, PartialEq)]
pub struct RailItem {
    pub chapter: u32,
    pub label: String,
    /// Anchor to scroll to when the item is clicked.
    pub target: &'static str,
    pub active: bool,
}

impl RailItem {
    pub fn opacity(&self) -> f64 {
        if self.active {
            ACTIVE_OPACITY
        } else {
            IDLE_OPACITY
        }
    }
}

/// One rail item per chapter. The active chapter shows the full number of the
/// subchapter in view and links to it.
pub fn rail_items(outline: &Outline, position: &ScrollPosition) -> Vec<RailItem> {
    outline
        .chapters()
        .iter()
        .map(|chapter| {
            let active = position.chapter == chapter.number;
            let mut item = RailItem {
                chapter: chapter.number,
                label: chapter.number.to_string(),
                target: chapter.id,
                active,
            };
            if !active {
                return item;
            }

            let shown = match position.subchapter.as_deref() {
                Some(full_number) => chapter.subchapter(full_number),
                None if chapter.rail_shows_first_subchapter => chapter.subchapters.first(),
                None => None,
            };
            if let Some(sub) = shown {
                item.label = sub.full_number.clone();
                item.target = sub.id;
            }
            item
        })
        .collect()
}

pub fn scroll_to_anchor(anchor_id: &str) {
    let document = match observer::document() {
        Ok(document) => document,
        Err(e) => {
            log::warn!("Cannot jump to #{}: {}", anchor_id, e);
            return;
        }
    };
    match document.get_element_by_id(anchor_id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("Jump target #{} is not mounted", anchor_id),
    }
}

#[derive(Properties, PartialEq)]
struct NumberProps {
    label: String,
    opacity: f64,
    size: u32,
    stroke: &'static str,
}

#[function_component(SubchapterNumber)]
fn subchapter_number(props: &NumberProps) -> Html {
    html! {
        <svg width={props.size.to_string()} height="110" viewBox="0 0 110 110" fill="none" xmlns="http://www.w3.org/2000/svg">
            <text
                x="50%"
                y="55%"
                text-anchor="middle"
                dominant-baseline="middle"
                font-family="inherit"
                font-weight="700"
                font-size={props.size.to_string()}
                stroke={props.stroke}
                stroke-width="2.5"
                fill="none"
                opacity={props.opacity.to_string()}
            >
                {&props.label}
            </text>
        </svg>
    }
}

#[function_component(SectionNavigation)]
pub fn section_navigation() -> Html {
    let scroll = use_scroll();
    let dark_mode = use_theme().map(|t| t.dark_mode).unwrap_or(false);
    let theme = Theme::from_dark_mode(header_is_dark(scroll.outline, &scroll.position, dark_mode));
    let background = if theme.is_dark() { "transparent" } else { theme.background() };

    html! {
        <div class="note-outer-number-column" style={format!("background: {};", background)}>
            <div class="note-chap-num_list">
                {
                    rail_items(scroll.outline, &scroll.position).into_iter().map(|item| {
                        let target = item.target;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll_to_anchor(target);
                        });
                        html! {
                            <div key={item.chapter.to_string()} class="note-chap-num_wrapper">
                                <div
                                    class={classes!("note-chap-num_item", format!("is-0{}", item.chapter), item.active.then(|| "active"))}
                                    {onclick}
                                >
                                    <SubchapterNumber
                                        label={item.label.clone()}
                                        opacity={item.opacity()}
                                        size={90}
                                        stroke={theme.foreground()}
                                    />
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(chapter: u32, sub: Option<&str>) -> ScrollPosition {
        ScrollPosition { chapter, subchapter: sub.map(str::to_string) }
    }

    #[test]
    fn one_item_per_chapter_with_only_the_current_one_active() {
        let items = rail_items(Outline::whitepaper(), &at(3, None));
        assert_eq!(items.len(), 5);
        let active: Vec<u32> = items.iter().filter(|i| i.active).map(|i| i.chapter).collect();
        assert_eq!(active, vec![3]);
        assert_eq!(items[0].opacity(), 0.15);
        assert_eq!(items[2].opacity(), 1.0);
    }

    #[test]
    fn active_subchapter_replaces_the_chapter_label() {
        let items = rail_items(Outline::whitepaper(), &at(1, Some("1.3")));
        assert_eq!(items[0].label, "1.3");
        assert_eq!(items[0].target, "intro-3");
        assert_eq!(items[1].label, "2");
        assert_eq!(items[1].target, "chapter-2");
    }

    #[test]
    fn chapter_two_head_shows_its_first_subchapter() {
        let items = rail_items(Outline::whitepaper(), &at(2, None));
        assert_eq!(items[1].label, "2.1");
        assert_eq!(items[1].target, "quality-1");
    }

    #[test]
    fn other_chapter_heads_keep_their_own_number() {
        let items = rail_items(Outline::whitepaper(), &at(4, None));
        assert_eq!(items[3].label, "4");
        assert_eq!(items[3].target, "chapter-4");
    }

    #[test]
    fn unknown_subchapter_falls_back_to_chapter() {
        let items = rail_items(Outline::whitepaper(), &at(3, Some("3.9")));
        assert_eq!(items[2].label, "3");
    }
}
