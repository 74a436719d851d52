use std::rc::Rc;

use yew::prelude::*;

use crate::outline::Outline;
use crate::scroll::position::ScrollPosition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn background(self) -> &'static str {
        match self {
            Theme::Light => "#ffffff",
            Theme::Dark => "#000000",
        }
    }

    pub fn foreground(self) -> &'static str {
        match self {
            Theme::Light => "#000000",
            Theme::Dark => "#ffffff",
        }
    }

    pub fn muted(self) -> &'static str {
        match self {
            Theme::Light => "#666666",
            Theme::Dark => "#cccccc",
        }
    }

    pub fn border(self) -> &'static str {
        match self {
            Theme::Light => "#eeeeee",
            Theme::Dark => "#222222",
        }
    }

    pub fn card(self) -> &'static str {
        match self {
            Theme::Light => "#f7f7f7",
            Theme::Dark => "#1a1a1a",
        }
    }
}

/// Shared light/dark flag. Writes overwrite unconditionally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark_mode: bool,
}

pub enum ThemeAction {
    SetDarkMode(bool),
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::SetDarkMode(dark_mode) if dark_mode == self.dark_mode => self,
            ThemeAction::SetDarkMode(dark_mode) => Rc::new(ThemeState { dark_mode }),
        }
    }
}

impl ThemeState {
    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }
}

pub type ThemeContext = UseReducerHandle<ThemeState>;

/// Theme forced by the chapter currently in view, if that chapter fixes one.
pub fn section_theme(outline: &Outline, position: &ScrollPosition) -> Option<Theme> {
    outline.chapter(position.chapter).and_then(|chapter| chapter.theme)
}

/// The header and rail stay light for the whole of a light chapter, even while
/// the hero has left the page in dark mode.
pub fn header_is_dark(outline: &Outline, position: &ScrollPosition, dark_mode: bool) -> bool {
    match section_theme(outline, position) {
        Some(Theme::Light) => false,
        _ => dark_mode,
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_reducer(ThemeState::default);

    html! {
        <ContextProvider<ThemeContext> context={theme}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(state: Rc<ThemeState>, dark_mode: bool) -> Rc<ThemeState> {
        state.reduce(ThemeAction::SetDarkMode(dark_mode))
    }

    #[test]
    fn starts_light() {
        assert!(!ThemeState::default().dark_mode);
    }

    #[test]
    fn last_write_wins() {
        let state = Rc::new(ThemeState::default());
        let state = set(set(state, true), false);
        assert!(!state.dark_mode);

        let state = set(set(state, false), true);
        assert!(state.dark_mode);
    }

    #[test]
    fn unchanged_write_keeps_the_same_state() {
        let state = Rc::new(ThemeState { dark_mode: true });
        let next = set(state.clone(), true);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn chapter_themes_come_from_the_outline() {
        let outline = Outline::whitepaper();
        let at = |chapter, sub: Option<&str>| ScrollPosition {
            chapter,
            subchapter: sub.map(str::to_string),
        };

        assert_eq!(section_theme(outline, &at(1, Some("1.2"))), None);
        assert_eq!(section_theme(outline, &at(2, None)), Some(Theme::Light));
        assert_eq!(section_theme(outline, &at(2, Some("2.6"))), Some(Theme::Light));
        assert_eq!(section_theme(outline, &at(5, Some("5.1"))), Some(Theme::Dark));
        assert_eq!(section_theme(outline, &at(9, None)), None);
    }

    #[test]
    fn header_is_forced_light_in_chapter_two() {
        let outline = Outline::whitepaper();
        let two = ScrollPosition { chapter: 2, subchapter: Some("2.3".into()) };
        let three = ScrollPosition { chapter: 3, subchapter: None };

        assert!(!header_is_dark(outline, &two, true));
        assert!(header_is_dark(outline, &three, true));
        assert!(!header_is_dark(outline, &three, false));
    }
}
