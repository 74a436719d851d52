use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::HERO_DARK_PROGRESS;
use crate::theme::{use_theme, Theme, ThemeAction};

const LOGO_SIZE: f64 = 400.0;
const SPIN_DEGREES: f64 = 1440.0;
const CONTENT_FADE_START: f64 = 0.5;

/// Scroll progress through the pinned hero, 0 before it, 1 once scrolled past.
pub fn hero_progress(scroll_y: f64, hero_top: f64, pin_length: f64) -> f64 {
    if pin_length <= 0.0 {
        return 0.0;
    }
    ((scroll_y - hero_top) / pin_length).clamp(0.0, 1.0)
}

pub fn hero_wants_dark(progress: f64) -> bool {
    progress >= HERO_DARK_PROGRESS
}

/// Where the two logo halves and the copy are for a given progress.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroFrame {
    pub left_x: f64,
    pub right_x: f64,
    pub rotation: f64,
    pub logo_opacity: f64,
    pub content_opacity: f64,
}

impl HeroFrame {
    pub fn at(progress: f64, viewport_width: f64) -> Self {
        let start = viewport_width + LOGO_SIZE;
        let remaining = 1.0 - progress;
        let content_opacity = if progress > CONTENT_FADE_START {
            ((progress - CONTENT_FADE_START) / (1.0 - CONTENT_FADE_START)).min(1.0)
        } else {
            0.0
        };
        Self {
            left_x: -start * remaining,
            right_x: start * remaining,
            rotation: SPIN_DEGREES * progress,
            logo_opacity: progress,
            content_opacity,
        }
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let container = use_node_ref();
    let (_, scroll_y) = use_window_scroll();
    let (viewport_width, viewport_height) = use_window_size();
    let theme = use_theme();

    let hero_top = container
        .cast::<HtmlElement>()
        .map(|el| el.offset_top() as f64)
        .unwrap_or(0.0);
    let progress = hero_progress(scroll_y, hero_top, viewport_height);
    let frame = HeroFrame::at(progress, viewport_width);

    {
        let theme = theme.clone();
        use_effect_with_deps(
            move |wants_dark| {
                if let Some(theme) = theme {
                    theme.dispatch(ThemeAction::SetDarkMode(*wants_dark));
                }
                || ()
            },
            hero_wants_dark(progress),
        );
    }

    let palette = Theme::from_dark_mode(theme.map(|t| t.dark_mode).unwrap_or(false));
    let visibility = if progress > 0.0 { "visible" } else { "hidden" };
    let half = |x: f64, rotation: f64| {
        format!(
            "position: absolute; left: 50%; top: 10%; transform: translate(-50%, -50%) translateX({:.1}px) rotate({:.1}deg); opacity: {:.3}; visibility: {};",
            x, rotation, frame.logo_opacity, visibility
        )
    };

    html! {
        <div ref={container} class="hero-pin" style="height: 200vh; position: relative;">
            <div
                class="hero-section"
                style={format!(
                    "position: sticky; top: 0; min-height: 100vh; background: {}; transition: background 0.7s cubic-bezier(0.4,0,0.2,1); display: flex; flex-direction: column; align-items: center; padding-top: 100px;",
                    palette.background()
                )}
            >
                <div class="hero-logo" style={format!("width: {0}px; height: {0}px; position: relative; margin-bottom: 80px;", LOGO_SIZE)}>
                    <svg width={LOGO_SIZE.to_string()} height={LOGO_SIZE.to_string()} viewBox="0 0 400 400" fill="none" style={half(frame.left_x, frame.rotation)}>
                        <path d="M125.778 244.185V386.748L7.5 315.726V173.163L125.778 244.185ZM259.057 315.725L140.778 386.748V244.185L259.057 173.163V315.725ZM251.986 159.911L133.277 231.193L14.5693 159.911L133.278 88.6284L251.986 159.911Z" fill={palette.foreground()}/>
                    </svg>
                    <svg width={LOGO_SIZE.to_string()} height={LOGO_SIZE.to_string()} viewBox="0 0 400 400" fill="none" style={half(frame.right_x, -frame.rotation)}>
                        <path d="M274.222 155.815V13.252L392.5 84.274V226.837L274.222 155.815ZM140.943 84.275L259.222 13.252V155.815L140.943 226.837V84.275ZM148.014 240.089L266.723 168.807L385.431 240.089L266.722 311.372L148.014 240.089Z" fill={palette.foreground()}/>
                    </svg>
                </div>
                <div class="hero-content" style={format!("opacity: {:.3}; color: {}; text-align: center; max-width: 720px;", frame.content_opacity, palette.foreground())}>
                    <h1>{"Multi-modal AI for behavioral health assessment"}</h1>
                    <p>{"A whitepaper on how we evaluate, monitor and validate an agentic assessment system before it reaches clinicians."}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_to_the_pinned_range() {
        assert_eq!(hero_progress(0.0, 100.0, 800.0), 0.0);
        assert_eq!(hero_progress(500.0, 100.0, 800.0), 0.5);
        assert_eq!(hero_progress(5000.0, 100.0, 800.0), 1.0);
        assert_eq!(hero_progress(500.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn dark_from_eighty_percent() {
        assert!(!hero_wants_dark(0.79));
        assert!(hero_wants_dark(0.8));
        assert!(hero_wants_dark(1.0));
    }

    #[test]
    fn logo_halves_start_off_screen_and_meet_in_the_middle() {
        let start = HeroFrame::at(0.0, 1200.0);
        assert_eq!(start.left_x, -1600.0);
        assert_eq!(start.right_x, 1600.0);
        assert_eq!(start.logo_opacity, 0.0);

        let end = HeroFrame::at(1.0, 1200.0);
        assert_eq!(end.left_x, 0.0);
        assert_eq!(end.right_x, 0.0);
        assert_eq!(end.rotation, 1440.0);
    }

    #[test]
    fn content_fades_in_over_the_second_half() {
        assert_eq!(HeroFrame::at(0.5, 1000.0).content_opacity, 0.0);
        assert_eq!(HeroFrame::at(0.75, 1000.0).content_opacity, 0.5);
        assert_eq!(HeroFrame::at(1.0, 1000.0).content_opacity, 1.0);
    }
}
