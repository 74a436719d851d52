use yew::prelude::*;

use crate::config::CONTACT_EMAIL;
use crate::scroll::provider::use_scroll;
use crate::theme::{header_is_dark, use_theme, Theme};

pub fn contact_href(email: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", email, urlencoding::encode(subject))
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let scroll = use_scroll();
    let dark_mode = use_theme().map(|t| t.dark_mode).unwrap_or(false);
    let theme = Theme::from_dark_mode(header_is_dark(scroll.outline, &scroll.position, dark_mode));
    let (cta_fg, cta_bg) = if theme.is_dark() { ("#000000", "#ffffff") } else { ("#ffffff", "#000000") };

    html! {
        <header
            class="site-header"
            style={format!(
                "position: fixed; top: 0; left: 0; width: 100vw; z-index: 30; background: {}; color: {}; border-bottom: 1px solid {}; transition: background 0.4s, color 0.4s, border 0.4s;",
                theme.background(),
                theme.foreground(),
                theme.border()
            )}
        >
            <div class="note-header-constraint">
                <div class="note-header-content">
                    <a href="/" class="note-header-lb">
                        <img
                            src="/assets/svgs/logo-medera-new.svg"
                            alt="Medera AI Logo"
                            style={format!("height: 70px; width: auto; filter: {};", if theme.is_dark() { "invert(1)" } else { "none" })}
                        />
                    </a>
                    <div class="note-header-buttons">
                        <a
                            href="#download-whitepaper"
                            class="note-header-simple-link"
                            style={format!("color: {}; border-color: {};", theme.foreground(), theme.foreground())}
                        >
                            {"Download Whitepaper"}
                        </a>
                        <a
                            href={contact_href(CONTACT_EMAIL, "Whitepaper inquiry")}
                            class="note-nav-cta-2"
                            style={format!("color: {}; background: {}; border-color: {};", cta_fg, cta_bg, cta_bg)}
                        >
                            {"Contact Us"}
                        </a>
                    </div>
                </div>
            </div>
        </header>
    }
}
