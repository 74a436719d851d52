use chrono::Datelike;
use yew::prelude::*;

const LINKS: &[&str] = &[
    "About Us",
    "Technology",
    "Case Studies",
    "Research",
    "Documentation",
    "API Reference",
    "Support",
    "Privacy Policy",
];

pub fn copyright(year: i32) -> String {
    format!("© {} Medera. All rights reserved.", year)
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-company">{"Company Info"}</div>
            <ul class="footer-links">
                { for LINKS.iter().map(|link| html! { <li>{*link}</li> }) }
            </ul>
            <div class="footer-copyright">{copyright(year)}</div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright(2026), "© 2026 Medera. All rights reserved.");
    }
}
