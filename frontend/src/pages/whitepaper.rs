use yew::prelude::*;

use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::components::hero::HeroSection;
use crate::components::intro::IntroSection;
use crate::components::navigation::SectionNavigation;
use crate::components::sections::Chapters;
use crate::scroll::provider::ScrollProvider;

const INTRO_ANIMATION: &str = "/lottie/intro.json";

#[function_component(Whitepaper)]
pub fn whitepaper() -> Html {
    html! {
        <ScrollProvider>
            <div class="whitepaper-page">
                <SiteHeader />
                <HeroSection />
                <div class="note-grid">
                    <SectionNavigation />
                    <main class="note-main">
                        <IntroSection animation={AttrValue::from(INTRO_ANIMATION)} />
                        <Chapters />
                    </main>
                </div>
                <SiteFooter />
            </div>
            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: 'Inter', sans-serif;
                }

                .note-grid {
                    display: grid;
                    grid-template-columns: 140px 1fr;
                    position: relative;
                }

                .note-outer-number-column {
                    position: sticky;
                    top: 100px;
                    height: calc(100vh - 100px);
                    transition: background 0.4s;
                }

                .note-chap-num_item {
                    cursor: pointer;
                    transition: opacity 0.3s;
                }

                .note-header-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 0 40px;
                }

                .note-header-buttons {
                    display: flex;
                    gap: 12px;
                }

                .note-header-simple-link,
                .note-nav-cta-2 {
                    padding: 10px 18px;
                    border: 1px solid;
                    border-radius: 999px;
                    text-decoration: none;
                    font-weight: 600;
                }

                .note-96-uppercase {
                    font-size: 96px;
                    text-transform: uppercase;
                    line-height: 1;
                }

                .subchapter-number {
                    font-size: 14px;
                    letter-spacing: 0.1em;
                }

                .highlight {
                    background: rgba(59, 130, 246, 0.15);
                    padding: 0 4px;
                }

                .comparison-table {
                    width: 100%;
                    border-collapse: collapse;
                }

                .comparison-table tr.ours {
                    font-weight: 700;
                }

                .comparison-tab.selected {
                    font-weight: 700;
                    text-decoration: underline;
                }

                .point-title {
                    display: flex;
                    justify-content: space-between;
                    width: 100%;
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 20px;
                    padding: 16px 0;
                    cursor: pointer;
                }

                .statement {
                    font-size: 28px;
                    padding-left: 24px;
                    margin: 40px 0;
                }

                .site-footer {
                    padding: 60px 40px;
                    background: #000000;
                    color: #ffffff;
                }

                @media (max-width: 768px) {
                    .note-grid {
                        grid-template-columns: 1fr;
                    }

                    .note-outer-number-column {
                        display: none;
                    }

                    .note-96-uppercase {
                        font-size: 40px;
                    }
                }
                "#}
            </style>
        </ScrollProvider>
    }
}
