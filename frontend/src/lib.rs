use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod content;
pub mod markup;
pub mod outline;
pub mod theme;
pub mod viewport;
pub mod scroll {
    pub mod observer;
    pub mod position;
    pub mod provider;
}
pub mod components {
    pub mod animation;
    pub mod benchmark_chart;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod intro;
    pub mod navigation;
    pub mod panels;
    pub mod sections;
}
pub mod pages {
    pub mod whitepaper;
}

use pages::whitepaper::Whitepaper;
use theme::ThemeProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering whitepaper");
            html! { <Whitepaper /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ThemeProvider>
    }
}
