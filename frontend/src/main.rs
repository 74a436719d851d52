use log::info;
use medera_whitepaper::{config, App};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting whitepaper");
    yew::Renderer::<App>::new().render();
}
