pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod router;
pub mod services;
pub mod utils;

use wasm_bindgen::prelude::*;
use app::App;

#[wasm_bindgen(start)]
pub fn run_app() {
    utils::set_panic_hook();
    utils::init_logging();
    yew::Renderer::<App>::new().render();
}
