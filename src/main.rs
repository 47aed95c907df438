mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::utils::console;

fn main() {
    console_error_panic_hook::set_once();

    let Some(root) = document().get_element_by_id("app") else {
        console::error("no #app element to mount into");
        return;
    };

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
