#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

mod audio;
mod common;
mod components;
mod config;
mod content;
mod nav;
mod state;

mod view;
use view::SiteView;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::STYLES}" }
        SiteView {}
    }
}
