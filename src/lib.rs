use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

#[macro_use]
mod macros;

pub mod app;
pub mod application;
pub mod domain;
pub mod ecs;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;

/// Wire up panic reporting, logging and the resize listener.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = infrastructure::services::ConsoleLogger::new_development();
    domain::logging::init_logger(Box::new(app::LeptosLogger::new(console_logger)));
    domain::logging::init_time_provider(Box::new(
        infrastructure::services::BrowserTimeProvider::new(),
    ));

    infrastructure::ui::install_resize_handler();

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Primitive bench initialized");
}

/// Mount the benchmark page onto `<body>`.
#[wasm_bindgen(js_name = mountApp)]
pub fn mount_app() {
    leptos::mount_to_body(app::App);
}
