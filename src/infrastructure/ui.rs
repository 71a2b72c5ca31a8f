//! Page-facing side effects: status text and resize handling.

use crate::domain::logging::{LogComponent, get_logger};
use crate::global_state::{benchmark_status, is_benchmark_running};
use crate::infrastructure::rendering::renderer::with_global_renderer;
use gloo::events::EventListener;
use gloo::utils::{document, window};
use leptos::SignalSet;

/// Element the plain HTML pages reserve for the result
pub const STATUS_ELEMENT_ID: &str = "bench-status";

const RUNNING_STYLE: &str = "padding: 8px; border-radius: 4px; background: #333a44;";
const DONE_STYLE: &str = "padding: 8px; border-radius: 4px; background: #1f4d2c;";
const ERROR_STYLE: &str = "padding: 8px; border-radius: 4px; background: #5c1f1f;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Running,
    Done,
    Failed,
}

/// Mirrors benchmark status into the DOM element and the Leptos signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusBoard;

impl StatusBoard {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&self, kind: StatusKind, message: &str) {
        benchmark_status().set(message.to_string());
        is_benchmark_running().set(kind == StatusKind::Running);

        match document().get_element_by_id(STATUS_ELEMENT_ID) {
            Some(element) => {
                element.set_text_content(Some(message));
                let style = match kind {
                    StatusKind::Running => RUNNING_STYLE,
                    StatusKind::Done => DONE_STYLE,
                    StatusKind::Failed => ERROR_STYLE,
                };
                if element.set_attribute("style", style).is_err() {
                    get_logger().warn(LogComponent::Infrastructure("UI"), "Failed to style status element");
                }
            }
            None => get_logger().debug(
                LogComponent::Infrastructure("UI"),
                &format!("Status element '{}' not found (optional)", STATUS_ELEMENT_ID),
            ),
        }
    }
}

/// Follow window resizes with the active renderer. Installed once per page.
pub fn install_resize_handler() {
    let listener = EventListener::new(&window(), "resize", move |_| {
        let resized = with_global_renderer(|renderer| {
            let canvas = document()
                .get_element_by_id(renderer.canvas_id())
                .map(|el| (el.client_width(), el.client_height()));
            if let Some((width, height)) = canvas {
                if width > 0 && height > 0 {
                    renderer.resize(width as u32, height as u32);
                }
            }
        });
        if resized.is_none() {
            get_logger().trace(LogComponent::Infrastructure("UI"), "Resize with no active renderer");
        }
    });
    listener.forget();
}
