use super::*;
use crate::domain::benchmark::ProbeResult;
use crate::infrastructure::frame_clock::next_animation_frame;
use crate::log_warn;

/// Render one frame, logging instead of returning a dropped frame.
pub(crate) fn render_logged(renderer: &Rc<RefCell<BenchRenderer>>, timestamp: f64) {
    if let Err(e) = renderer.borrow_mut().render_frame(timestamp) {
        log_warn!(LogComponent::Infrastructure("BenchRenderer"), "⚠️ Frame dropped: {:?}", e);
    }
}

/// Render `frame_count` frames, one per animation frame, and average them.
///
/// The window runs from the animation frame that starts the first render to
/// the one after the last render, so it covers exactly `frame_count` frame
/// intervals and ends once the browser has presented the last frame. The
/// renderer is only borrowed while a frame is encoded, never across an await.
pub async fn measure_frames(renderer: &Rc<RefCell<BenchRenderer>>, frame_count: u32) -> ProbeResult {
    let started = next_animation_frame().await;
    let mut timestamp = started;
    for _ in 0..frame_count {
        render_logged(renderer, timestamp);
        timestamp = next_animation_frame().await;
    }
    ProbeResult::from_frame_window(frame_count, timestamp - started)
}

/// Keep animating the population left by the last run until another
/// renderer becomes the active one.
pub async fn keep_presenting(renderer: Rc<RefCell<BenchRenderer>>) {
    while is_global_renderer(&renderer) {
        let timestamp = next_animation_frame().await;
        if !is_global_renderer(&renderer) {
            break;
        }
        render_logged(&renderer, timestamp);
    }
    get_logger().debug(LogComponent::Infrastructure("BenchRenderer"), "Idle presenter stopped");
}
