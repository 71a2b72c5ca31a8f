//! Browser timing primitives: high resolution clock, animation frame
//! boundary and the settle pause between probes.

use crate::domain::benchmark::SettlePause;
use futures::channel::oneshot;
use gloo_timers::future::sleep;
use std::time::Duration;

/// `performance.now()`, or `Date.now()` where no Performance object exists
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Suspend until the next `requestAnimationFrame` callback and return its
/// timestamp (same time origin as [`now_ms`]).
pub async fn next_animation_frame() -> f64 {
    let (tx, rx) = oneshot::channel();
    // Dropping the handle cancels the request, so it lives across the await.
    let _frame = gloo::render::request_animation_frame(move |timestamp| {
        let _ = tx.send(timestamp);
    });
    rx.await.unwrap_or_else(|_| now_ms())
}

/// Settle pause backed by `setTimeout`
#[derive(Debug, Default, Clone, Copy)]
pub struct TimerPause;

impl SettlePause for TimerPause {
    async fn pause(&mut self, delay: Duration) {
        sleep(delay).await;
    }
}
