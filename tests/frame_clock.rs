#![cfg(target_arch = "wasm32")]
use primitive_bench_wasm::domain::benchmark::SettlePause;
use primitive_bench_wasm::infrastructure::frame_clock::{TimerPause, next_animation_frame, now_ms};
use std::time::Duration;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn animation_frames_advance() {
    let first = next_animation_frame().await;
    let second = next_animation_frame().await;
    assert!(second > first);
}

#[wasm_bindgen_test]
async fn timer_pause_waits_at_least_the_delay() {
    let before = now_ms();
    TimerPause.pause(Duration::from_millis(20)).await;
    assert!(now_ms() - before >= 15.0);
}
