#![cfg(target_arch = "wasm32")]
use leptos::SignalGetUntracked;
use primitive_bench_wasm::application::{RunTicket, run_browser_benchmark_json};
use primitive_bench_wasm::domain::errors::BenchmarkError;
use primitive_bench_wasm::global_state::{benchmark_status, is_benchmark_running};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn malformed_json_reaches_the_status_board() {
    let err = run_browser_benchmark_json("{not json".to_string()).await.unwrap_err();

    assert!(matches!(err, BenchmarkError::Configuration(_)));
    assert_eq!(benchmark_status().get_untracked(), err.to_string());
    assert!(!is_benchmark_running().get_untracked());
    assert!(!RunTicket::is_taken());
}

#[wasm_bindgen_test]
async fn refused_run_leaves_status_alone() {
    let _active = RunTicket::acquire().expect("slot is free");
    let before = benchmark_status().get_untracked();

    let err = run_browser_benchmark_json(String::new()).await.unwrap_err();

    assert_eq!(err, BenchmarkError::Configuration("benchmark already running".to_string()));
    assert_eq!(benchmark_status().get_untracked(), before);
}
