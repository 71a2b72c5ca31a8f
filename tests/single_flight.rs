use futures::executor::block_on;
use primitive_bench_wasm::application::{
    BenchmarkConfig, RunTicket, run_browser_benchmark, run_browser_benchmark_json,
};
use primitive_bench_wasm::domain::errors::BenchmarkError;

fn already_running() -> BenchmarkError {
    BenchmarkError::Configuration("benchmark already running".to_string())
}

#[test]
fn second_run_is_refused_while_one_is_active() {
    let _active = RunTicket::acquire().expect("slot is free");

    let err = block_on(run_browser_benchmark(BenchmarkConfig::default())).unwrap_err();
    assert_eq!(err, already_running());

    let err = block_on(run_browser_benchmark_json(r#"{"backend": "webgl"}"#.to_string())).unwrap_err();
    assert_eq!(err, already_running());

    // The refused calls must not release the active run's slot.
    assert!(RunTicket::is_taken());
}

#[test]
fn slot_frees_when_the_run_ends() {
    {
        let _active = RunTicket::acquire().expect("slot is free");
        assert!(RunTicket::acquire().is_err());
    }
    assert!(!RunTicket::is_taken());
    assert!(RunTicket::acquire().is_ok());
}
