use crate::application::config::BenchmarkConfig;
use crate::application::driver::BenchmarkDriver;
use crate::application::single_flight::RunTicket;
use crate::domain::{
    benchmark::BenchmarkOutcome,
    errors::{BenchmarkError, BenchmarkResult},
    logging::{LogComponent, get_logger},
};
use crate::global_state::last_score;
use crate::infrastructure::{
    frame_clock::TimerPause,
    rendering::{
        BenchRenderer, RendererProbe,
        renderer::{keep_presenting, set_global_renderer},
    },
    services::BrowserTimeProvider,
    ui::{StatusBoard, StatusKind},
};
use leptos::SignalSet;
use std::cell::RefCell;
use std::rc::Rc;

/// Run one benchmark on the page's canvas and report it.
///
/// The status board shows progress, the final line or the initialization
/// error. After a successful run the winning population keeps animating.
/// Refused with a configuration error while another run is in flight.
pub async fn run_browser_benchmark(config: BenchmarkConfig) -> BenchmarkResult<BenchmarkOutcome> {
    run_exclusive(Ok(config)).await
}

/// Same as [`run_browser_benchmark`] for a JSON config handed over by the
/// page. Parse errors are reported like any other configuration error.
pub async fn run_browser_benchmark_json(config_json: String) -> BenchmarkResult<BenchmarkOutcome> {
    run_exclusive(BenchmarkConfig::from_json(&config_json)).await
}

async fn run_exclusive(
    config: BenchmarkResult<BenchmarkConfig>,
) -> BenchmarkResult<BenchmarkOutcome> {
    // Claimed before the first await so concurrent callers see it.
    let _ticket = match RunTicket::acquire() {
        Ok(ticket) => ticket,
        Err(e) => {
            get_logger().warn(LogComponent::Application("RunBenchmark"), &e.to_string());
            return Err(e);
        }
    };

    let status = StatusBoard::new();
    let config = match config.and_then(|config| config.validate().map(|()| config)) {
        Ok(config) => config,
        Err(e) => {
            status.show(StatusKind::Failed, &e.to_string());
            get_logger().error(LogComponent::Application("RunBenchmark"), &e.to_string());
            return Err(e);
        }
    };

    status.show(
        StatusKind::Running,
        &format!("Running {} {} benchmark...", config.backend, config.primitive),
    );

    let driver = BenchmarkDriver::new(config.clone(), Rc::new(BrowserTimeProvider::new()));
    let initialize = async {
        let renderer =
            BenchRenderer::new(&config.canvas_id, config.backend, config.primitive).await?;
        let renderer = Rc::new(RefCell::new(renderer));
        set_global_renderer(renderer.clone());
        Ok::<_, BenchmarkError>(RendererProbe::new(renderer))
    };

    match driver.run(initialize, &mut TimerPause).await {
        Ok(run) => {
            status.show(StatusKind::Done, &run.outcome.status_line());
            last_score().set(Some(run.outcome.score));
            wasm_bindgen_futures::spawn_local(keep_presenting(run.probe.renderer().clone()));
            Ok(run.outcome)
        }
        Err(e) => {
            let message = match &e {
                BenchmarkError::BackendInit(reason) => {
                    format!("Failed to initialize {}: {}", config.backend, reason)
                }
                other => other.to_string(),
            };
            // The driver already logged the failure.
            status.show(StatusKind::Failed, &message);
            Err(e)
        }
    }
}
