use crate::application::config::BenchmarkConfig;
use crate::domain::{
    benchmark::{BenchmarkOutcome, CapacitySearch, FrameRateProbe, SearchTrace, SettlePause},
    errors::BenchmarkResult,
    logging::{LogComponent, LogLevel, TimeProvider, get_logger},
};
use std::future::Future;
use std::rc::Rc;

/// Everything a finished run leaves behind
pub struct BenchmarkRun<P> {
    pub outcome: BenchmarkOutcome,
    pub trace: SearchTrace,
    /// Probe sized to the reported capacity
    pub probe: P,
}

/// Binds one probe to the capacity search and times it.
pub struct BenchmarkDriver {
    config: BenchmarkConfig,
    clock: Rc<dyn TimeProvider>,
}

impl BenchmarkDriver {
    pub fn new(config: BenchmarkConfig, clock: Rc<dyn TimeProvider>) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Initialize the backend, then search.
    ///
    /// An initialization error aborts the run before the first probe and is
    /// returned as is. The elapsed time covers the whole search including
    /// settle pauses, but not initialization.
    pub async fn run<P, S, I>(&self, initialize: I, pause: &mut S) -> BenchmarkResult<BenchmarkRun<P>>
    where
        P: FrameRateProbe,
        S: SettlePause,
        I: Future<Output = BenchmarkResult<P>>,
    {
        let label = format!("{} {}", self.config.backend, self.config.primitive);
        get_logger().info(
            LogComponent::Application("BenchmarkDriver"),
            &format!("🚀 Initializing {} benchmark...", label),
        );

        let mut probe = match initialize.await {
            Ok(probe) => probe,
            Err(e) => {
                get_logger().error(
                    LogComponent::Application("BenchmarkDriver"),
                    &format!("❌ {} initialization failed: {}", label, e),
                );
                return Err(e);
            }
        };

        let range = self.config.search_range();
        get_logger().info(
            LogComponent::Application("BenchmarkDriver"),
            &format!(
                "🔍 Searching {}..={} objects at {:.0} FPS",
                range.min(),
                range.max(),
                self.config.threshold_fps
            ),
        );

        let search = CapacitySearch::new(self.config.search_settings());
        let started = self.clock.now_ms();
        let trace = search.find_max_objects(range, &mut probe, pause).await;
        let elapsed_ms = (self.clock.now_ms() - started).max(0.0);

        let outcome = BenchmarkOutcome {
            backend: self.config.backend,
            primitive: self.config.primitive,
            score: trace.best,
            threshold_fps: self.config.threshold_fps,
            elapsed_seconds: elapsed_ms / 1000.0,
        };

        get_logger().log_with_metadata(
            LogLevel::Info,
            LogComponent::Application("BenchmarkDriver"),
            &format!("✅ {}", outcome.status_line()),
            &format!("probes={}", trace.probe_count()),
        );

        Ok(BenchmarkRun { outcome, trace, probe })
    }
}
