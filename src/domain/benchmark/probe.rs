use super::value_objects::ProbeResult;
use std::time::Duration;

/// Workload under test: materializes `n` objects and times their rendering.
///
/// Implementations keep a single generation of objects alive. `create`
/// throws away whatever the previous call built before building anew.
#[allow(async_fn_in_trait)]
pub trait FrameRateProbe {
    /// Replace the current population with exactly `population` objects.
    fn create(&mut self, population: u32);

    /// Render `frame_count` frames of the current population and report
    /// the average frame rate. Resolves after the last frame was presented.
    async fn measure(&mut self, frame_count: u32) -> ProbeResult;
}

/// Suspension between two probes of the search
#[allow(async_fn_in_trait)]
pub trait SettlePause {
    async fn pause(&mut self, delay: Duration);
}

/// Returns immediately. For stub probes and offline runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPause;

impl SettlePause for NoPause {
    async fn pause(&mut self, _delay: Duration) {}
}
