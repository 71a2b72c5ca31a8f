use super::probe::{FrameRateProbe, SettlePause};
use super::value_objects::{ProbeStep, SearchRange, SearchSettings, SearchState, SearchTrace};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_trace};

/// Finds the largest population the probe renders at the target frame rate.
///
/// Plain binary search over the population size. Every branch is decided by
/// a single measurement, so a noisy frame can steer it wrong; the settle
/// pause after each probe is the only mitigation.
#[derive(Debug, Clone, Default)]
pub struct CapacitySearch {
    settings: SearchSettings,
}

impl CapacitySearch {
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Run the search over `range`.
    ///
    /// Probes are strictly sequential. When the function returns, the probe
    /// holds the population of the reported capacity rather than the last
    /// midpoint tried. An empty range performs no measurement and reports
    /// `range.min()`.
    pub async fn find_max_objects<P, S>(
        &self,
        range: SearchRange,
        probe: &mut P,
        pause: &mut S,
    ) -> SearchTrace
    where
        P: FrameRateProbe,
        S: SettlePause,
    {
        let mut state = SearchState::start(range);
        let mut steps = Vec::new();

        while let Some(population) = state.next_candidate() {
            probe.create(population);
            let result = probe.measure(self.settings.frames_per_probe).await;
            let passed = result.meets(self.settings.threshold_fps);
            state.record(population, passed);

            log_debug!(
                LogComponent::Domain("CapacitySearch"),
                "{} objects -> {} ({})",
                population,
                result,
                if passed { "pass" } else { "fail" }
            );
            log_trace!(LogComponent::Domain("CapacitySearch"), "bounds now {:?}", state.bounds());

            steps.push(ProbeStep { population, result, passed });
            pause.pause(self.settings.settle_delay).await;
        }

        let best = state.best();
        probe.create(best);

        SearchTrace { best, steps }
    }
}
