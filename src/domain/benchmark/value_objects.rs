use derive_more::Display;
use serde::Deserialize;
use std::time::Duration;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Frame rate a population has to sustain to count
pub const TARGET_FPS: f64 = 60.0;
/// Frames rendered per measurement window
pub const DEFAULT_FRAMES_PER_PROBE: u32 = 30;
/// Pause between probes so the previous workload drains
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(33);

/// Graphics API the probe renders through
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, Deserialize,
)]
pub enum Backend {
    #[display(fmt = "WebGPU")]
    #[strum(serialize = "webgpu")]
    #[serde(rename = "webgpu")]
    WebGpu,
    #[display(fmt = "WebGL")]
    #[strum(serialize = "webgl")]
    #[serde(rename = "webgl")]
    WebGl,
}

impl Default for Backend {
    fn default() -> Self {
        Backend::WebGpu
    }
}

/// Kind of object each population member is drawn as
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, Deserialize,
)]
pub enum PrimitiveKind {
    /// One mesh and one draw call per cube
    #[display(fmt = "cubes")]
    #[strum(serialize = "cubes")]
    #[serde(rename = "cubes")]
    Cubes,
    /// All cubes in a single instanced draw
    #[display(fmt = "instanced cubes")]
    #[strum(serialize = "instanced-cubes")]
    #[serde(rename = "instanced-cubes")]
    InstancedCubes,
    /// One line segment per object, single draw
    #[display(fmt = "line segments")]
    #[strum(serialize = "lines")]
    #[serde(rename = "lines")]
    Lines,
}

impl Default for PrimitiveKind {
    fn default() -> Self {
        PrimitiveKind::InstancedCubes
    }
}

/// Inclusive population bounds of one search. `max < min` is an empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRange {
    min: u32,
    max: u32,
}

impl SearchRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }

    /// Number of candidate sizes
    pub fn len(&self) -> u64 {
        if self.is_empty() { 0 } else { u64::from(self.max - self.min) + 1 }
    }

    pub fn contains(&self, population: u32) -> bool {
        (self.min..=self.max).contains(&population)
    }
}

/// Outcome of one measurement window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeResult {
    /// Nothing to draw. Counts as sustaining any frame rate.
    EmptyPopulation,
    /// Average frames per second over the window
    Measured(f64),
}

impl ProbeResult {
    /// Average FPS of `frame_count` frames that took `elapsed_ms` in total.
    pub fn from_frame_window(frame_count: u32, elapsed_ms: f64) -> Self {
        if elapsed_ms > 0.0 {
            ProbeResult::Measured(1000.0 / (elapsed_ms / f64::from(frame_count)))
        } else {
            ProbeResult::Measured(f64::INFINITY)
        }
    }

    pub fn meets(&self, threshold_fps: f64) -> bool {
        match self {
            ProbeResult::EmptyPopulation => true,
            ProbeResult::Measured(fps) => *fps >= threshold_fps,
        }
    }

    pub fn fps(&self) -> Option<f64> {
        match self {
            ProbeResult::EmptyPopulation => None,
            ProbeResult::Measured(fps) => Some(*fps),
        }
    }
}

impl std::fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeResult::EmptyPopulation => write!(f, "empty"),
            ProbeResult::Measured(fps) => write!(f, "{:.1} FPS", fps),
        }
    }
}

/// Knobs of the capacity search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSettings {
    pub threshold_fps: f64,
    pub frames_per_probe: u32,
    pub settle_delay: Duration,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            threshold_fps: TARGET_FPS,
            frames_per_probe: DEFAULT_FRAMES_PER_PROBE,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

/// Binary search bookkeeping for a single run.
///
/// `best` starts at the range floor: the floor is never measured to pass,
/// it is the fallback when nothing larger does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchState {
    lo: u32,
    hi: u32,
    best: u32,
    exhausted: bool,
}

impl SearchState {
    pub fn start(range: SearchRange) -> Self {
        Self { lo: range.min(), hi: range.max(), best: range.min(), exhausted: range.is_empty() }
    }

    /// Midpoint of the remaining candidates, `None` once they run out.
    pub fn next_candidate(&self) -> Option<u32> {
        if self.exhausted || self.lo > self.hi {
            return None;
        }
        Some(self.lo + (self.hi - self.lo) / 2)
    }

    pub fn record(&mut self, candidate: u32, passed: bool) {
        if passed {
            self.best = candidate;
            match candidate.checked_add(1) {
                Some(lo) => self.lo = lo,
                None => self.exhausted = true,
            }
        } else {
            match candidate.checked_sub(1) {
                Some(hi) => self.hi = hi,
                None => self.exhausted = true,
            }
        }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.lo, self.hi)
    }
}

/// One create + measure round of the search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeStep {
    pub population: u32,
    pub result: ProbeResult,
    pub passed: bool,
}

/// Answer of the search together with every probe it took
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchTrace {
    pub best: u32,
    pub steps: Vec<ProbeStep>,
}

impl SearchTrace {
    pub fn probe_count(&self) -> usize {
        self.steps.len()
    }

    pub fn probed_populations(&self) -> Vec<u32> {
        self.steps.iter().map(|s| s.population).collect()
    }
}

/// Final report of a benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkOutcome {
    pub backend: Backend,
    pub primitive: PrimitiveKind,
    pub score: u32,
    pub threshold_fps: f64,
    pub elapsed_seconds: f64,
}

impl BenchmarkOutcome {
    /// Human readable result shown on the page and in the console.
    pub fn status_line(&self) -> String {
        format!(
            "{} {}: {} objects @ {:.0} FPS (search took {:.1}s)",
            self.backend, self.primitive, self.score, self.threshold_fps, self.elapsed_seconds
        )
    }
}
