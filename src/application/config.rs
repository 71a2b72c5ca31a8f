use crate::domain::benchmark::{
    Backend, PrimitiveKind, SearchRange, SearchSettings, TARGET_FPS,
    value_objects::{DEFAULT_FRAMES_PER_PROBE, DEFAULT_SETTLE_DELAY},
};
use crate::domain::errors::{BenchmarkError, BenchmarkResult};
use serde::Deserialize;
use std::time::Duration;

/// Canvas the benchmark pages render into
pub const DEFAULT_CANVAS_ID: &str = "bench-canvas";

/// Upper search bound for a backend/primitive pair.
pub fn default_ceiling(backend: Backend, primitive: PrimitiveKind) -> u32 {
    match (backend, primitive) {
        (Backend::WebGpu, PrimitiveKind::Cubes) => 50_000,
        (Backend::WebGpu, PrimitiveKind::InstancedCubes) => 2_000_000,
        (Backend::WebGpu, PrimitiveKind::Lines) => 1_000_000,
        (Backend::WebGl, PrimitiveKind::Cubes) => 20_000,
        (Backend::WebGl, PrimitiveKind::InstancedCubes) => 1_000_000,
        (Backend::WebGl, PrimitiveKind::Lines) => 500_000,
    }
}

/// Parameters of one benchmark run, usually handed over as JSON by the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub backend: Backend,
    pub primitive: PrimitiveKind,
    pub min_objects: u32,
    /// Overrides [`default_ceiling`] when set
    pub max_objects: Option<u32>,
    pub threshold_fps: f64,
    pub frames_per_probe: u32,
    pub settle_delay_ms: u64,
    pub canvas_id: String,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            primitive: PrimitiveKind::default(),
            min_objects: 0,
            max_objects: None,
            threshold_fps: TARGET_FPS,
            frames_per_probe: DEFAULT_FRAMES_PER_PROBE,
            settle_delay_ms: DEFAULT_SETTLE_DELAY.as_millis() as u64,
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
        }
    }
}

impl BenchmarkConfig {
    pub fn new(backend: Backend, primitive: PrimitiveKind) -> Self {
        Self { backend, primitive, ..Self::default() }
    }

    /// Parse and validate. Missing fields take their defaults, and so does
    /// a blank string.
    pub fn from_json(json: &str) -> BenchmarkResult<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BenchmarkError::Configuration(format!("invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BenchmarkResult<()> {
        if self.frames_per_probe == 0 {
            return Err(BenchmarkError::Configuration(
                "frames_per_probe must be positive".to_string(),
            ));
        }
        if !self.threshold_fps.is_finite() || self.threshold_fps <= 0.0 {
            return Err(BenchmarkError::Configuration(format!(
                "threshold_fps must be a positive number, got {}",
                self.threshold_fps
            )));
        }
        if self.canvas_id.trim().is_empty() {
            return Err(BenchmarkError::Configuration("canvas_id is empty".to_string()));
        }
        Ok(())
    }

    pub fn ceiling(&self) -> u32 {
        self.max_objects.unwrap_or_else(|| default_ceiling(self.backend, self.primitive))
    }

    pub fn search_range(&self) -> SearchRange {
        SearchRange::new(self.min_objects, self.ceiling())
    }

    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            threshold_fps: self.threshold_fps,
            frames_per_probe: self.frames_per_probe,
            settle_delay: Duration::from_millis(self.settle_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_takes_defaults() {
        let config = BenchmarkConfig::from_json("{}").unwrap();
        assert_eq!(config, BenchmarkConfig::default());
        assert_eq!(BenchmarkConfig::from_json("  ").unwrap(), config);
        assert_eq!(config.search_settings(), SearchSettings::default());
    }

    #[test]
    fn every_pair_has_a_positive_ceiling() {
        use strum::IntoEnumIterator;
        for backend in Backend::iter() {
            for primitive in PrimitiveKind::iter() {
                assert!(default_ceiling(backend, primitive) > 0);
            }
        }
    }
}
