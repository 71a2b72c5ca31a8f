pub mod probe;
pub mod services;
pub mod value_objects;

pub use probe::{FrameRateProbe, NoPause, SettlePause};
pub use services::CapacitySearch;
pub use value_objects::{
    Backend, BenchmarkOutcome, PrimitiveKind, ProbeResult, ProbeStep, SearchRange, SearchSettings,
    SearchState, SearchTrace, TARGET_FPS,
};
