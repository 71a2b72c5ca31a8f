/// Failures of a benchmark run. Both happen before the first probe;
/// once the search starts there is no failure path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchmarkError {
    /// Bad or contradictory run parameters
    Configuration(String),
    /// Canvas, adapter, device or pipeline could not be set up
    BackendInit(String),
}

impl BenchmarkError {
    /// Short tag used in status messages
    pub fn kind(&self) -> &'static str {
        match self {
            BenchmarkError::Configuration(_) => "configuration",
            BenchmarkError::BackendInit(_) => "backend-init",
        }
    }
}

impl std::fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BenchmarkError::Configuration(msg) => write!(f, "Configuration Error: {}", msg),
            BenchmarkError::BackendInit(msg) => write!(f, "Backend Initialization Error: {}", msg),
        }
    }
}

impl std::error::Error for BenchmarkError {}

pub type BenchmarkResult<T> = Result<T, BenchmarkError>;
