pub mod config;
pub mod driver;
pub mod single_flight;
pub mod use_cases;

pub use config::{BenchmarkConfig, default_ceiling};
pub use driver::{BenchmarkDriver, BenchmarkRun};
pub use single_flight::RunTicket;
pub use use_cases::{run_browser_benchmark, run_browser_benchmark_json};
