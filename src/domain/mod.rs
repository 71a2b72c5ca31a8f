pub mod benchmark;
pub mod errors;
pub mod logging;
