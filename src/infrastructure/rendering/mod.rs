pub mod gpu_structures;
pub mod probe;
pub mod renderer;

pub use gpu_structures::*;
pub use probe::RendererProbe;
pub use renderer::BenchRenderer;
