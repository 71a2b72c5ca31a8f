use crate::domain::benchmark::{FrameRateProbe, ProbeResult};
use crate::ecs::Population;
use crate::infrastructure::frame_clock::now_ms;
use crate::infrastructure::rendering::renderer::{BenchRenderer, measure_frames, render_logged};
use std::cell::RefCell;
use std::rc::Rc;

/// Frame-rate probe drawing its population through a [`BenchRenderer`].
pub struct RendererProbe {
    renderer: Rc<RefCell<BenchRenderer>>,
    population: Population,
}

impl RendererProbe {
    pub fn new(renderer: Rc<RefCell<BenchRenderer>>) -> Self {
        Self { renderer, population: Population::new() }
    }

    pub fn renderer(&self) -> &Rc<RefCell<BenchRenderer>> {
        &self.renderer
    }

    pub fn population(&self) -> &Population {
        &self.population
    }
}

impl FrameRateProbe for RendererProbe {
    fn create(&mut self, population: u32) {
        self.population.replace(population);
        let transforms = self.population.transforms();
        self.renderer.borrow_mut().upload_population(&transforms);
        if transforms.is_empty() {
            // Nothing will be measured; wipe the previous generation off screen.
            render_logged(&self.renderer, now_ms());
        }
    }

    async fn measure(&mut self, frame_count: u32) -> ProbeResult {
        if self.population.is_empty() {
            return ProbeResult::EmptyPopulation;
        }
        measure_frames(&self.renderer, frame_count).await
    }
}
