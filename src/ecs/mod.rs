use hecs::World;

pub mod components;
pub mod systems;

/// The probe's objects. One entity per drawable.
///
/// Only one generation exists at a time: [`Population::replace`] despawns
/// everything before spawning the new set.
#[derive(Default)]
pub struct Population {
    pub world: World,
}

impl Population {
    /// Create a new empty population.
    pub fn new() -> Self {
        Self { world: World::new() }
    }

    /// Discard all objects and spawn exactly `count` new ones.
    pub fn replace(&mut self, count: u32) {
        self.world.clear();
        systems::spawn_grid(&mut self.world, count);
    }

    pub fn len(&self) -> u32 {
        self.world.len()
    }

    pub fn is_empty(&self) -> bool {
        self.world.len() == 0
    }

    /// GPU-ready transforms of every object
    pub fn transforms(&self) -> Vec<crate::infrastructure::rendering::ObjectTransform> {
        systems::gather_transforms(&self.world)
    }
}
