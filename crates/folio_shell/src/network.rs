use bevy::prelude::*;
use folio_core::{Bounds, PageConfig};
use folio_effects::particle::{self, Link, Particle};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Particle network behind the hero section, alive while the page is mounted
#[derive(Resource, Debug, Clone)]
pub struct ParticleNetwork {
    pub particles: Vec<Particle>,
    /// Links computed by the last tick
    pub links: Vec<Link>,
    /// Current drawing surface size
    pub bounds: Bounds,
    /// Frames advanced since mount
    pub frame: u64,
    link_distance: f32,
    link_max_opacity: f32,
}

impl ParticleNetwork {
    /// Seeded from `config.seed`, or fresh entropy when unset
    pub fn new(config: &PageConfig, bounds: Bounds) -> Self {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, bounds, &mut rng)
    }

    pub fn with_rng(config: &PageConfig, bounds: Bounds, rng: &mut impl Rng) -> Self {
        let particles = particle::generate_network(config, bounds, rng);
        let links = particle::connections(&particles, config.link_distance, config.link_max_opacity);
        Self {
            particles,
            links,
            bounds,
            frame: 0,
            link_distance: config.link_distance,
            link_max_opacity: config.link_max_opacity,
        }
    }

    /// One display frame: move every particle, then relink
    pub fn tick(&mut self) {
        for p in self.particles.iter_mut() {
            p.step(self.bounds);
        }
        self.links = particle::connections(&self.particles, self.link_distance, self.link_max_opacity);
        self.frame = self.frame.wrapping_add(1);
    }

    /// New surface size. Particles are left where they are.
    pub fn resize(&mut self, bounds: Bounds) -> bool {
        if self.bounds == bounds {
            return false;
        }
        self.bounds = bounds;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_and_relinks() {
        let config = PageConfig {
            seed: Some(11),
            ..PageConfig::default()
        };
        let mut net = ParticleNetwork::new(&config, Bounds::new(1280.0, 720.0));
        let before = net.particles.clone();
        net.tick();

        assert_eq!(net.frame, 1);
        for (a, b) in before.iter().zip(&net.particles) {
            assert!((b.x - (a.x + a.vx)).abs() < 1e-4);
        }
        assert_eq!(net.links, particle::connections(&net.particles, 120.0, 0.2));
    }

    #[test]
    fn test_resize_keeps_positions() {
        let config = PageConfig {
            seed: Some(5),
            ..PageConfig::default()
        };
        let mut net = ParticleNetwork::new(&config, Bounds::new(1920.0, 1080.0));
        let before = net.particles.clone();

        assert!(net.resize(Bounds::new(400.0, 300.0)));
        assert!(!net.resize(Bounds::new(400.0, 300.0)));
        assert_eq!(net.particles, before);
        assert_eq!(net.bounds, Bounds::new(400.0, 300.0));
    }
}
