use folio_core::{Bounds, PageConfig, PARTICLE_MIN_RADIUS, PARTICLE_RADIUS_SPREAD};
use rand::Rng;

/// A decorative point in the hero background.
/// Coordinates are viewport pixels, origin top-left, y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

/// Which axes reflected during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

impl Particle {
    /// Advance one frame. A coordinate past an edge turns its velocity back
    /// inward; the coordinate itself is left where it landed.
    pub fn step(&mut self, bounds: Bounds) -> Bounce {
        self.x += self.vx;
        self.y += self.vy;

        let mut bounce = Bounce::default();
        if self.x < 0.0 && self.vx < 0.0 || self.x > bounds.width && self.vx > 0.0 {
            self.vx = -self.vx;
            bounce.x = true;
        }
        if self.y < 0.0 && self.vy < 0.0 || self.y > bounds.height && self.vy > 0.0 {
            self.vy = -self.vy;
            bounce.y = true;
        }
        bounce
    }

    pub fn distance(&self, other: &Particle) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A line between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Scatter the initial particles uniformly over the viewport
pub fn generate_network(config: &PageConfig, bounds: Bounds, rng: &mut impl Rng) -> Vec<Particle> {
    let n = config.particle_count as usize;
    let mut particles = Vec::with_capacity(n);
    for _ in 0..n {
        particles.push(random_particle(bounds, config.max_speed, rng));
    }
    particles
}

fn random_particle(bounds: Bounds, speed_range: f32, rng: &mut impl Rng) -> Particle {
    Particle {
        x: unit(rng) * bounds.width,
        y: unit(rng) * bounds.height,
        vx: (unit(rng) - 0.5) * speed_range,
        vy: (unit(rng) - 0.5) * speed_range,
        radius: unit(rng) * PARTICLE_RADIUS_SPREAD + PARTICLE_MIN_RADIUS,
    }
}

fn unit(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0.0..1.0f32)
}

/// Opacity of a link at `distance`: linear falloff from `max_opacity` to 0 at `threshold`
pub fn link_opacity(distance: f32, threshold: f32, max_opacity: f32) -> f32 {
    if distance >= threshold {
        return 0.0;
    }
    max_opacity * (1.0 - distance / threshold)
}

/// Every unordered pair closer than `threshold`.
/// O(N^2); fine for a few hundred particles, beyond that bucket them first.
pub fn connections(particles: &[Particle], threshold: f32, max_opacity: f32) -> Vec<Link> {
    let mut links = Vec::new();
    for (i, p) in particles.iter().enumerate() {
        for (j, q) in particles.iter().enumerate().skip(i + 1) {
            let d = p.distance(q);
            if d < threshold {
                links.push(Link {
                    a: i,
                    b: j,
                    opacity: link_opacity(d, threshold, max_opacity),
                });
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle { x, y, vx, vy, radius: 2.0 }
    }

    #[test]
    fn test_generate_network_within_ranges() {
        let config = PageConfig::default();
        let bounds = Bounds::new(1280.0, 720.0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let particles = generate_network(&config, bounds, &mut rng);

        assert_eq!(particles.len(), 80);
        for p in &particles {
            assert!((0.0..1280.0).contains(&p.x));
            assert!((0.0..720.0).contains(&p.y));
            assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
            assert!((1.0..3.0).contains(&p.radius));
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = PageConfig::default();
        let bounds = Bounds::new(800.0, 600.0);
        let a = generate_network(&config, bounds, &mut ChaCha8Rng::seed_from_u64(3));
        let b = generate_network(&config, bounds, &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_particles_stay_near_bounds() {
        let config = PageConfig::default();
        for (w, h) in [(320.0, 480.0), (1920.0, 1080.0), (50.0, 50.0)] {
            let bounds = Bounds::new(w, h);
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let mut particles = generate_network(&config, bounds, &mut rng);
            for _ in 0..5_000 {
                for p in particles.iter_mut() {
                    p.step(bounds);
                    let slack_x = p.vx.abs();
                    let slack_y = p.vy.abs();
                    assert!(p.x >= -slack_x && p.x <= w + slack_x, "x = {}", p.x);
                    assert!(p.y >= -slack_y && p.y <= h + slack_y, "y = {}", p.y);
                }
            }
        }
    }

    #[test]
    fn test_bounce_flips_once_per_crossing() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut p = particle(99.9, 50.0, 0.2, 0.1);

        let first = p.step(bounds);
        assert_eq!(first, Bounce { x: true, y: false });
        assert!(p.vx < 0.0);
        assert!(p.vy > 0.0);

        // Already heading inward: no second flip while still outside
        p.x = 150.0;
        let second = p.step(bounds);
        assert_eq!(second, Bounce::default());
        assert!(p.vx < 0.0);
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut p = particle(0.1, 0.1, -0.2, -0.2);
        let bounce = p.step(bounds);
        assert_eq!(bounce, Bounce { x: true, y: true });
        assert!(p.vx > 0.0 && p.vy > 0.0);
    }

    #[test]
    fn test_stranded_particle_returns_after_shrink() {
        // Viewport shrank from 2000 to 500 wide; particle is far outside
        let bounds = Bounds::new(500.0, 500.0);
        let mut p = particle(1500.0, 250.0, 0.25, 0.0);
        let start = p.x;
        for _ in 0..100 {
            p.step(bounds);
        }
        assert!(p.x < start, "particle should drift back toward the viewport");
        assert!(p.vx < 0.0);
    }

    #[test]
    fn test_link_opacity_monotonic_and_zero_at_threshold() {
        let mut prev = link_opacity(0.0, 120.0, 0.2);
        assert!((prev - 0.2).abs() < 1e-6);
        let mut d = 1.0;
        while d < 200.0 {
            let o = link_opacity(d, 120.0, 0.2);
            assert!(o <= prev, "opacity rose at d = {}", d);
            prev = o;
            d += 1.0;
        }
        assert_eq!(link_opacity(120.0, 120.0, 0.2), 0.0);
        assert_eq!(link_opacity(500.0, 120.0, 0.2), 0.0);
    }

    #[test]
    fn test_connections_respects_threshold() {
        let particles = [
            particle(0.0, 0.0, 0.0, 0.0),
            particle(60.0, 0.0, 0.0, 0.0),
            particle(0.0, 120.0, 0.0, 0.0),
            particle(500.0, 500.0, 0.0, 0.0),
        ];
        let links = connections(&particles, 120.0, 0.2);

        // 0-1 (60), 1-2 (~134, out), 0-2 (exactly 120, out)
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert!((links[0].opacity - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_connections_pair_count_dense() {
        // All particles coincide: every unordered pair links
        let particles = vec![particle(10.0, 10.0, 0.0, 0.0); 80];
        let links = connections(&particles, 120.0, 0.2);
        assert_eq!(links.len(), 80 * 79 / 2);
    }
}
