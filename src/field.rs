// The particle field: a fixed set of drifting particles on a resizable
// surface. `tick` advances the simulation one frame, `draw` paints the
// current state through any Renderer.

use crate::config::{ConnectionStrategy, FieldConfig};
use crate::connection::{self, Connection, SpatialGrid};
use crate::particle::Particle;
use crate::renderer::Renderer;
use crate::surface::Surface;
use rand::Rng;

pub struct ParticleField {
    surface: Surface,
    particles: Vec<Particle>,
    config: FieldConfig,
}

impl ParticleField {
    /// Default look with `count` particles seeded from the thread RNG.
    pub fn create(width: u32, height: u32, count: usize) -> ParticleField {
        let config = FieldConfig::default().with_count(count);
        ParticleField::with_rng(Surface::new(width, height), config, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        surface: Surface,
        config: FieldConfig,
        rng: &mut R,
    ) -> ParticleField {
        let particles = (0..config.count)
            .map(|_| Particle::spawn(&mut *rng, surface, &config))
            .collect();
        ParticleField {
            surface,
            particles,
            config,
        }
    }

    pub fn from_particles(
        surface: Surface,
        config: FieldConfig,
        particles: Vec<Particle>,
    ) -> ParticleField {
        let config = config.with_count(particles.len());
        ParticleField {
            surface,
            particles,
            config,
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    // Particles are left where they are; the bounce check picks up the new
    // bounds on the next tick.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface = Surface::new(width, height);
    }

    pub fn tick(&mut self) {
        let surface = self.surface;
        for particle in &mut self.particles {
            particle.step(surface);
        }
    }

    pub fn connections(&self) -> Vec<Connection> {
        let max_distance = self.config.link.distance;
        match self.config.strategy {
            ConnectionStrategy::Pairwise => connection::pairwise(&self.particles, max_distance),
            ConnectionStrategy::Grid => SpatialGrid::connections(&self.particles, max_distance),
        }
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        renderer.clear(self.surface)?;
        for p in &self.particles {
            renderer.fill_circle(p.pos, p.radius(), p.color())?;
        }

        let link = &self.config.link;
        for c in self.connections() {
            let color = link.color.with_alpha(link.opacity(c.distance));
            renderer.stroke_line(
                self.particles[c.a].pos,
                self.particles[c.b].pos,
                link.width,
                color,
            )?;
        }
        Ok(())
    }

    pub fn frame<R: Renderer>(&mut self, renderer: &mut R) -> Result<(), R::Error> {
        self.tick();
        self.draw(renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::convert::Infallible;
    use vecmath::Vector2;

    #[derive(Default)]
    struct Counter {
        clears: usize,
        circles: usize,
        lines: Vec<(Vector2<f64>, Vector2<f64>, f64)>,
    }

    impl Renderer for Counter {
        type Error = Infallible;

        fn clear(&mut self, _: Surface) -> Result<(), Infallible> {
            self.clears += 1;
            Ok(())
        }

        fn fill_circle(&mut self, _: Vector2<f64>, _: f64, _: Color) -> Result<(), Infallible> {
            self.circles += 1;
            Ok(())
        }

        fn stroke_line(
            &mut self,
            from: Vector2<f64>,
            to: Vector2<f64>,
            _: f64,
            color: Color,
        ) -> Result<(), Infallible> {
            self.lines.push((from, to, color.a));
            Ok(())
        }
    }

    fn still(x: f64, y: f64) -> Particle {
        Particle::new([x, y], [0.0, 0.0], 1.5, Color::rgb(90, 80, 240))
    }

    fn seeded(seed: u64) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleField::with_rng(Surface::new(800, 400), FieldConfig::default(), &mut rng)
    }

    #[test]
    fn create_uses_requested_count() {
        assert_eq!(ParticleField::create(640, 360, 50).len(), 50);
        assert_eq!(ParticleField::create(640, 360, 3).len(), 3);
        assert!(ParticleField::create(0, 0, 0).is_empty());
    }

    #[test]
    fn same_seed_same_field() {
        assert_eq!(seeded(9).particles(), seeded(9).particles());
        assert_ne!(seeded(9).particles(), seeded(10).particles());
    }

    #[test]
    fn tick_and_draw_keep_particle_count() {
        let mut field = seeded(3);
        let mut counter = Counter::default();
        for _ in 0..500 {
            field.frame(&mut counter).unwrap();
            assert_eq!(field.len(), 50);
        }
        assert_eq!(counter.clears, 500);
        assert_eq!(counter.circles, 500 * 50);
    }

    #[test]
    fn particles_stay_near_bounds() {
        let mut field = seeded(5);
        let [w, h] = field.surface().extent();
        for _ in 0..5000 {
            field.tick();
            for p in field.particles() {
                // at most one step of overshoot
                assert!(p.x() >= -0.25 && p.x() <= w + 0.25);
                assert!(p.y() >= -0.25 && p.y() <= h + 0.25);
            }
        }
    }

    #[test]
    fn resize_does_not_move_particles() {
        let mut field = seeded(11);
        let before = field.particles().to_vec();
        field.resize(10, 10);
        assert_eq!(field.surface(), Surface::new(10, 10));
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn draw_links_close_pairs_with_fading_opacity() {
        let field = ParticleField::from_particles(
            Surface::new(300, 300),
            FieldConfig::default(),
            vec![still(0.0, 0.0), still(30.0, 40.0), still(250.0, 250.0)],
        );
        let mut counter = Counter::default();
        field.draw(&mut counter).unwrap();
        assert_eq!(counter.circles, 3);
        assert_eq!(counter.lines.len(), 1);
        let (from, to, alpha) = counter.lines[0];
        assert_eq!(from, [0.0, 0.0]);
        assert_eq!(to, [30.0, 40.0]);
        assert!((alpha - 0.1 * (1.0 - 50.0 / 100.0)).abs() < 1e-12);
    }

    #[test]
    fn grid_strategy_draws_the_same_frame() {
        let mut rng = StdRng::seed_from_u64(21);
        let config = FieldConfig::default().with_count(120);
        let pairwise = ParticleField::with_rng(Surface::new(500, 300), config, &mut rng);
        let grid = ParticleField::from_particles(
            pairwise.surface(),
            config.with_strategy(ConnectionStrategy::Grid),
            pairwise.particles().to_vec(),
        );

        let mut a = Counter::default();
        let mut b = Counter::default();
        pairwise.draw(&mut a).unwrap();
        grid.draw(&mut b).unwrap();
        assert!(!a.lines.is_empty());
        assert_eq!(a.lines, b.lines);
    }
}
