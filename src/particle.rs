// Simple particle struct to keep track of individual position, velocity, size, and color

use crate::color::Color;
use crate::config::FieldConfig;
use crate::surface::Surface;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    radius: f64,
    color: Color,
}

impl Particle {
    pub const MIN_RADIUS: f64 = 0.1;

    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, color: Color) -> Particle {
        assert!(radius > 0.0, "particle radius must be positive");
        Particle {
            pos,
            vel,
            radius,
            color,
        }
    }

    // Random position inside the surface, random drift, radius and color
    // from the configured bands
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, surface: Surface, config: &FieldConfig) -> Particle {
        let [width, height] = surface.extent();
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let spread = config.max_radius - config.min_radius;
        // a zero or NaN band from the config must not yield a dead particle
        let radius = (config.min_radius + rng.gen::<f64>() * spread).max(Particle::MIN_RADIUS);
        let color = config.color_band.sample(rng);
        let vel_x = (rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed;
        let vel_y = (rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed;
        Particle::new([pos_x, pos_y], [vel_x, vel_y], radius, color)
    }

    pub fn x(&self) -> f64 {
        self.pos[0]
    }

    pub fn y(&self) -> f64 {
        self.pos[1]
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(other.pos, self.pos))
    }

    // Move first, then bounce. The check runs on the moved position, so a
    // particle can sit just past the edge for one frame. Only an outward
    // velocity is flipped: a particle left outside by a shrinking surface
    // turns around once and drifts back in.
    pub fn step(&mut self, surface: Surface) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        let extent = surface.extent();
        for axis in 0..2 {
            let pos = self.pos[axis];
            let vel = self.vel[axis];
            if (pos < 0.0 && vel < 0.0) || (pos > extent[axis] && vel > 0.0) {
                self.vel[axis] = -vel;
            }
        }
    }
}
