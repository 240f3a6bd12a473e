// Simple particle struct to keep track of individual position, velocity, and size

use crate::viewport::Bounds;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub size: f64,
}

impl Particle {
    pub const MIN_SIZE: f64 = 0.5;
    pub const SIZE_RANGE: f64 = 2.0;
    pub const MAX_SPEED: f64 = 0.25;

    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, size: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            size,
        }
    }

    // Uniform position inside `bounds`, size in [0.5, 2.5),
    // each velocity component in [-0.25, 0.25)
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Particle {
        let pos_x = rng.gen::<f64>() * bounds.width;
        let pos_y = rng.gen::<f64>() * bounds.height;
        let size = rng.gen::<f64>() * Particle::SIZE_RANGE + Particle::MIN_SIZE;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * Particle::MAX_SPEED;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * Particle::MAX_SPEED;
        Particle::new(pos_x, pos_y, vel_x, vel_y, size)
    }

    // Integrate one tick, then invert any velocity component whose edge was
    // crossed. Position is left where it landed.
    pub fn step(&mut self, bounds: Bounds) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
        if self.pos[0] < 0.0 || self.pos[0] > bounds.width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > bounds.height {
            self.vel[1] *= -1.0;
        }
    }

    pub fn nudge(&mut self, delta: [f64; 2]) {
        self.pos[0] += delta[0];
        self.pos[1] += delta[1];
    }
}
