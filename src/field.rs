//! The particle background: a fixed-size collection of particles that drift,
//! reflect off the viewport edges, and get pushed around by the pointer.

use crate::color::Color;
use crate::config::EffectsConfig;
use crate::particle::Particle;
use crate::pointer::PointerForce;
use crate::renderer::Surface;
use crate::viewport::Bounds;
use rand::Rng;
use wasm_bindgen::JsValue;

/// Everything a tick reads from the outside world.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameContext {
    pub pointer: Option<[f64; 2]>,
    pub bounds: Bounds,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    pointer_radius: f64,
    pointer_strength: f64,
    // CSS fill style shared by every particle
    fill: String,
}

impl ParticleField {
    pub fn new(config: &EffectsConfig) -> Self {
        ParticleField {
            particles: Vec::new(),
            pointer_radius: config.pointer_radius,
            pointer_strength: config.pointer_strength,
            fill: Color::WHITE.to_css_rgba(config.particle_alpha),
        }
    }

    /// Replaces the collection with `count` particles scattered over `bounds`.
    pub fn initialize<R: Rng + ?Sized>(&mut self, count: u32, bounds: Bounds, rng: &mut R) {
        self.particles.clear();
        self.particles.reserve(count as usize);
        for _ in 0..count {
            self.particles.push(Particle::random(rng, bounds));
        }
    }

    /// One animation tick: integrate, reflect, then apply the pointer push.
    pub fn advance(&mut self, ctx: &FrameContext) {
        let force = ctx
            .pointer
            .map(|pos| PointerForce::new(pos, self.pointer_radius, self.pointer_strength));
        for particle in &mut self.particles {
            particle.step(ctx.bounds);
            if let Some(delta) = force.as_ref().and_then(|f| f.displacement(particle.pos)) {
                particle.nudge(delta);
            }
        }
    }

    pub fn render<S: Surface>(&self, surface: &mut S, bounds: Bounds) -> Result<(), JsValue> {
        surface.clear(bounds);
        for p in &self.particles {
            surface.fill_circle(p.pos, p.size, &self.fill)?;
        }
        Ok(())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct RecordingSurface {
        clears: Vec<Bounds>,
        circles: Vec<([f64; 2], f64, String)>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, bounds: Bounds) {
            self.clears.push(bounds);
        }

        fn fill_circle(&mut self, center: [f64; 2], radius: f64, fill: &str) -> Result<(), JsValue> {
            self.circles.push((center, radius, fill.to_owned()));
            Ok(())
        }
    }

    fn seeded_field(count: u32, bounds: Bounds) -> ParticleField {
        let mut field = ParticleField::new(&EffectsConfig::default());
        field.initialize(count, bounds, &mut StdRng::seed_from_u64(42));
        field
    }

    #[test]
    fn initialize_replaces_existing_particles() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut field = seeded_field(150, bounds);
        assert_eq!(field.len(), 150);
        field.initialize(10, bounds, &mut StdRng::seed_from_u64(1));
        assert_eq!(field.len(), 10);
        assert!(field.particles().iter().all(|p| bounds.contains(p.pos)));
    }

    #[test]
    fn render_clears_then_draws_every_particle() {
        let bounds = Bounds::new(320.0, 240.0);
        let field = seeded_field(25, bounds);
        let mut surface = RecordingSurface::default();
        field.render(&mut surface, bounds).unwrap();

        assert_eq!(surface.clears, vec![bounds]);
        assert_eq!(surface.circles.len(), 25);
        for ((center, radius, fill), p) in surface.circles.iter().zip(field.particles()) {
            assert_eq!(*center, p.pos);
            assert_eq!(*radius, p.size);
            assert_eq!(fill, "rgba(255,255,255,0.5)");
        }
    }

    #[test]
    fn configured_alpha_is_drawn_exactly() {
        let config = EffectsConfig {
            particle_alpha: 0.35,
            ..EffectsConfig::default()
        };
        let bounds = Bounds::new(100.0, 100.0);
        let mut field = ParticleField::new(&config);
        field.initialize(3, bounds, &mut StdRng::seed_from_u64(3));
        let mut surface = RecordingSurface::default();
        field.render(&mut surface, bounds).unwrap();
        assert!(surface.circles.iter().all(|(_, _, fill)| fill == "rgba(255,255,255,0.35)"));
    }

    #[test]
    fn absent_pointer_is_pure_drift() {
        let bounds = Bounds::new(1000.0, 1000.0);
        let mut field = ParticleField::new(&EffectsConfig::default());
        field.particles.push(Particle::new(500.0, 500.0, 0.25, -0.125, 1.0));
        let ctx = FrameContext { pointer: None, bounds };
        for _ in 0..40 {
            field.advance(&ctx);
        }
        assert_eq!(field.particles()[0].pos, [510.0, 495.0]);
    }

    #[test]
    fn pointer_pushes_nearby_particle_away() {
        let bounds = Bounds::new(1000.0, 1000.0);
        let mut field = ParticleField::new(&EffectsConfig::default());
        field.particles.push(Particle::new(500.0, 500.0, 0.0, 0.0, 1.0));
        field.particles.push(Particle::new(900.0, 900.0, 0.0, 0.0, 1.0));
        let ctx = FrameContext {
            pointer: Some([425.0, 500.0]),
            bounds,
        };
        field.advance(&ctx);
        // 75px from a 150px radius: half of strength 4
        assert!((field.particles()[0].pos[0] - 502.0).abs() < 1e-9);
        assert_eq!(field.particles()[1].pos, [900.0, 900.0]);
    }

    #[test]
    fn pointer_push_is_not_reflected() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut field = ParticleField::new(&EffectsConfig::default());
        field.particles.push(Particle::new(99.0, 50.0, 0.1, 0.0, 1.0));
        let ctx = FrameContext {
            pointer: Some([98.0, 50.0]),
            bounds,
        };
        field.advance(&ctx);
        let p = field.particles()[0];
        assert!(p.pos[0] > 100.0);
        assert_eq!(p.vel[0], 0.1);
    }
}
