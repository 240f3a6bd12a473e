// Last known pointer position over the page, and the radial push it
// applies to particles that come within its radius

use vecmath::Vector2;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerState {
    pos: Option<[f64; 2]>,
}

impl PointerState {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pos = Some([x, y]);
    }

    // Pointer left the viewport
    pub fn clear(&mut self) {
        self.pos = None;
    }

    pub fn position(&self) -> Option<[f64; 2]> {
        self.pos
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerForce {
    pub pos: Vector2<f64>,
    pub radius: f64,
    pub strength: f64,
}

impl PointerForce {
    pub fn new(pos: [f64; 2], radius: f64, strength: f64) -> Self {
        PointerForce {
            pos,
            radius,
            strength,
        }
    }

    // Displacement for a particle at `point`, pointing from the pointer to the
    // particle and shrinking linearly to zero at the radius. A particle sitting
    // exactly on the pointer has atan2(0, 0) = 0 and is pushed along +x.
    pub fn displacement(&self, point: Vector2<f64>) -> Option<Vector2<f64>> {
        let offset = vecmath::vec2_sub(point, self.pos);
        let distance = vecmath::vec2_len(offset);
        if distance >= self.radius {
            return None;
        }
        let angle = offset[1].atan2(offset[0]);
        let force = (self.radius - distance) / self.radius;
        Some([
            angle.cos() * force * self.strength,
            angle.sin() * force * self.strength,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn force() -> PointerForce {
        PointerForce::new([100.0, 100.0], 150.0, 4.0)
    }

    #[test]
    fn state_starts_absent() {
        let mut state = PointerState::default();
        assert_eq!(state.position(), None);
        state.move_to(3.0, 4.0);
        assert_eq!(state.position(), Some([3.0, 4.0]));
        state.clear();
        assert_eq!(state.position(), None);
    }

    #[test]
    fn outside_radius_has_no_effect() {
        let f = force();
        assert_eq!(f.displacement([250.0, 100.0 + 1e-9]), None);
        assert_eq!(f.displacement([250.0, 100.0]), None);
        assert_eq!(f.displacement([-5000.0, 100.0]), None);
    }

    #[test]
    fn pushes_away_from_pointer() {
        let d = force().displacement([130.0, 100.0]).unwrap();
        assert!(d[0] > 0.0);
        assert!(d[1].abs() < 1e-12);

        let d = force().displacement([100.0, 40.0]).unwrap();
        assert!(d[1] < 0.0);
    }

    #[test]
    fn magnitude_is_linear_in_remaining_radius() {
        // 75px away is half the radius, so half the strength
        let d = force().displacement([175.0, 100.0]).unwrap();
        assert!((vecmath::vec2_len(d) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_particle_pushed_along_x() {
        let d = force().displacement([100.0, 100.0]).unwrap();
        assert_eq!(d, [4.0, 0.0]);
    }

    #[test]
    fn negative_strength_pulls() {
        let f = PointerForce::new([0.0, 0.0], 10.0, -4.0);
        let d = f.displacement([5.0, 0.0]).unwrap();
        assert!(d[0] < 0.0);
    }
}
