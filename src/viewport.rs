// Size of the render surface, shared by every particle for reflection

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Bounds { width, height }
    }

    #[cfg(test)]
    pub fn contains(&self, pos: [f64; 2]) -> bool {
        pos[0] >= 0.0 && pos[0] <= self.width && pos[1] >= 0.0 && pos[1] <= self.height
    }

    // Bounds grown by `margin` on every side
    #[cfg(test)]
    pub fn expanded(&self, margin: [f64; 2]) -> (f64, f64, f64, f64) {
        (
            -margin[0],
            -margin[1],
            self.width + margin[0],
            self.height + margin[1],
        )
    }
}
