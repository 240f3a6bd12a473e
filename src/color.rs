// Simple color struct, created from an unsigned 32 representing RRGGBBAA,
// formatted into the CSS color syntaxes the canvas and style properties accept

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_u32(0xffffffff);

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // `rgba(255,255,255,0.5)`; the alpha byte is ignored in favor of an
    // exact opacity in [0, 1]
    pub fn to_css_rgba(&self, opacity: f64) -> String {
        let opacity = opacity.max(0.0).min(1.0);
        format!("rgba({},{},{},{})", self.r, self.g, self.b, opacity)
    }

    // `#rrggbbaa`
    pub fn to_css_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbbaa() {
        let c = Color::from_u32(0x11223344);
        assert_eq!(c, Color { r: 0x11, g: 0x22, b: 0x33, a: 0x44 });
    }

    #[test]
    fn hex_keeps_alpha_channel() {
        assert_eq!(Color::from_u32(0xffffff55).to_css_hex(), "#ffffff55");
        assert_eq!(Color::from_u32(0x0000000f).to_css_hex(), "#0000000f");
    }

    #[test]
    fn opacity_is_drawn_exactly() {
        assert_eq!(Color::WHITE.to_css_rgba(0.5), "rgba(255,255,255,0.5)");
        assert_eq!(Color::WHITE.to_css_rgba(0.15), "rgba(255,255,255,0.15)");
    }

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(Color::WHITE.to_css_rgba(3.0), "rgba(255,255,255,1)");
        assert_eq!(Color::WHITE.to_css_rgba(-1.0), "rgba(255,255,255,0)");
    }
}
