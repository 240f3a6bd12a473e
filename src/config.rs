// Tunable constants for every effect on the page. Page scripts may build one,
// adjust fields, and hand it to `start_with_config`.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    /// Particles created when the background is initialized.
    pub particle_count: u32,
    /// Distance from the pointer within which particles are pushed.
    pub pointer_radius: f64,
    /// Displacement per tick at zero distance. Negative values pull
    /// particles toward the pointer instead.
    pub pointer_strength: f64,
    /// Opacity of the white particle fill.
    pub particle_alpha: f64,
    /// Fraction of an element's area that must be visible to reveal it.
    pub fade_in_threshold: f64,
    /// Scroll offset in pixels above which the scroll-to-top control shows.
    pub scroll_threshold: f64,
    /// Pointer offset (px) per unit of rotation axis.
    pub tilt_divisor: f64,
    /// Uniform scale applied to a tilted card.
    pub tilt_scale: f64,
    /// Log at debug level instead of info.
    pub verbose: bool,
}

#[wasm_bindgen]
impl EffectsConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> EffectsConfig {
        EffectsConfig::default()
    }
}

impl EffectsConfig {
    pub fn log_level(&self) -> log::Level {
        if self.verbose {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        EffectsConfig {
            particle_count: 150,
            pointer_radius: 150.0,
            pointer_strength: 4.0,
            particle_alpha: 0.5,
            fade_in_threshold: 0.15,
            scroll_threshold: 300.0,
            tilt_divisor: 100.0,
            tilt_scale: 1.07,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_constants() {
        let config = EffectsConfig::new();
        assert_eq!(config.particle_count, 150);
        assert_eq!(config.pointer_radius, 150.0);
        assert_eq!(config.scroll_threshold, 300.0);
        assert_eq!(config.fade_in_threshold, 0.15);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn verbose_lowers_log_level() {
        let config = EffectsConfig {
            verbose: true,
            ..EffectsConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
