//! Interactive effects for a portfolio page, compiled to WebAssembly.
//!
//! Each effect binds itself to its own DOM hook and is skipped when that
//! hook is missing from the page:
//! - `background`: particle canvas that drifts and reacts to the pointer
//! - `fade_in`: one-shot reveal of elements as they scroll into view
//! - `tilt`: pointer-driven 3D tilt and glow on cards
//! - `scroll_top`: "back to top" control
//! - `contact`: email check before the contact form submits

mod utils;

pub mod background;
pub mod color;
pub mod config;
pub mod contact;
pub mod dom;
pub mod fade_in;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod renderer;
pub mod scroll_top;
pub mod tilt;
pub mod viewport;

pub use config::EffectsConfig;
pub use contact::is_valid_email;

use std::fmt;
use wasm_bindgen::prelude::*;
#[cfg(feature = "frame-timing")]
use web_sys::console;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    init_logging(log::Level::Info);
}

fn init_logging(level: log::Level) {
    // Only the first call installs the logger; later calls just adjust the level
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
}

/// Binds every effect with the default configuration.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    start_with_config(EffectsConfig::default())
}

#[wasm_bindgen]
pub fn start_with_config(config: EffectsConfig) -> Result<(), JsValue> {
    utils::set_panic_hook();
    init_logging(config.log_level());

    let window = dom::window()?;
    let document = dom::document(&window)?;

    // A failing effect is reported as off; the rest still bind
    let faders = settle("fade-in", fade_in::bind(&document, &config));
    let particles = settle("particles", background::bind(&window, &document, &config));
    let cards = settle("tilt", tilt::bind(&document, &config));
    let scroll_control = settle("scroll-to-top", scroll_top::bind(&window, &document, &config));
    let contact_form = settle("contact form", contact::bind(&window, &document));

    log::info!(
        "page effects ready: {} fade-in, particles {}, {} tilt cards, scroll-to-top {}, contact form {}",
        faders,
        on_off(particles),
        cards,
        on_off(scroll_control),
        on_off(contact_form)
    );
    Ok(())
}

fn settle<T: Default, E: fmt::Debug>(effect: &str, bound: Result<T, E>) -> T {
    bound.unwrap_or_else(|err| {
        log::warn!("{} disabled: {:?}", effect, err);
        T::default()
    })
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

// Wraps a section in console.time/timeEnd when built with `frame-timing`
pub struct Timer<'a> {
    #[cfg_attr(not(feature = "frame-timing"), allow(dead_code))]
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(feature = "frame-timing")]
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(feature = "frame-timing")]
        console::time_end_with_label(self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_effect_reports_off_without_stopping_others() {
        let particles = settle("particles", Err::<bool, _>("#bg-particles is not a canvas"));
        let contact_form = settle("contact form", Ok::<bool, &str>(true));
        assert_eq!(on_off(particles), "off");
        assert_eq!(on_off(contact_form), "on");
    }

    #[test]
    fn failed_count_settles_to_zero() {
        assert_eq!(settle("tilt", Err::<usize, _>("observer threw")), 0);
        assert_eq!(settle("tilt", Ok::<usize, &str>(4)), 4);
    }
}
