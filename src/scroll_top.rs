// "Back to top" control: shown once the page is scrolled past a threshold,
// smooth-scrolls to the origin when clicked

use crate::config::EffectsConfig;
use crate::dom::{self, classes, selectors};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollToOptions, Window};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollToTop {
    threshold: f64,
}

impl ScrollToTop {
    pub fn new(threshold: f64) -> Self {
        ScrollToTop { threshold }
    }

    pub fn is_visible_at(&self, offset: f64) -> bool {
        offset > self.threshold
    }
}

pub fn bind(window: &Window, document: &Document, config: &EffectsConfig) -> Result<bool, JsValue> {
    match document.get_element_by_id(selectors::SCROLL_TO_TOP) {
        Some(control) => {
            bind_control(window, control, ScrollToTop::new(config.scroll_threshold))?;
            Ok(true)
        }
        None => {
            log::debug!("no #{} element, scroll-to-top disabled", selectors::SCROLL_TO_TOP);
            Ok(false)
        }
    }
}

pub fn bind_control(window: &Window, control: Element, scroll: ScrollToTop) -> Result<(), JsValue> {
    let shown = Rc::new(Cell::new(None));

    let on_scroll = {
        let window = window.clone();
        let control = control.clone();
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let offset = match window.scroll_y() {
                Ok(offset) => offset,
                Err(err) => {
                    log::warn!("failed to read scroll offset: {:?}", err);
                    return;
                }
            };
            let visible = scroll.is_visible_at(offset);
            if shown.get() != Some(visible) {
                log::debug!("scroll-to-top visible: {}", visible);
                shown.set(Some(visible));
            }
            if let Err(err) = control.class_list().toggle_with_force(classes::VISIBLE, visible) {
                log::warn!("failed to toggle scroll-to-top: {:?}", err);
            }
        })
    };

    let on_click = {
        let window = window.clone();
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })
    };

    window.add_event_listener_with_callback("scroll", dom::callback(&on_scroll))?;
    control.add_event_listener_with_callback("click", dom::callback(&on_click))?;
    on_scroll.forget();
    on_click.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_strictly_above_threshold() {
        let scroll = ScrollToTop::new(300.0);
        assert!(!scroll.is_visible_at(0.0));
        assert!(!scroll.is_visible_at(300.0));
        assert!(scroll.is_visible_at(300.5));
        assert!(scroll.is_visible_at(5000.0));
    }

    #[test]
    fn no_hysteresis() {
        let scroll = ScrollToTop::new(300.0);
        let offsets = [0.0, 301.0, 299.0, 301.0, 300.0];
        let states: Vec<bool> = offsets.iter().map(|&o| scroll.is_visible_at(o)).collect();
        assert_eq!(states, vec![false, true, false, true, false]);
    }
}
