//! One-shot reveal of `.fade-in` elements as they scroll into view.

use crate::config::EffectsConfig;
use crate::dom::{self, classes, selectors};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Elements still waiting for their first appearance.
pub struct FadeInTracker<T> {
    watched: Vec<T>,
    revealed: usize,
}

impl<T: PartialEq> FadeInTracker<T> {
    pub fn new() -> Self {
        FadeInTracker {
            watched: Vec::new(),
            revealed: 0,
        }
    }

    /// Returns false if `item` is already watched.
    pub fn watch(&mut self, item: T) -> bool {
        if self.is_watching(&item) {
            return false;
        }
        self.watched.push(item);
        true
    }

    /// Returns true exactly once per watched item: on its first intersecting
    /// report. The item is dropped from the watch list at that point.
    pub fn on_intersection(&mut self, item: &T, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.watched.iter().position(|watched| watched == item) {
            Some(idx) => {
                self.watched.swap_remove(idx);
                self.revealed += 1;
                true
            }
            None => false,
        }
    }

    pub fn is_watching(&self, item: &T) -> bool {
        self.watched.contains(item)
    }

    pub fn watching(&self) -> usize {
        self.watched.len()
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }
}

impl<T: PartialEq> Default for FadeInTracker<T> {
    fn default() -> Self {
        FadeInTracker::new()
    }
}

pub fn bind(document: &Document, config: &EffectsConfig) -> Result<usize, JsValue> {
    let elements = dom::query_all::<Element>(document, selectors::FADE_IN)?;
    if elements.is_empty() {
        log::debug!("no {} elements, fade-in disabled", selectors::FADE_IN);
        return Ok(0);
    }
    let tracker = Rc::new(RefCell::new(FadeInTracker::new()));

    let on_intersect = {
        let tracker = tracker.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    if !tracker.borrow_mut().on_intersection(&target, entry.is_intersecting()) {
                        continue;
                    }
                    if let Err(err) = target.class_list().add_1(classes::SHOWN) {
                        log::warn!("failed to reveal element: {:?}", err);
                    }
                    observer.unobserve(&target);
                    let tracker = tracker.borrow();
                    log::debug!(
                        "fade-in revealed {}, {} still hidden",
                        tracker.revealed(),
                        tracker.watching()
                    );
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.fade_in_threshold));
    let observer = IntersectionObserver::new_with_options(dom::callback(&on_intersect), &options)?;
    on_intersect.forget();

    let mut tracker = tracker.borrow_mut();
    for element in elements {
        observer.observe(&element);
        tracker.watch(element);
    }
    Ok(tracker.watching())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_on_first_intersection_only() {
        let mut tracker = FadeInTracker::new();
        tracker.watch("hero");
        assert!(!tracker.on_intersection(&"hero", false));
        assert!(tracker.on_intersection(&"hero", true));
        assert!(!tracker.is_watching(&"hero"));
        assert!(!tracker.on_intersection(&"hero", true));
        assert!(!tracker.on_intersection(&"hero", false));
        assert_eq!(tracker.revealed(), 1);
    }

    #[test]
    fn unwatched_items_are_ignored() {
        let mut tracker = FadeInTracker::new();
        tracker.watch(1);
        assert!(!tracker.on_intersection(&2, true));
        assert_eq!(tracker.watching(), 1);
        assert_eq!(tracker.revealed(), 0);
    }

    #[test]
    fn duplicate_watch_is_rejected() {
        let mut tracker = FadeInTracker::new();
        assert!(tracker.watch(1));
        assert!(!tracker.watch(1));
        assert_eq!(tracker.watching(), 1);
    }

    #[test]
    fn each_item_revealed_independently() {
        let mut tracker = FadeInTracker::default();
        for id in 0..5 {
            tracker.watch(id);
        }
        assert!(tracker.on_intersection(&3, true));
        assert!(tracker.on_intersection(&0, true));
        assert!(!tracker.on_intersection(&3, true));
        assert_eq!(tracker.watching(), 3);
        assert_eq!(tracker.revealed(), 2);
    }
}
