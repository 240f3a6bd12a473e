// Helpers for the DOM hooks the effects attach to

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

pub mod selectors {
    pub const BACKGROUND_CANVAS: &str = "bg-particles";
    pub const FADE_IN: &str = ".fade-in";
    pub const TILT_CARDS: &str = ".card, .about-card";
    pub const GLOW: &str = ".glow";
    pub const SCROLL_TO_TOP: &str = "scrollToTop";
    pub const CONTACT_FORM: &str = ".contact-form";
    pub const EMAIL_INPUT: &str = "#email";
}

pub mod classes {
    pub const SHOWN: &str = "show";
    pub const VISIBLE: &str = "visible";
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))
}

pub fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

// Every element matching `selector`, skipping any that are not a `T`
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<T>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

pub fn callback<T: ?Sized>(closure: &Closure<T>) -> &js_sys::Function {
    closure.as_ref().unchecked_ref()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("failed to set {}: {:?}", property, err);
    }
}

pub fn clear_style(element: &HtmlElement, property: &str) {
    if let Err(err) = element.style().remove_property(property) {
        log::warn!("failed to clear {}: {:?}", property, err);
    }
}
