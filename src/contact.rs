// Client-side email check on the contact form

use crate::dom::{self, selectors};
use regex::Regex;
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement, Window};

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Proceed,
    Blocked,
}

// local-part "@" domain "." tld, no whitespace or extra "@" anywhere.
// U+FEFF counts as whitespace, as it does for form values in the browser.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$").expect("email pattern")
    })
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Checks a raw field value, ignoring surrounding whitespace.
#[wasm_bindgen]
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value.trim_matches(is_blank))
}

pub fn review(value: &str) -> Submission {
    if is_valid_email(value) {
        Submission::Proceed
    } else {
        Submission::Blocked
    }
}

pub fn bind(window: &Window, document: &Document) -> Result<bool, JsValue> {
    let form = match document.query_selector(selectors::CONTACT_FORM)? {
        Some(form) => form.dyn_into::<HtmlFormElement>()?,
        None => {
            log::debug!("no {} element, email check disabled", selectors::CONTACT_FORM);
            return Ok(false);
        }
    };
    bind_form(window, form)?;
    Ok(true)
}

pub fn bind_form(window: &Window, form: HtmlFormElement) -> Result<(), JsValue> {
    let on_submit = {
        let window = window.clone();
        let form = form.clone();
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let input = form
                .query_selector(selectors::EMAIL_INPUT)
                .ok()
                .flatten()
                .and_then(|input| input.dyn_into::<HtmlInputElement>().ok());
            let input = match input {
                Some(input) => input,
                None => {
                    log::warn!("contact form has no {} input", selectors::EMAIL_INPUT);
                    return;
                }
            };
            if review(&input.value()) == Submission::Proceed {
                return;
            }
            log::debug!("blocked contact form submission");
            event.prevent_default();
            if let Err(err) = window.alert_with_message(INVALID_EMAIL_MESSAGE) {
                log::warn!("failed to show alert: {:?}", err);
            }
            if let Err(err) = input.focus() {
                log::warn!("failed to focus email input: {:?}", err);
            }
        })
    };
    form.add_event_listener_with_callback("submit", dom::callback(&on_submit))?;
    on_submit.forget();
    Ok(())
}
