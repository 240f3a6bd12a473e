//! Pointer-driven 3D tilt for card elements.
//!
//! Each card runs a two-state machine. Entering captures the card's bounding
//! rectangle and asks for a document-level `mousemove` listener; leaving asks
//! for that listener to be removed and the card reset. While tracking, every
//! pointer move produces a [`TiltFrame`] that is written to the card's
//! `transform` and its `.glow` child's `background-image`.
//!
//! The rotation angle is `ln(distance) * 2` degrees, so a pointer exactly on
//! the card's center yields `-inf`. That value is passed through unchanged;
//! the browser rejects the resulting declaration and keeps the previous one.

use crate::color::Color;
use crate::config::EffectsConfig;
use crate::dom::{self, selectors};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomRect, HtmlElement, MouseEvent};

const GLOW_CENTER: Color = Color::from_u32(0xffffff55);
const GLOW_EDGE: Color = Color::from_u32(0x0000000f);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&DomRect> for Rect {
    fn from(rect: &DomRect) -> Self {
        Rect {
            x: rect.x(),
            y: rect.y(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TiltState {
    Idle,
    Tracking(Rect),
}

/// What the DOM side has to do after a state change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    AttachMoveListener,
    DetachMoveListener,
    /// Re-entered while tracking: bounds replaced, listener already attached.
    Recaptured,
    Unchanged,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TiltFrame {
    /// Pointer offset from the card center.
    pub offset: [f64; 2],
    pub axis: [f64; 2],
    pub angle_deg: f64,
    pub scale: f64,
    /// Glow center relative to the card's top-left corner.
    pub glow: [f64; 2],
}

impl TiltFrame {
    pub fn compute(rect: Rect, client: [f64; 2], divisor: f64, scale: f64) -> TiltFrame {
        let offset = [
            client[0] - rect.x - rect.width / 2.0,
            client[1] - rect.y - rect.height / 2.0,
        ];
        let distance = vecmath::vec2_len(offset);
        TiltFrame {
            offset,
            axis: [offset[1] / divisor, -offset[0] / divisor],
            angle_deg: distance.ln() * 2.0,
            scale,
            glow: [
                offset[0] * 2.0 + rect.width / 2.0,
                offset[1] * 2.0 + rect.height / 2.0,
            ],
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "scale3d({s}, {s}, {s}) rotate3d({}, {}, 0, {}deg)",
            self.axis[0],
            self.axis[1],
            self.angle_deg,
            s = self.scale
        )
    }

    pub fn glow_css(&self) -> String {
        format!(
            "radial-gradient(circle at {}px {}px, {}, {})",
            self.glow[0],
            self.glow[1],
            GLOW_CENTER.to_css_hex(),
            GLOW_EDGE.to_css_hex()
        )
    }
}

pub struct TiltMachine {
    state: TiltState,
    divisor: f64,
    scale: f64,
}

impl TiltMachine {
    pub fn new(config: &EffectsConfig) -> Self {
        TiltMachine {
            state: TiltState::Idle,
            divisor: config.tilt_divisor,
            scale: config.tilt_scale,
        }
    }

    pub fn state(&self) -> TiltState {
        self.state
    }

    pub fn enter(&mut self, bounds: Rect) -> Transition {
        let transition = match self.state {
            TiltState::Idle => Transition::AttachMoveListener,
            TiltState::Tracking(_) => Transition::Recaptured,
        };
        self.state = TiltState::Tracking(bounds);
        transition
    }

    pub fn leave(&mut self) -> Transition {
        match self.state {
            TiltState::Idle => Transition::Unchanged,
            TiltState::Tracking(_) => {
                self.state = TiltState::Idle;
                Transition::DetachMoveListener
            }
        }
    }

    pub fn pointer_moved(&self, client_x: f64, client_y: f64) -> Option<TiltFrame> {
        match self.state {
            TiltState::Idle => None,
            TiltState::Tracking(rect) => Some(TiltFrame::compute(
                rect,
                [client_x, client_y],
                self.divisor,
                self.scale,
            )),
        }
    }
}

struct TiltCard {
    element: HtmlElement,
    glow: Option<HtmlElement>,
    machine: TiltMachine,
}

impl TiltCard {
    fn apply(&self, frame: &TiltFrame) {
        dom::set_style(&self.element, "transform", &frame.transform_css());
        if let Some(glow) = &self.glow {
            dom::set_style(glow, "background-image", &frame.glow_css());
        }
    }

    fn reset(&self) {
        dom::clear_style(&self.element, "transform");
        if let Some(glow) = &self.glow {
            dom::clear_style(glow, "background-image");
        }
    }
}

/// Wires every `.card` / `.about-card` in the document.
pub fn bind(document: &Document, config: &EffectsConfig) -> Result<usize, JsValue> {
    let cards = dom::query_all::<HtmlElement>(document, selectors::TILT_CARDS)?;
    if cards.is_empty() {
        log::debug!("no {} elements, tilt disabled", selectors::TILT_CARDS);
    }
    for card in &cards {
        bind_element(document, card.clone(), config)?;
    }
    Ok(cards.len())
}

pub fn bind_element(
    document: &Document,
    element: HtmlElement,
    config: &EffectsConfig,
) -> Result<(), JsValue> {
    let glow = element
        .query_selector(selectors::GLOW)?
        .and_then(|glow| glow.dyn_into::<HtmlElement>().ok());
    let card = Rc::new(RefCell::new(TiltCard {
        element: element.clone(),
        glow,
        machine: TiltMachine::new(config),
    }));

    let on_move = {
        let card = card.clone();
        Rc::new(Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let card = card.borrow();
            let frame = card
                .machine
                .pointer_moved(event.client_x() as f64, event.client_y() as f64);
            if let Some(frame) = frame {
                card.apply(&frame);
            }
        }))
    };

    let on_enter = {
        let card = card.clone();
        let on_move = on_move.clone();
        let document = document.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            let rect = card.borrow().element.get_bounding_client_rect();
            let transition = card.borrow_mut().machine.enter(Rect::from(&rect));
            if transition == Transition::AttachMoveListener {
                let listener = dom::callback(&*on_move);
                if let Err(err) = document.add_event_listener_with_callback("mousemove", listener) {
                    log::warn!("failed to attach tilt listener: {:?}", err);
                }
            }
        })
    };

    let on_leave = {
        let document = document.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            let transition = card.borrow_mut().machine.leave();
            if transition == Transition::DetachMoveListener {
                let listener = dom::callback(&*on_move);
                if let Err(err) = document.remove_event_listener_with_callback("mousemove", listener) {
                    log::warn!("failed to detach tilt listener: {:?}", err);
                }
                card.borrow().reset();
            }
        })
    };

    element.add_event_listener_with_callback("mouseenter", dom::callback(&on_enter))?;
    element.add_event_listener_with_callback("mouseleave", dom::callback(&on_leave))?;
    on_enter.forget();
    on_leave.forget();
    Ok(())
}
