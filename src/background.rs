//! Wires the particle field to the `#bg-particles` canvas: sizing, pointer
//! tracking, and the self-rescheduling animation frame loop.

use crate::config::EffectsConfig;
use crate::dom::{self, selectors};
use crate::field::{FrameContext, ParticleField};
use crate::pointer::PointerState;
use crate::renderer::CanvasRenderer;
use crate::viewport::Bounds;
use crate::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlCanvasElement, MouseEvent, Window};

pub struct Background {
    field: ParticleField,
    pointer: PointerState,
    bounds: Bounds,
    renderer: CanvasRenderer,
}

impl Background {
    pub fn new(renderer: CanvasRenderer, bounds: Bounds, config: &EffectsConfig) -> Self {
        let mut field = ParticleField::new(config);
        field.initialize(config.particle_count, bounds, &mut rand::thread_rng());
        Background {
            field,
            pointer: PointerState::default(),
            bounds,
            renderer,
        }
    }

    pub fn frame(&mut self) -> Result<(), JsValue> {
        let ctx = FrameContext {
            pointer: self.pointer.position(),
            bounds: self.bounds,
        };
        {
            let _timer = Timer::new("ParticleField::advance");
            self.field.advance(&ctx);
        }
        let _timer = Timer::new("ParticleField::render");
        self.field.render(&mut self.renderer, self.bounds)
    }
}

pub fn bind(window: &Window, document: &Document, config: &EffectsConfig) -> Result<bool, JsValue> {
    let canvas = match document.get_element_by_id(selectors::BACKGROUND_CANVAS) {
        Some(canvas) => canvas.dyn_into::<HtmlCanvasElement>()?,
        None => {
            log::debug!("no #{} canvas, particles disabled", selectors::BACKGROUND_CANVAS);
            return Ok(false);
        }
    };
    let renderer = CanvasRenderer::new(canvas)?;
    let bounds = renderer.resize_to_window(window)?;
    let background = Rc::new(RefCell::new(Background::new(renderer, bounds, config)));
    {
        let state = background.borrow();
        let field = &state.field;
        if field.is_empty() {
            log::warn!("particle background has no particles to draw");
        }
        log::info!(
            "particle background: {} particles on {}x{}",
            field.len(),
            bounds.width,
            bounds.height
        );
    }

    let on_resize = {
        let window = window.clone();
        let background = background.clone();
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let mut background = background.borrow_mut();
            let resized = background.renderer.resize_to_window(&window);
            match resized {
                Ok(bounds) => background.bounds = bounds,
                Err(err) => log::warn!("failed to resize background: {:?}", err),
            }
        })
    };

    let on_pointer_move = {
        let background = background.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            background
                .borrow_mut()
                .pointer
                .move_to(event.client_x() as f64, event.client_y() as f64);
        })
    };

    // mouseout bubbles from every element; only a null related target means
    // the pointer actually left the window
    let on_pointer_out = {
        let background = background.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            if event.related_target().is_none() {
                background.borrow_mut().pointer.clear();
            }
        })
    };

    window.add_event_listener_with_callback("resize", dom::callback(&on_resize))?;
    window.add_event_listener_with_callback("mousemove", dom::callback(&on_pointer_move))?;
    window.add_event_listener_with_callback("mouseout", dom::callback(&on_pointer_out))?;
    on_resize.forget();
    on_pointer_move.forget();
    on_pointer_out.forget();

    run_frame_loop(window, background)?;
    Ok(true)
}

fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(dom::callback(f))
}

// The closure holds a handle to itself so it can schedule the next frame.
// The cycle keeps it alive for the life of the page.
fn run_frame_loop(window: &Window, background: Rc<RefCell<Background>>) -> Result<(), JsValue> {
    let next: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = next.clone();
    let loop_window = window.clone();

    *first.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = background.borrow_mut().frame() {
            log::warn!("particle frame failed: {:?}", err);
        }
        if let Some(f) = next.borrow().as_ref() {
            if let Err(err) = request_animation_frame(&loop_window, f) {
                log::error!("failed to schedule particle frame: {:?}", err);
            }
        }
    }));

    let first = first.borrow();
    if let Some(f) = first.as_ref() {
        request_animation_frame(window, f)?;
    }
    Ok(())
}
