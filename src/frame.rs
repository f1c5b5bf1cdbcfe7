use crate::core::cursor::CursorState;
use crate::core::effects::{parallax_offset, Transform};
use crate::cursor::CursorView;
use crate::dom;
use glam::Vec2;
use js_sys::{Function, Reflect};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Hero element moved by pointer parallax.
pub struct Parallax {
    pub hero: web::Element,
    /// `None` until the pointer first moves.
    pub pointer: Rc<Cell<Option<Vec2>>>,
    resting: bool,
}

impl Parallax {
    pub fn new(hero: web::Element, pointer: Rc<Cell<Option<Vec2>>>) -> Self {
        Self {
            hero,
            pointer,
            resting: true,
        }
    }

    fn frame(&mut self) {
        let vp = dom::viewport();
        let pointer = self.pointer.get().map(|p| (p.x as f64, p.y as f64));
        match parallax_offset(pointer, vp.width, vp.height, dom::scroll_y()) {
            Some(t) => {
                dom::set_style(&self.hero, "transform", &t.to_css());
                self.resting = false;
            }
            None if !self.resting => {
                dom::set_style(&self.hero, "transform", &Transform::TRANSLATE_IDENTITY.to_css());
                self.resting = true;
            }
            None => {}
        }
    }
}

/// Everything that updates once per animation frame.
#[derive(Default)]
pub struct FrameContext {
    pub cursor: Option<(Rc<RefCell<CursorState>>, Rc<CursorView>)>,
    pub parallax: Option<Parallax>,
    /// Momentum-scroll controller exposing `raf(time)`.
    pub smooth_scroll: Option<JsValue>,
}

impl FrameContext {
    pub fn is_idle(&self) -> bool {
        self.cursor.is_none() && self.parallax.is_none() && self.smooth_scroll.is_none()
    }

    pub fn frame(&mut self, time_ms: f64) {
        if let Some(lenis) = &self.smooth_scroll {
            if let Ok(raf) = Reflect::get(lenis, &"raf".into()).and_then(|f| f.dyn_into::<Function>()) {
                _ = raf.call1(lenis, &JsValue::from_f64(time_ms));
            }
        }
        if let Some(p) = &mut self.parallax {
            p.frame();
        }
        if let Some((state, view)) = &self.cursor {
            let mut st = state.borrow_mut();
            st.frame();
            view.draw(&st);
        }
    }
}

/// Handle to the running frame loop. Stopping lets the current frame finish
/// and schedules no further ones.
#[derive(Clone)]
pub struct AnimationLoop {
    running: Rc<Cell<bool>>,
}

impl AnimationLoop {
    pub fn stop(&self) {
        if self.running.replace(false) {
            log::info!("[frame] loop stopped");
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let running = Rc::new(Cell::new(true));
    let handle = AnimationLoop {
        running: running.clone(),
    };
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |time_ms: f64| {
        if !running.get() {
            return;
        }
        frame_ctx.borrow_mut().frame(time_ms);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
    handle
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
