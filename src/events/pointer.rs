use crate::constants::RIPPLE_LIFETIME_MS;
use crate::core::cursor::CursorState;
use crate::core::effects::{magnetic_offset, tilt, Rect, Transform};
use crate::cursor::{hover_kind_for, CursorView};
use crate::dom;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct CursorWiring {
    pub document: web::Document,
    pub state: Rc<RefCell<CursorState>>,
    pub view: Rc<CursorView>,
}

pub fn wire_cursor_input(w: CursorWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_canvas_resize(&w);
    wire_section_tracking(&w);
}

fn wire_pointermove(w: &CursorWiring) {
    let w = w.clone();
    let Some(window) = web::window() else {
        return;
    };
    dom::on(&window, "pointermove", move |ev: web::PointerEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let (kind, text) = hover_kind_for(ev.target());
        let mut st = w.state.borrow_mut();
        st.on_move(pos, kind);
        w.view.on_move(&st, &text);
    });
}

fn wire_pointerdown(w: &CursorWiring) {
    let w = w.clone();
    let document = w.document.clone();
    dom::on(&document, "pointerdown", move |_: web::PointerEvent| {
        let mut st = w.state.borrow_mut();
        st.clicking = true;
        w.view.set_clicking(true);
        w.view.burst(&w.document, &st);
    });
}

fn wire_pointerup(w: &CursorWiring) {
    let w = w.clone();
    let document = w.document.clone();
    dom::on(&document, "pointerup", move |_: web::PointerEvent| {
        w.state.borrow_mut().clicking = false;
        w.view.set_clicking(false);
    });
}

fn wire_canvas_resize(w: &CursorWiring) {
    let view = w.view.clone();
    if let Some(window) = web::window() {
        dom::on(&window, "resize", move |_: web::Event| {
            dom::sync_canvas_to_viewport(view.canvas());
        });
    }
}

/// Tag the cursor with the id of the section mostly in view.
fn wire_section_tracking(w: &CursorWiring) {
    let view = w.view.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let id = entry.target().id();
                    view.set_section(if id.is_empty() { "default" } else { id.as_str() });
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(0.5));
    let Ok(observer) =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
    else {
        log::warn!("[cursor] section observer unavailable");
        return;
    };
    for section in dom::query_all(&w.document, "section") {
        observer.observe(&section);
    }
    callback.forget();
}

/// Raw pointer position for effects that read it once per frame.
pub fn wire_pointer_tracking(pointer: Rc<Cell<Option<Vec2>>>) {
    if let Some(window) = web::window() {
        dom::on(&window, "pointermove", move |ev: web::PointerEvent| {
            pointer.set(Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32)));
        });
    }
}

/// Attach a transform-on-hover effect to every element matching `selector`.
/// Returns how many elements were wired.
fn wire_hover_transform(
    document: &web::Document,
    selector: &str,
    compute: fn(&Rect, f64, f64) -> Transform,
    rest: Transform,
) -> usize {
    let elements = dom::query_all(document, selector);
    for el in &elements {
        let target = el.clone();
        dom::on(el, "mousemove", move |ev: web::MouseEvent| {
            let rect = dom::bounding_rect(&target);
            let t = compute(&rect, ev.client_x() as f64, ev.client_y() as f64);
            dom::set_style(&target, "transform", &t.to_css());
        });
        let target = el.clone();
        dom::on(el, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&target, "transform", &rest.to_css());
        });
    }
    elements.len()
}

pub fn wire_magnetic(document: &web::Document, selector: &str) -> usize {
    wire_hover_transform(document, selector, magnetic_offset, Transform::TRANSLATE_IDENTITY)
}

pub fn wire_tilt(document: &web::Document, selector: &str) -> usize {
    wire_hover_transform(document, selector, tilt, Transform::TILT_IDENTITY)
}

/// Expanding ripple at every click position.
pub fn wire_click_ripple(document: &web::Document) {
    let doc = document.clone();
    dom::on(document, "click", move |ev: web::MouseEvent| {
        let Ok(ripple) = dom::append_div(&doc, "ripple-effect") else {
            return;
        };
        dom::set_style(&ripple, "left", &format!("{}px", ev.client_x()));
        dom::set_style(&ripple, "top", &format!("{}px", ev.client_y()));
        dom::set_timeout(RIPPLE_LIFETIME_MS, move || ripple.remove());
    });
}
