use crate::core::effects::Rect;
use crate::core::timing::{Throttle, ThrottleAction};
use crate::core::Viewport;
use crate::error::InitError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn by_id(document: &web::Document, id: &str) -> Result<web::Element, InitError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| InitError::MissingElement(format!("#{}", id)))
}

pub fn query(document: &web::Document, selector: &str) -> Result<web::Element, InitError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| InitError::MissingElement(selector.to_string()))
}

fn elements(list: Result<web::NodeList, wasm_bindgen::JsValue>, selector: &str) -> Vec<web::Element> {
    let Ok(list) = list else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// All elements matching `selector`; an invalid selector yields none.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    elements(document.query_selector_all(selector), selector)
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    elements(root.query_selector_all(selector), selector)
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        _ = h.style().set_property(property, value);
    }
}

#[inline]
pub fn focus(el: &web::Element) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        _ = h.focus();
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

pub fn bounding_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

pub fn viewport() -> Viewport {
    let (width, height) = web::window()
        .map(|w| {
            let num = |v: Result<wasm_bindgen::JsValue, _>| {
                v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
            };
            (num(w.inner_width()), num(w.inner_height()))
        })
        .unwrap_or((0.0, 0.0));
    Viewport { width, height }
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn document_height(document: &web::Document) -> f64 {
    document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// Register a long-lived listener. The closure is leaked on purpose: it lives
/// as long as the page.
pub fn on<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like `on`, but `run` fires at most once per `interval_ms`, with a trailing
/// run after the last event of a burst.
pub fn on_throttled(target: &web::EventTarget, event: &str, interval_ms: f64, run: impl Fn() + 'static) {
    let throttle = Rc::new(RefCell::new(Throttle::new(interval_ms)));
    let run = Rc::new(run);
    on(target, event, move |_: web::Event| {
        let action = throttle.borrow_mut().on_input(instant::now());
        match action {
            ThrottleAction::Run => run(),
            ThrottleAction::Schedule {
                delay_ms,
                generation,
            } => {
                let (t, r) = (throttle.clone(), run.clone());
                set_timeout(delay_ms.ceil() as i32, move || {
                    if t.borrow_mut().on_timer(generation, instant::now()) {
                        r();
                    }
                });
            }
            ThrottleAction::Drop => {}
        }
    });
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    on(el, "click", move |ev: web::MouseEvent| handler(ev));
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

/// Create `<div class=...>` and append it to `<body>`.
pub fn append_div(document: &web::Document, class: &str) -> Result<web::Element, InitError> {
    let el = document.create_element("div")?;
    el.set_class_name(class);
    let body = document
        .body()
        .ok_or_else(|| InitError::MissingElement("body".into()))?;
    body.append_child(&el)?;
    Ok(el)
}

pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    let vp = viewport();
    canvas.set_width(vp.width.max(1.0) as u32);
    canvas.set_height(vp.height.max(1.0) as u32);
}
