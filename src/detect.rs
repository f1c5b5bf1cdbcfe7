use crate::core::Capabilities;
use crate::dom;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys as web;

fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// A global exists and is not `undefined`/`null`.
pub fn global(window: &web::Window, name: &str) -> Option<JsValue> {
    Reflect::get(window, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

pub fn detect(window: &web::Window) -> Capabilities {
    let caps = Capabilities {
        reduced_motion: prefers_reduced_motion(window),
        animation_library: global(window, "gsap").is_some()
            && global(window, "ScrollTrigger").is_some(),
        smooth_scroll_library: global(window, "Lenis").is_some(),
        icon_library: global(window, "lucide").is_some(),
        viewport: dom::viewport(),
    };
    log::info!(
        "[detect] reduced_motion={} animation_lib={} smooth_scroll_lib={} icons={} viewport={}x{}",
        caps.reduced_motion,
        caps.animation_library,
        caps.smooth_scroll_library,
        caps.icon_library,
        caps.viewport.width,
        caps.viewport.height
    );
    if !caps.animation_library {
        log::warn!("[detect] animation library not loaded; using native scroll progress");
    }
    caps
}
