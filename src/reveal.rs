use crate::constants::{
    REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, TYPEWRITER_CHAR_DELAY_MS, TYPEWRITER_START_DELAY_MS,
};
use crate::core::reveal::{plan, RevealPlan, Typewriter, REVEALED_CLASS};
use crate::core::{Capabilities, SiteConfig};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const REVEAL_TO_ATTR: &str = "data-reveal-to";

fn observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: impl FnMut(&web::Element, &web::IntersectionObserver) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, obs: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    if entry.is_intersecting() {
                        on_visible(&entry.target(), &obs);
                    }
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let obs = web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();
    Ok(obs)
}

fn show(el: &web::Element) {
    dom::set_style(el, "opacity", "1");
    if let Some(to) = el.get_attribute(REVEAL_TO_ATTR) {
        dom::set_style(el, "transform", &to);
    }
    dom::set_class(el, REVEALED_CLASS, true);
}

/// Fade-in for reveal groups and `section-revealed` marking for sections.
/// Under reduced motion everything is shown at once with no transition.
/// Returns the number of elements prepared.
pub fn wire_reveal(
    document: &web::Document,
    caps: &Capabilities,
    config: &SiteConfig,
) -> anyhow::Result<usize> {
    let reduced = caps.reduced_motion;
    let items = if reduced {
        None
    } else {
        Some(observer(REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), |el, obs| {
            show(el);
            obs.unobserve(el);
        })?)
    };

    let mut prepared = 0;
    for group in config.reveal_groups {
        for (i, el) in dom::query_all(document, group.selector).iter().enumerate() {
            match (plan(group, i, reduced), &items) {
                (
                    RevealPlan::Animate {
                        hidden_transform,
                        visible_transform,
                        transition,
                    },
                    Some(obs),
                ) => {
                    dom::set_style(el, "opacity", "0");
                    dom::set_style(el, "transform", &hidden_transform);
                    dom::set_style(el, "transition", &transition);
                    _ = el.set_attribute(REVEAL_TO_ATTR, visible_transform);
                    obs.observe(el);
                }
                _ => show(el),
            }
            prepared += 1;
        }
    }

    let sections = dom::query_all(document, "section");
    if reduced {
        for s in &sections {
            dom::set_class(s, "section-revealed", true);
        }
    } else {
        let obs = observer(REVEAL_THRESHOLD, None, |el, obs| {
            dom::set_class(el, "section-revealed", true);
            obs.unobserve(el);
        })?;
        for s in &sections {
            obs.observe(s);
        }
    }
    if let Some(body) = document.body() {
        dom::set_style(&body, "opacity", "1");
    }
    Ok(prepared)
}

fn type_next(el: web::Element, writer: Rc<RefCell<Typewriter>>) {
    let shown = writer.borrow_mut().advance().map(str::to_owned);
    if let Some(text) = shown {
        el.set_text_content(Some(&text));
        dom::set_timeout(TYPEWRITER_CHAR_DELAY_MS, move || type_next(el, writer));
    }
}

/// Types out the hero subtitle. Left untouched under reduced motion.
pub fn wire_typewriter(
    document: &web::Document,
    caps: &Capabilities,
    config: &SiteConfig,
) -> anyhow::Result<()> {
    let el = dom::query(document, config.subtitle_selector)?;
    if caps.reduced_motion {
        return Ok(());
    }
    let text = el.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(());
    }
    _ = el.set_attribute("aria-label", text.trim());
    el.set_text_content(Some(""));
    let writer = Rc::new(RefCell::new(Typewriter::new(text)));
    dom::set_timeout(TYPEWRITER_START_DELAY_MS, move || type_next(el, writer));
    Ok(())
}
