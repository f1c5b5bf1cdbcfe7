use crate::constants::SCROLL_THROTTLE_MS;
use crate::core::progress::{fallback_progress, FeatureSteps};
use crate::core::{Capabilities, ProgressStrategy, SiteConfig};
use crate::detect;
use crate::dom;
use crate::error::InitError;
use js_sys::{Function, Object, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub type ProgressSink = Rc<dyn Fn(f64)>;

/// Where feature-step progress comes from. Chosen once at startup.
pub trait ScrollProgressSource {
    fn name(&self) -> &'static str;
    /// Start reporting progress in [0, 1] to `sink`.
    fn attach(&self, sink: ProgressSink) -> Result<(), InitError>;
}

/// Pins the section through the animation library's scroll trigger and
/// forwards the progress it reports.
pub struct PinnedSource {
    section: web::Element,
    end: String,
}

impl ScrollProgressSource for PinnedSource {
    fn name(&self) -> &'static str {
        "pinned"
    }

    fn attach(&self, sink: ProgressSink) -> Result<(), InitError> {
        let window = web::window().ok_or(InitError::MissingLibrary("window"))?;
        let trigger = detect::global(&window, "ScrollTrigger")
            .ok_or(InitError::MissingLibrary("ScrollTrigger"))?;
        if let Some(gsap) = detect::global(&window, "gsap") {
            if let Ok(register) = Reflect::get(&gsap, &"registerPlugin".into())?.dyn_into::<Function>() {
                _ = register.call1(&gsap, &trigger);
            }
        }
        let create = Reflect::get(&trigger, &"create".into())?
            .dyn_into::<Function>()
            .map_err(|_| InitError::LibraryInit {
                library: "ScrollTrigger",
                reason: "create is not a function".into(),
            })?;

        let on_update = Closure::wrap(Box::new(move |st: JsValue| {
            let p = Reflect::get(&st, &"progress".into())
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            sink(p);
        }) as Box<dyn FnMut(JsValue)>);

        let opts = Object::new();
        Reflect::set(&opts, &"trigger".into(), &self.section)?;
        Reflect::set(&opts, &"start".into(), &"top top".into())?;
        Reflect::set(&opts, &"end".into(), &JsValue::from_str(&self.end))?;
        Reflect::set(&opts, &"pin".into(), &JsValue::TRUE)?;
        Reflect::set(&opts, &"scrub".into(), &JsValue::TRUE)?;
        Reflect::set(&opts, &"onUpdate".into(), on_update.as_ref())?;

        create
            .call1(&trigger, &opts)
            .map_err(|e| InitError::LibraryInit {
                library: "ScrollTrigger",
                reason: format!("{:?}", e),
            })?;
        on_update.forget();
        Ok(())
    }
}

/// Derives progress from the section's bounding box on (throttled) scroll.
pub struct NativeScrollSource {
    section: web::Element,
}

impl NativeScrollSource {
    fn sample(section: &web::Element) -> f64 {
        let rect = dom::bounding_rect(section);
        fallback_progress(rect.top, rect.height, dom::viewport().height)
    }
}

impl ScrollProgressSource for NativeScrollSource {
    fn name(&self) -> &'static str {
        "native-scroll"
    }

    fn attach(&self, sink: ProgressSink) -> Result<(), InitError> {
        let window = web::window().ok_or(InitError::MissingLibrary("window"))?;
        sink(Self::sample(&self.section));

        let section = self.section.clone();
        let on_scroll_sink = sink.clone();
        dom::on_throttled(&window, "scroll", SCROLL_THROTTLE_MS, move || {
            on_scroll_sink(Self::sample(&section))
        });

        let section = self.section.clone();
        dom::on(&window, "resize", move |_: web::Event| sink(Self::sample(&section)));
        Ok(())
    }
}

/// Mark exactly one step and its panel active.
fn activate(steps: &[web::Element], panels: &[web::Element], index: usize) {
    for el in steps.iter().chain(panels) {
        dom::set_class(el, "active", false);
        _ = el.remove_attribute("aria-current");
    }
    if let Some(step) = steps.get(index) {
        dom::set_class(step, "active", true);
        _ = step.set_attribute("aria-current", "step");
    }
    if let Some(panel) = panels.get(index) {
        dom::set_class(panel, "active", true);
    }
}

/// Wire the feature-step section. Returns the name of the progress source used.
pub fn wire_feature_steps(
    document: &web::Document,
    caps: &Capabilities,
    config: &SiteConfig,
) -> anyhow::Result<&'static str> {
    let section = dom::query(document, config.features_section_selector)?;
    let steps = dom::query_all(document, config.feature_step_selector);
    if steps.is_empty() {
        return Err(InitError::MissingElement(config.feature_step_selector.into()).into());
    }
    let panels = dom::query_all(document, config.feature_panel_selector);
    let step_count = steps.len();

    let state = Rc::new(RefCell::new(FeatureSteps::new(steps.len())));
    let steps = Rc::new(steps);
    let panels = Rc::new(panels);
    let sink: ProgressSink = Rc::new(move |p: f64| {
        let change = state.borrow_mut().update(p);
        if let Some(change) = change {
            activate(&steps, &panels, change.active);
            log::debug!("[features] step {:?} -> {}", change.previous, change.active);
        }
    });

    let native = NativeScrollSource {
        section: section.clone(),
    };
    if caps.progress_strategy() == ProgressStrategy::Pinned {
        let pinned = PinnedSource {
            section,
            end: config.pin_end(step_count),
        };
        sink(0.0);
        match pinned.attach(sink.clone()) {
            Ok(()) => return Ok(pinned.name()),
            Err(e) => log::warn!("[features] {}; falling back to {}", e, native.name()),
        }
    }
    native.attach(sink)?;
    Ok(native.name())
}
