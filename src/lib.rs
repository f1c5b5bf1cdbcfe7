#![cfg(target_arch = "wasm32")]
use crate::core::cursor::CursorState;
use crate::core::{Capabilities, SiteConfig};
use frame::{AnimationLoop, FrameContext, Parallax};
use glam::Vec2;
use js_sys::{Array, Function, Reflect};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod cursor;
mod detect;
mod dom;
mod error;
mod events;
mod features;
mod frame;
mod reveal;

enum Outcome {
    Ready(String),
    Skipped(&'static str),
    Failed(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ready(detail) if detail.is_empty() => write!(f, "ok"),
            Outcome::Ready(detail) => write!(f, "ok ({})", detail),
            Outcome::Skipped(why) => write!(f, "skipped ({})", why),
            Outcome::Failed(e) => write!(f, "failed ({})", e),
        }
    }
}

/// Which features came up, for the console summary.
#[derive(Default)]
struct FeatureReport {
    entries: Vec<(&'static str, Outcome)>,
}

impl FeatureReport {
    /// Run one feature's wiring. Errors are logged and recorded, never propagated.
    fn run<T: fmt::Display>(&mut self, name: &'static str, f: impl FnOnce() -> anyhow::Result<T>) {
        let outcome = match f() {
            Ok(detail) => Outcome::Ready(detail.to_string()),
            Err(e) => {
                log::warn!("[init] {} unavailable: {:#}", name, e);
                Outcome::Failed(e.to_string())
            }
        };
        self.entries.push((name, outcome));
    }

    fn skip(&mut self, name: &'static str, why: &'static str) {
        self.entries.push((name, Outcome::Skipped(why)));
    }

    fn log_summary(&self) {
        let ready = self
            .entries
            .iter()
            .filter(|(_, o)| matches!(o, Outcome::Ready(_)))
            .count();
        log::info!("[init] {}/{} features ready", ready, self.entries.len());
        for (name, outcome) in &self.entries {
            log::info!("[init]   {:<14} {}", name, outcome);
        }
    }
}

/// Page-lifetime state shared by handlers.
struct Session {
    document: web::Document,
    caps: Capabilities,
    config: SiteConfig,
    pointer: Rc<Cell<Option<Vec2>>>,
    frame: Rc<RefCell<FrameContext>>,
}

fn site_config(document: &web::Document) -> SiteConfig {
    let body = document.body();
    let attr = |name: &str| body.as_ref().and_then(|b| b.get_attribute(name));
    SiteConfig::default().with_overrides(
        attr("data-cursor").as_deref(),
        attr("data-pin-distance").as_deref(),
    )
}

fn seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Create the momentum-scroll controller; the frame loop drives it.
fn init_smooth_scroll(window: &web::Window) -> anyhow::Result<JsValue> {
    let ctor = detect::global(window, "Lenis")
        .ok_or(error::InitError::MissingLibrary("Lenis"))?
        .dyn_into::<Function>()
        .map_err(|_| error::InitError::LibraryInit {
            library: "Lenis",
            reason: "not a constructor".into(),
        })?;
    Reflect::construct(&ctor, &Array::new()).map_err(|e| {
        error::InitError::LibraryInit {
            library: "Lenis",
            reason: format!("{:?}", e),
        }
        .into()
    })
}

fn init_icons(window: &web::Window) -> anyhow::Result<()> {
    let lucide = detect::global(window, "lucide").ok_or(error::InitError::MissingLibrary("lucide"))?;
    let create = Reflect::get(&lucide, &"createIcons".into())
        .map_err(error::InitError::from)?
        .dyn_into::<Function>()
        .map_err(|_| error::InitError::LibraryInit {
            library: "lucide",
            reason: "createIcons is not a function".into(),
        })?;
    create.call0(&lucide).map_err(|e| error::InitError::LibraryInit {
        library: "lucide",
        reason: format!("{:?}", e),
    })?;
    Ok(())
}

fn init_cursor(s: &Session) -> anyhow::Result<()> {
    let view = Rc::new(cursor::CursorView::create(&s.document)?);
    let state = Rc::new(RefCell::new(CursorState::new(seed())));
    events::pointer::wire_cursor_input(events::pointer::CursorWiring {
        document: s.document.clone(),
        state: state.clone(),
        view: view.clone(),
    });
    s.frame.borrow_mut().cursor = Some((state, view));
    Ok(())
}

fn init_parallax(s: &Session) -> anyhow::Result<()> {
    let hero = dom::query(&s.document, s.config.hero_selector)?;
    events::pointer::wire_pointer_tracking(s.pointer.clone());
    s.frame.borrow_mut().parallax = Some(Parallax::new(hero, s.pointer.clone()));
    Ok(())
}

fn wire_features(s: &Session, report: &mut FeatureReport) {
    let (doc, caps, cfg) = (&s.document, &s.caps, &s.config);

    report.run("nav", || events::nav::wire_nav(doc, caps, cfg).map(|_| ""));
    report.run("anchors", || {
        Ok(format!("{} links", events::scroll::wire_smooth_anchors(doc, caps, cfg)))
    });
    report.run("scroll", || events::scroll::wire_scroll_effects(doc, cfg).map(|_| ""));
    report.run("active-link", || {
        events::scroll::wire_active_link(doc, cfg).map(|n| format!("{} links", n))
    });
    report.run("feature-steps", || features::wire_feature_steps(doc, caps, cfg));
    report.run("tabs", || events::keyboard::wire_tabs(doc, cfg).map(|n| format!("{} tabs", n)));
    report.run("reveal", || {
        reveal::wire_reveal(doc, caps, cfg).map(|n| format!("{} elements", n))
    });
    report.run("keyboard", || {
        events::keyboard::wire_keyboard_navigation_class(doc);
        Ok("")
    });

    if caps.reduced_motion {
        for name in ["typewriter", "magnetic", "tilt", "ripple", "parallax"] {
            report.skip(name, "reduced motion");
        }
    } else {
        report.run("typewriter", || reveal::wire_typewriter(doc, caps, cfg).map(|_| ""));
        report.run("magnetic", || {
            Ok(format!("{} elements", events::pointer::wire_magnetic(doc, cfg.magnetic_selector)))
        });
        report.run("tilt", || {
            Ok(format!("{} elements", events::pointer::wire_tilt(doc, cfg.tilt_selector)))
        });
        report.run("ripple", || {
            events::pointer::wire_click_ripple(doc);
            Ok("")
        });
        report.run("parallax", || init_parallax(s).map(|_| ""));
    }

    if !cfg.cursor {
        report.skip("cursor", "disabled by page");
    } else if !caps.cursor_enabled() {
        report.skip("cursor", if caps.reduced_motion { "reduced motion" } else { "small viewport" });
    } else {
        report.run("cursor", || init_cursor(s).map(|_| ""));
    }
}

fn wire_libraries(s: &Session, window: &web::Window, report: &mut FeatureReport) {
    if s.caps.smooth_scroll_enabled() {
        report.run("smooth-scroll", || {
            let lenis = init_smooth_scroll(window)?;
            s.frame.borrow_mut().smooth_scroll = Some(lenis);
            Ok("")
        });
    } else if s.caps.smooth_scroll_library {
        report.skip("smooth-scroll", "reduced motion");
    } else {
        report.skip("smooth-scroll", "library not loaded");
    }
    if s.caps.icon_library {
        report.run("icons", || init_icons(window).map(|_| ""));
    } else {
        report.skip("icons", "library not loaded");
    }
}

/// Stop the frame loop when the page goes away.
fn wire_teardown(window: &web::Window, animation: AnimationLoop) {
    dom::on(window, "pagehide", move |_: web::Event| animation.stop());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let session = Session {
        caps: detect::detect(&window),
        config: site_config(&document),
        document,
        pointer: Rc::new(Cell::new(None)),
        frame: Rc::new(RefCell::new(FrameContext::default())),
    };

    let mut report = FeatureReport::default();
    wire_libraries(&session, &window, &mut report);
    wire_features(&session, &mut report);

    if session.frame.borrow().is_idle() {
        log::info!("[frame] nothing to animate; loop not started");
    } else {
        let animation = frame::start_loop(session.frame.clone());
        wire_teardown(&window, animation);
    }
    report.log_summary();
    Ok(())
}
