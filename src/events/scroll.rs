use crate::constants::{HIGHLIGHT_DEBOUNCE_MS, SCROLL_THROTTLE_MS};
use crate::core::scroll::{active_section, anchor_id, anchor_scroll_target, ScrollSnapshot, SectionBounds};
use crate::core::timing::Debounce;
use crate::core::{Capabilities, SiteConfig};
use crate::dom;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements whose look follows the page scroll position. Any of them may be
/// absent from the page.
struct ScrollTargets {
    document: web::Document,
    navbar: Option<web::Element>,
    indicator: Option<web::Element>,
    progress_bar: Option<web::Element>,
    back_to_top: Option<web::Element>,
}

impl ScrollTargets {
    fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            scroll_y: dom::scroll_y(),
            viewport_height: dom::viewport().height,
            document_height: dom::document_height(&self.document),
        }
    }

    fn update(&self) {
        let view = self.snapshot().view();
        if let Some(nav) = &self.navbar {
            let shadow = if view.navbar_shadow {
                "0 4px 6px rgba(0, 0, 0, 0.1)"
            } else {
                "0 1px 3px rgba(0, 0, 0, 0.1)"
            };
            dom::set_style(nav, "box-shadow", shadow);
        }
        if let Some(ind) = &self.indicator {
            let (opacity, visibility) = if view.scroll_indicator_visible {
                ("1", "visible")
            } else {
                ("0", "hidden")
            };
            dom::set_style(ind, "opacity", opacity);
            dom::set_style(ind, "visibility", visibility);
        }
        if let Some(bar) = &self.progress_bar {
            dom::set_style(bar, "width", &format!("{:.2}%", view.progress_pct));
        }
        if let Some(fab) = &self.back_to_top {
            dom::set_class(fab, "visible", view.back_to_top_visible);
        }
    }
}

fn create_back_to_top(document: &web::Document) -> Option<web::Element> {
    let fab = document.create_element("a").ok()?;
    _ = fab.set_attribute("href", "#home");
    _ = fab.set_attribute("aria-label", "Back to top");
    fab.set_class_name("floating-action-button");
    fab.set_text_content(Some("↑"));
    document.body()?.append_child(&fab).ok()?;
    Some(fab)
}

/// Navbar shadow, scroll indicator, progress bar and back-to-top button.
pub fn wire_scroll_effects(document: &web::Document, config: &SiteConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let targets = ScrollTargets {
        document: document.clone(),
        navbar: dom::query(document, config.navbar_selector).ok(),
        indicator: dom::query(document, config.scroll_indicator_selector).ok(),
        progress_bar: dom::append_div(document, "scroll-progress").ok(),
        back_to_top: create_back_to_top(document),
    };
    targets.update();

    dom::on_throttled(&window, "scroll", SCROLL_THROTTLE_MS, move || targets.update());
    Ok(())
}

fn section_bounds(sections: &[web::Element]) -> Vec<SectionBounds> {
    sections
        .iter()
        .filter_map(|s| {
            let h = s.dyn_ref::<web::HtmlElement>()?;
            Some(SectionBounds {
                id: s.id(),
                top: h.offset_top() as f64,
                height: h.offset_height() as f64,
            })
        })
        .collect()
}

/// Highlight the nav link of the section being read. Debounced with a
/// leading edge so fast scrolling still updates immediately.
pub fn wire_active_link(document: &web::Document, config: &SiteConfig) -> anyhow::Result<usize> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let sections = dom::query_all(document, config.section_selector);
    let mut links: FnvHashMap<String, web::Element> = FnvHashMap::default();
    for link in dom::query_all(document, config.nav_link_selector) {
        if let Some(id) = link.get_attribute("href").as_deref().and_then(anchor_id) {
            links.insert(id.to_string(), link);
        }
    }
    if sections.is_empty() || links.is_empty() {
        return Err(crate::error::InitError::MissingElement(config.section_selector.into()).into());
    }
    let count = links.len();

    let highlight: Rc<dyn Fn()> = Rc::new(move || {
        let bounds = section_bounds(&sections);
        let active = active_section(&bounds, dom::scroll_y());
        for (id, link) in &links {
            dom::set_class(link, "active", Some(id.as_str()) == active);
        }
    });
    highlight();

    let debounce = Rc::new(RefCell::new(Debounce::new(HIGHLIGHT_DEBOUNCE_MS, true)));
    dom::on(&window, "scroll", move |_: web::Event| {
        let action = debounce.borrow_mut().on_input();
        if action.run_now {
            highlight();
        }
        let (d, h) = (debounce.clone(), highlight.clone());
        let wait = debounce.borrow().wait_ms() as i32;
        dom::set_timeout(wait, move || {
            if d.borrow_mut().on_timer(action.schedule) {
                h();
            }
        });
    });
    Ok(count)
}

/// In-page anchors scroll smoothly, landing below the fixed navbar.
pub fn wire_smooth_anchors(
    document: &web::Document,
    caps: &Capabilities,
    config: &SiteConfig,
) -> usize {
    let anchors = dom::query_all(document, config.anchor_selector);
    let smooth = caps.animations_allowed();
    for anchor in &anchors {
        let a = anchor.clone();
        let doc = document.clone();
        dom::add_click_listener(anchor, move |ev| {
            let Some(href) = a.get_attribute("href") else {
                return;
            };
            let Some(target) = anchor_id(&href).and_then(|id| doc.get_element_by_id(id)) else {
                return;
            };
            ev.prevent_default();
            let top = dom::bounding_rect(&target).top + dom::scroll_y();
            let opts = web::ScrollToOptions::new();
            opts.set_top(anchor_scroll_target(top));
            opts.set_behavior(if smooth {
                web::ScrollBehavior::Smooth
            } else {
                web::ScrollBehavior::Instant
            });
            if let Some(w) = web::window() {
                w.scroll_to_with_scroll_to_options(&opts);
            }
        });
    }
    anchors.len()
}
