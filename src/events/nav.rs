use crate::core::nav::{NavEffect, NavEffects, NavEvent, NavMenu};
use crate::core::{Capabilities, SiteConfig};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct NavWiring {
    document: web::Document,
    toggle: web::Element,
    menu: web::Element,
    links: Rc<Vec<web::Element>>,
    state: Rc<RefCell<NavMenu>>,
}

impl NavWiring {
    fn dispatch(&self, event: NavEvent, ev: &web::Event) {
        let effects = self.state.borrow_mut().handle(event);
        self.apply(&effects, ev);
    }

    fn apply(&self, effects: &NavEffects, ev: &web::Event) {
        for effect in effects {
            match *effect {
                NavEffect::SetOpen(open) => {
                    dom::set_class(&self.menu, "active", open);
                    dom::set_class(&self.toggle, "active", open);
                    _ = self
                        .toggle
                        .set_attribute("aria-expanded", if open { "true" } else { "false" });
                    log::debug!("[nav] open={}", open);
                }
                NavEffect::LockScroll(lock) => {
                    if let Some(body) = self.document.body() {
                        dom::set_style(&body, "overflow", if lock { "hidden" } else { "" });
                    }
                }
                NavEffect::FocusFirstLink => {
                    if let Some(first) = self.links.first() {
                        dom::focus(first);
                    }
                }
                NavEffect::FocusToggle => dom::focus(&self.toggle),
                NavEffect::FocusLink(i) => {
                    if let Some(link) = self.links.get(i) {
                        dom::focus(link);
                    }
                }
                NavEffect::PreventDefault => ev.prevent_default(),
            }
        }
    }

    fn focused_link(&self) -> Option<usize> {
        let active = self.document.active_element()?;
        self.links.iter().position(|l| *l == active)
    }
}

/// Mobile menu: toggle button, link clicks, outside clicks, Escape and the
/// Tab focus trap.
pub fn wire_nav(
    document: &web::Document,
    caps: &Capabilities,
    config: &SiteConfig,
) -> anyhow::Result<()> {
    let toggle = dom::by_id(document, config.nav_toggle_id)?;
    let menu = dom::by_id(document, config.nav_menu_id)?;
    let links = dom::query_all_in(&menu, "a[href]");
    _ = toggle.set_attribute("aria-expanded", "false");

    let w = NavWiring {
        document: document.clone(),
        toggle: toggle.clone(),
        menu,
        links: Rc::new(links),
        state: Rc::new(RefCell::new(NavMenu::new(caps.lock_scroll_on_menu()))),
    };

    let wt = w.clone();
    dom::add_click_listener(&toggle, move |ev| {
        wt.dispatch(NavEvent::Toggle, &ev);
    });

    for link in dom::query_all(document, config.nav_link_selector) {
        let wl = w.clone();
        dom::add_click_listener(&link, move |ev| {
            wl.dispatch(NavEvent::LinkActivated, &ev);
        });
    }

    let wo = w.clone();
    dom::on(document, "click", move |ev: web::MouseEvent| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
        let inside = target
            .as_ref()
            .map(|t| wo.toggle.contains(Some(t)) || wo.menu.contains(Some(t)))
            .unwrap_or(false);
        if !inside {
            wo.dispatch(NavEvent::OutsideClick, &ev);
        }
    });

    let wk = w.clone();
    dom::on(document, "keydown", move |ev: web::KeyboardEvent| {
        let event = match ev.key().as_str() {
            "Escape" => NavEvent::Escape,
            "Tab" => NavEvent::Tab {
                shift: ev.shift_key(),
                focused: wk.focused_link(),
                link_count: wk.links.len(),
            },
            _ => return,
        };
        wk.dispatch(event, &ev);
    });

    if let Some(window) = web::window() {
        let (wr, caps) = (w, *caps);
        dom::on(&window, "resize", move |_: web::Event| {
            let now = Capabilities {
                viewport: dom::viewport(),
                ..caps
            };
            wr.state.borrow_mut().set_lock_scroll(now.lock_scroll_on_menu());
        });
    }
    Ok(())
}
