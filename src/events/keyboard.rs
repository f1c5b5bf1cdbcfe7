use crate::core::tabs::TabList;
use crate::core::SiteConfig;
use crate::dom;
use crate::error::InitError;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Tabs {
    buttons: Vec<web::Element>,
    panels: Vec<web::Element>,
    list: RefCell<TabList>,
}

impl Tabs {
    /// Mark `index` active on buttons and panels, clear the rest.
    fn render(&self, index: usize, move_focus: bool) {
        for (i, button) in self.buttons.iter().enumerate() {
            let on = i == index;
            dom::set_class(button, "active", on);
            _ = button.set_attribute("aria-selected", if on { "true" } else { "false" });
            _ = button.set_attribute("tabindex", if on { "0" } else { "-1" });
            if on && move_focus {
                dom::focus(button);
            }
        }
        for (i, panel) in self.panels.iter().enumerate() {
            let on = i == index;
            dom::set_class(panel, "active", on);
            _ = if on {
                panel.remove_attribute("hidden")
            } else {
                panel.set_attribute("hidden", "")
            };
        }
    }
}

/// Tabbed UI: click selects, arrows/Home/End move the selection and focus.
/// Returns the number of tabs wired.
pub fn wire_tabs(document: &web::Document, config: &SiteConfig) -> anyhow::Result<usize> {
    let buttons = dom::query_all(document, config.tab_button_selector);
    if buttons.is_empty() {
        return Err(InitError::MissingElement(config.tab_button_selector.into()).into());
    }
    let panels = dom::query_all(document, config.tab_panel_selector);
    if panels.len() != buttons.len() {
        log::warn!(
            "[tabs] {} buttons but {} panels",
            buttons.len(),
            panels.len()
        );
    }
    let initial = buttons
        .iter()
        .position(|b| b.class_list().contains("active"))
        .unwrap_or(0);
    let mut list = TabList::new(buttons.len());
    list.select(initial);

    let tabs = Rc::new(Tabs {
        buttons,
        panels,
        list: RefCell::new(list),
    });
    tabs.render(initial, false);

    for (i, button) in tabs.buttons.iter().enumerate() {
        let t = tabs.clone();
        dom::add_click_listener(button, move |_| {
            if t.list.borrow_mut().select(i).is_some() {
                t.render(i, true);
            }
        });

        let t = tabs.clone();
        dom::on(button, "keydown", move |ev: web::KeyboardEvent| {
            let next = t.list.borrow_mut().on_key(&ev.key());
            if let Some(next) = next {
                ev.prevent_default();
                t.render(next, true);
            }
        });
    }
    Ok(tabs.buttons.len())
}

/// Show focus rings only for keyboard users: Tab adds the body class,
/// any mouse press removes it.
pub fn wire_keyboard_navigation_class(document: &web::Document) {
    let doc = document.clone();
    dom::on(document, "keydown", move |ev: web::KeyboardEvent| {
        if ev.key() == "Tab" {
            if let Some(body) = doc.body() {
                dom::set_class(&body, "keyboard-navigation", true);
            }
        }
    });
    let doc = document.clone();
    dom::on(document, "mousedown", move |_: web::MouseEvent| {
        if let Some(body) = doc.body() {
            dom::set_class(&body, "keyboard-navigation", false);
        }
    });
}
