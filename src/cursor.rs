use crate::constants::*;
use crate::core::cursor::{burst_particles, CursorState, HoverKind};
use crate::dom;
use crate::error::InitError;
use wasm_bindgen::JsCast;
use web_sys as web;

const POINTER_SVG: &str = r##"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M3 3L10.07 19.97L12.58 12.58L19.97 10.07L3 3Z" fill="url(#cursorGradient)" stroke="rgba(6, 182, 212, 0.8)" stroke-width="1.5"/><defs><linearGradient id="cursorGradient" x1="3" y1="3" x2="19.97" y2="19.97"><stop offset="0%" stop-color="#06b6d4"/><stop offset="100%" stop-color="#2dd4bf"/></linearGradient></defs></svg>"##;

#[inline]
fn hsl(hue: f32) -> String {
    format!("hsl({:.0}, 70%, 60%)", hue)
}

#[inline]
fn hsla(hue: f32, alpha: f32) -> String {
    format!("hsla({:.0}, 70%, 60%, {:.3})", hue, alpha)
}

/// Elements and canvas that make up the decorative cursor.
pub struct CursorView {
    main: web::Element,
    pointer: web::Element,
    label: web::Element,
    aurora: web::Element,
    trail: Vec<web::Element>,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CursorView {
    /// Build the cursor DOM and hide the native pointer.
    pub fn create(document: &web::Document) -> Result<Self, InitError> {
        let main = dom::append_div(document, "main-cursor")?;
        let dot = document.create_element("div")?;
        dot.set_class_name("cursor-dot");
        main.append_child(&dot)?;

        let pointer = dom::append_div(document, "cursor-pointer")?;
        pointer.set_inner_html(POINTER_SVG);
        let label = dom::append_div(document, "cursor-text")?;

        let mut trail = Vec::with_capacity(TRAIL_LENGTH);
        for i in 0..TRAIL_LENGTH {
            let circle = dom::append_div(document, "cursor-circle")?;
            dom::set_style(&circle, "--index", &i.to_string());
            trail.push(circle);
        }

        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| InitError::Js("canvas element has wrong type".into()))?;
        canvas.set_class_name("cursor-canvas");
        document
            .body()
            .ok_or_else(|| InitError::MissingElement("body".into()))?
            .append_child(&canvas)?;
        dom::sync_canvas_to_viewport(&canvas);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| InitError::Js("no 2d context".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| InitError::Js("not a 2d context".into()))?;

        let aurora = dom::append_div(document, "aurora-glow")?;

        if let Some(body) = document.body() {
            dom::set_style(&body, "cursor", "none");
        }
        for el in dom::query_all(document, "a, button, .btn") {
            dom::set_style(&el, "cursor", "none");
        }

        Ok(Self {
            main,
            pointer,
            label,
            aurora,
            trail,
            canvas,
            ctx,
        })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Immediate feedback on a pointer move: glyphs follow the raw position.
    pub fn on_move(&self, state: &CursorState, hover_text: &str) {
        let p = state.pointer.pos;
        let hue = state.pointer.hue;
        let (x, y) = (format!("{}px", p.x), format!("{}px", p.y));

        for el in [&self.main, &self.pointer, &self.aurora] {
            dom::set_style(el, "left", &x);
            dom::set_style(el, "top", &y);
        }
        dom::set_style(&self.main, "border-color", &hsl(hue));
        dom::set_style(
            &self.pointer,
            "filter",
            &format!("drop-shadow(0 0 8px hsl({:.0}, 80%, 60%))", hue),
        );
        dom::set_style(
            &self.aurora,
            "background",
            &format!(
                "radial-gradient(circle, {} 0%, {} 30%, transparent 70%)",
                hsla(hue, 0.3),
                hsla(hue + 30.0, 0.2)
            ),
        );
        dom::set_style(&self.label, "left", &format!("{}px", p.x + 40.0));
        dom::set_style(&self.label, "top", &format!("{}px", p.y + 40.0));

        self.apply_hover(state.hover, hover_text);
    }

    fn apply_hover(&self, kind: HoverKind, text: &str) {
        let cl = self.main.class_list();
        _ = cl.remove_3("button", "link", "card");
        dom::set_class(&self.main, "hovering", kind.is_hovering());
        if let Some(c) = kind.cursor_class() {
            _ = cl.add_1(c);
        }
        let (scale, rotate) = kind.pointer_pose();
        dom::set_style(
            &self.pointer,
            "transform",
            &format!("translate(0, 0) scale({}) rotate({}deg)", scale, rotate),
        );
        match kind.label(text) {
            Some(label) => {
                self.label.set_text_content(Some(&label));
                dom::set_style(&self.label, "opacity", "1");
            }
            None => dom::set_style(&self.label, "opacity", "0"),
        }
    }

    pub fn set_section(&self, section: &str) {
        _ = self.main.set_attribute("data-section", section);
    }

    pub fn set_clicking(&self, clicking: bool) {
        dom::set_class(&self.main, "clicking", clicking);
    }

    /// Per-frame redraw of the trail and the constellation canvas.
    pub fn draw(&self, state: &CursorState) {
        let hue = state.pointer.hue;
        let frame = state.draw_list();
        for (el, style) in self.trail.iter().zip(state.trail.styles(hue)) {
            dom::set_style(el, "left", &format!("{}px", style.pos.x - 12.0));
            dom::set_style(el, "top", &format!("{}px", style.pos.y - 12.0));
            dom::set_style(
                el,
                "background",
                &format!(
                    "radial-gradient(circle, {} 0%, transparent 70%)",
                    hsla(style.hue, 0.6 * style.scale)
                ),
            );
            dom::set_style(el, "box-shadow", &format!("0 0 20px {}", hsla(style.hue, 0.4)));
            dom::set_style(
                el,
                "transform",
                &format!("scale({}) rotate({}deg)", style.scale, style.rotation_deg),
            );
        }

        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        for (pos, alpha) in &frame.points {
            ctx.begin_path();
            _ = ctx.arc(
                pos.x as f64,
                pos.y as f64,
                CONSTELLATION_POINT_RADIUS,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.set_fill_style_str(&hsla(hue, *alpha));
            ctx.fill();
        }
        ctx.set_line_width(1.0);
        for link in &frame.links {
            ctx.begin_path();
            ctx.move_to(link.from.x as f64, link.from.y as f64);
            ctx.line_to(link.to.x as f64, link.to.y as f64);
            ctx.set_stroke_style_str(&hsla(hue, link.alpha));
            ctx.stroke();
        }
    }

    /// Click feedback: a ring of burst particles, plus a velocity ring when
    /// the pointer was moving fast. Every element removes itself.
    pub fn burst(&self, document: &web::Document, state: &CursorState) {
        let p = state.pointer.pos;
        let (x, y) = (format!("{}px", p.x), format!("{}px", p.y));
        for (angle, hue) in burst_particles(state.pointer.hue) {
            let Ok(el) = dom::append_div(document, "cursor-burst") else {
                continue;
            };
            dom::set_style(&el, "left", &x);
            dom::set_style(&el, "top", &y);
            dom::set_style(&el, "--angle", &format!("{}rad", angle));
            dom::set_style(&el, "background", &hsl(hue));
            dom::set_style(&el, "box-shadow", &format!("0 0 15px {}", hsl(hue)));
            dom::set_timeout(BURST_LIFETIME_MS, move || el.remove());
        }
        if state.ring_on_click() {
            if let Ok(ring) = dom::append_div(document, "velocity-ring") {
                dom::set_style(&ring, "left", &x);
                dom::set_style(&ring, "top", &y);
                dom::set_style(&ring, "border-color", &hsl(state.pointer.hue));
                dom::set_timeout(VELOCITY_RING_LIFETIME_MS, move || ring.remove());
            }
        }
    }
}

/// Classify the element under the pointer by its closest interactive ancestor.
/// Returns the kind and the matched element's text.
pub fn hover_kind_for(target: Option<web::EventTarget>) -> (HoverKind, String) {
    let Some(el) = target.and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return (HoverKind::None, String::new());
    };
    for kind in HoverKind::PRIORITY {
        if let Ok(Some(hit)) = el.closest(kind.selector()) {
            return (kind, hit.text_content().unwrap_or_default());
        }
    }
    (HoverKind::None, String::new())
}
