use crate::constants::*;

/// Page scroll position and the sizes it is measured against.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Visual flags derived from the scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollView {
    pub navbar_shadow: bool,
    pub scroll_indicator_visible: bool,
    pub back_to_top_visible: bool,
    /// Page progress bar width in percent, [0, 100].
    pub progress_pct: f64,
}

impl ScrollSnapshot {
    pub fn view(&self) -> ScrollView {
        ScrollView {
            navbar_shadow: self.scroll_y > NAVBAR_SHADOW_AFTER_PX,
            scroll_indicator_visible: self.scroll_y <= SCROLL_INDICATOR_HIDE_AFTER_PX,
            back_to_top_visible: self.scroll_y > BACK_TO_TOP_AFTER_PX,
            progress_pct: page_progress_pct(self.scroll_y, self.document_height, self.viewport_height),
        }
    }
}

/// How far down the page the reader is, in percent. A page that does not
/// scroll counts as fully read.
pub fn page_progress_pct(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let span = document_height - viewport_height;
    if span.is_nan() || span <= 0.0 {
        return 100.0;
    }
    (scroll_y / span * 100.0).clamp(0.0, 100.0)
}

/// Document-relative position of a section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section whose highlight window contains `scroll_y`.
///
/// Windows start `SECTION_HIGHLIGHT_OFFSET_PX` above the section so the link
/// lights up shortly before the section reaches the navbar. When windows
/// overlap the later section wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.top - SECTION_HIGHLIGHT_OFFSET_PX;
            scroll_y > top && scroll_y <= top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

/// Scroll destination for an in-page anchor, leaving room for the fixed navbar.
#[inline]
pub fn anchor_scroll_target(element_top: f64) -> f64 {
    (element_top - NAVBAR_HEIGHT_PX).max(0.0)
}

/// Id referenced by an in-page link (`#about` → `about`). Bare `#` has none.
pub fn anchor_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}
