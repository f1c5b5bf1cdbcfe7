use crate::constants::PIN_DISTANCE_PER_STEP_PCT;

/// A group of elements revealed together with a shared stagger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealGroup {
    pub selector: &'static str,
    pub stagger_sec: f64,
    pub duration_sec: f64,
    pub axis: RevealAxis,
}

/// Direction the element travels from while fading in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAxis {
    /// Rises from below.
    Up,
    /// Slides in from the left.
    Left,
}

/// Selectors and switches for the page.
///
/// Element ids and class names are the page's contract with this crate;
/// everything is optional at runtime and a missing element only disables the
/// feature that needs it.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub nav_toggle_id: &'static str,
    pub nav_menu_id: &'static str,
    pub nav_link_selector: &'static str,
    pub navbar_selector: &'static str,
    pub section_selector: &'static str,
    pub anchor_selector: &'static str,
    pub hero_selector: &'static str,
    pub subtitle_selector: &'static str,
    pub scroll_indicator_selector: &'static str,
    pub features_section_selector: &'static str,
    pub feature_step_selector: &'static str,
    pub feature_panel_selector: &'static str,
    pub tab_button_selector: &'static str,
    pub tab_panel_selector: &'static str,
    pub magnetic_selector: &'static str,
    pub tilt_selector: &'static str,
    pub reveal_groups: &'static [RevealGroup],
    pub cursor: bool,
    /// Virtual scroll distance per feature step while pinned, in % of viewport height.
    pub pin_distance_per_step_pct: u32,
}

pub const REVEAL_GROUPS: &[RevealGroup] = &[
    RevealGroup {
        selector: ".timeline-item",
        stagger_sec: 0.1,
        duration_sec: 0.6,
        axis: RevealAxis::Up,
    },
    RevealGroup {
        selector: ".education-card",
        stagger_sec: 0.15,
        duration_sec: 0.6,
        axis: RevealAxis::Up,
    },
    RevealGroup {
        selector: ".cert-card",
        stagger_sec: 0.1,
        duration_sec: 0.5,
        axis: RevealAxis::Up,
    },
    RevealGroup {
        selector: ".highlight-card",
        stagger_sec: 0.15,
        duration_sec: 0.6,
        axis: RevealAxis::Up,
    },
    RevealGroup {
        selector: ".leadership-item",
        stagger_sec: 0.1,
        duration_sec: 0.6,
        axis: RevealAxis::Left,
    },
];

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_toggle_id: "navToggle",
            nav_menu_id: "navMenu",
            nav_link_selector: ".nav-link",
            navbar_selector: ".navbar",
            section_selector: "section[id]",
            anchor_selector: "a[href^=\"#\"]",
            hero_selector: ".hero",
            subtitle_selector: ".hero-subtitle",
            scroll_indicator_selector: ".scroll-indicator",
            features_section_selector: ".features",
            feature_step_selector: ".feature-step",
            feature_panel_selector: ".feature-panel",
            tab_button_selector: "[role=\"tab\"]",
            tab_panel_selector: "[role=\"tabpanel\"]",
            magnetic_selector: ".btn, .contact-button, .nav-link",
            tilt_selector: ".highlight-card, .cert-card, .education-card, .timeline-content, .network-badge, .language-badge",
            reveal_groups: REVEAL_GROUPS,
            cursor: true,
            pin_distance_per_step_pct: PIN_DISTANCE_PER_STEP_PCT,
        }
    }
}

impl SiteConfig {
    /// Apply `data-*` overrides read from `<body>`.
    ///
    /// `data-cursor="off"` disables the decorative cursor; `data-pin-distance`
    /// sets the per-step pin distance. Unparseable values are ignored.
    pub fn with_overrides(mut self, cursor: Option<&str>, pin_distance: Option<&str>) -> Self {
        if let Some(v) = cursor {
            match v.trim() {
                "off" | "false" | "0" => self.cursor = false,
                "on" | "true" | "1" => self.cursor = true,
                _ => {}
            }
        }
        if let Some(pct) = pin_distance.and_then(|v| v.trim().parse::<u32>().ok()) {
            if pct > 0 {
                self.pin_distance_per_step_pct = pct;
            }
        }
        self
    }

    /// Total pin length for `steps` steps, as a trigger end expression (`+=300%`).
    pub fn pin_end(&self, steps: usize) -> String {
        let steps = steps.max(1) as u32;
        format!("+={}%", self.pin_distance_per_step_pct * steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_ignore_garbage() {
        let cfg = SiteConfig::default().with_overrides(Some("maybe"), Some("-4"));
        assert!(cfg.cursor);
        assert_eq!(cfg.pin_distance_per_step_pct, PIN_DISTANCE_PER_STEP_PCT);
    }

    #[test]
    fn pin_end_scales_with_steps() {
        let cfg = SiteConfig::default().with_overrides(None, Some("50"));
        assert_eq!(cfg.pin_end(4), "+=200%");
        assert_eq!(cfg.pin_end(0), "+=50%");
    }
}
