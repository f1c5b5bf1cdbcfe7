use crate::constants::{MOBILE_BREAKPOINT_PX, SHORT_VIEWPORT_PX};

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Environment capabilities, read once at startup.
///
/// Library flags describe globals the page may or may not have loaded:
/// - `animation_library`: a tween engine together with its scroll-trigger plugin
/// - `smooth_scroll_library`: a momentum-scroll controller
/// - `icon_library`: an icon renderer that replaces placeholder elements
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capabilities {
    pub reduced_motion: bool,
    pub animation_library: bool,
    pub smooth_scroll_library: bool,
    pub icon_library: bool,
    pub viewport: Viewport,
}

/// How feature-step progress is obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressStrategy {
    /// Section is pinned by the animation library, which reports progress.
    Pinned,
    /// Progress derived from the section's bounding box on scroll.
    NativeScroll,
}

impl Capabilities {
    /// Small or short viewports never pin sections.
    #[inline]
    pub fn is_compact(&self) -> bool {
        self.viewport.width <= MOBILE_BREAKPOINT_PX || self.viewport.height <= SHORT_VIEWPORT_PX
    }

    #[inline]
    pub fn animations_allowed(&self) -> bool {
        !self.reduced_motion
    }

    pub fn progress_strategy(&self) -> ProgressStrategy {
        if self.animation_library && self.animations_allowed() && !self.is_compact() {
            ProgressStrategy::Pinned
        } else {
            ProgressStrategy::NativeScroll
        }
    }

    /// The decorative cursor needs room and motion.
    #[inline]
    pub fn cursor_enabled(&self) -> bool {
        self.animations_allowed() && self.viewport.width > MOBILE_BREAKPOINT_PX
    }

    #[inline]
    pub fn smooth_scroll_enabled(&self) -> bool {
        self.smooth_scroll_library && self.animations_allowed()
    }

    /// Body scroll is locked behind the open menu only on mobile layouts.
    #[inline]
    pub fn lock_scroll_on_menu(&self) -> bool {
        self.viewport.width < MOBILE_BREAKPOINT_PX
    }
}
