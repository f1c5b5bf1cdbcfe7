use crate::constants::REVEAL_OFFSET_PX;
use crate::core::config::{RevealAxis, RevealGroup};

/// Marker class for revealed elements.
pub const REVEALED_CLASS: &str = "revealed";

/// How a reveal-marked element is prepared on load.
#[derive(Clone, Debug, PartialEq)]
pub enum RevealPlan {
    /// Start hidden and offset; the observer later applies `visible_transform`.
    Animate {
        hidden_transform: String,
        visible_transform: &'static str,
        transition: String,
    },
    /// Reduced motion: no transition or transform, visible from the start.
    ShowImmediately,
}

/// Plan for the `index`-th element of a group.
pub fn plan(group: &RevealGroup, index: usize, reduced_motion: bool) -> RevealPlan {
    if reduced_motion {
        return RevealPlan::ShowImmediately;
    }
    let delay = index as f64 * group.stagger_sec;
    let (hidden_transform, visible_transform) = match group.axis {
        RevealAxis::Up => (format!("translateY({}px)", REVEAL_OFFSET_PX), "translateY(0)"),
        RevealAxis::Left => (format!("translateX(-{}px)", REVEAL_OFFSET_PX), "translateX(0)"),
    };
    RevealPlan::Animate {
        hidden_transform,
        visible_transform,
        transition: format!(
            "opacity {d}s ease {delay:.2}s, transform {d}s ease {delay:.2}s",
            d = group.duration_sec,
        ),
    }
}

/// Types a string one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.shown >= self.text.len()
    }

    #[inline]
    pub fn full_text(&self) -> &str {
        &self.text
    }

    /// Reveal one more character and return the visible prefix, or `None`
    /// when everything is already shown.
    pub fn advance(&mut self) -> Option<&str> {
        let next = self.text[self.shown..].chars().next()?;
        self.shown += next.len_utf8();
        Some(&self.text[..self.shown])
    }
}
