use crate::constants::*;

/// Element bounding box in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// A transform written to an element's inline style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Translate { x: f64, y: f64 },
    Tilt { rotate_x: f64, rotate_y: f64, scale: f64 },
}

impl Transform {
    pub const TRANSLATE_IDENTITY: Transform = Transform::Translate { x: 0.0, y: 0.0 };
    pub const TILT_IDENTITY: Transform = Transform::Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    /// The resting transform of the same kind.
    pub fn identity(self) -> Transform {
        match self {
            Transform::Translate { .. } => Self::TRANSLATE_IDENTITY,
            Transform::Tilt { .. } => Self::TILT_IDENTITY,
        }
    }

    pub fn to_css(self) -> String {
        match self {
            Transform::Translate { x, y } => format!("translate({:.2}px, {:.2}px)", x, y),
            Transform::Tilt {
                rotate_x,
                rotate_y,
                scale,
            } => format!(
                "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({})",
                TILT_PERSPECTIVE_PX, rotate_x, rotate_y, scale
            ),
        }
    }
}

/// Pull an element toward the pointer, bounded to a fixed radius.
pub fn magnetic_offset(rect: &Rect, pointer_x: f64, pointer_y: f64) -> Transform {
    let (cx, cy) = rect.center();
    let mut x = (pointer_x - cx) * MAGNETIC_STRENGTH;
    let mut y = (pointer_y - cy) * MAGNETIC_STRENGTH;
    let len = (x * x + y * y).sqrt();
    if len > MAGNETIC_MAX_RADIUS_PX {
        let s = MAGNETIC_MAX_RADIUS_PX / len;
        x *= s;
        y *= s;
    }
    Transform::Translate { x, y }
}

/// 3D tilt that leans the card toward the pointer, clamped per axis.
pub fn tilt(rect: &Rect, pointer_x: f64, pointer_y: f64) -> Transform {
    let (cx, cy) = rect.center();
    let rotate_x = ((pointer_y - cy) / TILT_DIVISOR).clamp(-TILT_MAX_DEG, TILT_MAX_DEG);
    let rotate_y = ((cx - pointer_x) / TILT_DIVISOR).clamp(-TILT_MAX_DEG, TILT_MAX_DEG);
    Transform::Tilt {
        rotate_x,
        rotate_y,
        scale: TILT_SCALE,
    }
}

/// Hero parallax from the pointer position relative to the viewport.
///
/// Returns `None` before the first pointer move, once the hero has scrolled
/// out of the first screen, or when the viewport has no area.
pub fn parallax_offset(
    pointer: Option<(f64, f64)>,
    viewport_width: f64,
    viewport_height: f64,
    scroll_y: f64,
) -> Option<Transform> {
    let (pointer_x, pointer_y) = pointer?;
    if viewport_width <= 0.0 || viewport_height <= 0.0 || scroll_y >= viewport_height {
        return None;
    }
    let nx = (pointer_x / viewport_width - 0.5).clamp(-0.5, 0.5);
    let ny = (pointer_y / viewport_height - 0.5).clamp(-0.5, 0.5);
    Some(Transform::Translate {
        x: nx * PARALLAX_RANGE_PX,
        y: ny * PARALLAX_RANGE_PX,
    })
}
