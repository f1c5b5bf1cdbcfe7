/// Map a continuous progress value to one of `steps` discrete indices.
///
/// `progress` is clamped to `[0, 1]` (NaN counts as 0) and the result is
/// `min(floor(progress * steps), steps - 1)`. Returns `None` when there are no
/// steps.
#[inline]
pub fn map_progress_to_index(progress: f64, steps: usize) -> Option<usize> {
    if steps == 0 {
        return None;
    }
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let idx = (p * steps as f64).floor() as usize;
    Some(idx.min(steps - 1))
}

/// Progress through a section computed from its bounding box.
///
/// `section_top` is the section's top edge relative to the viewport (negative
/// once scrolled past). The scrollable span is `section_height -
/// viewport_height`; when that span is not positive the section fits on
/// screen and progress jumps from 0 to 1 as soon as its top reaches the
/// viewport top.
pub fn fallback_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let span = section_height - viewport_height;
    if !span.is_finite() || !section_top.is_finite() {
        return 0.0;
    }
    if span <= 0.0 {
        return if section_top <= 0.0 { 1.0 } else { 0.0 };
    }
    (-section_top / span).clamp(0.0, 1.0)
}

/// A change of the active feature step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepChange {
    pub previous: Option<usize>,
    pub active: usize,
}

/// Tracks which feature step is emphasized.
#[derive(Clone, Debug, Default)]
pub struct FeatureSteps {
    count: usize,
    active: Option<usize>,
}

impl FeatureSteps {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            active: None,
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Feed a new progress sample; returns a change only when the index moves.
    pub fn update(&mut self, progress: f64) -> Option<StepChange> {
        let idx = map_progress_to_index(progress, self.count)?;
        if self.active == Some(idx) {
            return None;
        }
        let change = StepChange {
            previous: self.active,
            active: idx,
        };
        self.active = Some(idx);
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_boundaries() {
        assert_eq!(map_progress_to_index(0.0, 4), Some(0));
        assert_eq!(map_progress_to_index(0.25, 4), Some(1));
        assert_eq!(map_progress_to_index(0.999, 4), Some(3));
        assert_eq!(map_progress_to_index(1.0, 4), Some(3));
        assert_eq!(map_progress_to_index(0.5, 0), None);
    }

    #[test]
    fn first_sample_always_reports() {
        let mut steps = FeatureSteps::new(3);
        assert_eq!(
            steps.update(0.0),
            Some(StepChange {
                previous: None,
                active: 0
            })
        );
        assert_eq!(steps.update(0.1), None);
    }
}
