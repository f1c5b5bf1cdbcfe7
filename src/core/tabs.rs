/// Mutually exclusive selection over `count` (button, panel) pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabList {
    count: usize,
    active: usize,
}

impl TabList {
    pub fn new(count: usize) -> Self {
        Self { count, active: 0 }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Select `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index < self.count {
            self.active = index;
            Some(index)
        } else {
            None
        }
    }

    /// Arrow/Home/End navigation. Returns the newly selected index, or `None`
    /// if the key is not a tab navigation key.
    pub fn on_key(&mut self, key: &str) -> Option<usize> {
        let target = next_index_for_key(key, self.active, self.count)?;
        self.select(target)
    }
}

#[inline]
pub fn next_index_for_key(key: &str, current: usize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match key {
        "ArrowRight" | "ArrowDown" => Some((current + 1) % count),
        "ArrowLeft" | "ArrowUp" => Some((current + count - 1) % count),
        "Home" => Some(0),
        "End" => Some(count - 1),
        _ => None,
    }
}
