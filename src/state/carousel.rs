/// Photo carousel navigator
///
/// Tracks which photo the full-screen lightbox is showing while the user
/// steps through the currently filtered photo sequence. The open photo is
/// remembered by id, not by index: the filtered sequence can shrink or
/// reorder underneath the lightbox (the user can keep typing in a search
/// box while it is open), and a stored numeric index would go stale.
///
/// Navigation re-resolves the photo's position in the sequence on every
/// step and clamps at the bounds; there is no wraparound.
///
/// Policy for the open photo dropping out of the filtered sequence: snap
/// to the last valid index of the sequence, or close when the sequence is
/// empty. Navigation never panics.

/// Lightbox position state, scoped to one filtered photo-id sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    /// Id of the photo currently shown, None when the lightbox is closed
    current: Option<u64>,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the lightbox on the given photo
    pub fn open(&mut self, photo_id: u64) {
        self.current = Some(photo_id);
    }

    /// Close the lightbox
    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_id(&self) -> Option<u64> {
        self.current
    }

    /// Position of the open photo within the filtered sequence, or None
    /// when the lightbox is closed or the photo has dropped out of view
    pub fn current_index(&self, filtered: &[u64]) -> Option<usize> {
        let id = self.current?;
        filtered.iter().position(|&p| p == id)
    }

    /// Step to the previous photo, clamped at the start of the sequence
    pub fn previous(&mut self, filtered: &[u64]) {
        if let Some(index) = self.resync(filtered) {
            let previous = index.saturating_sub(1);
            self.current = Some(filtered[previous]);
        }
    }

    /// Step to the next photo, clamped at the end of the sequence
    pub fn next(&mut self, filtered: &[u64]) {
        if let Some(index) = self.resync(filtered) {
            let next = (index + 1).min(filtered.len() - 1);
            self.current = Some(filtered[next]);
        }
    }

    /// Re-resolve the open photo against the filtered sequence, applying
    /// the dropped-photo policy. Returns a valid index, or None when the
    /// lightbox is (now) closed.
    fn resync(&mut self, filtered: &[u64]) -> Option<usize> {
        self.current?;

        if filtered.is_empty() {
            self.current = None;
            return None;
        }

        match self.current_index(filtered) {
            Some(index) => Some(index),
            None => {
                // The photo was filtered out while open; snap to the end
                let last = filtered.len() - 1;
                self.current = Some(filtered[last]);
                Some(last)
            }
        }
    }
}
