/// Allocation table for the 26 inventory letters `a` to `z`.
///
/// The table is a plain value: systems take it, and hand back the updated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventoryKeys {
    used: [bool; 26],
}

impl InventoryKeys {
    /// A table with every letter free.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(key: char) -> Option<usize> {
        key.is_ascii_lowercase()
            .then(|| (key as u8 - b'a') as usize)
    }

    /// Claim the lowest free letter, or `None` when all 26 are taken.
    pub fn allocate(&mut self) -> Option<char> {
        let slot = self.used.iter().position(|used| !used)?;
        self.used[slot] = true;
        Some((b'a' + slot as u8) as char)
    }

    /// Return a letter to the pool. Anything outside `a..=z` is ignored.
    pub fn release(&mut self, key: char) {
        if let Some(slot) = Self::slot(key) {
            self.used[slot] = false;
        }
    }

    /// Whether `key` is allocated.
    pub fn is_used(&self, key: char) -> bool {
        Self::slot(key).is_some_and(|slot| self.used[slot])
    }

    /// Number of letters in use.
    pub fn used_count(&self) -> usize {
        self.used.iter().filter(|used| **used).count()
    }

    /// True when all 26 letters are taken.
    pub fn is_exhausted(&self) -> bool {
        self.used.iter().all(|used| *used)
    }
}
