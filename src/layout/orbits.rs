//! The orbit table: ring radius and slot count per orbit index
//!
//! The legacy call sites disagreed on these constants; there is exactly one
//! canonical table now, taken from the game's own tree-layout constants.

/// Fixed, ordered sequence of (radius, slot count) pairs indexed by orbit
///
/// Static configuration, not user data.
#[derive(Debug, Clone, Copy)]
pub struct OrbitTable {
    entries: &'static [(f32, u32)],
}

impl OrbitTable {
    /// The game's tree-layout constants
    pub const CANONICAL: OrbitTable = OrbitTable::new(&[
        (0.0, 1),
        (82.0, 6),
        (162.0, 16),
        (335.0, 16),
        (493.0, 40),
        (662.0, 72),
        (846.0, 72),
    ]);

    pub const fn new(entries: &'static [(f32, u32)]) -> Self {
        Self { entries }
    }

    /// Radius and slot count for an orbit, or None when out of range
    pub fn get(&self, orbit: u32) -> Option<(f32, u32)> {
        self.entries.get(orbit as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
