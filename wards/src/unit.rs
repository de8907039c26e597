use serde::{Deserialize, Serialize};

/// Stable identifier of a ward unit inside a [`crate::pool::WardPool`].
///
/// Units are never removed, so the index stays valid for the pool's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WardId(pub usize);

impl std::fmt::Display for WardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unit-{}", self.0)
    }
}

/// A block of beds with a fixed capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ward {
    pub total: u32,
    pub reserved: u32,
}

impl Ward {
    pub fn new(total: u32) -> Self {
        Self { total, reserved: 0 }
    }

    pub fn has_free_bed(&self) -> bool {
        self.reserved < self.total
    }

    /// Occupy one bed. Callers check [`Ward::has_free_bed`] first.
    pub(crate) fn assign(&mut self) {
        self.reserved += 1;
    }

    /// Release one bed; no-op when the unit is already empty.
    pub(crate) fn discharge(&mut self) {
        if self.reserved > 0 {
            self.reserved -= 1;
        }
    }

    pub fn free_count(&self) -> u32 {
        self.total.saturating_sub(self.reserved)
    }
}
