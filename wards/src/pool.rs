use thiserror::Error;
use tracing::debug;

use crate::config::WardsConfig;
use crate::unit::{Ward, WardId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WardError {
    #[error("No available wards. Cannot admit patient.")]
    NoFreeWard,

    #[error("Unknown ward unit: {unit}")]
    UnknownUnit { unit: WardId },
}

/// Outcome of a successful bed assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub unit: WardId,
    /// Display label: the unit's reserved count right after the assignment.
    /// Not unique across admissions once discharges happen.
    pub number: u32,
}

/// Pool-wide bed counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WardTotals {
    pub total: u32,
    pub reserved: u32,
}

impl WardTotals {
    pub fn free(&self) -> u32 {
        self.total.saturating_sub(self.reserved)
    }
}

#[derive(Debug, Clone)]
pub struct WardPool {
    units: Vec<Ward>,
}

impl Default for WardPool {
    fn default() -> Self {
        Self::from_config(&WardsConfig::default())
    }
}

impl WardPool {
    pub fn new<I: IntoIterator<Item = u32>>(capacities: I) -> Self {
        Self {
            units: capacities.into_iter().map(Ward::new).collect(),
        }
    }

    pub fn from_config(cfg: &WardsConfig) -> Self {
        Self::new(cfg.units.iter().copied())
    }

    /// Reserve a bed in the first unit (creation order) that has one free.
    pub fn assign(&mut self) -> Result<Assignment, WardError> {
        let found = self
            .units
            .iter_mut()
            .enumerate()
            .find(|(_, ward)| ward.has_free_bed());

        match found {
            Some((idx, ward)) => {
                ward.assign();
                debug!(unit = idx, reserved = ward.reserved, total = ward.total, "bed assigned");
                Ok(Assignment {
                    unit: WardId(idx),
                    number: ward.reserved,
                })
            }
            None => {
                debug!(units = self.units.len(), "no free bed in any unit");
                Err(WardError::NoFreeWard)
            }
        }
    }

    /// Release a bed in the given unit. Discharging an empty unit leaves it at zero.
    pub fn discharge(&mut self, unit: WardId) -> Result<(), WardError> {
        let ward = self
            .units
            .get_mut(unit.0)
            .ok_or(WardError::UnknownUnit { unit })?;
        ward.discharge();
        debug!(unit = unit.0, reserved = ward.reserved, "bed released");
        Ok(())
    }

    pub fn unit(&self, id: WardId) -> Option<&Ward> {
        self.units.get(id.0)
    }

    pub fn units(&self) -> impl Iterator<Item = (WardId, &Ward)> {
        self.units
            .iter()
            .enumerate()
            .map(|(idx, ward)| (WardId(idx), ward))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn totals(&self) -> WardTotals {
        self.units
            .iter()
            .fold(WardTotals::default(), |acc, ward| WardTotals {
                total: acc.total.saturating_add(ward.total),
                reserved: acc.reserved.saturating_add(ward.reserved),
            })
    }

    pub fn free_count(&self) -> u32 {
        self.totals().free()
    }
}
