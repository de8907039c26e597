use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::records::{Doctor, Patient};

/// Snapshot of a booking. The patient and doctor are copied at scheduling
/// time; later changes to the directory records do not show up here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub patient: Patient,
    pub doctor: Doctor,
    pub date: String, // free text, conventionally YYYY-MM-DD
}

#[derive(Debug, Clone, Default)]
pub struct AppointmentLog {
    entries: Vec<Appointment>,
}

impl AppointmentLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of the pair. No conflict or date checks.
    pub fn schedule(&mut self, patient: &Patient, doctor: &Doctor, date: impl Into<String>) -> &Appointment {
        let appointment = Appointment {
            patient: patient.clone(),
            doctor: doctor.clone(),
            date: date.into(),
        };
        debug!(
            patient = %appointment.patient.name,
            doctor = %appointment.doctor.name,
            date = %appointment.date,
            "appointment appended"
        );
        self.entries.push(appointment);
        &self.entries[self.entries.len() - 1]
    }

    pub fn as_slice(&self) -> &[Appointment] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
