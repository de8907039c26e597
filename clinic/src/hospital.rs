use tracing::{debug, info, warn};
use wards::{Assignment, Ward, WardId, WardPool, WardTotals};

use crate::appointments::{Appointment, AppointmentLog};
use crate::directory::Directory;
use crate::error::ClinicError;
use crate::records::{Admission, Doctor, Patient};

/// A prescription line. Nothing is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prescription {
    pub patient: String,
    pub medicine: String,
}

impl std::fmt::Display for Prescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Prescribing {} to patient {}.", self.medicine, self.patient)
    }
}

/// Owns every collection of the clinic and coordinates operations across them.
#[derive(Debug, Clone, Default)]
pub struct Hospital {
    doctors: Directory<Doctor>,
    patients: Directory<Patient>,
    appointments: AppointmentLog,
    wards: WardPool,
}

impl Hospital {
    /// One ward unit of ten beds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wards(wards: WardPool) -> Self {
        Self {
            wards,
            ..Self::default()
        }
    }

    pub fn register_doctor(&mut self, doctor: Doctor) {
        info!(doctor = %doctor.name, shift = %doctor.shift, "doctor registered");
        self.doctors.register(doctor);
    }

    pub fn register_patient(&mut self, patient: Patient) {
        info!(patient = %patient.name, "patient registered");
        self.patients.register(patient);
    }

    pub fn doctors(&self) -> &Directory<Doctor> {
        &self.doctors
    }

    pub fn patients(&self) -> &Directory<Patient> {
        &self.patients
    }

    pub fn appointments(&self) -> &[Appointment] {
        self.appointments.as_slice()
    }

    pub fn schedule_appointment(
        &mut self,
        patient_name: &str,
        doctor_name: &str,
        date: &str,
    ) -> Result<&Appointment, ClinicError> {
        let doctor = self.doctors.find_by_name(doctor_name);
        let patient = self.patients.find_by_name(patient_name);

        match (patient, doctor) {
            (Some(patient), Some(doctor)) => {
                info!(patient = patient_name, doctor = doctor_name, date, "appointment scheduled");
                Ok(self.appointments.schedule(patient, doctor, date))
            }
            (patient, doctor) => {
                warn!(
                    patient = patient_name,
                    doctor = doctor_name,
                    patient_found = patient.is_some(),
                    doctor_found = doctor.is_some(),
                    "appointment rejected"
                );
                Err(ClinicError::DoctorOrPatientNotFound {
                    patient: patient_name.to_string(),
                    doctor: doctor_name.to_string(),
                })
            }
        }
    }

    pub fn ward_totals(&self) -> WardTotals {
        self.wards.totals()
    }

    pub fn ward_units(&self) -> impl Iterator<Item = (WardId, &Ward)> {
        self.wards.units()
    }

    pub fn ward_unit_count(&self) -> usize {
        self.wards.len()
    }

    /// Admit a patient into the first ward unit with a free bed.
    pub fn admit(&mut self, name: &str) -> Result<Assignment, ClinicError> {
        let patient = self
            .patients
            .find_by_name_mut(name)
            .ok_or_else(|| ClinicError::PatientNotFound {
                name: name.to_string(),
            })?;

        if let Some(admission) = patient.admission {
            warn!(patient = name, ward = admission.ward_number, "patient already admitted");
            return Err(ClinicError::AlreadyAdmitted {
                name: patient.name.clone(),
                ward_number: admission.ward_number,
            });
        }

        let assignment = self.wards.assign().map_err(|e| {
            warn!(patient = name, "admission rejected: {}", e);
            ClinicError::from(e)
        })?;
        patient.admission = Some(Admission {
            unit: assignment.unit,
            ward_number: assignment.number,
        });
        info!(patient = name, unit = %assignment.unit, ward = assignment.number, "patient admitted");
        Ok(assignment)
    }

    /// Discharge a patient from the unit they occupy. Returns the admission
    /// that was closed.
    pub fn discharge(&mut self, name: &str) -> Result<Admission, ClinicError> {
        let patient = self
            .patients
            .find_by_name_mut(name)
            .ok_or_else(|| ClinicError::PatientNotFound {
                name: name.to_string(),
            })?;

        let admission = patient.admission.ok_or_else(|| {
            warn!(patient = name, "discharge of patient who is not admitted");
            ClinicError::NotAdmitted {
                name: patient.name.clone(),
            }
        })?;

        self.wards.discharge(admission.unit)?;
        patient.admission = None;
        info!(patient = name, unit = %admission.unit, ward = admission.ward_number, "patient discharged");
        Ok(admission)
    }

    /// Doctors on `shift` who are not unavailable on `day`, in registration order.
    pub fn available_doctors(&self, shift: &str, day: &str) -> Vec<&Doctor> {
        let matches: Vec<&Doctor> = self
            .doctors
            .iter()
            .filter(|d| d.is_available(shift, day))
            .collect();
        debug!(shift, day, count = matches.len(), "availability query");
        matches
    }

    pub fn prescribe(&self, patient_name: &str, medicine: &str) -> Result<Prescription, ClinicError> {
        let patient = self
            .patients
            .find_by_name(patient_name)
            .ok_or_else(|| ClinicError::PatientNotFound {
                name: patient_name.to_string(),
            })?;
        info!(patient = %patient.name, medicine, "prescription issued");
        Ok(Prescription {
            patient: patient.name.clone(),
            medicine: medicine.to_string(),
        })
    }
}
