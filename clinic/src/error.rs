use thiserror::Error;
use wards::WardError;

/// Rejections surfaced by [`crate::Hospital`]. The display text is what the
/// console prints to the operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClinicError {
    #[error("Doctor or patient not found. Please check the names and try again.")]
    DoctorOrPatientNotFound { patient: String, doctor: String },

    #[error("Patient {name} not found.")]
    PatientNotFound { name: String },

    #[error("Patient {name} is already admitted to Ward {ward_number}.")]
    AlreadyAdmitted { name: String, ward_number: u32 },

    #[error("Patient {name} is not admitted to any ward.")]
    NotAdmitted { name: String },

    #[error(transparent)]
    Ward(#[from] WardError),
}
