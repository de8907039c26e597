//! Clinic records: doctor and patient directories, the appointment log and
//! the `Hospital` aggregate that ties them to the ward pool.

pub mod appointments;
pub mod directory;
pub mod error;
pub mod hospital;
pub mod records;

pub use appointments::{Appointment, AppointmentLog};
pub use directory::Directory;
pub use error::ClinicError;
pub use hospital::{Hospital, Prescription};
pub use records::{Admission, Doctor, Named, Patient};
