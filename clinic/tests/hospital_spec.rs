use clinic::{ClinicError, Doctor, Hospital, Patient};
use wards::{WardError, WardId, WardPool};

fn smith() -> Doctor {
    Doctor::new("Smith", "cardiology", "morning", vec!["Monday".to_string()])
}

#[test]
fn registrations_are_never_rejected() {
    let mut hospital = Hospital::new();
    for i in 0..5 {
        hospital.register_patient(Patient::new("Twin", 20 + i, "F"));
        hospital.register_doctor(smith());
    }
    assert_eq!(hospital.patients().len(), 5);
    assert_eq!(hospital.doctors().len(), 5);
}

#[test]
fn unknown_names_leave_appointment_log_unchanged() {
    let mut hospital = Hospital::new();
    hospital.register_doctor(smith());
    hospital.register_patient(Patient::new("Omar", 52, "M"));

    let err = hospital
        .schedule_appointment("Jane", "Smith", "2024-03-01")
        .unwrap_err();
    assert!(matches!(err, ClinicError::DoctorOrPatientNotFound { .. }));
    assert_eq!(
        err.to_string(),
        "Doctor or patient not found. Please check the names and try again."
    );

    assert!(hospital
        .schedule_appointment("Omar", "House", "2024-03-01")
        .is_err());
    assert!(hospital.appointments().is_empty());

    hospital
        .schedule_appointment("Omar", "Smith", "2024-03-01")
        .unwrap();
    assert_eq!(hospital.appointments().len(), 1);
}

#[test]
fn appointment_keeps_snapshot_taken_at_scheduling() {
    let mut hospital = Hospital::new();
    hospital.register_doctor(smith());
    hospital.register_patient(Patient::new("Omar", 52, "M"));
    hospital
        .schedule_appointment("Omar", "Smith", "2024-03-01")
        .unwrap();

    hospital.admit("Omar").unwrap();

    let booked = &hospital.appointments()[0];
    assert!(!booked.patient.is_admitted());
    assert!(hospital.patients().find_by_name("Omar").unwrap().is_admitted());
}

#[test]
fn available_doctors_respects_shift_and_unavailable_days() {
    let mut hospital = Hospital::new();
    hospital.register_doctor(smith());
    hospital.register_doctor(Doctor::new("Lee", "surgery", "night", vec![]));

    assert!(hospital.available_doctors("morning", "Monday").is_empty());

    let tuesday: Vec<_> = hospital
        .available_doctors("morning", "Tuesday")
        .into_iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(tuesday, vec!["Smith"]);

    let night: Vec<_> = hospital
        .available_doctors("night", "Monday")
        .into_iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(night, vec!["Lee"]);
}

#[test]
fn admit_three_then_discharge_one() {
    let mut hospital = Hospital::new();
    for name in ["A", "B", "C"] {
        hospital.register_patient(Patient::new(name, 30, "F"));
        hospital.admit(name).unwrap();
    }
    assert_eq!(hospital.ward_totals().free(), 7);

    let closed = hospital.discharge("B").unwrap();
    assert_eq!(closed.ward_number, 2);
    assert_eq!(hospital.ward_totals().free(), 8);
    assert!(!hospital.patients().find_by_name("B").unwrap().is_admitted());
}

#[test]
fn admitted_patient_cannot_be_admitted_again() {
    let mut hospital = Hospital::new();
    hospital.register_patient(Patient::new("Jane", 41, "F"));
    let first = hospital.admit("Jane").unwrap();
    assert_eq!(first.number, 1);

    let err = hospital.admit("Jane").unwrap_err();
    assert_eq!(
        err,
        ClinicError::AlreadyAdmitted {
            name: "Jane".into(),
            ward_number: 1
        }
    );
    assert_eq!(err.to_string(), "Patient Jane is already admitted to Ward 1.");
    assert_eq!(hospital.ward_totals().reserved, 1);
}

#[test]
fn discharge_of_non_admitted_patient_changes_nothing() {
    let mut hospital = Hospital::new();
    hospital.register_patient(Patient::new("Jane", 41, "F"));

    let err = hospital.discharge("Jane").unwrap_err();
    assert_eq!(err.to_string(), "Patient Jane is not admitted to any ward.");
    assert_eq!(hospital.ward_totals().reserved, 0);

    hospital.admit("Jane").unwrap();
    hospital.discharge("Jane").unwrap();
    assert!(hospital.discharge("Jane").is_err());
    assert_eq!(hospital.ward_totals().reserved, 0);
}

#[test]
fn full_pool_rejects_admission_without_touching_patient() {
    let mut hospital = Hospital::with_wards(WardPool::new([1]));
    hospital.register_patient(Patient::new("A", 30, "F"));
    hospital.register_patient(Patient::new("B", 30, "F"));
    hospital.admit("A").unwrap();

    let err = hospital.admit("B").unwrap_err();
    assert_eq!(err, ClinicError::Ward(WardError::NoFreeWard));
    assert_eq!(err.to_string(), "No available wards. Cannot admit patient.");
    assert!(!hospital.patients().find_by_name("B").unwrap().is_admitted());
}

#[test]
fn discharge_frees_the_unit_the_patient_occupies() {
    let mut hospital = Hospital::with_wards(WardPool::new([1, 1]));
    hospital.register_patient(Patient::new("A", 30, "F"));
    hospital.register_patient(Patient::new("B", 30, "F"));
    hospital.admit("A").unwrap();
    let b = hospital.admit("B").unwrap();
    assert_eq!(b.unit, WardId(1));

    hospital.discharge("B").unwrap();

    let reserved: Vec<_> = hospital.ward_units().map(|(_, w)| w.reserved).collect();
    assert_eq!(reserved, vec![1, 0]);
}

#[test]
fn unknown_patient_is_reported_for_ward_and_prescription() {
    let mut hospital = Hospital::new();
    assert_eq!(
        hospital.admit("Ghost").unwrap_err(),
        ClinicError::PatientNotFound { name: "Ghost".into() }
    );
    assert!(hospital.discharge("Ghost").is_err());
    assert!(hospital.prescribe("Ghost", "aspirin").is_err());
}

#[test]
fn prescription_formats_line_and_records_nothing() {
    let mut hospital = Hospital::new();
    hospital.register_patient(Patient::new("Jane", 41, "F"));
    let line = hospital.prescribe("Jane", "ibuprofen").unwrap();
    assert_eq!(line.to_string(), "Prescribing ibuprofen to patient Jane.");
    assert!(hospital.appointments().is_empty());
}

#[test]
fn appointment_serializes_with_nested_snapshots() {
    let mut hospital = Hospital::new();
    hospital.register_doctor(smith());
    hospital.register_patient(Patient::new("Omar", 52, "M"));
    let appt = hospital
        .schedule_appointment("Omar", "Smith", "2024-03-01")
        .unwrap();

    let value = serde_json::to_value(appt).unwrap();
    assert_eq!(value["date"], "2024-03-01");
    assert_eq!(value["doctor"]["unavailable_days"][0], "Monday");
    assert!(value["patient"].get("admission").is_none());
}
