//! Interactive console menu over a single in-memory `Hospital`.

use anyhow::{Context, Result};
use clap::Args;
use clinic::{Doctor, Hospital, Patient};
use std::io::{BufRead, Write};
use tracing::debug;
use wards::WardPool;

use crate::prompt::Prompter;

const MENU: &[&str] = &[
    "",
    "Hospital Management System",
    "1. Register Doctor",
    "2. Register Patient",
    "3. Schedule Appointment",
    "4. View Appointments",
    "5. Number of Wards",
    "6. Available Doctors",
    "7. Prescribe Medicine",
    "8. Admit Patient & Assign Ward to Patient",
    "9. Discharge Patient & Discharge Patient from Ward",
    "0. Exit",
];

#[derive(Args, Debug, Default)]
pub struct MenuArgs {
    /// Ward unit capacities, e.g. "10" or "10,6" (default: CLINIC_WARD_UNITS, else one unit of 10)
    #[arg(long, value_name = "LIST")]
    pub ward_units: Option<String>,

    /// Hide the menu and prompts; print results only
    #[arg(long)]
    pub quiet: bool,
}

pub fn run(args: MenuArgs) -> Result<()> {
    let cfg = match args.ward_units.as_deref() {
        Some(raw) => wards::config::parse_units(raw).context("Invalid --ward-units")?,
        None => wards::load_from_env().context("Invalid CLINIC_WARD_UNITS")?,
    };
    debug!(units = ?cfg.units, "ward pool configured");

    let mut hospital = Hospital::with_wards(WardPool::from_config(&cfg));
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let io = Prompter::new(stdin.lock(), stdout.lock(), args.quiet);
    Session::new(&mut hospital, io).run()
}

enum Flow {
    Continue,
    Exit,
}

pub struct Session<'h, R, W> {
    hospital: &'h mut Hospital,
    io: Prompter<R, W>,
}

impl<'h, R: BufRead, W: Write> Session<'h, R, W> {
    pub fn new(hospital: &'h mut Hospital, io: Prompter<R, W>) -> Self {
        Self { hospital, io }
    }

    /// Run until option 0 is chosen or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            for line in MENU {
                self.io.banner(line)?;
            }
            let Some(choice) = self.io.ask("Enter your choice: ")? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };
            if let Flow::Exit = self.dispatch(&choice)? {
                return Ok(());
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.io.into_output()
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        debug!(choice, "menu selection");
        match choice.parse::<u32>() {
            Ok(0) => {
                self.io.say("Exiting Hospital Management System. Goodbye!")?;
                Ok(Flow::Exit)
            }
            Ok(1) => self.register_doctor(),
            Ok(2) => self.register_patient(),
            Ok(3) => self.schedule_appointment(),
            Ok(4) => self.view_appointments(),
            Ok(5) => self.ward_totals(),
            Ok(6) => self.available_doctors(),
            Ok(7) => self.prescribe(),
            Ok(8) => self.admit(),
            Ok(9) => self.discharge(),
            _ => {
                self.io.say("Invalid choice. Please try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn register_doctor(&mut self) -> Result<Flow> {
        let Some(name) = self.io.ask("Enter Doctor's Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(specialty) = self.io.ask("Enter Doctor's Specialty: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(shift) = self.io.ask("Enter Doctor's Shift (morning/night): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(count) = self
            .io
            .ask("Enter the number of days the doctor is unavailable: ")?
        else {
            return Ok(Flow::Exit);
        };
        let Ok(count) = count.parse::<usize>() else {
            self.io
                .say("Invalid number of days. Doctor not registered.")?;
            return Ok(Flow::Continue);
        };

        // count is operator input; grow as days arrive
        let mut unavailable_days = Vec::new();
        self.io
            .prompt("Enter the unavailable days (e.g., Monday Tuesday): ")?;
        while unavailable_days.len() < count {
            let Some(day) = self.io.next_token()? else {
                return Ok(Flow::Exit);
            };
            unavailable_days.push(day);
        }

        self.hospital
            .register_doctor(Doctor::new(name, specialty, shift, unavailable_days));
        self.io.say("Doctor registered successfully!")?;
        Ok(Flow::Continue)
    }

    fn register_patient(&mut self) -> Result<Flow> {
        let Some(name) = self.io.ask("Enter Patient's Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(age) = self.io.ask("Enter Patient's Age: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(gender) = self.io.ask("Enter Patient's Gender: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(age) = age.parse::<u32>() else {
            self.io.say("Invalid age. Patient not registered.")?;
            return Ok(Flow::Continue);
        };

        self.hospital
            .register_patient(Patient::new(name, age, gender));
        self.io.say("Patient registered successfully!")?;
        Ok(Flow::Continue)
    }

    fn schedule_appointment(&mut self) -> Result<Flow> {
        let Some(patient) = self.io.ask("Enter Patient's Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(doctor) = self.io.ask("Enter Doctor's Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(date) = self.io.ask("Enter Appointment Date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };

        match self.hospital.schedule_appointment(&patient, &doctor, &date) {
            Ok(_) => self.io.say("Appointment scheduled successfully!")?,
            Err(e) => self.io.say(e)?,
        }
        Ok(Flow::Continue)
    }

    fn view_appointments(&mut self) -> Result<Flow> {
        self.io.say("Appointments:")?;
        for appt in self.hospital.appointments() {
            self.io.say(format_args!("Date: {}", appt.date))?;
            self.io.say(format_args!("Patient: {}", appt.patient.name))?;
            self.io.say(format_args!(
                "Doctor: {} (Specialty: {})",
                appt.doctor.name, appt.doctor.specialty
            ))?;
            self.io.say("------------------------")?;
        }
        Ok(Flow::Continue)
    }

    fn ward_totals(&mut self) -> Result<Flow> {
        let totals = self.hospital.ward_totals();
        self.io.say(format_args!("Total Wards: {}", totals.total))?;
        self.io.say(format_args!("Reserved Wards: {}", totals.reserved))?;
        self.io.say(format_args!("Free Wards: {}", totals.free()))?;
        Ok(Flow::Continue)
    }

    fn ward_info(&mut self) -> Result<()> {
        let labelled = self.hospital.ward_unit_count() > 1;
        for (id, ward) in self.hospital.ward_units() {
            if labelled {
                self.io.say(format_args!("Ward unit {}:", id.0 + 1))?;
            }
            self.io.say(format_args!("Total Wards: {}", ward.total))?;
            self.io.say(format_args!("Reserved Wards: {}", ward.reserved))?;
            self.io.say(format_args!("Free Wards: {}", ward.free_count()))?;
        }
        Ok(())
    }

    fn available_doctors(&mut self) -> Result<Flow> {
        let Some(shift) = self.io.ask("Enter Shift (morning/night): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(day) = self.io.ask("Enter Day (if applicable): ")? else {
            return Ok(Flow::Exit);
        };

        self.io.say("Available Doctors:")?;
        for doctor in self.hospital.available_doctors(&shift, &day) {
            self.io.say(format_args!(
                "Doctor: {} (Specialty: {})",
                doctor.name, doctor.specialty
            ))?;
        }
        Ok(Flow::Continue)
    }

    fn prescribe(&mut self) -> Result<Flow> {
        let Some(patient) = self.io.ask("Enter Patient's Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(medicine) = self.io.ask("Enter Prescribed Medicine: ")? else {
            return Ok(Flow::Exit);
        };

        match self.hospital.prescribe(&patient, &medicine) {
            Ok(line) => self.io.say(line)?,
            Err(e) => self.io.say(e)?,
        }
        Ok(Flow::Continue)
    }

    fn admit(&mut self) -> Result<Flow> {
        let Some(name) = self.io.ask("Enter Patient's Name: ")? else {
            return Ok(Flow::Exit);
        };

        match self.hospital.admit(&name) {
            Ok(assignment) => self.io.say(format_args!(
                "Patient {} assigned to Ward {}.",
                name, assignment.number
            ))?,
            Err(e) => self.io.say(e)?,
        }
        self.ward_info()?;
        Ok(Flow::Continue)
    }

    fn discharge(&mut self) -> Result<Flow> {
        let Some(name) = self.io.ask("Enter Patient's Name: ")? else {
            return Ok(Flow::Exit);
        };

        match self.hospital.discharge(&name) {
            Ok(admission) => self.io.say(format_args!(
                "Patient {} discharged from Ward {}.",
                name, admission.ward_number
            ))?,
            Err(e) => self.io.say(e)?,
        }
        Ok(Flow::Continue)
    }
}
