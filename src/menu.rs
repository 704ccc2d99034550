//! The top-level read-eval loop: show the menu, read a choice, dispatch.

use std::io::{BufRead, Write};

use log::{error, warn};

use crate::console::Console;
use crate::error::{CareError, Result};
use crate::handlers;
use crate::session::Session;

pub const BANNER: &str = "\n====== CARETRACK – Health Manager ======";

pub const MENU_ITEMS: [&str; 9] = [
    "1. Add Patient",
    "2. View Patients",
    "3. Add Health Record",
    "4. View Health Records",
    "5. Add Medicine",
    "6. View Medicines",
    "7. Health Report",
    "8. Delete Patient",
    "9. Exit",
];

pub const CHOICE_PROMPT: &str = "Choose (1-9): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddPatient,
    ViewPatients,
    AddRecord,
    ViewRecords,
    AddMedicine,
    ViewMedicines,
    HealthReport,
    DeletePatient,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddPatient),
            "2" => Some(MenuChoice::ViewPatients),
            "3" => Some(MenuChoice::AddRecord),
            "4" => Some(MenuChoice::ViewRecords),
            "5" => Some(MenuChoice::AddMedicine),
            "6" => Some(MenuChoice::ViewMedicines),
            "7" => Some(MenuChoice::HealthReport),
            "8" => Some(MenuChoice::DeletePatient),
            "9" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Runs menu iterations until the operator exits or input runs out.
/// Fatal storage and I/O errors stop the loop and are returned.
pub fn run<R: BufRead, W: Write>(session: &mut Session, console: &mut Console<R, W>) -> Result<()> {
    while step(session, console)? == LoopState::Running {}
    Ok(())
}

/// One iteration: menu, choice, handler.
pub fn step<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<LoopState> {
    console.say(BANNER)?;
    for item in MENU_ITEMS {
        console.say(item)?;
    }

    let raw = match console.prompt(CHOICE_PROMPT) {
        Ok(raw) => raw,
        Err(CareError::EndOfInput) => return Ok(LoopState::Terminated),
        Err(e) => return Err(e),
    };

    let Some(choice) = MenuChoice::parse(&raw) else {
        console.say("Invalid Choice ❌ Try Again")?;
        return Ok(LoopState::Running);
    };

    let outcome = match choice {
        MenuChoice::AddPatient => handlers::add_patient(session, console),
        MenuChoice::ViewPatients => handlers::view_patients(session, console),
        MenuChoice::AddRecord => handlers::add_record(session, console),
        MenuChoice::ViewRecords => handlers::view_records(session, console),
        MenuChoice::AddMedicine => handlers::add_medicine(session, console),
        MenuChoice::ViewMedicines => handlers::view_medicines(session, console),
        MenuChoice::HealthReport => handlers::health_report(session, console),
        MenuChoice::DeletePatient => handlers::delete_patient(session, console),
        MenuChoice::Exit => {
            console.say("Thank You for Using CARETRACK ❤️")?;
            return Ok(LoopState::Terminated);
        }
    };

    match outcome {
        Ok(()) => Ok(LoopState::Running),
        Err(CareError::EndOfInput) => Ok(LoopState::Terminated),
        Err(CareError::InvalidInput { field, value, reason }) => {
            warn!("Rejected {} input {:?}: {}", field, value, reason);
            console.say(format_args!("Invalid {field} ❌ {reason}"))?;
            Ok(LoopState::Running)
        }
        Err(e) => {
            error!("{:?} failed: {}", choice, e);
            Err(e)
        }
    }
}
