use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::Result;
use crate::input;
use crate::session::Session;

// Handler to register a new patient
pub fn add_patient<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    let name = console.prompt("Enter Name: ")?;
    let age = console.prompt("Enter Age: ")?;
    let gender = console.prompt("Enter Gender: ")?;

    let new_patient = input::new_patient(&name, &age, &gender)?;
    session.add_patient(&new_patient)?;
    console.say("Patient Added Successfully ✅")
}

// Handler to list every patient
pub fn view_patients<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    let patients = session.view_patients()?;
    if patients.is_empty() {
        return console.say("No Patients Found ❌");
    }

    console.say("\nPatients List:")?;
    for patient in &patients {
        console.say(patient)?;
    }
    Ok(())
}

// Handler to add a vitals record, dated today
pub fn add_record<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    let patient_id = console.prompt("Enter Patient ID: ")?;
    let bp = console.prompt("Enter BP: ")?;
    let sugar = console.prompt("Enter Sugar Level: ")?;
    let weight = console.prompt("Enter Weight: ")?;

    let form = input::health_record_form(&patient_id, &bp, &sugar, &weight)?;
    session.add_record(form)?;
    console.say("Health Record Added ✅")
}

// Handler to list one patient's records
pub fn view_records<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    let patient_id = input::parse_patient_id(&console.prompt("Enter Patient ID: ")?)?;

    let records = session.view_records(patient_id)?;
    if records.is_empty() {
        return console.say("No Records Found ❌");
    }

    console.say("\nHealth Records:")?;
    for record in &records {
        console.say(record)?;
    }
    Ok(())
}

// Handler to schedule a medicine
pub fn add_medicine<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    let patient_id = console.prompt("Enter Patient ID: ")?;
    let name = console.prompt("Medicine Name: ")?;
    let time = console.prompt("Time (Morning/Evening): ")?;
    let duration = console.prompt("Duration (Days): ")?;

    let new_medicine = input::new_medicine(&patient_id, &name, &time, &duration)?;
    session.add_medicine(&new_medicine)?;
    console.say("Medicine Added ✅")
}

// Handler to list one patient's medicine schedule
pub fn view_medicines<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    let patient_id = input::parse_patient_id(&console.prompt("Enter Patient ID: ")?)?;

    let medicines = session.view_medicines(patient_id)?;
    if medicines.is_empty() {
        return console.say("No Medicines Found ❌");
    }

    console.say("\nMedicine Schedule:")?;
    for medicine in &medicines {
        console.say(medicine)?;
    }
    Ok(())
}

// Handler to print average weight per patient
pub fn health_report<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    let report = session.health_report()?;
    if report.is_empty() {
        return console.say("No Report Available ❌");
    }

    console.say("\nHealth Summary Report:")?;
    for line in &report {
        console.say(line)?;
    }
    Ok(())
}

// Handler to delete a patient and everything recorded for them
pub fn delete_patient<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    let patient_id = input::parse_patient_id(&console.prompt("Enter Patient ID to Delete: ")?)?;

    session.delete_patient(patient_id)?;
    console.say("Patient Deleted Successfully ✅")
}
