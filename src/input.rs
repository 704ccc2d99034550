//! Parsing of operator-typed fields.
//!
//! Every numeric field is checked here, before any statement reaches the
//! database. Failures come back as [`CareError::InvalidInput`] naming the
//! field, so the menu can report them and carry on.

use crate::error::{CareError, Result};
use crate::models::{HealthRecordForm, NewMedicine, NewPatient};

pub const MAX_AGE: i32 = 150;

/// Patient id for lookups and deletes. Any integer is accepted; ids that
/// match no patient simply find nothing.
pub fn parse_patient_id(raw: &str) -> Result<i32> {
    let value = raw.trim();
    value
        .parse()
        .map_err(|_| CareError::invalid_input("patient id", value, "must be a whole number"))
}

/// Patient id a new record or medicine will point at; must be one the
/// database could have assigned.
pub fn parse_owner_id(raw: &str) -> Result<i32> {
    let id = parse_patient_id(raw)?;
    if id < 1 {
        return Err(CareError::invalid_input(
            "patient id",
            raw.trim(),
            "must be 1 or greater",
        ));
    }
    Ok(id)
}

pub fn parse_age(raw: &str) -> Result<i32> {
    let value = raw.trim();
    let age: i32 = value
        .parse()
        .map_err(|_| CareError::invalid_input("age", value, "must be a whole number"))?;
    if !(0..=MAX_AGE).contains(&age) {
        return Err(CareError::invalid_input(
            "age",
            value,
            format!("must be between 0 and {MAX_AGE}"),
        ));
    }
    Ok(age)
}

pub fn parse_weight(raw: &str) -> Result<f64> {
    let value = raw.trim();
    let weight: f64 = value
        .parse()
        .map_err(|_| CareError::invalid_input("weight", value, "must be a number"))?;
    if !weight.is_finite() || weight <= 0.0 {
        return Err(CareError::invalid_input("weight", value, "must be greater than 0"));
    }
    Ok(weight)
}

/// Duration in days.
pub fn parse_duration(raw: &str) -> Result<u32> {
    let value = raw.trim();
    value
        .parse()
        .map_err(|_| CareError::invalid_input("duration", value, "must be a whole number of days"))
}

pub fn require_text(field: &'static str, raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(CareError::invalid_input(field, value, "must not be empty"));
    }
    Ok(value.to_string())
}

pub fn new_patient(name: &str, age: &str, gender: &str) -> Result<NewPatient> {
    Ok(NewPatient {
        name: require_text("name", name)?,
        age: parse_age(age)?,
        gender: require_text("gender", gender)?,
    })
}

pub fn health_record_form(
    patient_id: &str,
    bp: &str,
    sugar: &str,
    weight: &str,
) -> Result<HealthRecordForm> {
    Ok(HealthRecordForm {
        patient_id: parse_owner_id(patient_id)?,
        bp: require_text("BP", bp)?,
        sugar: require_text("sugar level", sugar)?,
        weight: parse_weight(weight)?,
    })
}

pub fn new_medicine(patient_id: &str, name: &str, time: &str, duration: &str) -> Result<NewMedicine> {
    Ok(NewMedicine {
        patient_id: parse_owner_id(patient_id)?,
        name: require_text("medicine name", name)?,
        time: require_text("time", time)?,
        duration: parse_duration(duration)?.to_string(),
    })
}
