use std::fmt;

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::schema::{medicines, patients, records};

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = patients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Patient {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = patients)]
pub struct NewPatient {
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// A vitals snapshot as stored, dated on insert.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HealthRecord {
    pub id: i32,
    pub patient_id: i32,
    pub bp: String,
    pub sugar: String,
    pub weight: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = records)]
pub struct NewHealthRecord {
    pub patient_id: i32,
    pub bp: String,
    pub sugar: String,
    pub weight: f64,
    pub date: NaiveDate,
}

/// Validated operator input for a record, before it gets its date.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthRecordForm {
    pub patient_id: i32,
    pub bp: String,
    pub sugar: String,
    pub weight: f64,
}

impl HealthRecordForm {
    pub fn to_health_record(self, date: NaiveDate) -> NewHealthRecord {
        NewHealthRecord {
            patient_id: self.patient_id,
            bp: self.bp,
            sugar: self.sugar,
            weight: self.weight,
            date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = medicines)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Medicine {
    pub id: i32,
    pub patient_id: i32,
    pub name: String,
    pub time: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = medicines)]
pub struct NewMedicine {
    pub patient_id: i32,
    pub name: String,
    pub time: String,
    pub duration: String,
}

/// One line of the health report: a patient's mean weight over all records.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightSummary {
    pub name: String,
    pub avg_weight: f64,
}

/// Rows removed by a patient delete, per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletedCounts {
    pub records: usize,
    pub medicines: usize,
    pub patients: usize,
}

// Ties go to the even cent: 64.125 -> 64.12.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

// Whole numbers keep a trailing ".0" so weights read as reals (64.0, not 64).
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID:{} | Name:{} | Age:{} | Gender:{}",
            self.id, self.name, self.age, self.gender
        )
    }
}

impl fmt::Display for HealthRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date:{} | BP:{} | Sugar:{} | Weight:{}",
            self.date.format("%Y-%m-%d"),
            self.bp,
            self.sugar,
            format_real(self.weight)
        )
    }
}

impl fmt::Display for Medicine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name:{} | Time:{} | Duration:{} days",
            self.name, self.time, self.duration
        )
    }
}

impl fmt::Display for WeightSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name:{} | Avg Weight:{} kg",
            self.name,
            format_real(self.avg_weight)
        )
    }
}
