use chrono::{Local, NaiveDate};
use diesel::dsl::{avg, exists};
use diesel::prelude::*;
use log::{debug, info, warn};

use crate::db::{self, DbConnection};
use crate::error::Result;
use crate::models::{
    round_to_cents, DeletedCounts, HealthRecord, HealthRecordForm, Medicine, NewMedicine,
    NewPatient, Patient, WeightSummary,
};
use crate::schema::{medicines, patients, records};

/// The one open database connection, plus every operation the menu can run
/// against it. Dropping the session closes the connection.
pub struct Session {
    conn: DbConnection,
}

impl Session {
    /// Opens (or creates) the database and makes sure the schema exists.
    pub fn open(database_url: &str) -> Result<Self> {
        let mut conn = db::establish_connection(database_url)?;
        db::create_tables(&mut conn)?;
        Ok(Session { conn })
    }

    pub fn add_patient(&mut self, new_patient: &NewPatient) -> Result<i32> {
        let id = diesel::insert_into(patients::table)
            .values(new_patient)
            .returning(patients::id)
            .get_result(&mut self.conn)?;
        info!("Added patient {}", id);
        Ok(id)
    }

    pub fn view_patients(&mut self) -> Result<Vec<Patient>> {
        let rows = patients::table
            .order(patients::id.asc())
            .select(Patient::as_select())
            .load(&mut self.conn)?;
        debug!("Loaded {} patients", rows.len());
        Ok(rows)
    }

    pub fn patient_exists(&mut self, patient_id: i32) -> Result<bool> {
        let found = diesel::select(exists(patients::table.find(patient_id)))
            .get_result(&mut self.conn)?;
        Ok(found)
    }

    /// Removes the patient together with all of their records and medicines.
    /// Either all three deletes happen or none do. Unknown ids are not an
    /// error; the returned counts are simply zero.
    pub fn delete_patient(&mut self, patient_id: i32) -> Result<DeletedCounts> {
        let counts = self.conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let records = diesel::delete(records::table.filter(records::patient_id.eq(patient_id)))
                .execute(conn)?;
            let medicines =
                diesel::delete(medicines::table.filter(medicines::patient_id.eq(patient_id)))
                    .execute(conn)?;
            let patients = diesel::delete(patients::table.find(patient_id)).execute(conn)?;
            Ok(DeletedCounts {
                records,
                medicines,
                patients,
            })
        })?;
        info!(
            "Deleted patient {}: {} records, {} medicines, {} patient rows",
            patient_id, counts.records, counts.medicines, counts.patients
        );
        Ok(counts)
    }

    /// Stores a record dated with today's local date.
    pub fn add_record(&mut self, form: HealthRecordForm) -> Result<i32> {
        self.add_record_on(form, Local::now().date_naive())
    }

    pub fn add_record_on(&mut self, form: HealthRecordForm, date: NaiveDate) -> Result<i32> {
        self.warn_if_orphan("record", form.patient_id)?;
        let new_record = form.to_health_record(date);
        let id = diesel::insert_into(records::table)
            .values(&new_record)
            .returning(records::id)
            .get_result(&mut self.conn)?;
        info!("Added record {} for patient {}", id, new_record.patient_id);
        Ok(id)
    }

    pub fn view_records(&mut self, patient_id: i32) -> Result<Vec<HealthRecord>> {
        let rows = records::table
            .filter(records::patient_id.eq(patient_id))
            .order(records::id.asc())
            .select(HealthRecord::as_select())
            .load(&mut self.conn)?;
        debug!("Loaded {} records for patient {}", rows.len(), patient_id);
        Ok(rows)
    }

    pub fn add_medicine(&mut self, new_medicine: &NewMedicine) -> Result<i32> {
        self.warn_if_orphan("medicine", new_medicine.patient_id)?;
        let id = diesel::insert_into(medicines::table)
            .values(new_medicine)
            .returning(medicines::id)
            .get_result(&mut self.conn)?;
        info!("Added medicine {} for patient {}", id, new_medicine.patient_id);
        Ok(id)
    }

    pub fn view_medicines(&mut self, patient_id: i32) -> Result<Vec<Medicine>> {
        let rows = medicines::table
            .filter(medicines::patient_id.eq(patient_id))
            .order(medicines::id.asc())
            .select(Medicine::as_select())
            .load(&mut self.conn)?;
        debug!("Loaded {} medicines for patient {}", rows.len(), patient_id);
        Ok(rows)
    }

    /// Mean weight per patient, rounded to two decimals. Patients without
    /// records do not appear (inner join).
    pub fn health_report(&mut self) -> Result<Vec<WeightSummary>> {
        let rows: Vec<(String, Option<f64>)> = patients::table
            .inner_join(records::table)
            .group_by(patients::id)
            .select((patients::name, avg(records::weight)))
            .order(patients::id.asc())
            .load(&mut self.conn)?;

        Ok(rows
            .into_iter()
            .filter_map(|(name, mean)| {
                mean.map(|mean| WeightSummary {
                    name,
                    avg_weight: round_to_cents(mean),
                })
            })
            .collect())
    }

    // Orphans are allowed; they are only logged.
    fn warn_if_orphan(&mut self, kind: &str, patient_id: i32) -> Result<()> {
        if !self.patient_exists(patient_id)? {
            warn!("Adding {} for unknown patient {}", kind, patient_id);
        }
        Ok(())
    }
}
