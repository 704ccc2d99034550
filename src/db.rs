use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::info;

use crate::error::Result;

pub type DbConnection = SqliteConnection;

const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS patients(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    age INTEGER,
    gender TEXT
);

CREATE TABLE IF NOT EXISTS records(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER,
    bp TEXT,
    sugar TEXT,
    weight REAL,
    date TEXT,
    FOREIGN KEY(patient_id) REFERENCES patients(id)
);

CREATE TABLE IF NOT EXISTS medicines(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER,
    name TEXT,
    time TEXT,
    duration TEXT,
    FOREIGN KEY(patient_id) REFERENCES patients(id)
);
"#;

pub fn establish_connection(database_url: &str) -> Result<DbConnection> {
    let conn = SqliteConnection::establish(database_url)?;
    info!("Opened database {}", database_url);
    Ok(conn)
}

/// Creates the three tables if they are missing. Existing tables and rows
/// are left untouched, so this runs on every start.
pub fn create_tables(conn: &mut DbConnection) -> Result<()> {
    conn.batch_execute(CREATE_TABLES)?;
    info!("Schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::sql_types::Text;

    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = Text)]
        name: String,
    }

    fn table_names(conn: &mut DbConnection) -> Vec<String> {
        diesel::sql_query(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .load::<TableName>(conn)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect()
    }

    #[test]
    fn creates_all_three_tables() {
        let mut conn = establish_connection(":memory:").unwrap();
        create_tables(&mut conn).unwrap();
        assert_eq!(table_names(&mut conn), vec!["medicines", "patients", "records"]);
    }

    #[test]
    fn second_run_keeps_schema_and_rows() {
        let mut conn = establish_connection(":memory:").unwrap();
        create_tables(&mut conn).unwrap();
        conn.batch_execute("INSERT INTO patients(name, age, gender) VALUES ('Ravi', 51, 'M')")
            .unwrap();

        create_tables(&mut conn).unwrap();

        assert_eq!(table_names(&mut conn), vec!["medicines", "patients", "records"]);
        let count: i64 = crate::schema::patients::table
            .count()
            .get_result(&mut conn)
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn unreachable_location_fails() {
        let result = establish_connection("/nonexistent-dir/for/sure/caretrack.db")
            .and_then(|mut conn| create_tables(&mut conn));
        assert!(result.is_err());
    }
}
