use std::io::Cursor;
use std::path::Path;

use caretrack::console::Console;
use caretrack::menu;
use caretrack::Session;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn db_path(dir: &TempDir) -> String {
    dir.path().join("caretrack.db").to_string_lossy().into_owned()
}

/// Feeds `script` to a full menu session and returns everything printed.
fn drive(database: &str, script: &str) -> String {
    let mut session = Session::open(database).unwrap();
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    menu::run(&mut session, &mut console).unwrap();
    let (_, out) = console.into_inner();
    String::from_utf8(out).unwrap()
}

#[test]
fn asha_scenario_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let db = db_path(&dir);

    let script = [
        "1", "Asha", "34", "F", // add patient
        "3", "1", "120/80", "110", "65.0", // first record
        "3", "1", "118/76", "105", "63.0", // second record
        "7", // report
        "8", "1", // delete
        "4", "1", // records after delete
        "2", // patients after delete
        "9",
    ]
    .join("\n")
        + "\n";

    let out = drive(&db, &script);

    assert!(out.contains("Patient Added Successfully ✅"));
    assert_eq!(out.matches("Health Record Added ✅").count(), 2);
    assert!(out.contains("\nHealth Summary Report:\nName:Asha | Avg Weight:64.0 kg\n"));
    assert!(out.contains("Patient Deleted Successfully ✅"));
    assert!(out.contains("Enter Patient ID: No Records Found ❌"));
    assert!(out.contains("No Patients Found ❌"));
    assert!(out.ends_with("Thank You for Using CARETRACK ❤️\n"));
}

#[test]
fn records_list_with_todays_date() {
    let dir = tempfile::tempdir().unwrap();
    let db = db_path(&dir);

    let out = drive(&db, "1\nAsha\n34\nF\n3\n1\n120/80\n110\n65\n4\n1\n9\n");

    let listing = out
        .lines()
        .find(|line| line.starts_with("Date:"))
        .expect("record line");
    assert!(listing.ends_with(" | BP:120/80 | Sugar:110 | Weight:65.0"));
    // Date:YYYY-MM-DD
    let date = &listing["Date:".len().."Date:".len() + 10];
    assert!(chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
}

#[test]
fn data_survives_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let db = db_path(&dir);

    drive(&db, "1\nAsha\n34\nF\n5\n1\nMetformin\nMorning\n30\n9\n");
    assert!(Path::new(&db).exists());

    // schema creation runs again on open and must not disturb existing rows
    let out = drive(&db, "2\n6\n1\n9\n");
    assert!(out.contains("\nPatients List:\nID:1 | Name:Asha | Age:34 | Gender:F\n"));
    assert!(out.contains("\nMedicine Schedule:\nName:Metformin | Time:Morning | Duration:30 days\n"));
}

#[test]
fn deleting_unknown_patient_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    let db = db_path(&dir);

    let out = drive(&db, "1\nRavi\n51\nM\n8\n999\n2\n9\n");
    assert!(out.contains("Patient Deleted Successfully ✅"));
    assert!(out.contains("ID:1 | Name:Ravi | Age:51 | Gender:M"));
}

#[test]
fn empty_database_reports_not_found_everywhere() {
    let dir = tempfile::tempdir().unwrap();
    let db = db_path(&dir);

    let out = drive(&db, "2\n4\n1\n6\n1\n7\n9\n");
    for message in [
        "No Patients Found ❌",
        "No Records Found ❌",
        "No Medicines Found ❌",
        "No Report Available ❌",
    ] {
        assert_eq!(out.matches(message).count(), 1, "{message}");
    }
}

#[test]
fn invalid_input_does_not_end_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let db = db_path(&dir);

    let out = drive(&db, "x\n1\nAsha\nabc\nF\n1\nAsha\n34\nF\n2\n9\n");
    assert!(out.contains("Invalid Choice ❌ Try Again"));
    assert!(out.contains("Invalid age ❌ must be a whole number"));
    assert_eq!(out.matches("ID:").count(), 1);
    assert!(out.ends_with("Thank You for Using CARETRACK ❤️\n"));
}
