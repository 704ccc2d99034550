// Mirrors the DDL in db::CREATE_TABLES.

diesel::table! {
    medicines (id) {
        id -> Integer,
        patient_id -> Integer,
        name -> Text,
        time -> Text,
        duration -> Text,
    }
}

diesel::table! {
    patients (id) {
        id -> Integer,
        name -> Text,
        age -> Integer,
        gender -> Text,
    }
}

diesel::table! {
    records (id) {
        id -> Integer,
        patient_id -> Integer,
        bp -> Text,
        sugar -> Text,
        weight -> Double,
        date -> Date,
    }
}

diesel::joinable!(medicines -> patients (patient_id));
diesel::joinable!(records -> patients (patient_id));

diesel::allow_tables_to_appear_in_same_query!(
    medicines,
    patients,
    records,
);
