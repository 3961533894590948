//! End-to-end store lifecycle tests.

use hospital_core::db::Database;
use hospital_core::models::{Appointment, Bed, Patient, PaymentStatus};
use hospital_core::DbError;

fn seeded() -> Database {
    let db = Database::open_in_memory().unwrap();
    db.seed_if_empty().unwrap();
    db
}

#[test]
fn test_open_creates_file_and_seeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hospital.db");

    let db = Database::open(&path).unwrap();
    assert!(path.exists());

    assert!(db.seed_if_empty().unwrap());
    assert_eq!(db.patient_count().unwrap(), 5);

    // Reopening keeps the data and does not reseed
    drop(db);
    let db = Database::open(&path).unwrap();
    assert!(!db.seed_if_empty().unwrap());
    assert_eq!(db.patient_count().unwrap(), 5);
}

#[test]
fn test_corrupt_file_is_recreated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hospital.db");
    std::fs::write(&path, b"this is not a database").unwrap();

    let db = Database::open(&path).unwrap();
    assert_eq!(db.patient_count().unwrap(), 0);
    assert!(db.seed_if_empty().unwrap());
}

#[test]
fn test_sentinel_only_reseed_duplicates_other_tables() {
    // Seeding checks only the departments table. Emptying the sentinel
    // (and, to satisfy the foreign keys, everything that references it)
    // while patients keep their rows makes a second seed stack on top of
    // them. Resetting the emptied tables' AUTOINCREMENT counters keeps the
    // seed rows' literal foreign-key ids valid on the second run.
    let db = seeded();
    for table in [
        "billing",
        "pharmacy",
        "medical_records",
        "appointments",
        "doctors",
        "staff",
        "departments",
    ] {
        db.conn()
            .execute(&format!("DELETE FROM {table}"), [])
            .unwrap();
        db.conn()
            .execute("DELETE FROM sqlite_sequence WHERE name = ?", [table])
            .unwrap();
    }

    assert!(db.seed_if_empty().unwrap());
    assert_eq!(db.patient_count().unwrap(), 10);
    assert_eq!(db.list_bed_views().unwrap().len(), 10);
}

#[test]
fn test_registration_moves_dashboard_counters() {
    let db = seeded();
    let before = db.dashboard_stats().unwrap();

    let patient_id = db
        .insert_patient(&Patient::new(
            "Test Patient".into(),
            40,
            "Female".into(),
            "B-".into(),
        ))
        .unwrap();
    db.insert_appointment(&Appointment::new(
        patient_id,
        1,
        "2024-04-01".into(),
        "10:00 AM".into(),
    ))
    .unwrap();

    let after = db.dashboard_stats().unwrap();
    assert_eq!(after.patients, before.patients + 1);
    assert_eq!(after.appointments, before.appointments + 1);
    assert_eq!(after.pending_appointments, before.pending_appointments + 1);
}

#[test]
fn test_bed_lifecycle() {
    let db = seeded();
    let bed_id = db
        .insert_bed(&Bed::new("B-401".into(), Some("General".into())))
        .unwrap();
    let before = db.dashboard_stats().unwrap();

    db.admit_patient(bed_id, 4).unwrap();
    let during = db.dashboard_stats().unwrap();
    assert_eq!(during.available_beds, before.available_beds - 1);
    assert_eq!(during.occupied_beds, before.occupied_beds + 1);

    db.discharge_patient(bed_id).unwrap();
    let after = db.dashboard_stats().unwrap();
    assert_eq!(after.available_beds, before.available_beds);
    assert_eq!(after.occupied_beds, before.occupied_beds);
}

#[test]
fn test_bill_settlement_moves_aggregates() {
    let db = seeded();
    let (pending_before, pending_amount) = db.pending_bill_summary().unwrap();
    let revenue_before = db.paid_revenue().unwrap();
    assert_eq!(pending_before, 1);

    let pending = db.list_bill_views(Some(PaymentStatus::Pending)).unwrap();
    db.mark_bill_paid(pending[0].bill_id).unwrap();

    let (pending_after, _) = db.pending_bill_summary().unwrap();
    assert_eq!(pending_after, 0);
    assert!((db.paid_revenue().unwrap() - revenue_before - pending_amount).abs() < f64::EPSILON);
}

#[test]
fn test_failed_update_leaves_store_unchanged() {
    let db = seeded();
    let before = db.dashboard_stats().unwrap();

    assert!(matches!(db.mark_bill_paid(999), Err(DbError::NotFound(_))));
    assert!(matches!(
        db.admit_patient(999, 1),
        Err(DbError::NotFound(_))
    ));

    assert_eq!(db.dashboard_stats().unwrap(), before);
}
